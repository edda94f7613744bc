// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use log::{debug, trace};
use loupe_event_state::contacts::ContactRegistry;
use loupe_event_state::pinch::PinchAnchor;
use loupe_view2d::geometry::anchored_pan;
use loupe_view2d::{ViewTransform, ViewportGeometry, ViewportState};

use crate::classify::{Gesture, Trigger};
use crate::config::GestureConfig;
use crate::event::{EventResponse, InputEvent, WheelInput};
use crate::modes::{GestureKind, InteractionHint};
use crate::wheel::wheel_candidate;

/// Reducer turning pointer and wheel input into a committed zoom/pan state.
///
/// The engine exclusively owns the [`ViewportState`], the registry of active
/// contacts and the current gesture anchor. Each call to
/// [`handle`](Self::handle) runs to completion and leaves a state that
/// satisfies the clamp invariants for the geometry it was given. Hosts read the
/// result through [`state`](Self::state) or [`transform`](Self::transform).
///
/// `K` is the host's pointer identity.
#[derive(Clone, Debug)]
pub struct GestureEngine<K = u64> {
    config: GestureConfig,
    state: ViewportState,
    contacts: ContactRegistry<K>,
    gesture: Gesture<K>,
}

impl<K> Default for GestureEngine<K> {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl<K> GestureEngine<K> {
    /// Creates an unzoomed engine with `config`.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            state: ViewportState::IDENTITY,
            contacts: ContactRegistry::new(),
            gesture: Gesture::Idle,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Last committed state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Active contacts.
    #[must_use]
    pub fn contacts(&self) -> &ContactRegistry<K> {
        &self.contacts
    }

    /// Gesture currently driving the viewport.
    #[must_use]
    pub fn gesture_kind(&self) -> GestureKind {
        self.gesture.kind()
    }

    /// Transform for the renderer, derived from the committed state.
    ///
    /// `live_update` is set while a drag or pinch is in progress.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        ViewTransform::from_state(&self.state, self.gesture.is_active())
    }

    /// Cursor hint for the host.
    #[must_use]
    pub fn interaction_hint(&self) -> InteractionHint {
        if self.gesture.is_active() {
            InteractionHint::Dragging
        } else if self.state.is_zoomed() {
            InteractionHint::Draggable
        } else {
            InteractionHint::Idle
        }
    }

    /// Returns to the unzoomed state and forgets all contacts and anchors.
    ///
    /// Always succeeds, regardless of the current state.
    pub fn reset(&mut self) {
        trace!("reset from zoom {}", self.state.zoom());
        self.state = ViewportState::IDENTITY;
        self.contacts.clear();
        self.gesture = Gesture::Idle;
    }

    /// Snapshot of the engine for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> GestureDebugInfo {
        GestureDebugInfo {
            state: self.state,
            transform: self.transform(),
            gesture: self.gesture.kind(),
            hint: self.interaction_hint(),
            active_contacts: self.contacts.len(),
            config: self.config,
        }
    }

    /// Clamps and commits a candidate state. Returns whether the state changed.
    fn commit<G>(&mut self, zoom: f64, pan: Vec2, geometry: &G) -> bool
    where
        G: ViewportGeometry + ?Sized,
    {
        let Some(next) = ViewportState::resolve(zoom, pan, self.config.limits(), geometry) else {
            debug!("viewport geometry unavailable; commit of zoom {zoom} skipped");
            return false;
        };
        self.replace_state(next)
    }

    /// Installs `next`, ending a drag that can no longer pan. Returns whether
    /// the state changed.
    fn replace_state(&mut self, next: ViewportState) -> bool {
        let changed = next != self.state;
        self.state = next;
        if !next.is_zoomed() && matches!(self.gesture, Gesture::Drag(_)) {
            trace!("drag ended by zooming out to the minimum");
            self.gesture = Gesture::Idle;
        }
        changed
    }

    /// Increases zoom by one step, keeping the existing pan (re-clamped).
    pub fn zoom_in<G>(&mut self, geometry: &G) -> bool
    where
        G: ViewportGeometry + ?Sized,
    {
        self.step_zoom(self.config.zoom_step(), geometry)
    }

    /// Decreases zoom by one step, keeping the existing pan (re-clamped).
    pub fn zoom_out<G>(&mut self, geometry: &G) -> bool
    where
        G: ViewportGeometry + ?Sized,
    {
        self.step_zoom(-self.config.zoom_step(), geometry)
    }

    fn step_zoom<G>(&mut self, delta: f64, geometry: &G) -> bool
    where
        G: ViewportGeometry + ?Sized,
    {
        trace!("step zoom {} by {delta}", self.state.zoom());
        self.commit(self.state.zoom() + delta, self.state.pan(), geometry)
    }

    /// Re-clamps the current state, for example after the surface was resized.
    ///
    /// Returns whether the state changed. If the geometry is unavailable the
    /// state is left as is.
    pub fn revalidate<G>(&mut self, geometry: &G) -> bool
    where
        G: ViewportGeometry + ?Sized,
    {
        self.commit(self.state.zoom(), self.state.pan(), geometry)
    }

    /// Replaces the configuration and re-clamps the current state to it.
    ///
    /// If the geometry is unavailable the zoom is still brought within the new
    /// limits, scaling the pan with its bounds.
    pub fn set_config<G>(&mut self, config: GestureConfig, geometry: &G) -> bool
    where
        G: ViewportGeometry + ?Sized,
    {
        self.config = config;
        if self.revalidate(geometry) {
            return true;
        }
        let limited = self.state.limited(self.config.limits());
        self.replace_state(limited)
    }
}

impl<K: Copy + Eq> GestureEngine<K> {
    /// Applies one input event.
    ///
    /// `geometry` is queried for the surface rectangle whenever clamp or anchor
    /// math needs it; when it is unavailable the event leaves the state
    /// unchanged.
    ///
    /// The response reports whether the committed state changed and whether
    /// the host should suppress the platform default for the event: always
    /// for a modifier wheel event, and for contact events while a drag or pinch
    /// is active.
    pub fn handle<G>(&mut self, event: InputEvent<K>, geometry: &G) -> EventResponse
    where
        G: ViewportGeometry + ?Sized,
    {
        match event {
            InputEvent::ContactStart { id, position } => {
                let first_of_interaction = self.contacts.is_empty();
                self.contacts.start(id, position);
                self.reclassify(Trigger::Start {
                    first_of_interaction,
                });
                self.contact_response(false)
            }
            InputEvent::ContactMove { id, position } => {
                if !self.contacts.move_to(id, position) {
                    return EventResponse::IGNORED;
                }
                self.reclassify(Trigger::Move);
                let committed = self.follow_contacts(geometry);
                self.contact_response(committed)
            }
            InputEvent::ContactEnd { id } | InputEvent::ContactCancel { id } => {
                if self.contacts.end(id).is_none() {
                    return EventResponse::IGNORED;
                }
                self.reclassify(Trigger::Lift);
                self.contact_response(false)
            }
            InputEvent::Wheel(input) => self.wheel(&input, geometry),
        }
    }

    fn contact_response(&self, committed: bool) -> EventResponse {
        if self.gesture.is_active() {
            EventResponse::consumed(committed)
        } else {
            EventResponse::committed(committed)
        }
    }

    fn reclassify(&mut self, trigger: Trigger) {
        let before = self.gesture.kind();
        self.gesture = self.gesture.classify(&self.contacts, &self.state, trigger);
        let after = self.gesture.kind();
        if before != after {
            trace!(
                "gesture {before:?} -> {after:?} with {} contacts",
                self.contacts.len()
            );
        }
    }

    /// Runs the drag or pinch handler for the current contacts.
    fn follow_contacts<G>(&mut self, geometry: &G) -> bool
    where
        G: ViewportGeometry + ?Sized,
    {
        match self.gesture {
            Gesture::Drag(anchor) => {
                let point = match self.contacts.contacts() {
                    [only] => only.point,
                    _ => return false,
                };
                self.commit(self.state.zoom(), anchor.pan_at(point), geometry)
            }
            Gesture::Pinch(anchor) => self.follow_pinch(anchor, geometry),
            Gesture::Idle => false,
        }
    }

    fn follow_pinch<G>(&mut self, anchor: PinchAnchor<K>, geometry: &G) -> bool
    where
        G: ViewportGeometry + ?Sized,
    {
        let Some([a, b]) = self.contacts.first_two() else {
            return false;
        };
        let (p1, p2) = (a.point, b.point);
        let Some(ratio) = anchor.ratio(p1, p2) else {
            // Contacts went down on top of each other; measure from here on.
            self.gesture = Gesture::Pinch(PinchAnchor::new(
                anchor.pair(),
                p1,
                p2,
                self.state.zoom(),
                self.state.pan(),
            ));
            return false;
        };
        let zoom = self.config.limits().clamp(anchor.zoom_at_start() * ratio);
        let Some(rect) = geometry.usable_rect() else {
            debug!("viewport geometry unavailable; pinch move skipped");
            return false;
        };
        let pan = anchored_pan(
            anchor.pan_at_start(),
            anchor.initial_center(),
            rect.center(),
            zoom / anchor.zoom_at_start(),
        );
        self.commit(zoom, pan, geometry)
    }

    fn wheel<G>(&mut self, input: &WheelInput, geometry: &G) -> EventResponse
    where
        G: ViewportGeometry + ?Sized,
    {
        if !input.zoom_modifier {
            return EventResponse::IGNORED;
        }
        let Some(rect) = geometry.usable_rect() else {
            debug!("viewport geometry unavailable; wheel zoom skipped");
            return EventResponse::consumed(false);
        };
        let Some((zoom, pan)) = wheel_candidate(&self.state, input, &self.config, rect.center())
        else {
            return EventResponse::consumed(false);
        };
        EventResponse::consumed(self.commit(zoom, pan, geometry))
    }
}

/// Debug snapshot of a [`GestureEngine`].
#[derive(Clone, Copy, Debug)]
pub struct GestureDebugInfo {
    /// Committed state.
    pub state: ViewportState,
    /// Derived renderer transform.
    pub transform: ViewTransform,
    /// Active gesture.
    pub gesture: GestureKind,
    /// Cursor hint.
    pub hint: InteractionHint,
    /// Number of contacts currently down.
    pub active_contacts: usize,
    /// Configuration in effect.
    pub config: GestureConfig,
}
