// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture classification from the active contact count.

use loupe_event_state::contacts::ContactRegistry;
use loupe_event_state::drag::DragAnchor;
use loupe_event_state::pinch::PinchAnchor;
use loupe_view2d::ViewportState;

use crate::modes::GestureKind;

/// Contact event that caused a reclassification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Trigger {
    /// A contact went down. `first_of_interaction` is set when the registry was
    /// empty before it.
    Start { first_of_interaction: bool },
    Move,
    Lift,
}

/// The active gesture together with its anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Gesture<K> {
    Idle,
    Drag(DragAnchor),
    Pinch(PinchAnchor<K>),
}

impl<K> Default for Gesture<K> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<K> Gesture<K> {
    pub(crate) fn kind(&self) -> GestureKind {
        match self {
            Self::Idle => GestureKind::Idle,
            Self::Drag(_) => GestureKind::Drag,
            Self::Pinch(_) => GestureKind::Pinch,
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl<K: Copy + Eq> Gesture<K> {
    /// Selects the gesture for the registry's current contacts.
    ///
    /// - No contacts: idle.
    /// - One contact: an ongoing drag continues. A drag begins when this is the
    ///   first contact of the interaction, or when a pinch just lost a finger;
    ///   either way only while zoomed. Anything else is idle.
    /// - Two or more: a pinch over the first two registered contacts. An
    ///   ongoing pinch over the same pair keeps its anchor; otherwise a new
    ///   anchor is taken at the current state.
    pub(crate) fn classify(
        self,
        contacts: &ContactRegistry<K>,
        state: &ViewportState,
        trigger: Trigger,
    ) -> Self {
        if let Some([a, b]) = contacts.first_two() {
            return match self {
                Self::Pinch(anchor) if anchor.is_pair(a.id, b.id) => self,
                _ => Self::Pinch(PinchAnchor::new(
                    [a.id, b.id],
                    a.point,
                    b.point,
                    state.zoom(),
                    state.pan(),
                )),
            };
        }

        let Some(contact) = contacts.first() else {
            return Self::Idle;
        };
        let first_of_interaction = matches!(
            trigger,
            Trigger::Start {
                first_of_interaction: true
            }
        );
        let drag = || Self::Drag(DragAnchor::new(contact.point, state.pan()));
        match self {
            Self::Drag(_) => self,
            Self::Pinch(_) if state.is_zoomed() => drag(),
            Self::Idle if first_of_interaction && state.is_zoomed() => drag(),
            _ => Self::Idle,
        }
    }
}
