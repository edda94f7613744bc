// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::modes::DeltaGranularity;

/// Input consumed by [`crate::GestureEngine::handle`].
///
/// Hosts translate their raw pointer/touch/wheel events into these. `K` is the
/// host's pointer identity (for example a DOM `pointerId` or a winit touch
/// id), and positions share the coordinate space of the viewport rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent<K> {
    /// A contact went down.
    ContactStart {
        /// Pointer identity.
        id: K,
        /// Position of the contact.
        position: Point,
    },
    /// A contact moved.
    ContactMove {
        /// Pointer identity.
        id: K,
        /// New position of the contact.
        position: Point,
    },
    /// A contact lifted.
    ContactEnd {
        /// Pointer identity.
        id: K,
    },
    /// The platform cancelled a contact. Handled exactly like
    /// [`InputEvent::ContactEnd`].
    ContactCancel {
        /// Pointer identity.
        id: K,
    },
    /// A wheel or touchpad scroll.
    Wheel(WheelInput),
}

/// A wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Cursor position.
    pub position: Point,
    /// Vertical delta; negative values scroll up, which zooms in.
    pub delta_y: f64,
    /// Unit of `delta_y`.
    pub granularity: DeltaGranularity,
    /// Whether the host's zoom modifier (for example Ctrl) is held.
    ///
    /// Without it the event is an ordinary scroll and is left alone.
    pub zoom_modifier: bool,
}

/// What handling an event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// The committed state changed.
    pub committed: bool,
    /// The host should suppress the platform's default handling of the event.
    pub prevent_default: bool,
}

impl EventResponse {
    /// Nothing changed and the event should propagate normally.
    pub const IGNORED: Self = Self {
        committed: false,
        prevent_default: false,
    };

    pub(crate) const fn committed(committed: bool) -> Self {
        Self {
            committed,
            prevent_default: false,
        }
    }

    pub(crate) const fn consumed(committed: bool) -> Self {
        Self {
            committed,
            prevent_default: true,
        }
    }
}
