// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Unit a wheel event's delta is expressed in.
///
/// Consulted by [`crate::WheelSensitivity::for_granularity`]; finer units use
/// a smaller per-unit sensitivity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeltaGranularity {
    /// Pixel deltas, typical of touchpads and high-resolution wheels.
    #[default]
    Pixel,
    /// Line deltas, typical of notched mouse wheels.
    Line,
    /// Page deltas.
    Page,
}

/// Which gesture, if any, currently drives the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GestureKind {
    /// No gesture is active.
    #[default]
    Idle,
    /// A single contact is panning the content.
    Drag,
    /// Two contacts are zooming the content.
    Pinch,
}

/// Cursor/affordance hint for the host. Presentational only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InteractionHint {
    /// Unzoomed: nothing to pan.
    #[default]
    Idle,
    /// Zoomed and at rest: the content can be grabbed.
    Draggable,
    /// A gesture is moving the content.
    Dragging,
}
