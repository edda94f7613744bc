// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag anchor: map a single contact's position to a pan offset.
//!
//! ## Usage
//!
//! 1) When a pan begins, create a [`DragAnchor`] from the contact position and
//!    the pan at that moment.
//! 2) On each move, [`DragAnchor::pan_at`] gives the candidate pan.
//! 3) Drop the anchor when the drag ends.
//!
//! The anchor stores `point - pan` rather than the raw start point, so the
//! candidate pan is always `current - origin` and re-anchoring mid-gesture (for
//! example when a pinch collapses to one finger) never makes the content jump.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use loupe_event_state::drag::DragAnchor;
//!
//! // Content is already panned by (20, 0) when the finger goes down.
//! let anchor = DragAnchor::new(Point::new(100.0, 100.0), Vec2::new(20.0, 0.0));
//! assert_eq!(anchor.origin(), Point::new(80.0, 100.0));
//!
//! // Moving the finger by (15, -5) moves the pan by the same amount.
//! assert_eq!(anchor.pan_at(Point::new(115.0, 95.0)), Vec2::new(35.0, -5.0));
//! ```

use kurbo::{Point, Vec2};

/// Start of a single-contact pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    origin: Point,
    pan_at_start: Vec2,
}

impl DragAnchor {
    /// Anchors a drag at `point` while the content is panned by `pan`.
    #[must_use]
    pub fn new(point: Point, pan: Vec2) -> Self {
        Self {
            origin: point - pan,
            pan_at_start: pan,
        }
    }

    /// Contact position minus the pan at start.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Pan when the drag began.
    #[must_use]
    pub fn pan_at_start(&self) -> Vec2 {
        self.pan_at_start
    }

    /// Candidate (unclamped) pan for the contact at `point`.
    #[must_use]
    pub fn pan_at(&self, point: Point) -> Vec2 {
        point - self.origin
    }
}
