// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch anchor: the two-contact snapshot a pinch zoom is measured against.
//!
//! A [`PinchAnchor`] records, at the moment a second contact goes down, which
//! two contacts form the pinch, how far apart they were, where their midpoint
//! was, and the zoom/pan at that moment. Every later move is interpreted
//! relative to that snapshot, so rounding never accumulates across moves.

use kurbo::{Point, Vec2};
use loupe_view2d::geometry::{distance, midpoint};

/// Separation (in surface pixels) below which a pinch cannot produce a ratio.
pub const MIN_PINCH_DISTANCE: f64 = 1e-3;

/// Start of a two-contact pinch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchAnchor<K> {
    pair: [K; 2],
    initial_distance: f64,
    initial_center: Point,
    zoom_at_start: f64,
    pan_at_start: Vec2,
}

impl<K: Copy + Eq> PinchAnchor<K> {
    /// Anchors a pinch between contacts `pair` at `p1` and `p2`, taken while
    /// the viewport is at `zoom` and `pan`.
    #[must_use]
    pub fn new(pair: [K; 2], p1: Point, p2: Point, zoom: f64, pan: Vec2) -> Self {
        Self {
            pair,
            initial_distance: distance(p1, p2),
            initial_center: midpoint(p1, p2),
            zoom_at_start: zoom,
            pan_at_start: pan,
        }
    }

    /// Ids of the two contacts driving this pinch, in registration order.
    #[must_use]
    pub fn pair(&self) -> [K; 2] {
        self.pair
    }

    /// Returns `true` if this pinch is driven by exactly `a` and `b`, in that
    /// order.
    #[must_use]
    pub fn is_pair(&self, a: K, b: K) -> bool {
        self.pair == [a, b]
    }

    /// Distance between the contacts when the pinch began.
    #[must_use]
    pub fn initial_distance(&self) -> f64 {
        self.initial_distance
    }

    /// Midpoint of the contacts when the pinch began.
    #[must_use]
    pub fn initial_center(&self) -> Point {
        self.initial_center
    }

    /// Zoom when the pinch began.
    #[must_use]
    pub fn zoom_at_start(&self) -> f64 {
        self.zoom_at_start
    }

    /// Pan when the pinch began.
    #[must_use]
    pub fn pan_at_start(&self) -> Vec2 {
        self.pan_at_start
    }

    /// Returns `true` if the contacts started too close together to measure a
    /// ratio against.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.initial_distance.is_nan() || self.initial_distance < MIN_PINCH_DISTANCE
    }

    /// Ratio of the current contact distance to the initial one.
    ///
    /// Returns `None` for a degenerate anchor; callers re-anchor instead.
    #[must_use]
    pub fn ratio(&self, p1: Point, p2: Point) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }
        Some(distance(p1, p2) / self.initial_distance)
    }
}
