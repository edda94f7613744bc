// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe View 2D: zoom/pan state for an image viewport.
//!
//! This crate holds the geometric core of the Loupe specimen viewer. It models
//! a rendering surface that shows content scaled by `zoom` around the surface
//! center and shifted by `pan`, and it provides:
//! - [`ViewportState`]: the committed `{zoom, pan}` pair, plus the clamp that
//!   keeps every committed state valid.
//! - [`ZoomLimits`]: the zoom range, with a fixed minimum of [`MIN_ZOOM`].
//! - [`ViewTransform`]: a renderer-agnostic descriptor derived from the state.
//! - [`geometry`]: the small pure helpers gesture code is built from, and the
//!   [`ViewportGeometry`] trait through which the surface rectangle is queried.
//!
//! It does **not** interpret input. Pointer and wheel handling lives in
//! `loupe_gesture`, which feeds candidate states into [`ViewportState::resolve`].
//!
//! ## Invariants
//!
//! Every state produced by [`ViewportState::resolve`] satisfies:
//! 1. `MIN_ZOOM <= zoom <= max_zoom`.
//! 2. At `zoom == MIN_ZOOM` the pan is zero.
//! 3. Otherwise each pan axis is within `±size * (zoom - 1) / 2` of the
//!    queried viewport size, so the content always covers the surface.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Vec2};
//! use loupe_view2d::{ViewportState, ZoomLimits};
//!
//! let surface = Rect::new(0.0, 0.0, 400.0, 300.0);
//! let limits = ZoomLimits::default();
//!
//! // Ask for a pan far outside what zoom 2 allows on a 400x300 surface.
//! let state = ViewportState::resolve(2.0, Vec2::new(500.0, 0.0), &limits, &surface).unwrap();
//! assert_eq!(state.zoom(), 2.0);
//! assert_eq!(state.pan(), Vec2::new(200.0, 0.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod geometry;
mod limits;
mod transform;
mod viewport;

pub use geometry::ViewportGeometry;
pub use limits::{DEFAULT_MAX_ZOOM, MIN_ZOOM, ZoomLimits};
pub use transform::ViewTransform;
pub use viewport::ViewportState;
