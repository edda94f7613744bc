// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Gesture: drag, pinch and wheel zoom for an image viewport.
//!
//! [`GestureEngine`] is a reducer. The host forwards pointer contacts and wheel
//! events as [`InputEvent`]s together with something that can report the
//! surface rectangle ([`ViewportGeometry`]), and reads back the committed
//! [`ViewportState`] or the derived [`ViewTransform`]:
//!
//! - One contact while zoomed pans the content 1:1 with the pointer.
//! - Two contacts zoom by the ratio of their distances, keeping the content
//!   under the initial midpoint fixed. Further contacts are tracked but ignored.
//! - A wheel event with the zoom modifier held zooms around the cursor.
//! - [`GestureEngine::zoom_in`], [`GestureEngine::zoom_out`] and
//!   [`GestureEngine::reset`] serve toolbar buttons.
//!
//! Every committed state is clamped: zoom stays within [`MIN_ZOOM`] and the
//! configured maximum, and the pan never uncovers the surface. When the
//! geometry cannot be queried, events that need it leave the state unchanged.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use loupe_gesture::{GestureEngine, GestureKind, InputEvent};
//!
//! let surface = Rect::new(0.0, 0.0, 400.0, 200.0);
//! let mut engine = GestureEngine::<u32>::default();
//!
//! // Spread two fingers from 200px to 300px apart around the center.
//! engine.handle(InputEvent::ContactStart { id: 0, position: Point::new(100.0, 100.0) }, &surface);
//! engine.handle(InputEvent::ContactStart { id: 1, position: Point::new(300.0, 100.0) }, &surface);
//! assert_eq!(engine.gesture_kind(), GestureKind::Pinch);
//!
//! engine.handle(InputEvent::ContactMove { id: 0, position: Point::new(50.0, 100.0) }, &surface);
//! let spread = InputEvent::ContactMove { id: 1, position: Point::new(350.0, 100.0) };
//! let response = engine.handle(spread, &surface);
//! assert!(response.committed);
//! assert_eq!(engine.state().zoom(), 1.5);
//! assert_eq!(engine.state().pan(), Vec2::ZERO);
//!
//! let transform = engine.transform();
//! assert_eq!(transform.scale, 1.5);
//! assert!(transform.live_update);
//! ```
//!
//! Diagnostics are emitted through the [`log`] facade: `trace` for gesture
//! transitions, `debug` when a commit is skipped for lack of geometry.
//!
//! This crate is `no_std`.

#![no_std]

mod classify;
mod config;
mod engine;
mod event;
mod modes;
mod wheel;

pub use config::{DEFAULT_MIN_ZOOM_DELTA, DEFAULT_ZOOM_STEP, GestureConfig, WheelSensitivity};
pub use engine::{GestureDebugInfo, GestureEngine};
pub use event::{EventResponse, InputEvent, WheelInput};
pub use modes::{DeltaGranularity, GestureKind, InteractionHint};

pub use loupe_event_state::contacts::{Contact, ContactRegistry};
pub use loupe_view2d::{MIN_ZOOM, ViewTransform, ViewportGeometry, ViewportState, ZoomLimits};
