// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Event State: pointer contact bookkeeping for viewport gestures.
//!
//! This crate provides the small stateful pieces a gesture recognizer is built
//! from. Each module handles one concern:
//!
//! - [`contacts`]: which pointer contacts are down, and where each was last seen
//! - [`drag`]: the anchor a single-contact pan is measured against
//! - [`pinch`]: the anchor a two-contact zoom is measured against
//!
//! None of these types decide *when* a gesture starts or ends; that policy
//! lives in `loupe_gesture`. They accept raw ids and positions and produce
//! positions, ratios, and pan offsets.
//!
//! ## Tracking contacts
//!
//! ```rust
//! use kurbo::Point;
//! use loupe_event_state::contacts::ContactRegistry;
//!
//! let mut contacts = ContactRegistry::<u32>::new();
//! contacts.start(7, Point::new(10.0, 10.0));
//! contacts.start(3, Point::new(50.0, 10.0));
//!
//! // Moves for unknown ids are ignored.
//! assert!(!contacts.move_to(99, Point::new(0.0, 0.0)));
//! assert!(contacts.move_to(3, Point::new(60.0, 10.0)));
//!
//! // Points are reported in the order the contacts went down.
//! let points: Vec<Point> = contacts.active_contacts().collect();
//! assert_eq!(points, [Point::new(10.0, 10.0), Point::new(60.0, 10.0)]);
//! ```
//!
//! ## Anchoring a pinch
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use loupe_event_state::pinch::PinchAnchor;
//!
//! let pinch = PinchAnchor::new(
//!     [0_u32, 1],
//!     Point::new(100.0, 100.0),
//!     Point::new(300.0, 100.0),
//!     1.0,
//!     Vec2::ZERO,
//! );
//! assert_eq!(pinch.initial_center(), Point::new(200.0, 100.0));
//!
//! let ratio = pinch.ratio(Point::new(50.0, 100.0), Point::new(350.0, 100.0));
//! assert_eq!(ratio, Some(1.5));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod contacts;
pub mod drag;
pub mod pinch;
