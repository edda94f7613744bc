// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modifier-wheel zoom anchored at the cursor.

use kurbo::{Point, Vec2};
use loupe_view2d::ViewportState;
use loupe_view2d::geometry::anchored_pan;

use crate::config::GestureConfig;
use crate::event::WheelInput;

/// Candidate `{zoom, pan}` for a wheel event, before clamping the pan.
///
/// Returns `None` when the zoom change is below the configured noise
/// threshold (including when already at a zoom limit) or the delta is not a
/// finite number. The caller is responsible for checking the zoom modifier.
pub(crate) fn wheel_candidate(
    state: &ViewportState,
    input: &WheelInput,
    config: &GestureConfig,
    viewport_center: Point,
) -> Option<(f64, Vec2)> {
    let delta = -input.delta_y * config.wheel().for_granularity(input.granularity);
    if !delta.is_finite() {
        return None;
    }
    let zoom = config.limits().clamp(state.zoom() + delta);
    if (zoom - state.zoom()).abs() < config.min_zoom_delta() {
        return None;
    }
    let pan = anchored_pan(
        state.pan(),
        input.position,
        viewport_center,
        zoom / state.zoom(),
    );
    Some((zoom, pan))
}
