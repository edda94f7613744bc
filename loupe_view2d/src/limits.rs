// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Lowest zoom factor: the content exactly fills the surface.
///
/// The pan bounds in [`crate::ViewportState::pan_bounds`] are derived from
/// `zoom - MIN_ZOOM`, so this is a fixed constant rather than a setting.
pub const MIN_ZOOM: f64 = 1.0;

/// Default upper zoom bound.
pub const DEFAULT_MAX_ZOOM: f64 = 3.0;

/// Zoom range accepted by [`crate::ViewportState::resolve`].
///
/// The lower bound is always [`MIN_ZOOM`]; only the upper bound is
/// configurable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    max_zoom: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

impl ZoomLimits {
    /// Creates limits with the given maximum zoom.
    ///
    /// The value is normalized so that `max_zoom >= MIN_ZOOM`; a NaN maximum
    /// collapses to [`MIN_ZOOM`], which disables zooming entirely.
    #[must_use]
    pub fn new(max_zoom: f64) -> Self {
        Self {
            max_zoom: max_zoom.max(MIN_ZOOM),
        }
    }

    /// Returns the lower zoom bound, always [`MIN_ZOOM`].
    #[must_use]
    pub const fn min_zoom(&self) -> f64 {
        MIN_ZOOM
    }

    /// Returns the upper zoom bound.
    #[must_use]
    pub const fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Clamps `zoom` into `[MIN_ZOOM, max_zoom]`. NaN maps to [`MIN_ZOOM`].
    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        crate::geometry::clamp(zoom, MIN_ZOOM, self.max_zoom)
    }
}
