// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_view2d::{DEFAULT_MAX_ZOOM, ZoomLimits};

use crate::modes::DeltaGranularity;

/// Default zoom change applied by [`crate::GestureEngine::zoom_in`] and
/// [`crate::GestureEngine::zoom_out`].
pub const DEFAULT_ZOOM_STEP: f64 = 0.25;

/// Default wheel zoom change below which a wheel event is ignored.
pub const DEFAULT_MIN_ZOOM_DELTA: f64 = 0.001;

/// Zoom change per unit of wheel delta, by delta granularity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelSensitivity {
    pixel: f64,
    line: f64,
    page: f64,
}

impl Default for WheelSensitivity {
    fn default() -> Self {
        Self {
            pixel: 0.01,
            line: 0.2,
            page: 1.0,
        }
    }
}

impl WheelSensitivity {
    /// Creates sensitivities for pixel, line and page deltas.
    ///
    /// Negative values are taken by magnitude and NaN becomes zero, which
    /// disables wheel zoom for that granularity.
    #[must_use]
    pub fn new(pixel: f64, line: f64, page: f64) -> Self {
        Self {
            pixel: sanitize(pixel),
            line: sanitize(line),
            page: sanitize(page),
        }
    }

    /// Zoom change per unit of delta for `granularity`.
    #[must_use]
    pub fn for_granularity(&self, granularity: DeltaGranularity) -> f64 {
        match granularity {
            DeltaGranularity::Pixel => self.pixel,
            DeltaGranularity::Line => self.line,
            DeltaGranularity::Page => self.page,
        }
    }
}

/// Tunables for a [`crate::GestureEngine`].
///
/// Built with [`Default`] and adjusted with the `with_*` methods. All inputs
/// are normalized rather than rejected:
///
/// ```rust
/// use loupe_gesture::GestureConfig;
///
/// let config = GestureConfig::default()
///     .with_max_zoom(5.0)
///     .with_zoom_step(0.5);
/// assert_eq!(config.max_zoom(), 5.0);
/// assert_eq!(config.zoom_step(), 0.5);
///
/// // A maximum below 1.0 pins the viewport at its unzoomed state.
/// assert_eq!(GestureConfig::default().with_max_zoom(0.3).max_zoom(), 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    limits: ZoomLimits,
    zoom_step: f64,
    wheel: WheelSensitivity,
    min_zoom_delta: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            limits: ZoomLimits::new(DEFAULT_MAX_ZOOM),
            zoom_step: DEFAULT_ZOOM_STEP,
            wheel: WheelSensitivity::default(),
            min_zoom_delta: DEFAULT_MIN_ZOOM_DELTA,
        }
    }
}

impl GestureConfig {
    /// Sets the upper zoom bound. See [`ZoomLimits::new`] for normalization.
    #[must_use]
    pub fn with_max_zoom(mut self, max_zoom: f64) -> Self {
        self.limits = ZoomLimits::new(max_zoom);
        self
    }

    /// Sets the zoom change of one zoom-in/zoom-out step.
    #[must_use]
    pub fn with_zoom_step(mut self, step: f64) -> Self {
        self.zoom_step = sanitize(step);
        self
    }

    /// Sets wheel sensitivities.
    #[must_use]
    pub fn with_wheel_sensitivity(mut self, wheel: WheelSensitivity) -> Self {
        self.wheel = wheel;
        self
    }

    /// Sets the smallest wheel zoom change that is applied.
    #[must_use]
    pub fn with_min_zoom_delta(mut self, delta: f64) -> Self {
        self.min_zoom_delta = sanitize(delta);
        self
    }

    /// Zoom range.
    #[must_use]
    pub fn limits(&self) -> &ZoomLimits {
        &self.limits
    }

    /// Upper zoom bound.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.limits.max_zoom()
    }

    /// Zoom change of one step.
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// Wheel sensitivities.
    #[must_use]
    pub fn wheel(&self) -> &WheelSensitivity {
        &self.wheel
    }

    /// Smallest wheel zoom change that is applied.
    #[must_use]
    pub fn min_zoom_delta(&self) -> f64 {
        self.min_zoom_delta
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.abs() }
}
