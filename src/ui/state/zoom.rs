// SPDX-License-Identifier: MPL-2.0
//! Zoom value types
//!
//! This module handles the scale side of the preview transform:
//! - Scale bounds (min/max scale with identity always reachable)
//! - Multiplicative zoom step
//! - Wheel delta to zoom factor conversion

pub use crate::config::{
    DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_ZOOM_STEP, IDENTITY_SCALE, MAX_SCALE_CEILING,
    MAX_ZOOM_STEP, MIN_SCALE_FLOOR, MIN_ZOOM_STEP, WHEEL_NOTCH_PIXELS,
};

/// Inclusive scale range, guaranteed to contain the identity scale.
///
/// Keeping `1.0` inside the range means resetting the transform can never
/// produce a scale the bounds would reject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    min: f32,
    max: f32,
}

impl ScaleBounds {
    /// Creates bounds, clamping `min` into `[MIN_SCALE_FLOOR, 1]` and `max`
    /// into `[1, MAX_SCALE_CEILING]`.
    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            min: sanitize(min, DEFAULT_MIN_SCALE).clamp(MIN_SCALE_FLOOR, IDENTITY_SCALE),
            max: sanitize(max, DEFAULT_MAX_SCALE).clamp(IDENTITY_SCALE, MAX_SCALE_CEILING),
        }
    }

    #[must_use]
    pub fn min(self) -> f32 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }

    /// Clamps a scale into the range.
    ///
    /// Overflowed scales land on the matching bound; NaN falls back to the
    /// identity scale.
    #[must_use]
    pub fn clamp(self, scale: f32) -> f32 {
        if scale.is_nan() {
            return IDENTITY_SCALE.clamp(self.min, self.max);
        }
        scale.clamp(self.min, self.max)
    }

    /// Returns whether the scale sits on the lower bound.
    #[must_use]
    pub fn is_min(self, scale: f32) -> bool {
        scale <= self.min
    }

    /// Returns whether the scale sits on the upper bound.
    #[must_use]
    pub fn is_max(self, scale: f32) -> bool {
        scale >= self.max
    }
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SCALE, DEFAULT_MAX_SCALE)
    }
}

/// Multiplicative zoom step, guaranteed to be within `[MIN_ZOOM_STEP, MAX_ZOOM_STEP]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    /// Creates a new zoom step, clamping the factor to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        Self(sanitize(factor, DEFAULT_ZOOM_STEP).clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP))
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Scale after one zoom-in step, before clamping.
    #[must_use]
    pub fn zoom_in(self, scale: f32) -> f32 {
        scale * self.0
    }

    /// Scale after one zoom-out step, before clamping.
    #[must_use]
    pub fn zoom_out(self, scale: f32) -> f32 {
        scale / self.0
    }

    /// Factor for a wheel movement of `delta_y` pixels.
    ///
    /// Negative deltas (wheel up) zoom in; one notch of `WHEEL_NOTCH_PIXELS`
    /// equals exactly one step.
    #[must_use]
    pub fn wheel_factor(self, delta_y: f32) -> f32 {
        if !delta_y.is_finite() {
            return 1.0;
        }
        self.0.powf(-delta_y / WHEEL_NOTCH_PIXELS)
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_STEP)
    }
}

fn sanitize(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Formats a scale as a whole percentage for display (1.5 → "150%").
#[must_use]
pub fn format_percent(scale: f32) -> String {
    format!("{:.0}%", scale * 100.0)
}
