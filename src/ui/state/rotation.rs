// SPDX-License-Identifier: MPL-2.0
//! Rotation value types for the preview transform.
//!
//! Unlike a stored orientation, the preview rotation accumulates: rotating
//! right four times by 90° yields 360°, not 0°. Hosts that animate the
//! rotation rely on that so the image spins forward instead of snapping back.
//! [`Rotation::normalized`] gives the display angle.

pub use crate::config::{
    DEFAULT_ROTATE_STEP_DEGREES, MAX_ROTATE_STEP_DEGREES, MIN_ROTATE_STEP_DEGREES,
};

/// Rotation step in degrees, guaranteed to be within the configured range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationStep(f32);

impl RotationStep {
    /// Creates a new rotation step, clamping to the valid range.
    #[must_use]
    pub fn new(degrees: f32) -> Self {
        let degrees = if degrees.is_finite() {
            degrees
        } else {
            DEFAULT_ROTATE_STEP_DEGREES
        };
        Self(degrees.clamp(MIN_ROTATE_STEP_DEGREES, MAX_ROTATE_STEP_DEGREES))
    }

    #[must_use]
    pub fn degrees(self) -> f32 {
        self.0
    }
}

impl Default for RotationStep {
    fn default() -> Self {
        Self(DEFAULT_ROTATE_STEP_DEGREES)
    }
}

/// Accumulated rotation angle in degrees.
///
/// # Example
///
/// ```
/// use lens_preview::ui::state::{Rotation, RotationStep};
///
/// let step = RotationStep::default();
/// let angle = Rotation::ZERO.rotate_right(step);
/// assert_eq!(angle.degrees(), 90.0);
///
/// // The raw value keeps accumulating, the display angle wraps
/// let full = angle.rotate_right(step).rotate_right(step).rotate_right(step);
/// assert_eq!(full.degrees(), 360.0);
/// assert_eq!(full.normalized(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation(f32);

impl Rotation {
    /// No rotation (0°).
    pub const ZERO: Self = Self(0.0);

    #[must_use]
    pub fn new(degrees: f32) -> Self {
        Self(degrees)
    }

    /// Returns the accumulated angle in degrees.
    #[must_use]
    pub fn degrees(self) -> f32 {
        self.0
    }

    /// Returns the display angle in `[0, 360)`.
    #[must_use]
    pub fn normalized(self) -> f32 {
        self.0.rem_euclid(360.0)
    }

    /// Returns the display angle in radians.
    #[must_use]
    pub fn radians(self) -> f32 {
        self.normalized().to_radians()
    }

    /// Rotates clockwise by one step.
    #[must_use]
    pub fn rotate_right(self, step: RotationStep) -> Self {
        Self(self.0 + step.degrees())
    }

    /// Rotates counter-clockwise by one step.
    #[must_use]
    pub fn rotate_left(self, step: RotationStep) -> Self {
        Self(self.0 - step.degrees())
    }

    /// Returns true if the display angle is not zero.
    #[must_use]
    pub fn is_rotated(self) -> bool {
        self.normalized().abs() > f32::EPSILON
    }

    /// Returns true if the bounding box of the rotated image swaps width and height.
    #[must_use]
    pub fn swaps_dimensions(self) -> bool {
        let angle = self.normalized();
        (angle - 90.0).abs() < f32::EPSILON || (angle - 270.0).abs() < f32::EPSILON
    }
}
