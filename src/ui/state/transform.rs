// SPDX-License-Identifier: MPL-2.0
//! 2D affine transform applied to the previewed image.
//!
//! The transform is expressed relative to the preview surface center: an
//! image-local offset `q` (from the image center) lands on screen at
//! `center + translate + scale * rotate(q)`.

use crate::config::IDENTITY_SCALE;
use crate::ui::state::rotation::Rotation;
use iced::Vector;

/// Scale, rotation and translation of the previewed image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewTransform {
    /// Scale factor, always > 0.
    pub scale: f32,
    /// Accumulated rotation.
    pub rotation: Rotation,
    /// Translation from the surface center, in screen pixels.
    pub translate: Vector,
}

impl PreviewTransform {
    /// The identity transform `{ scale: 1, rotate: 0, translate: (0, 0) }`.
    pub const IDENTITY: Self = Self {
        scale: IDENTITY_SCALE,
        rotation: Rotation::ZERO,
        translate: Vector::ZERO,
    };

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Returns whether the scale differs from 1.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        (self.scale - IDENTITY_SCALE).abs() > f32::EPSILON
    }

    /// Changes the scale while keeping the image point under `anchor` fixed.
    ///
    /// `anchor` is an offset from the surface center. With a zero anchor the
    /// visual center stays in place.
    #[must_use]
    pub fn scaled_about(self, anchor: Vector, new_scale: f32) -> Self {
        let ratio = new_scale / self.scale;
        Self {
            scale: new_scale,
            translate: anchor - (anchor - self.translate) * ratio,
            ..self
        }
    }

    /// Maps an image-local offset to a surface offset.
    #[must_use]
    pub fn apply(&self, local: Vector) -> Vector {
        let (sin, cos) = self.rotation.degrees().to_radians().sin_cos();
        let rotated = Vector::new(
            local.x * cos - local.y * sin,
            local.x * sin + local.y * cos,
        );
        self.translate + rotated * self.scale
    }

    /// Maps a surface offset back to an image-local offset.
    #[must_use]
    pub fn invert(&self, surface: Vector) -> Vector {
        let (sin, cos) = self.rotation.degrees().to_radians().sin_cos();
        let unscaled = (surface - self.translate) * (1.0 / self.scale);
        Vector::new(
            unscaled.x * cos + unscaled.y * sin,
            -unscaled.x * sin + unscaled.y * cos,
        )
    }
}

impl Default for PreviewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
