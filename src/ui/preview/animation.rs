// SPDX-License-Identifier: MPL-2.0
//! Open/close animation frames.
//!
//! The overlay grows out of the element that opened it and shrinks back into
//! it on close. When no origin is known (controlled scopes) it simply scales
//! from the surface center.

use crate::config::{ANIMATION_START_SCALE, IDENTITY_SCALE};
use iced::{Point, Rectangle, Vector};

/// Which way the animation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Enter,
    Exit,
}

/// One interpolated animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Scale of the whole overlay content.
    pub scale: f32,
    /// Offset of the content center from the surface center.
    pub offset: Vector,
    pub opacity: f32,
}

/// Computes the frame at `progress` (clamped to `[0, 1]`).
#[must_use]
pub fn frame(
    origin: Option<Point>,
    viewport: Rectangle,
    progress: f32,
    direction: Direction,
) -> Frame {
    let progress = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        1.0
    };

    // `t` is how far the overlay is from its collapsed state.
    let t = match direction {
        Direction::Enter => ease_out_cubic(progress),
        Direction::Exit => 1.0 - ease_in_cubic(progress),
    };

    let collapsed_offset = origin.map_or(Vector::ZERO, |origin| origin - viewport.center());

    Frame {
        scale: ANIMATION_START_SCALE + (IDENTITY_SCALE - ANIMATION_START_SCALE) * t,
        offset: collapsed_offset * (1.0 - t),
        opacity: t,
    }
}

/// Transform origin of the overlay, relative to its own top-left corner.
#[must_use]
pub fn transform_origin(origin: Option<Point>, overlay_bounds: Rectangle) -> Option<Vector> {
    origin.map(|origin| origin - Point::new(overlay_bounds.x, overlay_bounds.y))
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn ease_in_cubic(t: f32) -> f32 {
    t.powi(3)
}
