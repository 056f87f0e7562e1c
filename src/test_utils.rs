// SPDX-License-Identifier: MPL-2.0
//! Test helpers for float comparisons.
//!
//! Transform math accumulates rounding error (zoom in then out, anchored
//! zoom), so tests compare through the `approx` macros instead of `assert_eq!`.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Tolerance for coordinates that went through several scale operations.
pub const COORD_EPSILON: f32 = 1e-3;
