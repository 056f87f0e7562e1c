// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Zoom factor bounds and step
//! - **Rotation**: Rotation step in degrees
//! - **Gestures**: Double-click and wheel tuning
//! - **Animation**: Entrance/exit animation shape
//! - **Diagnostics**: Event history capacity

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Scale of the identity transform.
pub const IDENTITY_SCALE: f32 = 1.0;

/// Default lower bound for the preview scale.
pub const DEFAULT_MIN_SCALE: f32 = 0.2;

/// Smallest lower bound a configuration may request.
pub const MIN_SCALE_FLOOR: f32 = 0.01;

/// Default upper bound for the preview scale.
pub const DEFAULT_MAX_SCALE: f32 = 50.0;

/// Largest upper bound a configuration may request.
pub const MAX_SCALE_CEILING: f32 = 100.0;

/// Default multiplicative factor applied by one zoom in/out step.
pub const DEFAULT_ZOOM_STEP: f32 = 1.5;

/// Minimum allowed zoom step factor.
pub const MIN_ZOOM_STEP: f32 = 1.05;

/// Maximum allowed zoom step factor.
pub const MAX_ZOOM_STEP: f32 = 4.0;

// ==========================================================================
// Rotation Defaults
// ==========================================================================

/// Default rotation step in degrees.
pub const DEFAULT_ROTATE_STEP_DEGREES: f32 = 90.0;

/// Minimum rotation step in degrees.
pub const MIN_ROTATE_STEP_DEGREES: f32 = 1.0;

/// Maximum rotation step in degrees.
pub const MAX_ROTATE_STEP_DEGREES: f32 = 180.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Scale reached when double-clicking an image at identity scale.
pub const DEFAULT_DOUBLE_CLICK_SCALE: f32 = 2.0;

/// Maximum delay between two clicks for them to count as a double-click.
pub const DOUBLE_CLICK_THRESHOLD_MS: u64 = 350;

/// Wheel distance (in pixels) equivalent to one zoom step.
pub const WHEEL_NOTCH_PIXELS: f32 = 120.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Scale of the image at the very start of the entrance animation.
pub const ANIMATION_START_SCALE: f32 = 0.1;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of events kept in the history buffer.
pub const DEFAULT_EVENT_HISTORY: usize = 256;

/// Minimum event history capacity.
pub const MIN_EVENT_HISTORY: usize = 1;

/// Maximum event history capacity.
pub const MAX_EVENT_HISTORY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Scale validation
    assert!(MIN_SCALE_FLOOR > 0.0);
    assert!(DEFAULT_MIN_SCALE >= MIN_SCALE_FLOOR);
    assert!(DEFAULT_MIN_SCALE <= IDENTITY_SCALE);
    assert!(DEFAULT_MAX_SCALE >= IDENTITY_SCALE);
    assert!(DEFAULT_MAX_SCALE <= MAX_SCALE_CEILING);
    assert!(MIN_ZOOM_STEP > 1.0);
    assert!(MAX_ZOOM_STEP > MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP >= MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP <= MAX_ZOOM_STEP);

    // Rotation validation
    assert!(MIN_ROTATE_STEP_DEGREES > 0.0);
    assert!(MAX_ROTATE_STEP_DEGREES >= MIN_ROTATE_STEP_DEGREES);
    assert!(DEFAULT_ROTATE_STEP_DEGREES >= MIN_ROTATE_STEP_DEGREES);
    assert!(DEFAULT_ROTATE_STEP_DEGREES <= MAX_ROTATE_STEP_DEGREES);

    // Gesture validation
    assert!(DEFAULT_DOUBLE_CLICK_SCALE > IDENTITY_SCALE);
    assert!(DEFAULT_DOUBLE_CLICK_SCALE <= DEFAULT_MAX_SCALE);
    assert!(WHEEL_NOTCH_PIXELS > 0.0);

    // Animation validation
    assert!(ANIMATION_START_SCALE > 0.0);
    assert!(ANIMATION_START_SCALE < IDENTITY_SCALE);

    // Event history validation
    assert!(MIN_EVENT_HISTORY > 0);
    assert!(MAX_EVENT_HISTORY >= MIN_EVENT_HISTORY);
    assert!(DEFAULT_EVENT_HISTORY >= MIN_EVENT_HISTORY);
    assert!(DEFAULT_EVENT_HISTORY <= MAX_EVENT_HISTORY);
};
