// SPDX-License-Identifier: MPL-2.0
//! Preview state value types
//!
//! Small, self-validating building blocks the overlay state machine is made of.

pub mod drag;
pub mod rotation;
pub mod transform;
pub mod viewport;
pub mod zoom;

// Re-export commonly used types for convenience
pub use drag::DragState;
pub use rotation::{Rotation, RotationStep};
pub use transform::PreviewTransform;
pub use viewport::ViewportState;
pub use zoom::{ScaleBounds, ZoomStep};
