// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning the previewed image.

use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Pointer position where the drag started
    pub start_pointer: Option<Point>,

    /// Image translation when the drag started
    pub start_translate: Option<Vector>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, pointer: Point, translate: Vector) {
        self.is_dragging = true;
        self.start_pointer = Some(pointer);
        self.start_translate = Some(translate);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_pointer = None;
        self.start_translate = None;
    }

    /// Calculates the translation for the current pointer position.
    ///
    /// The image follows the pointer one to one. No bounds are applied, the
    /// image may be dragged fully off screen.
    #[must_use]
    pub fn calculate_translate(&self, pointer: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }

        let start_pointer = self.start_pointer?;
        let start_translate = self.start_translate?;

        Some(start_translate + (pointer - start_pointer))
    }
}
