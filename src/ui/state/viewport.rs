// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the on-screen bounds of the preview surface so pointer positions
//! can be turned into offsets from the surface center, which is where the
//! image transform is anchored.

use iced::{Point, Rectangle, Vector};

/// Manages the preview surface bounds
#[derive(Debug, Clone, Default)]
pub struct ViewportState {
    /// Current viewport bounds
    pub bounds: Option<Rectangle>,

    /// Previous viewport bounds (for layout change detection)
    pub previous_bounds: Option<Rectangle>,
}

impl ViewportState {
    /// Updates the bounds. Returns true if the size changed.
    pub fn update(&mut self, bounds: Rectangle) -> bool {
        self.previous_bounds = self.bounds;
        self.bounds = Some(bounds);

        match self.previous_bounds {
            Some(prev) => prev.width != bounds.width || prev.height != bounds.height,
            None => false,
        }
    }

    /// Center of the surface, if known.
    #[must_use]
    pub fn center(&self) -> Option<Point> {
        self.bounds.map(|bounds| bounds.center())
    }

    /// Offset of a screen position from the surface center.
    ///
    /// Before the first layout the bounds are unknown and every position is
    /// treated as the center.
    #[must_use]
    pub fn offset_from_center(&self, position: Point) -> Vector {
        match self.center() {
            Some(center) => position - center,
            None => Vector::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    fn bounds(width: f32, height: f32) -> Rectangle {
        Rectangle::new(Point::new(0.0, 0.0), Size::new(width, height))
    }

    #[test]
    fn default_viewport_has_no_bounds() {
        let state = ViewportState::default();
        assert!(state.bounds.is_none());
        assert!(state.center().is_none());
    }

    #[test]
    fn update_reports_size_changes() {
        let mut state = ViewportState::default();
        assert!(!state.update(bounds(800.0, 600.0)));
        assert!(!state.update(bounds(800.0, 600.0)));
        assert!(state.update(bounds(1024.0, 600.0)));
        assert_eq!(state.previous_bounds, Some(bounds(800.0, 600.0)));
    }

    #[test]
    fn offset_from_center_uses_bounds() {
        let mut state = ViewportState::default();
        state.update(Rectangle::new(Point::new(100.0, 50.0), Size::new(400.0, 300.0)));

        assert_eq!(state.center(), Some(Point::new(300.0, 200.0)));
        assert_eq!(
            state.offset_from_center(Point::new(350.0, 180.0)),
            Vector::new(50.0, -20.0)
        );
    }

    #[test]
    fn offset_is_zero_without_bounds() {
        let state = ViewportState::default();
        assert_eq!(state.offset_from_center(Point::new(10.0, 10.0)), Vector::ZERO);
    }
}
