// SPDX-License-Identifier: MPL-2.0
//! Raw input translation for the preview surface.
//!
//! Hosts forward iced events here and feed the resulting messages to their
//! preview scope.

use crate::config::WHEEL_NOTCH_PIXELS;
use crate::ui::preview::toolbar::Action;
use crate::ui::preview::Message;
use iced::{event, keyboard, mouse, window, Point, Rectangle};

/// Keyboard shortcut for a key, if any.
#[must_use]
pub fn action_for_key(key: &keyboard::Key) -> Option<Action> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Action::Close),
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Action::Prev),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Action::Next),
        keyboard::Key::Character(c) => match c.as_str() {
            "+" | "=" => Some(Action::ZoomIn),
            "-" => Some(Action::ZoomOut),
            "r" | "R" => Some(Action::RotateRight),
            "l" | "L" => Some(Action::RotateLeft),
            "0" => Some(Action::Reset),
            _ => None,
        },
        _ => None,
    }
}

/// Vertical wheel delta in pixels, positive when scrolling down.
///
/// Line deltas are converted at one notch per line.
#[must_use]
pub fn scroll_delta_y(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => -*y * WHEEL_NOTCH_PIXELS,
        mouse::ScrollDelta::Pixels { y, .. } => -*y,
    }
}

/// Tracks the cursor so button and wheel events can be positioned.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    cursor_position: Option<Point>,
}

impl InputTracker {
    #[must_use]
    pub fn cursor_position(&self) -> Option<Point> {
        self.cursor_position
    }

    /// Translates one raw event into overlay messages, in dispatch order.
    pub fn translate(&mut self, event: &event::Event) -> Vec<Message> {
        match event {
            event::Event::Window(window::Event::Resized(size)) => {
                vec![Message::ViewportResized(Rectangle::new(Point::ORIGIN, *size))]
            }
            event::Event::Window(window::Event::Unfocused) => vec![Message::FocusLost],
            event::Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::CursorMoved { position } => {
                    self.cursor_position = Some(*position);
                    vec![Message::DragMove(*position)]
                }
                mouse::Event::CursorLeft => {
                    self.cursor_position = None;
                    vec![Message::DragEnd]
                }
                mouse::Event::ButtonPressed(mouse::Button::Left) => {
                    match self.cursor_position {
                        Some(position) => {
                            vec![Message::Click(position), Message::DragStart(position)]
                        }
                        None => Vec::new(),
                    }
                }
                mouse::Event::ButtonReleased(mouse::Button::Left) => vec![Message::DragEnd],
                mouse::Event::WheelScrolled { delta } => match self.cursor_position {
                    Some(position) => vec![Message::Wheel {
                        delta_y: scroll_delta_y(delta),
                        position,
                    }],
                    None => Vec::new(),
                },
                _ => Vec::new(),
            },
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                action_for_key(key).map(Action::message).into_iter().collect()
            }
            _ => Vec::new(),
        }
    }
}
