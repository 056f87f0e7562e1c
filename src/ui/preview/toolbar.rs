// SPDX-License-Identifier: MPL-2.0
//! Preview toolbar: action set, enablement and button row.

use crate::ui::preview::{Message, PreviewOverlay};
use crate::ui::state::zoom::format_percent;
use iced::{
    alignment::Vertical,
    widget::{button, Row, Text},
    Element,
};

/// A toolbar action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ZoomIn,
    ZoomOut,
    RotateLeft,
    RotateRight,
    Reset,
    Prev,
    Next,
    Close,
}

impl Action {
    /// Every action, in display order.
    pub const ALL: [Action; 8] = [
        Action::Prev,
        Action::Next,
        Action::ZoomOut,
        Action::ZoomIn,
        Action::RotateLeft,
        Action::RotateRight,
        Action::Reset,
        Action::Close,
    ];

    /// Stable kebab-case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Action::ZoomIn => "zoom-in",
            Action::ZoomOut => "zoom-out",
            Action::RotateLeft => "rotate-left",
            Action::RotateRight => "rotate-right",
            Action::Reset => "reset",
            Action::Prev => "prev",
            Action::Next => "next",
            Action::Close => "close",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == name)
    }

    /// Button caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Action::ZoomIn => "+",
            Action::ZoomOut => "−",
            Action::RotateLeft => "⟲",
            Action::RotateRight => "⟳",
            Action::Reset => "1:1",
            Action::Prev => "‹",
            Action::Next => "›",
            Action::Close => "✕",
        }
    }

    /// The overlay message this action dispatches.
    #[must_use]
    pub fn message(self) -> Message {
        match self {
            Action::ZoomIn => Message::ZoomIn,
            Action::ZoomOut => Message::ZoomOut,
            Action::RotateLeft => Message::RotateLeft,
            Action::RotateRight => Message::RotateRight,
            Action::Reset => Message::Reset,
            Action::Prev => Message::Previous,
            Action::Next => Message::Next,
            Action::Close => Message::Close,
        }
    }
}

/// Snapshot of what the toolbar needs to render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Toolbar {
    open: bool,
    can_zoom_in: bool,
    can_zoom_out: bool,
    is_identity: bool,
    navigable: usize,
    scale: f32,
}

impl Toolbar {
    /// Captures the overlay state. `navigable` is the number of members the
    /// owning scope can step through (1 for a standalone image).
    #[must_use]
    pub fn new(overlay: &PreviewOverlay, navigable: usize) -> Self {
        let transform = overlay.transform();
        Self {
            open: overlay.is_open(),
            can_zoom_in: overlay.can_zoom_in(),
            can_zoom_out: overlay.can_zoom_out(),
            is_identity: transform.is_identity(),
            navigable,
            scale: transform.scale,
        }
    }

    #[must_use]
    pub fn is_enabled(&self, action: Action) -> bool {
        if !self.open {
            return false;
        }
        match action {
            Action::ZoomIn => self.can_zoom_in,
            Action::ZoomOut => self.can_zoom_out,
            Action::Reset => !self.is_identity,
            Action::Prev | Action::Next => self.navigable > 1,
            Action::RotateLeft | Action::RotateRight | Action::Close => true,
        }
    }

    /// Whether navigation buttons are shown at all.
    #[must_use]
    pub fn shows_navigation(&self) -> bool {
        self.navigable > 1
    }

    #[must_use]
    pub fn zoom_label(&self) -> String {
        format_percent(self.scale)
    }
}

pub fn view<'a>(toolbar: &Toolbar) -> Element<'a, Action> {
    let mut row = Row::new().spacing(10).align_y(Vertical::Center);

    for action in Action::ALL {
        if matches!(action, Action::Prev | Action::Next) && !toolbar.shows_navigation() {
            continue;
        }
        let enabled = toolbar.is_enabled(action);
        let control = button(Text::new(action.label()))
            .on_press_maybe(enabled.then_some(action))
            .padding([6, 12]);
        row = row.push(control);

        if action == Action::ZoomIn {
            row = row.push(Text::new(toolbar.zoom_label()).size(14));
        }
    }

    row.into()
}
