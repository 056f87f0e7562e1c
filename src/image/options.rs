// SPDX-License-Identifier: MPL-2.0
//! Per-image configuration.

use crate::config::PreviewSettings;
use crate::diagnostics::{Listener, PreviewEvent};
use std::fmt;

/// Callback for open-state requests: `(open, prev)`.
pub type OpenChangeCallback = Box<dyn FnMut(bool, bool)>;

/// Wraps an open-change callback as a dispatcher listener.
pub(crate) fn open_change_listener(mut callback: OpenChangeCallback) -> Listener {
    Box::new(move |event: &PreviewEvent| {
        if let PreviewEvent::OpenChanged { open, prev } = event {
            callback(*open, *prev);
        }
    })
}

/// What to show while the image is loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Placeholder {
    #[default]
    None,
    /// The image element itself is styled as a placeholder. No loading phase.
    Default,
    /// Content displayed until the image loads.
    Custom(String),
}

impl Placeholder {
    /// Whether this placeholder puts the image in a loading phase.
    #[must_use]
    pub fn shows_while_loading(&self) -> bool {
        matches!(self, Placeholder::Custom(_))
    }
}

/// Preview behavior of an image or group.
pub struct PreviewOptions {
    pub enabled: bool,
    /// `Some` makes the open state externally controlled.
    pub visible: Option<bool>,
    pub on_open_change: Option<OpenChangeCallback>,
}

impl PreviewOptions {
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            visible: None,
            on_open_change: None,
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::enabled()
        }
    }

    /// Controls the open state from outside.
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    #[must_use]
    pub fn on_open_change(mut self, callback: impl FnMut(bool, bool) + 'static) -> Self {
        self.on_open_change = Some(Box::new(callback));
        self
    }
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self::enabled()
    }
}

impl fmt::Debug for PreviewOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewOptions")
            .field("enabled", &self.enabled)
            .field("visible", &self.visible)
            .field("on_open_change", &self.on_open_change.is_some())
            .finish()
    }
}

/// Everything needed to mount an image.
#[derive(Debug)]
pub struct ImageOptions {
    pub source: String,
    pub fallback: Option<String>,
    pub placeholder: Placeholder,
    pub alt: Option<String>,
    pub preview: PreviewOptions,
    /// Overlay tuning for standalone images. Groups use their own.
    pub settings: PreviewSettings,
}

impl ImageOptions {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            fallback: None,
            placeholder: Placeholder::None,
            alt: None,
            preview: PreviewOptions::enabled(),
            settings: PreviewSettings::default(),
        }
    }

    #[must_use]
    pub fn fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = placeholder;
        self
    }

    #[must_use]
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    #[must_use]
    pub fn preview(mut self, preview: PreviewOptions) -> Self {
        self.preview = preview;
        self
    }

    #[must_use]
    pub fn settings(mut self, settings: PreviewSettings) -> Self {
        self.settings = settings;
        self
    }
}
