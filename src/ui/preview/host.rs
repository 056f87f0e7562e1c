// SPDX-License-Identifier: MPL-2.0
//! Open/close policy around a [`PreviewOverlay`].
//!
//! A host merges two sources of truth for "is the preview open": an internal
//! flag driven by clicks and close gestures, and an optional externally
//! controlled value. When controlled, requests still notify observers through
//! [`PreviewEvent::OpenChanged`] but the visible state only follows the
//! controlled value.
//!
//! Hosts never emit events themselves. Every operation appends to an event
//! list the owning scope delivers once it has released its own borrows.

use crate::config::PreviewSettings;
use crate::diagnostics::PreviewEvent;
use crate::error::Fault;
use crate::ui::preview::{Effect, Message, PreviewOverlay};
use iced::Point;

/// Result of asking a scope to open its preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The overlay opened (or switched) on the clicked source.
    Opened,
    /// The scope is controlled; observers were asked to open it.
    OpenRequested,
    /// Preview disabled or the image is showing an error.
    Ignored,
    Rejected(Fault),
}

/// Owns an overlay and decides when it opens and closes.
#[derive(Debug, Clone, Default)]
pub struct PreviewHost {
    overlay: PreviewOverlay,
    controlled: Option<bool>,
    internal: bool,
}

impl PreviewHost {
    #[must_use]
    pub fn new(settings: PreviewSettings, controlled: Option<bool>) -> Self {
        Self {
            overlay: PreviewOverlay::new(settings),
            controlled,
            internal: false,
        }
    }

    #[must_use]
    pub fn overlay(&self) -> &PreviewOverlay {
        &self.overlay
    }

    /// Merged open state observers should see.
    ///
    /// For a controlled host this is the controlled value, even after
    /// [`PreviewHost::force_close`] tore the session down. Use
    /// [`PreviewHost::is_showing`] to ask whether a preview is on screen.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.controlled.unwrap_or(self.internal)
    }

    /// Whether the merged state is open and the overlay holds a session.
    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.is_open() && self.overlay.is_visible()
    }

    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    /// Asks to open on `source`.
    ///
    /// Controlled hosts only notify; the origin is dropped since the open
    /// will not be caused by this click.
    pub fn request_open(
        &mut self,
        source: &str,
        origin: Option<Point>,
        events: &mut Vec<PreviewEvent>,
    ) -> ClickOutcome {
        let prev = self.is_open();
        if !prev {
            events.push(PreviewEvent::OpenChanged { open: true, prev });
        }

        if self.is_controlled() {
            log::debug!("open of {source} requested on controlled preview");
            return ClickOutcome::OpenRequested;
        }

        self.internal = true;
        let effect = self.overlay.handle(Message::Open {
            source: source.to_owned(),
            origin,
        });
        events.extend(effect.to_event());
        ClickOutcome::Opened
    }

    /// Asks to close. Controlled hosts only notify.
    pub fn request_close(&mut self, events: &mut Vec<PreviewEvent>) -> Effect {
        let prev = self.is_open();
        if prev {
            events.push(PreviewEvent::OpenChanged { open: false, prev });
        }

        if self.is_controlled() {
            return Effect::None;
        }

        self.internal = false;
        let effect = self.overlay.handle(Message::Close);
        events.extend(effect.to_event());
        effect
    }

    /// Sets or clears the controlled value and brings the overlay in line.
    ///
    /// `source` is what to show if the overlay has to open.
    pub fn set_controlled(
        &mut self,
        visible: Option<bool>,
        source: Option<&str>,
        events: &mut Vec<PreviewEvent>,
    ) {
        self.controlled = visible;
        self.sync(source, events);
    }

    /// Opens or closes the overlay to match the merged open state.
    pub fn sync(&mut self, source: Option<&str>, events: &mut Vec<PreviewEvent>) {
        let effect = match (self.is_open(), self.overlay.is_open()) {
            (true, false) => match source {
                Some(source) => self.overlay.handle(Message::Open {
                    source: source.to_owned(),
                    origin: None,
                }),
                None => Effect::None,
            },
            (false, true) => self.overlay.handle(Message::Close),
            _ => Effect::None,
        };
        events.extend(effect.to_event());
    }

    /// Routes an overlay message, sending close gestures through
    /// [`PreviewHost::request_close`].
    pub fn handle(&mut self, message: Message, events: &mut Vec<PreviewEvent>) -> Effect {
        match message {
            Message::Close | Message::FocusLost => {
                if self.overlay.is_open() {
                    self.request_close(events)
                } else {
                    Effect::None
                }
            }
            Message::Open { source, origin } => {
                self.request_open(&source, origin, events);
                Effect::None
            }
            other => {
                let effect = self.overlay.handle(other);
                events.extend(effect.to_event());
                effect
            }
        }
    }

    /// Switches the open overlay to another source.
    pub fn retarget(&mut self, source: &str, events: &mut Vec<PreviewEvent>) -> Effect {
        let effect = self.overlay.retarget(source);
        events.extend(effect.to_event());
        effect
    }

    /// Tears the overlay down immediately, skipping the exit animation.
    ///
    /// Used when the displayed source goes away. Applies to controlled
    /// hosts as well; their controlled value is left alone, so `is_open`
    /// keeps reporting it while `is_showing` turns false until the next
    /// [`PreviewHost::sync`].
    pub fn force_close(&mut self, events: &mut Vec<PreviewEvent>) {
        if !self.overlay.is_visible() {
            return;
        }
        if self.overlay.is_open() {
            let prev = self.is_open();
            if prev {
                events.push(PreviewEvent::OpenChanged { open: false, prev });
            }
            self.internal = false;
            let effect = self.overlay.handle(Message::Close);
            events.extend(effect.to_event());
        }
        let effect = self.overlay.handle(Message::AfterClose);
        events.extend(effect.to_event());
    }
}
