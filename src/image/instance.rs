// SPDX-License-Identifier: MPL-2.0
//! A mounted image and its preview scope.
//!
//! Constructing an [`ImageInstance`] mounts it: group members register
//! themselves. Dropping it unmounts it on every exit path, unregistering
//! from the group and tearing down an overlay that still shows it.

use crate::diagnostics::{Dispatcher, Listener, PreviewEvent, SubscriptionId};
use crate::error::Fault;
use crate::group::PreviewGroup;
use crate::image::load_state::{self, LoadState, LoadStatus};
use crate::image::options::{open_change_listener, ImageOptions, Placeholder};
use crate::ui::preview::toolbar::{Action, Toolbar};
use crate::ui::preview::{ClickOutcome, Effect, Message, PreviewHost, PreviewOverlay};
use iced::Point;

#[derive(Debug)]
enum Scope {
    Standalone { host: PreviewHost, events: Dispatcher },
    Grouped(PreviewGroup),
}

/// One image element with load tracking and preview.
#[derive(Debug)]
pub struct ImageInstance {
    source: String,
    fallback: Option<String>,
    placeholder: Placeholder,
    alt: Option<String>,
    preview_enabled: bool,
    load: LoadState,
    scope: Scope,
}

impl ImageInstance {
    /// Mounts a standalone image with its own overlay.
    #[must_use]
    pub fn new(options: ImageOptions) -> Self {
        let ImageOptions {
            source,
            fallback,
            placeholder,
            alt,
            preview,
            settings,
        } = options;

        let events = Dispatcher::new(settings.event_history);
        if let Some(callback) = preview.on_open_change {
            events.subscribe(open_change_listener(callback));
        }

        let mut host = PreviewHost::new(settings, preview.visible);
        if preview.enabled {
            let mut pending = Vec::new();
            host.sync(Some(source.as_str()), &mut pending);
            events.emit_all(pending);
        }

        Self {
            load: LoadState::new(fallback.is_some(), placeholder.shows_while_loading()),
            source,
            fallback,
            placeholder,
            alt,
            preview_enabled: preview.enabled,
            scope: Scope::Standalone { host, events },
        }
    }

    /// Mounts an image inside `group`.
    ///
    /// The group owns the open state, so per-image `visible` and
    /// `on_open_change` are not used; configure them on the group.
    #[must_use]
    pub fn in_group(options: ImageOptions, group: &PreviewGroup) -> Self {
        let ImageOptions {
            source,
            fallback,
            placeholder,
            alt,
            preview,
            ..
        } = options;

        if preview.visible.is_some() || preview.on_open_change.is_some() {
            log::debug!("{source}: per-image preview visibility is ignored inside a group");
        }
        group.register(&source);

        Self {
            load: LoadState::new(fallback.is_some(), placeholder.shows_while_loading()),
            source,
            fallback,
            placeholder,
            alt,
            preview_enabled: preview.enabled,
            scope: Scope::Grouped(group.clone()),
        }
    }

    fn emit(&self, event: PreviewEvent) {
        match &self.scope {
            Scope::Standalone { events, .. } => events.emit(event),
            Scope::Grouped(group) => group.emit(event),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // LOADING
    // ═══════════════════════════════════════════════════════════════════════

    /// The host image element finished loading.
    pub fn report_load(&mut self) {
        let effect = self.load.handle(load_state::Message::Loaded);
        self.apply_load_effect(effect);
    }

    /// The host image element failed to load.
    pub fn report_error(&mut self) {
        let effect = self.load.handle(load_state::Message::Failed);
        self.apply_load_effect(effect);
    }

    fn apply_load_effect(&mut self, effect: load_state::Effect) {
        match effect {
            load_state::Effect::None => {}
            load_state::Effect::StatusChanged(status) => self.emit(PreviewEvent::StatusChanged {
                source: self.source.clone(),
                status,
            }),
            load_state::Effect::Failed => {
                log::debug!("{}: {}", self.source, Fault::LoadFailure);
                self.emit(PreviewEvent::StatusChanged {
                    source: self.source.clone(),
                    status: LoadStatus::Error,
                });
                if let Scope::Grouped(group) = &self.scope {
                    group.report_failure(&self.source);
                }
            }
        }
    }

    /// Switches to another source.
    ///
    /// Group members re-register under the new source. An overlay showing
    /// the old source moves to the new one.
    pub fn set_source(&mut self, source: impl Into<String>) {
        let source = source.into();
        if source == self.source {
            return;
        }
        let old = std::mem::replace(&mut self.source, source);

        match &mut self.scope {
            Scope::Grouped(group) => group.replace_source(&old, &self.source),
            Scope::Standalone { host, events } => {
                let mut pending = Vec::new();
                if host.overlay().active_source() == Some(old.as_str()) {
                    host.retarget(&self.source, &mut pending);
                }
                events.emit_all(pending);
            }
        }

        let effect = self.load.handle(load_state::Message::SourceChanged);
        self.apply_load_effect(effect);
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    #[must_use]
    pub fn alt(&self) -> Option<&str> {
        self.alt.as_deref()
    }

    #[must_use]
    pub fn placeholder(&self) -> &Placeholder {
        &self.placeholder
    }

    #[must_use]
    pub fn status(&self) -> LoadStatus {
        self.load.status()
    }

    /// The source the host should display: the fallback once loading failed.
    #[must_use]
    pub fn rendered_source(&self) -> &str {
        match self.fallback.as_deref() {
            Some(fallback) if self.load.is_fallback_active() => fallback,
            _ => self.source.as_str(),
        }
    }

    /// Whether load signals from the host element should be forwarded.
    #[must_use]
    pub fn accepts_load_signals(&self) -> bool {
        !self.load.is_fallback_active()
    }

    /// Placeholder content to show right now, if any.
    #[must_use]
    pub fn placeholder_content(&self) -> Option<&str> {
        match &self.placeholder {
            Placeholder::Custom(content) if self.load.is_loading() => Some(content.as_str()),
            _ => None,
        }
    }

    /// Whether the image element itself is styled as a placeholder.
    #[must_use]
    pub fn is_placeholder_styled(&self) -> bool {
        self.placeholder == Placeholder::Default
    }

    // ═══════════════════════════════════════════════════════════════════════
    // PREVIEW
    // ═══════════════════════════════════════════════════════════════════════

    #[must_use]
    pub fn is_preview_enabled(&self) -> bool {
        self.preview_enabled
    }

    #[must_use]
    pub fn group(&self) -> Option<&PreviewGroup> {
        match &self.scope {
            Scope::Grouped(group) => Some(group),
            Scope::Standalone { .. } => None,
        }
    }

    /// In a group and not dropped from its navigation.
    #[must_use]
    pub fn is_group_member(&self) -> bool {
        self.group().is_some_and(|group| group.contains(&self.source))
    }

    /// The user clicked the image at `origin` (screen coordinates).
    pub fn click(&mut self, origin: Point) -> ClickOutcome {
        if !self.preview_enabled || self.load.status() == LoadStatus::Error {
            log::trace!("{}: click ignored", self.source);
            return ClickOutcome::Ignored;
        }

        match &mut self.scope {
            Scope::Grouped(group) => group.open(&self.source, Some(origin)),
            Scope::Standalone { host, events } => {
                let mut pending = Vec::new();
                let outcome = host.request_open(&self.source, Some(origin), &mut pending);
                events.emit_all(pending);
                outcome
            }
        }
    }

    /// Sends a message to the preview this image belongs to.
    pub fn handle_preview(&mut self, message: Message) -> Effect {
        match &mut self.scope {
            Scope::Grouped(group) => group.handle(message),
            Scope::Standalone { host, events } => {
                let mut pending = Vec::new();
                let effect = match host.handle(message, &mut pending) {
                    // A standalone image has nothing to navigate to.
                    Effect::NavigateNext | Effect::NavigatePrevious => {
                        pending.push(PreviewEvent::Ignored(Fault::InvalidNavigation));
                        Effect::Ignored(Fault::InvalidNavigation)
                    }
                    other => other,
                };
                events.emit_all(pending);
                effect
            }
        }
    }

    /// Runs a toolbar action.
    pub fn perform(&mut self, action: Action) -> Effect {
        self.handle_preview(action.message())
    }

    /// Sets or releases external control of a standalone preview.
    ///
    /// Group members follow their group; use [`PreviewGroup::set_visible`].
    pub fn set_preview_visible(&mut self, visible: Option<bool>) {
        let enabled = self.preview_enabled;
        match &mut self.scope {
            Scope::Standalone { host, events } => {
                let mut pending = Vec::new();
                let source = enabled.then_some(self.source.as_str());
                host.set_controlled(visible, source, &mut pending);
                events.emit_all(pending);
            }
            Scope::Grouped(_) => {
                log::debug!("{}: preview visibility is owned by the group", self.source);
            }
        }
    }

    /// Whether the preview this image belongs to is on screen.
    #[must_use]
    pub fn is_preview_open(&self) -> bool {
        match &self.scope {
            Scope::Standalone { host, .. } => host.is_showing(),
            Scope::Grouped(group) => group.is_open(),
        }
    }

    pub fn with_overlay<R>(&self, f: impl FnOnce(&PreviewOverlay) -> R) -> R {
        match &self.scope {
            Scope::Standalone { host, .. } => f(host.overlay()),
            Scope::Grouped(group) => group.with_overlay(f),
        }
    }

    #[must_use]
    pub fn toolbar(&self) -> Toolbar {
        match &self.scope {
            Scope::Standalone { host, .. } => Toolbar::new(host.overlay(), 1),
            Scope::Grouped(group) => group.toolbar(),
        }
    }

    pub fn subscribe(&self, listener: Listener) -> SubscriptionId {
        match &self.scope {
            Scope::Standalone { events, .. } => events.subscribe(listener),
            Scope::Grouped(group) => group.subscribe(listener),
        }
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        match &self.scope {
            Scope::Standalone { events, .. } => events.unsubscribe(id),
            Scope::Grouped(group) => group.unsubscribe(id),
        }
    }

    #[must_use]
    pub fn history(&self) -> Vec<PreviewEvent> {
        match &self.scope {
            Scope::Standalone { events, .. } => events.history(),
            Scope::Grouped(group) => group.history(),
        }
    }
}

impl Drop for ImageInstance {
    fn drop(&mut self) {
        match &mut self.scope {
            Scope::Grouped(group) => {
                group.unregister(&self.source);
            }
            Scope::Standalone { host, events } => {
                let mut pending = Vec::new();
                host.force_close(&mut pending);
                events.emit_all(pending);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::PreviewOptions;
    use crate::ui::preview::Phase;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn fallback_replaces_broken_source() {
        let mut image = ImageInstance::new(ImageOptions::new("a.png").fallback("x.png"));
        image.report_error();

        assert_eq!(image.status(), LoadStatus::Error);
        assert_eq!(image.rendered_source(), "x.png");
        assert!(!image.accepts_load_signals());

        image.report_load();
        image.report_error();
        assert_eq!(image.status(), LoadStatus::Error);
        assert_eq!(image.rendered_source(), "x.png");
    }

    #[test]
    fn custom_placeholder_shows_until_loaded() {
        let mut image = ImageInstance::new(
            ImageOptions::new("a.png").placeholder(Placeholder::Custom("loading…".into())),
        );
        assert_eq!(image.status(), LoadStatus::Loading);
        assert_eq!(image.placeholder_content(), Some("loading…"));

        image.report_load();
        assert_eq!(image.placeholder_content(), None);
    }

    #[test]
    fn default_placeholder_styles_image() {
        let image = ImageInstance::new(ImageOptions::new("a.png").placeholder(Placeholder::Default));
        assert!(image.is_placeholder_styled());
        assert_eq!(image.status(), LoadStatus::Normal);
    }

    #[test]
    fn click_opens_standalone_preview_at_origin() {
        let mut image = ImageInstance::new(ImageOptions::new("a.png"));
        let origin = Point::new(12.0, 8.0);

        assert_eq!(image.click(origin), ClickOutcome::Opened);
        assert!(image.is_preview_open());
        assert_eq!(image.with_overlay(PreviewOverlay::origin), Some(origin));
    }

    #[test]
    fn errored_or_disabled_images_ignore_clicks() {
        let mut broken = ImageInstance::new(ImageOptions::new("a.png"));
        broken.report_error();
        assert_eq!(broken.click(Point::ORIGIN), ClickOutcome::Ignored);

        let mut disabled =
            ImageInstance::new(ImageOptions::new("b.png").preview(PreviewOptions::disabled()));
        assert_eq!(disabled.click(Point::ORIGIN), ClickOutcome::Ignored);
        assert!(!disabled.is_preview_open());
    }

    #[test]
    fn standalone_navigation_is_invalid() {
        let mut image = ImageInstance::new(ImageOptions::new("a.png"));
        image.click(Point::ORIGIN);
        assert_eq!(
            image.perform(Action::Next),
            Effect::Ignored(Fault::InvalidNavigation)
        );
        assert!(!image.toolbar().is_enabled(Action::Next));
    }

    #[test]
    fn controlled_close_only_notifies() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let mut image = ImageInstance::new(ImageOptions::new("a.png").preview(
            PreviewOptions::enabled()
                .visible(true)
                .on_open_change(move |open, prev| sink.borrow_mut().push((open, prev))),
        ));
        assert!(image.is_preview_open());

        image.perform(Action::Close);
        assert!(image.is_preview_open());
        assert_eq!(image.with_overlay(PreviewOverlay::phase), Phase::Open);
        assert_eq!(*calls.borrow(), vec![(false, true)]);
    }

    #[test]
    fn source_change_retargets_open_preview() {
        let mut image = ImageInstance::new(ImageOptions::new("a.png"));
        image.click(Point::ORIGIN);
        image.perform(Action::ZoomIn);

        image.set_source("b.png");
        assert_eq!(
            image.with_overlay(|overlay| overlay.active_source().map(str::to_owned)),
            Some("b.png".to_owned())
        );
        assert!(image.with_overlay(|overlay| overlay.transform().is_identity()));
    }

    #[test]
    fn status_changes_are_observable() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut image = ImageInstance::new(
            ImageOptions::new("a.png").placeholder(Placeholder::Custom(String::new())),
        );
        image.subscribe(Box::new(move |event: &PreviewEvent| {
            if let PreviewEvent::StatusChanged { status, .. } = event {
                sink.borrow_mut().push(*status);
            }
        }));

        image.report_load();
        image.report_error();
        assert_eq!(*seen.borrow(), vec![LoadStatus::Normal, LoadStatus::Error]);
    }

    #[test]
    fn group_error_truncates_navigation() {
        let group = PreviewGroup::new();
        let _a = ImageInstance::in_group(ImageOptions::new("a.png"), &group);
        let mut b = ImageInstance::in_group(ImageOptions::new("b.png"), &group);
        let _c = ImageInstance::in_group(ImageOptions::new("c.png"), &group);

        b.report_error();
        assert_eq!(group.sources(), vec!["a.png".to_owned()]);
        assert!(!b.is_group_member());
    }

    #[test]
    fn drop_unregisters_from_group() {
        let group = PreviewGroup::new();
        let mut a = ImageInstance::in_group(ImageOptions::new("a.png"), &group);
        {
            let _b = ImageInstance::in_group(ImageOptions::new("b.png"), &group);
            assert_eq!(group.navigable_len(), 2);
        }
        assert_eq!(group.navigable_len(), 1);

        a.click(Point::ORIGIN);
        drop(a);
        assert_eq!(group.phase(), Phase::Closed);
        assert!(group.sources().is_empty());
    }
}
