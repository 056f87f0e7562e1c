// SPDX-License-Identifier: MPL-2.0
//! Preview groups: several images sharing one overlay.
//!
//! A [`PreviewGroup`] is a cheap, cloneable handle. Every image mounted in
//! the group holds a clone; the group owns the member registry, the single
//! overlay and the event dispatcher.
//!
//! All mutation goes through a short `RefCell` borrow that collects events.
//! Events are delivered only after the borrow is released, so listeners can
//! call straight back into the group.

mod registry;

pub use registry::{GroupRegistry, SlotIndex};

use crate::config::PreviewSettings;
use crate::diagnostics::{Dispatcher, Listener, PreviewEvent, SubscriptionId};
use crate::error::Fault;
use crate::image::{open_change_listener, PreviewOptions};
use crate::ui::preview::toolbar::{Action, Toolbar};
use crate::ui::preview::{
    animation, ClickOutcome, Effect, Message, Phase, PreviewHost, PreviewOverlay,
};
use crate::ui::state::PreviewTransform;
use iced::Point;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug)]
struct GroupState {
    registry: GroupRegistry,
    host: PreviewHost,
}

impl GroupState {
    /// Tears the overlay down if it shows a source that left the group.
    fn drop_stale_session(&mut self, events: &mut Vec<PreviewEvent>) {
        let overlay = self.host.overlay();
        let stale = overlay.is_visible()
            && overlay
                .active_source()
                .is_some_and(|active| !self.registry.contains(active));
        if stale {
            log::debug!("closing preview on a source that left the group");
            self.host.force_close(events);
        }
    }

    /// Opens the overlay on a navigable member, making it current first.
    fn open_member(
        &mut self,
        source: &str,
        origin: Option<Point>,
        events: &mut Vec<PreviewEvent>,
    ) -> ClickOutcome {
        if !self.registry.set_current(source) {
            log::debug!("open on {source} ignored: not a navigable member");
            events.push(PreviewEvent::Ignored(Fault::StaleReference));
            return ClickOutcome::Rejected(Fault::StaleReference);
        }

        let outcome = self.host.request_open(source, origin, events);

        // A controlled overlay that is already showing follows the click.
        let overlay = self.host.overlay();
        if outcome == ClickOutcome::OpenRequested
            && overlay.is_open()
            && overlay.active_source() != Some(source)
        {
            self.host.retarget(source, events);
        }
        outcome
    }
}

#[derive(Debug)]
struct Shared {
    state: RefCell<GroupState>,
    events: Dispatcher,
    settings: PreviewSettings,
    enabled: bool,
}

/// Handle to a preview group.
#[derive(Debug, Clone)]
pub struct PreviewGroup {
    shared: Rc<Shared>,
}

impl PreviewGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(PreviewSettings::default(), PreviewOptions::enabled())
    }

    /// Creates a group. `options.visible` makes the group's open state
    /// controlled; `options.on_open_change` observes open requests.
    #[must_use]
    pub fn with_options(settings: PreviewSettings, options: PreviewOptions) -> Self {
        let events = Dispatcher::new(settings.event_history);
        if let Some(callback) = options.on_open_change {
            events.subscribe(open_change_listener(callback));
        }

        Self {
            shared: Rc::new(Shared {
                state: RefCell::new(GroupState {
                    registry: GroupRegistry::new(),
                    host: PreviewHost::new(settings, options.visible),
                }),
                events,
                settings,
                enabled: options.enabled,
            }),
        }
    }

    fn update<R>(&self, f: impl FnOnce(&mut GroupState, &mut Vec<PreviewEvent>) -> R) -> R {
        let mut events = Vec::new();
        let result = {
            let mut state = self.shared.state.borrow_mut();
            f(&mut state, &mut events)
        };
        self.shared.events.emit_all(events);
        result
    }

    fn read<R>(&self, f: impl FnOnce(&GroupState) -> R) -> R {
        f(&self.shared.state.borrow())
    }

    pub(crate) fn emit(&self, event: PreviewEvent) {
        self.shared.events.emit(event);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // MEMBERSHIP
    // ═══════════════════════════════════════════════════════════════════════

    /// Adds a member. Already registered sources keep their slot.
    pub fn register(&self, source: &str) -> SlotIndex {
        self.update(|state, _| {
            let index = state.registry.register(source);
            log::debug!("group member {source} at slot {}", index.value());
            index
        })
    }

    /// Releases one holder of a member. Once the last holder leaves, an
    /// overlay showing it is closed.
    pub fn unregister(&self, source: &str) -> Option<SlotIndex> {
        self.update(|state, events| {
            let removed = state.registry.unregister(source);
            if removed.is_none() {
                log::debug!("unregister of unknown member {source}");
                events.push(PreviewEvent::Ignored(Fault::StaleReference));
            }
            state.drop_stale_session(events);
            removed
        })
    }

    /// Replaces one holder's source. The new source is appended; an open
    /// overlay showing an old source that left the group follows it.
    pub fn replace_source(&self, old: &str, new: &str) {
        self.update(|state, events| {
            state.registry.unregister(old);
            state.registry.register(new);

            let overlay = state.host.overlay();
            if overlay.is_open()
                && overlay.active_source() == Some(old)
                && !state.registry.contains(old)
            {
                state.registry.set_current(new);
                state.host.retarget(new, events);
            }
            state.drop_stale_session(events);
        });
    }

    /// Drops `source` and every later member from navigation.
    ///
    /// Returns how many members were removed.
    pub fn report_failure(&self, source: &str) -> usize {
        self.update(|state, events| {
            let Some(index) = state.registry.index_of(source) else {
                return 0;
            };
            let removed = state.registry.truncate_from(index);
            log::debug!(
                "load failure on {source}: {removed} member(s) dropped from slot {}",
                index.value()
            );
            events.push(PreviewEvent::MembersTruncated {
                from: index.value(),
                removed,
            });
            state.drop_stale_session(events);
            removed
        })
    }

    /// Makes `source` current, moving an open overlay to it.
    ///
    /// A controlled group waiting to be shown opens on it.
    pub fn set_current(&self, source: &str) -> bool {
        self.update(|state, events| {
            if !state.registry.set_current(source) {
                events.push(PreviewEvent::Ignored(Fault::StaleReference));
                return false;
            }
            if state.host.overlay().is_open() {
                if state.host.overlay().active_source() != Some(source) {
                    state.host.retarget(source, events);
                }
            } else {
                state.host.sync(Some(source), events);
            }
            true
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // PREVIEW
    // ═══════════════════════════════════════════════════════════════════════

    /// Opens the shared overlay on a member.
    pub fn open(&self, source: &str, origin: Option<Point>) -> ClickOutcome {
        if !self.shared.enabled {
            return ClickOutcome::Ignored;
        }

        self.update(|state, events| state.open_member(source, origin, events))
    }

    /// Handles an overlay message, resolving navigation against the
    /// registry.
    ///
    /// `Open` goes through [`PreviewGroup::open`], so only members can be
    /// shown.
    pub fn handle(&self, message: Message) -> Effect {
        if let Message::Open { source, origin } = message {
            return match self.open(&source, origin) {
                ClickOutcome::Rejected(fault) => Effect::Ignored(fault),
                ClickOutcome::Opened | ClickOutcome::OpenRequested | ClickOutcome::Ignored => {
                    Effect::None
                }
            };
        }

        self.update(|state, events| {
            let effect = state.host.handle(message, events);
            let forward = match effect {
                Effect::NavigateNext => true,
                Effect::NavigatePrevious => false,
                other => return other,
            };

            let target = if forward {
                state.registry.next_member()
            } else {
                state.registry.previous_member()
            }
            .map(str::to_owned);

            match target {
                Some(source) => {
                    log::debug!("group navigation to {source}");
                    state.host.retarget(&source, events)
                }
                None => {
                    log::debug!("navigation ignored: fewer than two members");
                    events.push(PreviewEvent::Ignored(Fault::InvalidNavigation));
                    Effect::Ignored(Fault::InvalidNavigation)
                }
            }
        })
    }

    /// Runs a toolbar action.
    pub fn perform(&self, action: Action) -> Effect {
        self.handle(action.message())
    }

    /// Sets (`Some`) or releases (`None`) external control of the open state.
    pub fn set_visible(&self, visible: Option<bool>) {
        self.update(|state, events| {
            let current = state.registry.current().map(str::to_owned);
            state.host.set_controlled(visible, current.as_deref(), events);
        });
    }

    /// Removes every member and closes the overlay.
    pub fn unmount(&self) {
        self.update(|state, events| {
            state.registry = GroupRegistry::new();
            state.host.force_close(events);
        });
    }

    // ═══════════════════════════════════════════════════════════════════════
    // OBSERVATION
    // ═══════════════════════════════════════════════════════════════════════

    pub fn subscribe(&self, listener: Listener) -> SubscriptionId {
        self.shared.events.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.shared.events.unsubscribe(id)
    }

    #[must_use]
    pub fn history(&self) -> Vec<PreviewEvent> {
        self.shared.events.history()
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.shared.enabled
    }

    #[must_use]
    pub fn settings(&self) -> PreviewSettings {
        self.shared.settings
    }

    /// Whether the shared preview is on screen.
    ///
    /// A controlled group whose shown member left reports `false` until the
    /// next open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.read(|state| state.host.is_showing())
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.read(|state| state.host.overlay().phase())
    }

    #[must_use]
    pub fn active_source(&self) -> Option<String> {
        self.read(|state| state.host.overlay().active_source().map(str::to_owned))
    }

    #[must_use]
    pub fn current_source(&self) -> Option<String> {
        self.read(|state| state.registry.current().map(str::to_owned))
    }

    #[must_use]
    pub fn sources(&self) -> Vec<String> {
        self.read(|state| state.registry.sources().map(str::to_owned).collect())
    }

    #[must_use]
    pub fn contains(&self, source: &str) -> bool {
        self.read(|state| state.registry.contains(source))
    }

    #[must_use]
    pub fn navigable_len(&self) -> usize {
        self.read(|state| state.registry.len())
    }

    #[must_use]
    pub fn transform(&self) -> PreviewTransform {
        self.read(|state| state.host.overlay().transform())
    }

    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.read(|state| state.host.overlay().origin())
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.read(|state| state.host.overlay().is_dragging())
    }

    #[must_use]
    pub fn toolbar(&self) -> Toolbar {
        self.read(|state| Toolbar::new(state.host.overlay(), state.registry.len()))
    }

    #[must_use]
    pub fn animation_frame(&self, progress: f32) -> Option<animation::Frame> {
        self.read(|state| state.host.overlay().animation_frame(progress))
    }

    /// Runs `f` against the overlay. `f` must not call back into the group.
    pub fn with_overlay<R>(&self, f: impl FnOnce(&PreviewOverlay) -> R) -> R {
        self.read(|state| f(state.host.overlay()))
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &PreviewGroup) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl Default for PreviewGroup {
    fn default() -> Self {
        Self::new()
    }
}
