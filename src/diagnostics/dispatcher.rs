// SPDX-License-Identifier: MPL-2.0
//! Observer registry with queued delivery.
//!
//! Listeners may call back into the scope that notified them. Events emitted
//! from inside a listener are queued and delivered once the current event has
//! reached every listener, so delivery order always matches emission order.

use crate::diagnostics::buffer::CircularBuffer;
use crate::diagnostics::events::PreviewEvent;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;

/// Callback receiving preview events.
pub type Listener = Box<dyn FnMut(&PreviewEvent)>;

/// Handle returned by [`Dispatcher::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Entry {
    id: SubscriptionId,
    // `None` while the listener is running.
    listener: Option<Listener>,
}

/// Fans events out to subscribed listeners and keeps a bounded history.
pub struct Dispatcher {
    entries: RefCell<Vec<Entry>>,
    queue: RefCell<VecDeque<PreviewEvent>>,
    history: RefCell<CircularBuffer<PreviewEvent>>,
    dispatching: Cell<bool>,
    next_id: Cell<u64>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(history_capacity: usize) -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
            queue: RefCell::new(VecDeque::new()),
            history: RefCell::new(CircularBuffer::new(history_capacity)),
            dispatching: Cell::new(false),
            next_id: Cell::new(0),
        }
    }

    /// Registers a listener. It receives events emitted after this call.
    pub fn subscribe(&self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push(Entry {
            id,
            listener: Some(listener),
        });
        id
    }

    /// Removes a listener. Returns false if the id is unknown.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut entries = self.entries.borrow_mut();
        match entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                entries.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Records the event and delivers it to every listener.
    pub fn emit(&self, event: PreviewEvent) {
        log::trace!("preview event: {}", event.kind());
        self.history.borrow_mut().push(event.clone());
        self.queue.borrow_mut().push_back(event);

        if self.dispatching.get() {
            return;
        }

        self.dispatching.set(true);
        loop {
            let Some(event) = self.queue.borrow_mut().pop_front() else {
                break;
            };
            self.deliver(&event);
        }
        self.dispatching.set(false);
    }

    /// Emits a batch of events in order.
    pub fn emit_all(&self, events: impl IntoIterator<Item = PreviewEvent>) {
        for event in events {
            self.emit(event);
        }
    }

    fn deliver(&self, event: &PreviewEvent) {
        let ids: Vec<SubscriptionId> = self.entries.borrow().iter().map(|e| e.id).collect();

        for id in ids {
            let taken = self
                .entries
                .borrow_mut()
                .iter_mut()
                .find(|entry| entry.id == id)
                .and_then(|entry| entry.listener.take());

            let Some(mut listener) = taken else {
                continue;
            };

            listener(event);

            // The listener may have unsubscribed itself meanwhile.
            if let Some(entry) = self
                .entries
                .borrow_mut()
                .iter_mut()
                .find(|entry| entry.id == id)
            {
                entry.listener = Some(listener);
            }
        }
    }

    /// Snapshot of the recorded events, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<PreviewEvent> {
        self.history.borrow().iter().cloned().collect()
    }

    /// Most recently recorded event.
    #[must_use]
    pub fn last_event(&self) -> Option<PreviewEvent> {
        self.history.borrow().last().cloned()
    }

    pub fn clear_history(&self) {
        self.history.borrow_mut().clear();
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("listeners", &self.entries.borrow().len())
            .field("history", &self.history.borrow().len())
            .finish_non_exhaustive()
    }
}
