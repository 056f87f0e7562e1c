// SPDX-License-Identifier: MPL-2.0
//! Ordered membership of a preview group.
//!
//! Members live in slots. Removing a member leaves a tombstone so the indices
//! of the remaining members never shift; trailing tombstones are dropped.
//! Navigation walks live slots only and wraps at both ends.
//!
//! Several mounted images may show the same source. They share one slot,
//! which counts its holders and is only vacated when the last one leaves.

/// Position of a member in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex(usize);

impl SlotIndex {
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot {
    source: String,
    holders: usize,
}

/// Ordered, de-duplicated set of sources with a current member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupRegistry {
    slots: Vec<Option<Slot>>,
    current: Option<SlotIndex>,
}

impl GroupRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holder of `source`, appending a slot if it is not a member
    /// yet. Returns its slot.
    pub fn register(&mut self, source: &str) -> SlotIndex {
        if let Some(index) = self.index_of(source) {
            if let Some(slot) = self.slots[index.0].as_mut() {
                slot.holders += 1;
            }
            return index;
        }
        let index = SlotIndex(self.slots.len());
        self.slots.push(Some(Slot {
            source: source.to_owned(),
            holders: 1,
        }));
        index
    }

    /// Releases one holder of `source`.
    ///
    /// The slot is vacated once its last holder leaves, clearing the current
    /// member if it was that slot.
    pub fn unregister(&mut self, source: &str) -> Option<SlotIndex> {
        let index = self.index_of(source)?;
        let entry = &mut self.slots[index.0];
        if let Some(slot) = entry.as_mut() {
            if slot.holders > 1 {
                slot.holders -= 1;
                return Some(index);
            }
        }
        *entry = None;
        if self.current == Some(index) {
            self.current = None;
        }
        self.drop_trailing_tombstones();
        Some(index)
    }

    /// Number of mounted holders of `source`.
    #[must_use]
    pub fn holders(&self, source: &str) -> usize {
        self.index_of(source)
            .and_then(|index| self.slots[index.0].as_ref())
            .map_or(0, |slot| slot.holders)
    }

    /// Removes every member at or after `index`, whatever their holder
    /// count. Returns how many were live.
    pub fn truncate_from(&mut self, index: SlotIndex) -> usize {
        if index.0 >= self.slots.len() {
            return 0;
        }
        let removed = self.slots[index.0..].iter().flatten().count();
        self.slots.truncate(index.0);
        if self.current.is_some_and(|current| current >= index) {
            self.current = None;
        }
        self.drop_trailing_tombstones();
        removed
    }

    fn drop_trailing_tombstones(&mut self) {
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
    }

    /// Makes `source` current. Returns false (and changes nothing) if it is
    /// not a member.
    pub fn set_current(&mut self, source: &str) -> bool {
        match self.index_of(source) {
            Some(index) => {
                self.current = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn clear_current(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.and_then(|index| self.source_at(index))
    }

    #[must_use]
    pub fn current_index(&self) -> Option<SlotIndex> {
        self.current
    }

    #[must_use]
    pub fn index_of(&self, source: &str) -> Option<SlotIndex> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|slot| slot.source == source))
            .map(SlotIndex)
    }

    #[must_use]
    pub fn source_at(&self, index: SlotIndex) -> Option<&str> {
        self.slots
            .get(index.0)
            .and_then(Option::as_ref)
            .map(|slot| slot.source.as_str())
    }

    #[must_use]
    pub fn contains(&self, source: &str) -> bool {
        self.index_of(source).is_some()
    }

    /// Live members, in registration order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(|slot| slot.source.as_str()))
    }

    /// Number of live members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Advances to the next live member, wrapping at the end.
    ///
    /// Returns `None` without moving when there is no current member or
    /// fewer than two members.
    pub fn next_member(&mut self) -> Option<&str> {
        self.step(true)
    }

    /// Steps back to the previous live member, wrapping at the start.
    pub fn previous_member(&mut self) -> Option<&str> {
        self.step(false)
    }

    fn step(&mut self, forward: bool) -> Option<&str> {
        let live: Vec<usize> = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|_| index))
            .collect();
        if live.len() < 2 {
            return None;
        }

        let current = self.current?;
        let position = live.iter().position(|&index| index == current.0)?;
        let count = live.len();
        let target = if forward {
            (position + 1) % count
        } else {
            (position + count - 1) % count
        };

        self.current = Some(SlotIndex(live[target]));
        self.current()
    }
}
