// SPDX-License-Identifier: MPL-2.0
//! Load status of a single image source.
//!
//! Once a load fails and a fallback source is configured, the fallback is
//! rendered and the tracker stops reacting to load signals: they would
//! describe the fallback, not the source.

/// Three-state load status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadStatus {
    Loading,
    Error,
    Normal,
}

impl LoadStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LoadStatus::Loading => "loading",
            LoadStatus::Error => "error",
            LoadStatus::Normal => "normal",
        }
    }
}

/// Signals reported by the host image element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Loaded,
    Failed,
    SourceChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    StatusChanged(LoadStatus),
    /// Entered the error status. Group members truncate navigation here.
    Failed,
}

/// Status tracker for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadState {
    status: LoadStatus,
    has_fallback: bool,
    has_placeholder: bool,
}

impl LoadState {
    /// `has_placeholder` means placeholder content is shown while loading.
    #[must_use]
    pub fn new(has_fallback: bool, has_placeholder: bool) -> Self {
        Self {
            status: Self::initial_status(has_placeholder),
            has_fallback,
            has_placeholder,
        }
    }

    fn initial_status(has_placeholder: bool) -> LoadStatus {
        if has_placeholder {
            LoadStatus::Loading
        } else {
            LoadStatus::Normal
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::SourceChanged => {
                let status = Self::initial_status(self.has_placeholder);
                self.set(status)
            }
            _ if self.is_fallback_active() => Effect::None,
            Message::Loaded => self.set(LoadStatus::Normal),
            Message::Failed => match self.set(LoadStatus::Error) {
                Effect::StatusChanged(_) => Effect::Failed,
                other => other,
            },
        }
    }

    fn set(&mut self, status: LoadStatus) -> Effect {
        if self.status == status {
            return Effect::None;
        }
        self.status = status;
        Effect::StatusChanged(status)
    }

    #[must_use]
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    #[must_use]
    pub fn has_fallback(&self) -> bool {
        self.has_fallback
    }

    /// True when the fallback source is being rendered.
    #[must_use]
    pub fn is_fallback_active(&self) -> bool {
        self.has_fallback && self.status == LoadStatus::Error
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_status_depends_on_placeholder() {
        assert_eq!(LoadState::new(false, true).status(), LoadStatus::Loading);
        assert_eq!(LoadState::new(false, false).status(), LoadStatus::Normal);
    }

    #[test]
    fn load_then_error_reflects_last_signal() {
        let mut state = LoadState::new(false, true);
        assert_eq!(
            state.handle(Message::Loaded),
            Effect::StatusChanged(LoadStatus::Normal)
        );
        assert_eq!(state.handle(Message::Failed), Effect::Failed);
        assert_eq!(state.status(), LoadStatus::Error);
        assert_eq!(
            state.handle(Message::Loaded),
            Effect::StatusChanged(LoadStatus::Normal)
        );
    }

    #[test]
    fn repeated_failure_reports_once() {
        let mut state = LoadState::new(false, false);
        assert_eq!(state.handle(Message::Failed), Effect::Failed);
        assert_eq!(state.handle(Message::Failed), Effect::None);
    }

    #[test]
    fn fallback_freezes_status() {
        let mut state = LoadState::new(true, false);
        state.handle(Message::Failed);
        assert!(state.is_fallback_active());

        assert_eq!(state.handle(Message::Loaded), Effect::None);
        assert_eq!(state.handle(Message::Failed), Effect::None);
        assert_eq!(state.status(), LoadStatus::Error);
    }

    #[test]
    fn source_change_unfreezes_fallback() {
        let mut state = LoadState::new(true, true);
        state.handle(Message::Failed);

        assert_eq!(
            state.handle(Message::SourceChanged),
            Effect::StatusChanged(LoadStatus::Loading)
        );
        assert!(!state.is_fallback_active());
    }

    #[test]
    fn status_follows_signal_sequences() {
        use LoadStatus::{Error, Loading, Normal};
        use Message::{Failed, Loaded, SourceChanged};

        // (has_fallback, has_placeholder, signals, status after each signal)
        let cases: [(bool, bool, &[Message], &[LoadStatus]); 6] = [
            (
                false,
                true,
                &[Loaded, SourceChanged, Failed, SourceChanged, Loaded],
                &[Normal, Loading, Error, Loading, Normal],
            ),
            (
                false,
                false,
                &[Failed, Loaded, SourceChanged, Failed, Failed],
                &[Error, Normal, Normal, Error, Error],
            ),
            (
                true,
                false,
                &[Failed, Loaded, SourceChanged, Loaded, Failed, Loaded],
                &[Error, Error, Normal, Normal, Error, Error],
            ),
            (
                true,
                true,
                &[SourceChanged, Failed, Loaded, SourceChanged, Loaded],
                &[Loading, Error, Error, Loading, Normal],
            ),
            (
                true,
                true,
                &[Loaded, Failed, SourceChanged, SourceChanged, Failed, Failed],
                &[Normal, Error, Loading, Loading, Error, Error],
            ),
            (
                false,
                true,
                &[Failed, Failed, SourceChanged, Loaded, Failed],
                &[Error, Error, Loading, Normal, Error],
            ),
        ];

        for (has_fallback, has_placeholder, signals, expected) in cases {
            let mut state = LoadState::new(has_fallback, has_placeholder);
            for (step, (signal, status)) in signals.iter().zip(expected).enumerate() {
                state.handle(*signal);
                assert_eq!(
                    state.status(),
                    *status,
                    "case {has_fallback}/{has_placeholder} step {step}: {signal:?}"
                );
            }
        }
    }

    #[test]
    fn source_change_without_placeholder_is_normal() {
        let mut state = LoadState::new(false, false);
        state.handle(Message::Failed);
        state.handle(Message::SourceChanged);
        assert_eq!(state.status(), LoadStatus::Normal);
    }
}
