// SPDX-License-Identifier: MPL-2.0
//! Events emitted by preview scopes.

use crate::error::Fault;
use crate::image::LoadStatus;
use crate::ui::state::PreviewTransform;
use iced::Point;

/// Something observable happened in a preview scope.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewEvent {
    /// The externally visible open state was asked to change.
    ///
    /// Fired for every requested transition, including controlled scopes
    /// where the visible state does not follow the request.
    OpenChanged { open: bool, prev: bool },

    /// The overlay opened on a source.
    Opened {
        source: String,
        origin: Option<Point>,
    },

    /// The overlay started closing; `origin` is kept for the exit animation.
    Closed {
        source: String,
        origin: Option<Point>,
    },

    /// The exit animation finished and the session was cleared.
    AfterClose,

    /// The overlay switched to another source without closing.
    SourceChanged { source: String },

    /// The image transform changed.
    TransformChanged(PreviewTransform),

    /// A drag gesture started.
    DragStarted,

    /// A drag gesture ended or was aborted.
    DragEnded,

    /// An image load status changed.
    StatusChanged { source: String, status: LoadStatus },

    /// A load failure removed members from group navigation.
    MembersTruncated { from: usize, removed: usize },

    /// An operation was ignored.
    Ignored(Fault),
}

impl PreviewEvent {
    /// Short name used in log lines.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            PreviewEvent::OpenChanged { .. } => "open-changed",
            PreviewEvent::Opened { .. } => "opened",
            PreviewEvent::Closed { .. } => "closed",
            PreviewEvent::AfterClose => "after-close",
            PreviewEvent::SourceChanged { .. } => "source-changed",
            PreviewEvent::TransformChanged(_) => "transform-changed",
            PreviewEvent::DragStarted => "drag-started",
            PreviewEvent::DragEnded => "drag-ended",
            PreviewEvent::StatusChanged { .. } => "status-changed",
            PreviewEvent::MembersTruncated { .. } => "members-truncated",
            PreviewEvent::Ignored(_) => "ignored",
        }
    }
}
