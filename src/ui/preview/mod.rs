// SPDX-License-Identifier: MPL-2.0
//! Preview overlay state machine.
//!
//! The overlay is either `Closed`, `Open` on one source, or `Closing` (exit
//! animation running, no longer interactive). While open it owns the image
//! transform and every gesture that changes it.
//!
//! ## Architecture
//!
//! ```text
//! PreviewHost (open/close policy, controlled mode)
//!     └── PreviewOverlay (this module)
//!             ├── DragState        - pan gesture
//!             ├── ViewportState    - surface bounds for anchoring
//!             └── PreviewTransform - scale, rotation, translation
//! ```
//!
//! Navigation is not resolved here: `Next`/`Previous` come back as effects
//! and the owning scope decides which source becomes active.

pub mod animation;
pub mod host;
pub mod keymap;
pub mod toolbar;

pub use host::{ClickOutcome, PreviewHost};

use crate::config::{DragPolicy, PreviewSettings, DOUBLE_CLICK_THRESHOLD_MS, IDENTITY_SCALE};
use crate::diagnostics::PreviewEvent;
use crate::error::Fault;
use crate::ui::state::{DragState, PreviewTransform, ViewportState};
use iced::{Point, Rectangle, Vector};
use std::time::{Duration, Instant};

/// Time threshold for double-click detection.
const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(DOUBLE_CLICK_THRESHOLD_MS);

/// Lifecycle phase of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Open,
    /// Exit animation in progress. Gestures are ignored.
    Closing,
}

/// State of one open (or closing) preview.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    source: String,
    origin: Option<Point>,
    transform: PreviewTransform,
}

impl Session {
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    #[must_use]
    pub fn transform(&self) -> PreviewTransform {
        self.transform
    }
}

/// Messages understood by the overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Open on a source, growing from `origin` when known.
    Open {
        source: String,
        origin: Option<Point>,
    },
    /// Close from any open sub-state.
    Close,
    /// The overlay container lost focus; behaves like `Close`.
    FocusLost,
    /// The host finished the exit animation.
    AfterClose,

    ZoomIn,
    ZoomOut,
    /// Wheel zoom anchored at the pointer. Negative `delta_y` zooms in.
    Wheel {
        delta_y: f32,
        position: Point,
    },
    RotateLeft,
    RotateRight,
    Reset,

    DragStart(Point),
    DragMove(Point),
    DragEnd,
    /// Raw click, used for double-click detection.
    Click(Point),
    DoubleClick(Point),

    Next,
    Previous,

    /// Layout of the preview surface changed.
    ViewportResized(Rectangle),
}

/// Effects produced by overlay messages.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Opened {
        source: String,
        origin: Option<Point>,
    },
    Closed {
        source: String,
        origin: Option<Point>,
    },
    AfterClose,
    SourceChanged {
        source: String,
    },
    TransformChanged(PreviewTransform),
    DragStarted,
    DragEnded,
    /// The owner should advance its navigation and retarget the overlay.
    NavigateNext,
    /// The owner should step back in its navigation and retarget the overlay.
    NavigatePrevious,
    Ignored(Fault),
}

impl Effect {
    /// The event observers should see for this effect, if any.
    #[must_use]
    pub fn to_event(&self) -> Option<PreviewEvent> {
        match self {
            Effect::None | Effect::NavigateNext | Effect::NavigatePrevious => None,
            Effect::Opened { source, origin } => Some(PreviewEvent::Opened {
                source: source.clone(),
                origin: *origin,
            }),
            Effect::Closed { source, origin } => Some(PreviewEvent::Closed {
                source: source.clone(),
                origin: *origin,
            }),
            Effect::AfterClose => Some(PreviewEvent::AfterClose),
            Effect::SourceChanged { source } => Some(PreviewEvent::SourceChanged {
                source: source.clone(),
            }),
            Effect::TransformChanged(transform) => {
                Some(PreviewEvent::TransformChanged(*transform))
            }
            Effect::DragStarted => Some(PreviewEvent::DragStarted),
            Effect::DragEnded => Some(PreviewEvent::DragEnded),
            Effect::Ignored(fault) => Some(PreviewEvent::Ignored(*fault)),
        }
    }
}

/// The zoom/pan/rotate preview surface.
#[derive(Debug, Clone, Default)]
pub struct PreviewOverlay {
    settings: PreviewSettings,
    phase: Phase,
    session: Option<Session>,
    drag: DragState,
    viewport: ViewportState,
    last_click: Option<Instant>,
}

impl PreviewOverlay {
    #[must_use]
    pub fn new(settings: PreviewSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Handle an overlay message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Open { source, origin } => self.open(source, origin),
            Message::Close | Message::FocusLost => self.close(),
            Message::AfterClose => self.after_close(),
            Message::ViewportResized(bounds) => {
                self.viewport.update(bounds);
                Effect::None
            }
            // Everything below needs a live, interactive session.
            _ if self.phase != Phase::Open => {
                log::trace!("ignoring {msg:?} while {:?}", self.phase);
                Effect::None
            }
            Message::ZoomIn => {
                let target = self.settings.zoom_step.zoom_in(self.transform().scale);
                self.zoom_to(target, Vector::ZERO)
            }
            Message::ZoomOut => {
                let target = self.settings.zoom_step.zoom_out(self.transform().scale);
                self.zoom_to(target, Vector::ZERO)
            }
            Message::Wheel { delta_y, position } => {
                let factor = self.settings.zoom_step.wheel_factor(delta_y);
                let anchor = self.viewport.offset_from_center(position);
                self.zoom_to(self.transform().scale * factor, anchor)
            }
            Message::RotateLeft => self.update_transform(|transform, settings| {
                transform.rotation = transform.rotation.rotate_left(settings.rotate_step);
            }),
            Message::RotateRight => self.update_transform(|transform, settings| {
                transform.rotation = transform.rotation.rotate_right(settings.rotate_step);
            }),
            Message::Reset => {
                self.drag.stop();
                self.update_transform(|transform, _| *transform = PreviewTransform::IDENTITY)
            }
            Message::DragStart(pointer) => self.drag_start(pointer),
            Message::DragMove(pointer) => self.drag_move(pointer),
            Message::DragEnd => {
                if self.drag.is_dragging {
                    self.drag.stop();
                    Effect::DragEnded
                } else {
                    Effect::None
                }
            }
            Message::Click(position) => {
                let now = Instant::now();
                let is_double_click = self
                    .last_click
                    .is_some_and(|t| now.duration_since(t) < DOUBLE_CLICK_THRESHOLD);

                if is_double_click {
                    self.last_click = None; // Reset to avoid triple-click
                    self.toggle_zoom(position)
                } else {
                    self.last_click = Some(now);
                    Effect::None
                }
            }
            Message::DoubleClick(position) => self.toggle_zoom(position),
            Message::Next => Effect::NavigateNext,
            Message::Previous => Effect::NavigatePrevious,
        }
    }

    fn open(&mut self, source: String, origin: Option<Point>) -> Effect {
        log::debug!("preview open on {source} (origin {origin:?})");
        self.phase = Phase::Open;
        self.drag.stop();
        self.last_click = None;
        self.session = Some(Session {
            source: source.clone(),
            origin,
            transform: PreviewTransform::IDENTITY,
        });
        Effect::Opened { source, origin }
    }

    fn close(&mut self) -> Effect {
        if self.phase != Phase::Open {
            return Effect::None;
        }
        // Any in-flight gesture dies with the session.
        self.drag.stop();
        self.last_click = None;
        self.phase = Phase::Closing;

        match &self.session {
            Some(session) => {
                log::debug!("preview closing on {}", session.source);
                Effect::Closed {
                    source: session.source.clone(),
                    origin: session.origin,
                }
            }
            None => Effect::None,
        }
    }

    fn after_close(&mut self) -> Effect {
        if self.phase != Phase::Closing {
            return Effect::None;
        }
        self.phase = Phase::Closed;
        self.session = None;
        Effect::AfterClose
    }

    /// Switches the open session to another source with a fresh transform.
    ///
    /// The origin is kept so closing still animates toward the element that
    /// opened the preview.
    pub fn retarget(&mut self, source: &str) -> Effect {
        if self.phase != Phase::Open {
            return Effect::None;
        }
        let Some(session) = self.session.as_mut() else {
            return Effect::None;
        };

        log::debug!("preview retarget {} -> {source}", session.source);
        self.drag.stop();
        self.last_click = None;
        session.source = source.to_owned();
        session.transform = PreviewTransform::IDENTITY;
        Effect::SourceChanged {
            source: source.to_owned(),
        }
    }

    fn zoom_to(&mut self, target: f32, anchor: Vector) -> Effect {
        let bounds = self.settings.scale_bounds;
        let scale = bounds.clamp(target);
        if (scale - self.transform().scale).abs() <= f32::EPSILON {
            return Effect::None;
        }
        self.update_transform(|transform, _| {
            *transform = transform.scaled_about(anchor, scale);
        })
    }

    fn toggle_zoom(&mut self, position: Point) -> Effect {
        if self.transform().is_zoomed() {
            self.drag.stop();
            self.update_transform(|transform, _| {
                transform.scale = IDENTITY_SCALE;
                transform.translate = Vector::ZERO;
            })
        } else {
            let anchor = self.viewport.offset_from_center(position);
            self.zoom_to(self.settings.double_click_scale, anchor)
        }
    }

    fn drag_start(&mut self, pointer: Point) -> Effect {
        let transform = self.transform();
        if self.settings.drag_policy == DragPolicy::WhenZoomed && !transform.is_zoomed() {
            return Effect::None;
        }
        self.drag.start(pointer, transform.translate);
        Effect::DragStarted
    }

    fn drag_move(&mut self, pointer: Point) -> Effect {
        match self.drag.calculate_translate(pointer) {
            Some(translate) => {
                log::trace!("drag to {translate:?}");
                self.update_transform(|transform, _| transform.translate = translate)
            }
            None => Effect::None,
        }
    }

    fn update_transform(
        &mut self,
        change: impl FnOnce(&mut PreviewTransform, &PreviewSettings),
    ) -> Effect {
        let settings = self.settings;
        match self.session.as_mut() {
            Some(session) => {
                change(&mut session.transform, &settings);
                Effect::TransformChanged(session.transform)
            }
            None => Effect::None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Open and interactive.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    /// Open or still animating out.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Closed
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn active_source(&self) -> Option<&str> {
        self.session.as_ref().map(Session::source)
    }

    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.session.as_ref().and_then(Session::origin)
    }

    /// Current transform; identity when no session exists.
    #[must_use]
    pub fn transform(&self) -> PreviewTransform {
        self.session
            .as_ref()
            .map_or(PreviewTransform::IDENTITY, Session::transform)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    #[must_use]
    pub fn settings(&self) -> &PreviewSettings {
        &self.settings
    }

    #[must_use]
    pub fn viewport_bounds(&self) -> Option<Rectangle> {
        self.viewport.bounds
    }

    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.is_open() && !self.settings.scale_bounds.is_max(self.transform().scale)
    }

    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.is_open() && !self.settings.scale_bounds.is_min(self.transform().scale)
    }

    /// Animation frame for the current phase at `progress` in `[0, 1]`.
    ///
    /// `None` when closed or before the first layout.
    #[must_use]
    pub fn animation_frame(&self, progress: f32) -> Option<animation::Frame> {
        let direction = match self.phase {
            Phase::Open => animation::Direction::Enter,
            Phase::Closing => animation::Direction::Exit,
            Phase::Closed => return None,
        };
        let viewport = self.viewport.bounds?;
        Some(animation::frame(self.origin(), viewport, progress, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_utils::{assert_abs_diff_eq, COORD_EPSILON};
    use iced::Size;

    fn open_overlay() -> PreviewOverlay {
        let mut overlay = PreviewOverlay::new(PreviewSettings::default());
        overlay.handle(Message::ViewportResized(Rectangle::new(
            Point::ORIGIN,
            Size::new(800.0, 600.0),
        )));
        overlay.handle(Message::Open {
            source: "a.png".into(),
            origin: Some(Point::new(40.0, 30.0)),
        });
        overlay
    }

    #[test]
    fn open_sets_session_with_identity_transform() {
        let overlay = open_overlay();
        assert_eq!(overlay.phase(), Phase::Open);
        assert_eq!(overlay.active_source(), Some("a.png"));
        assert_eq!(overlay.origin(), Some(Point::new(40.0, 30.0)));
        assert!(overlay.transform().is_identity());
    }

    #[test]
    fn reopen_resets_leftover_transform() {
        let mut overlay = open_overlay();
        overlay.handle(Message::ZoomIn);
        overlay.handle(Message::RotateRight);
        overlay.handle(Message::Close);
        overlay.handle(Message::AfterClose);

        overlay.handle(Message::Open {
            source: "b.png".into(),
            origin: None,
        });
        assert!(overlay.transform().is_identity());
    }

    #[test]
    fn close_keeps_origin_until_after_close() {
        let mut overlay = open_overlay();

        let effect = overlay.handle(Message::Close);
        assert_eq!(
            effect,
            Effect::Closed {
                source: "a.png".into(),
                origin: Some(Point::new(40.0, 30.0)),
            }
        );
        assert_eq!(overlay.phase(), Phase::Closing);
        assert!(!overlay.is_open());
        assert!(overlay.is_visible());
        assert_eq!(overlay.origin(), Some(Point::new(40.0, 30.0)));

        assert_eq!(overlay.handle(Message::AfterClose), Effect::AfterClose);
        assert_eq!(overlay.phase(), Phase::Closed);
        assert!(overlay.session().is_none());
    }

    #[test]
    fn close_aborts_drag_and_later_moves_are_ignored() {
        let mut overlay = open_overlay();
        overlay.handle(Message::DragStart(Point::new(10.0, 10.0)));
        assert!(overlay.is_dragging());

        overlay.handle(Message::Close);
        assert!(!overlay.is_dragging());

        let effect = overlay.handle(Message::DragMove(Point::new(200.0, 200.0)));
        assert_eq!(effect, Effect::None);
        assert_eq!(overlay.transform().translate, Vector::ZERO);
    }

    #[test]
    fn focus_loss_closes_mid_gesture() {
        let mut overlay = open_overlay();
        overlay.handle(Message::ZoomIn);
        overlay.handle(Message::DragStart(Point::new(0.0, 0.0)));

        let effect = overlay.handle(Message::FocusLost);
        assert!(matches!(effect, Effect::Closed { .. }));
        assert!(!overlay.is_dragging());
    }

    #[test]
    fn gestures_while_closing_are_ignored() {
        let mut overlay = open_overlay();
        overlay.handle(Message::Close);
        let before = overlay.transform();

        assert_eq!(overlay.handle(Message::ZoomIn), Effect::None);
        assert_eq!(overlay.handle(Message::RotateRight), Effect::None);
        assert_eq!(overlay.transform(), before);
    }

    #[test]
    fn zoom_in_then_out_restores_scale() {
        let mut overlay = open_overlay();
        overlay.handle(Message::ZoomIn);
        assert_abs_diff_eq!(overlay.transform().scale, 1.5);

        overlay.handle(Message::ZoomOut);
        assert_abs_diff_eq!(overlay.transform().scale, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn zoom_in_then_out_restores_intermediate_scales() {
        let mut overlay = open_overlay();
        overlay.handle(Message::Wheel {
            delta_y: -60.0,
            position: Point::new(600.0, 200.0),
        });
        overlay.handle(Message::DoubleClick(Point::new(100.0, 100.0)));
        overlay.handle(Message::DoubleClick(Point::new(100.0, 100.0)));
        overlay.handle(Message::Wheel {
            delta_y: -90.0,
            position: Point::new(300.0, 450.0),
        });

        let start = overlay.transform().scale;
        assert!(start > 1.0 && start < overlay.settings().scale_bounds.max());

        overlay.handle(Message::ZoomIn);
        overlay.handle(Message::ZoomOut);
        assert_abs_diff_eq!(overlay.transform().scale, start, epsilon = 1e-5);

        // Back to identity, then into the double-click scale.
        overlay.handle(Message::DoubleClick(Point::new(100.0, 100.0)));
        overlay.handle(Message::DoubleClick(Point::new(250.0, 120.0)));
        let zoomed = overlay.transform().scale;
        overlay.handle(Message::ZoomOut);
        overlay.handle(Message::ZoomIn);
        assert_abs_diff_eq!(overlay.transform().scale, zoomed, epsilon = 1e-5);
    }

    #[test]
    fn extreme_wheel_clamps_to_bounds() {
        let mut overlay = open_overlay();
        for _ in 0..5 {
            overlay.handle(Message::ZoomIn);
        }

        overlay.handle(Message::Wheel {
            delta_y: -40_000.0,
            position: Point::new(200.0, 150.0),
        });
        let bounds = overlay.settings().scale_bounds;
        assert_abs_diff_eq!(overlay.transform().scale, bounds.max());
        assert!(overlay.transform().translate.x.is_finite());

        overlay.handle(Message::Wheel {
            delta_y: 40_000.0,
            position: Point::new(200.0, 150.0),
        });
        assert_abs_diff_eq!(overlay.transform().scale, bounds.min());
    }

    #[test]
    fn zoom_clamps_at_bounds() {
        let mut overlay = open_overlay();
        for _ in 0..50 {
            overlay.handle(Message::ZoomIn);
        }
        let max = overlay.settings().scale_bounds.max();
        assert_abs_diff_eq!(overlay.transform().scale, max);
        assert!(!overlay.can_zoom_in());
        assert_eq!(overlay.handle(Message::ZoomIn), Effect::None);

        for _ in 0..50 {
            overlay.handle(Message::ZoomOut);
        }
        let min = overlay.settings().scale_bounds.min();
        assert_abs_diff_eq!(overlay.transform().scale, min);
        assert!(!overlay.can_zoom_out());
    }

    #[test]
    fn toolbar_zoom_keeps_visual_center() {
        let mut overlay = open_overlay();
        overlay.handle(Message::DragStart(Point::new(0.0, 0.0)));
        overlay.handle(Message::DragMove(Point::new(20.0, -10.0)));
        overlay.handle(Message::DragEnd);

        let before = overlay.transform();
        let center_local = before.invert(Vector::ZERO);
        overlay.handle(Message::ZoomIn);
        let landed = overlay.transform().apply(center_local);

        assert_abs_diff_eq!(landed.x, 0.0, epsilon = COORD_EPSILON);
        assert_abs_diff_eq!(landed.y, 0.0, epsilon = COORD_EPSILON);
    }

    #[test]
    fn wheel_zoom_is_anchored_at_pointer() {
        let mut overlay = open_overlay();
        let pointer = Point::new(600.0, 100.0);
        // Surface center is (400, 300).
        let anchor = Vector::new(200.0, -200.0);
        let local = overlay.transform().invert(anchor);

        let effect = overlay.handle(Message::Wheel {
            delta_y: -120.0,
            position: pointer,
        });
        assert!(matches!(effect, Effect::TransformChanged(_)));
        assert_abs_diff_eq!(overlay.transform().scale, 1.5, epsilon = 1e-5);

        let landed = overlay.transform().apply(local);
        assert_abs_diff_eq!(landed.x, anchor.x, epsilon = COORD_EPSILON);
        assert_abs_diff_eq!(landed.y, anchor.y, epsilon = COORD_EPSILON);
    }

    #[test]
    fn rotation_accumulates() {
        let mut overlay = open_overlay();
        for _ in 0..5 {
            overlay.handle(Message::RotateRight);
        }
        assert_abs_diff_eq!(overlay.transform().rotation.degrees(), 450.0);
        overlay.handle(Message::RotateLeft);
        assert_abs_diff_eq!(overlay.transform().rotation.degrees(), 360.0);
    }

    #[test]
    fn reset_returns_to_identity() {
        let mut overlay = open_overlay();
        overlay.handle(Message::ZoomIn);
        overlay.handle(Message::RotateLeft);
        overlay.handle(Message::DragStart(Point::new(0.0, 0.0)));
        overlay.handle(Message::DragMove(Point::new(5.0, 5.0)));

        overlay.handle(Message::Reset);
        assert!(overlay.transform().is_identity());
        assert!(!overlay.is_dragging());
    }

    #[test]
    fn drag_translates_by_pointer_delta() {
        let mut overlay = open_overlay();
        assert_eq!(
            overlay.handle(Message::DragStart(Point::new(100.0, 100.0))),
            Effect::DragStarted
        );
        overlay.handle(Message::DragMove(Point::new(130.0, 80.0)));
        assert_eq!(overlay.transform().translate, Vector::new(30.0, -20.0));

        assert_eq!(overlay.handle(Message::DragEnd), Effect::DragEnded);
        assert_eq!(overlay.handle(Message::DragEnd), Effect::None);
        assert_eq!(
            overlay.handle(Message::DragMove(Point::new(0.0, 0.0))),
            Effect::None
        );
    }

    #[test]
    fn when_zoomed_policy_blocks_drag_at_identity() {
        let settings = Config {
            drag_policy: Some(DragPolicy::WhenZoomed),
            ..Config::default()
        }
        .settings();
        let mut overlay = PreviewOverlay::new(settings);
        overlay.handle(Message::Open {
            source: "a.png".into(),
            origin: None,
        });

        assert_eq!(
            overlay.handle(Message::DragStart(Point::new(0.0, 0.0))),
            Effect::None
        );
        overlay.handle(Message::ZoomIn);
        assert_eq!(
            overlay.handle(Message::DragStart(Point::new(0.0, 0.0))),
            Effect::DragStarted
        );
    }

    #[test]
    fn double_click_toggles_zoom_at_pointer() {
        let mut overlay = open_overlay();
        let pointer = Point::new(500.0, 350.0);
        let anchor = Vector::new(100.0, 50.0);
        let local = overlay.transform().invert(anchor);

        overlay.handle(Message::DoubleClick(pointer));
        assert_abs_diff_eq!(overlay.transform().scale, 2.0);
        let landed = overlay.transform().apply(local);
        assert_abs_diff_eq!(landed.x, anchor.x, epsilon = COORD_EPSILON);
        assert_abs_diff_eq!(landed.y, anchor.y, epsilon = COORD_EPSILON);

        overlay.handle(Message::DoubleClick(pointer));
        assert_abs_diff_eq!(overlay.transform().scale, 1.0);
        assert_eq!(overlay.transform().translate, Vector::ZERO);
    }

    #[test]
    fn two_quick_clicks_count_as_double_click() {
        let mut overlay = open_overlay();
        assert_eq!(overlay.handle(Message::Click(Point::new(400.0, 300.0))), Effect::None);

        let effect = overlay.handle(Message::Click(Point::new(400.0, 300.0)));
        assert!(matches!(effect, Effect::TransformChanged(_)));
        assert_abs_diff_eq!(overlay.transform().scale, 2.0);
    }

    #[test]
    fn navigation_is_delegated() {
        let mut overlay = open_overlay();
        assert_eq!(overlay.handle(Message::Next), Effect::NavigateNext);
        assert_eq!(overlay.handle(Message::Previous), Effect::NavigatePrevious);
    }

    #[test]
    fn retarget_resets_transform_and_keeps_origin() {
        let mut overlay = open_overlay();
        overlay.handle(Message::ZoomIn);
        overlay.handle(Message::RotateRight);

        let effect = overlay.retarget("b.png");
        assert_eq!(
            effect,
            Effect::SourceChanged {
                source: "b.png".into()
            }
        );
        assert_eq!(overlay.active_source(), Some("b.png"));
        assert!(overlay.transform().is_identity());
        assert_eq!(overlay.origin(), Some(Point::new(40.0, 30.0)));
    }

    #[test]
    fn retarget_is_ignored_when_closed() {
        let mut overlay = PreviewOverlay::default();
        assert_eq!(overlay.retarget("b.png"), Effect::None);
        assert!(overlay.active_source().is_none());
    }

    #[test]
    fn animation_frame_follows_phase() {
        let mut overlay = open_overlay();
        assert!(overlay.animation_frame(0.0).is_some());

        overlay.handle(Message::Close);
        let frame = overlay.animation_frame(1.0).expect("closing frame");
        assert_abs_diff_eq!(frame.opacity, 0.0);

        overlay.handle(Message::AfterClose);
        assert!(overlay.animation_frame(0.5).is_none());
    }

    #[test]
    fn effects_map_to_events() {
        assert_eq!(Effect::None.to_event(), None);
        assert_eq!(Effect::NavigateNext.to_event(), None);
        assert_eq!(
            Effect::Ignored(Fault::InvalidNavigation).to_event(),
            Some(PreviewEvent::Ignored(Fault::InvalidNavigation))
        );
    }
}
