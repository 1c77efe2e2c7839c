//! Tap-versus-drag classification for pointer input on the cursor.
//!
//! A press on the cursor opens a [`GestureSession`]. The session stays a tap
//! candidate until a single move exceeds the touch slop, after which every
//! move drags the cursor. On release the session resolves to a
//! [`Resolution`] that the owner applies to its logical state.

use crate::motion::MotionEngine;
use crate::state::ToggleState;
use log::trace;
use togglekit_core::{Point, Rect};

/// Where the machine is in a touch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No session open
    #[default]
    Idle,
    /// Cursor held, still a tap candidate
    Pressed,
    /// Cursor being dragged
    Dragging,
}

/// Request to the host about who owns the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOwnership {
    /// Ancestors (scroll views etc.) must not intercept this gesture
    Claim,
    /// Ancestors may intercept again
    Release,
}

/// Per-touch-sequence record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    /// X of the last processed pointer event
    pub last_x: f32,
    /// Cursor is held
    pub pressed: bool,
    /// Still a tap candidate
    pub clicked: bool,
    /// Slop exceeded, moves drag the cursor
    pub dragging: bool,
}

impl GestureSession {
    const fn open(x: f32) -> Self {
        Self {
            last_x: x,
            pressed: true,
            clicked: true,
            dragging: false,
        }
    }
}

/// Outcome of releasing a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Tap: flip to the given state and animate there
    Tap(ToggleState),
    /// Drag ended exactly on a boundary: adopt its state, nothing to animate
    Settled(ToggleState),
    /// Drag ended mid-track: snap to the nearer boundary
    Snap(ToggleState),
}

impl Resolution {
    /// The resolved logical state.
    #[must_use]
    pub const fn state(self) -> ToggleState {
        match self {
            Self::Tap(state) | Self::Settled(state) | Self::Snap(state) => state,
        }
    }

    /// Whether the cursor still has to travel to its resting place.
    #[must_use]
    pub const fn animates(self) -> bool {
        !matches!(self, Self::Settled(_))
    }
}

/// Pointer-driven state machine for one switch.
#[derive(Debug, Clone)]
pub struct GestureMachine {
    session: Option<GestureSession>,
    last_x: f32,
    touch_slop: f32,
}

impl GestureMachine {
    /// Create an idle machine with the given drag threshold.
    #[must_use]
    pub const fn new(touch_slop: f32) -> Self {
        Self {
            session: None,
            last_x: 0.0,
            touch_slop,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> GesturePhase {
        match self.session {
            None => GesturePhase::Idle,
            Some(GestureSession { dragging: true, .. }) => GesturePhase::Dragging,
            Some(_) => GesturePhase::Pressed,
        }
    }

    /// The open session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// X of the most recent pointer-down or move, on or off the cursor.
    #[must_use]
    pub const fn last_x(&self) -> f32 {
        self.last_x
    }

    /// Whether the cursor is currently held.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        matches!(self.session, Some(GestureSession { pressed: true, .. }))
    }

    /// Drag threshold in pixels.
    #[must_use]
    pub const fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    /// Change the drag threshold. Takes effect on the next move.
    pub fn set_touch_slop(&mut self, touch_slop: f32) {
        self.touch_slop = touch_slop;
    }

    /// Handle a press at `point`.
    ///
    /// Opens a session only when `point` lies inside `hit_rect`; in that case
    /// any in-flight animation is stopped where it stands at `now_ms` and the
    /// host is asked to route the rest of the gesture here.
    pub fn pointer_down(
        &mut self,
        point: Point,
        hit_rect: Rect,
        motion: &mut MotionEngine,
        now_ms: u64,
    ) -> Option<GestureOwnership> {
        self.last_x = point.x;
        if !hit_rect.contains_point(&point) {
            self.session = None;
            return None;
        }

        motion.cancel_animation(now_ms);
        self.session = Some(GestureSession::open(point.x));
        Some(GestureOwnership::Claim)
    }

    /// Handle a move to `x`. Returns `true` if the cursor moved.
    ///
    /// The move that first crosses the slop starts the drag and moves the
    /// cursor by its own delta; earlier sub-slop moves are discarded.
    pub fn pointer_move(&mut self, x: f32, motion: &mut MotionEngine) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let delta = x - session.last_x;
        session.last_x = x;
        self.last_x = x;

        if !session.dragging {
            if delta.abs() > self.touch_slop {
                session.dragging = true;
                session.clicked = false;
            } else {
                return false;
            }
        }

        let before = motion.position();
        let after = motion.drag_by(delta);
        trace!("drag {delta:+} -> cursor at {after}");
        after != before
    }

    /// Handle release (or cancel) and close the session.
    ///
    /// Returns `None` if no session was open.
    pub fn pointer_up(&mut self, current: ToggleState, motion: &MotionEngine) -> Option<Resolution> {
        let session = self.session.take()?;

        if session.clicked {
            return Some(Resolution::Tap(current.opposite()));
        }

        let position = motion.position();
        let Some(bounds) = motion.boundaries() else {
            return Some(Resolution::Settled(current));
        };

        let resolution = if position == bounds.left() {
            Resolution::Settled(ToggleState::Off)
        } else if position == bounds.right() {
            Resolution::Settled(ToggleState::On)
        } else {
            Resolution::Snap(bounds.nearest_state(position))
        };
        Some(resolution)
    }

    /// Drop any open session without resolving it.
    pub fn reset(&mut self) {
        self.session = None;
    }
}

impl Default for GestureMachine {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TOUCH_SLOP)
    }
}
