//! The public switch control.

use crate::config::{self, SwitchConfig};
use crate::gesture::{GestureMachine, GestureOwnership, GesturePhase, Resolution};
use crate::layout::SwitchGeometry;
use crate::motion::{Boundaries, MotionEngine};
use crate::paint::{self, Frame};
use crate::state::ToggleState;
use log::{debug, warn};
use togglekit_core::{
    Color, Easing, Error, Event, Insets, MouseButton, Point, PointerId, Renderer, Result, Size,
};

type ChangeCallback = Box<dyn FnMut(ToggleState)>;

/// What the host should do after delivering an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// The control's appearance changed; schedule a frame.
    pub redraw: bool,
    /// Gesture routing request for ancestors, if any.
    pub ownership: Option<GestureOwnership>,
}

impl EventResponse {
    const IGNORED: Self = Self {
        redraw: false,
        ownership: None,
    };

    const fn redraw() -> Self {
        Self {
            redraw: true,
            ownership: None,
        }
    }
}

/// Draggable ON/OFF switch.
///
/// Owns the logical [`ToggleState`] and is the only place it changes. Pointer
/// input flows through the gesture machine into the motion engine; every flip
/// of the state is reported once, synchronously, to the change callback.
pub struct SwitchButton {
    config: SwitchConfig,
    state: ToggleState,
    cursor: Option<Size>,
    shadow: bool,
    padding: Insets,
    geometry: Option<SwitchGeometry>,
    motion: MotionEngine,
    gesture: GestureMachine,
    active_pointer: Option<PointerId>,
    /// A `Claim` was sent and its `Release` is still owed.
    claimed: bool,
    on_change: Option<ChangeCallback>,
}

impl std::fmt::Debug for SwitchButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwitchButton")
            .field("state", &self.state)
            .field("position", &self.motion.position())
            .field("phase", &self.gesture.phase())
            .field("claimed", &self.claimed)
            .field("geometry", &self.geometry)
            .field("has_listener", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for SwitchButton {
    fn default() -> Self {
        Self::new(SwitchConfig::default())
    }
}

impl SwitchButton {
    /// Create a switch from `config`, normalising it first.
    #[must_use]
    pub fn new(config: SwitchConfig) -> Self {
        let config = config.normalized();
        Self {
            state: config.initial_state,
            cursor: None,
            shadow: false,
            padding: Insets::ZERO,
            geometry: None,
            motion: MotionEngine::new(config.easing),
            gesture: GestureMachine::new(config.touch_slop),
            active_pointer: None,
            claimed: false,
            on_change: None,
            config,
        }
    }

    /// Set the cursor drawable's intrinsic size.
    #[must_use]
    pub fn with_cursor_drawable(mut self, size: Size) -> Self {
        self.set_cursor_drawable(size);
        self
    }

    /// Paint a shadow beneath the cursor.
    #[must_use]
    pub fn with_shadow(mut self) -> Self {
        self.set_shadow_visible(true);
        self
    }

    /// Register the change callback, replacing any previous one.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(ToggleState) + 'static) -> Self {
        self.set_on_change(callback);
        self
    }

    // ===== State =====

    /// Current logical state.
    #[must_use]
    pub const fn state(&self) -> ToggleState {
        self.state
    }

    /// Whether the switch is ON.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.state.is_on()
    }

    /// Change the state programmatically.
    ///
    /// No-op if unchanged. Otherwise notifies, then animates the cursor once
    /// the next [`tick`](Self::tick) supplies a clock. Before the first layout
    /// the cursor is simply placed on the right boundary when layout happens.
    pub fn set_state(&mut self, state: ToggleState) {
        if !self.commit_state(state) {
            return;
        }
        if let Some(bounds) = self.motion.boundaries() {
            let duration = self.config.move_duration();
            self.motion
                .queue_animation(self.motion.position(), bounds.position_for(state), duration);
        }
    }

    /// Like [`set_state`](Self::set_state) with the animation clock starting at `now_ms`.
    pub fn set_state_at(&mut self, state: ToggleState, now_ms: u64) {
        if !self.commit_state(state) {
            return;
        }
        if let Some(bounds) = self.motion.boundaries() {
            self.animate_to(bounds.position_for(state), now_ms);
        }
    }

    /// Flip the state programmatically.
    pub fn toggle(&mut self) {
        self.set_state(self.state.opposite());
    }

    /// Register the change callback, replacing any previous one.
    pub fn set_on_change(&mut self, callback: impl FnMut(ToggleState) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Remove the change callback.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    /// Returns `true` if the state actually changed.
    fn commit_state(&mut self, state: ToggleState) -> bool {
        if self.state == state {
            return false;
        }
        debug!("switch state {:?} -> {:?}", self.state, state);
        self.state = state;
        if let Some(callback) = self.on_change.as_mut() {
            callback(state);
        }
        true
    }

    fn animate_to(&mut self, target: f32, now_ms: u64) {
        let duration = self.config.move_duration();
        self.motion
            .start_animation(self.motion.position(), target, duration, now_ms);
    }

    // ===== Frame pump =====

    /// Advance the settle animation. Returns `true` if the host should redraw.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let before = self.motion.position();
        let (position, running) = self.motion.tick(now_ms);
        running || position != before
    }

    /// Whether a settle animation is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.motion.is_animating()
    }

    /// Cursor's left edge, in the control's coordinate space.
    #[must_use]
    pub const fn cursor_position(&self) -> f32 {
        self.motion.position()
    }

    /// Travel limits, once laid out.
    #[must_use]
    pub const fn boundaries(&self) -> Option<Boundaries> {
        self.motion.boundaries()
    }

    /// Read access to the motion engine.
    #[must_use]
    pub const fn motion(&self) -> &MotionEngine {
        &self.motion
    }

    // ===== Pointer input =====

    /// Pointer pressed at `(x, y)`.
    pub fn on_pointer_down(&mut self, x: f32, y: f32, now_ms: u64) -> EventResponse {
        let Some(geometry) = self.geometry else {
            return EventResponse::IGNORED;
        };
        let hit = geometry.touch_rect(self.motion.position(), self.config.cursor_touch_expand);
        match self
            .gesture
            .pointer_down(Point::new(x, y), hit, &mut self.motion, now_ms)
        {
            Some(ownership) => {
                self.claimed = true;
                EventResponse {
                    redraw: true,
                    ownership: Some(ownership),
                }
            }
            None => EventResponse::IGNORED,
        }
    }

    /// Pointer moved to `x`.
    pub fn on_pointer_move(&mut self, x: f32, _now_ms: u64) -> EventResponse {
        if self.gesture.pointer_move(x, &mut self.motion) {
            EventResponse::redraw()
        } else {
            EventResponse::IGNORED
        }
    }

    /// Pointer released.
    pub fn on_pointer_up(&mut self, now_ms: u64) -> EventResponse {
        self.release(now_ms)
    }

    /// Pointer sequence cancelled by the host; resolved like a release.
    pub fn on_pointer_cancel(&mut self, now_ms: u64) -> EventResponse {
        self.release(now_ms)
    }

    /// Resolve the open session, if any, and hand back a claim still owed.
    ///
    /// A re-layout mid-gesture drops the session but not the claim, so the
    /// host still gets its `Release`.
    fn release(&mut self, now_ms: u64) -> EventResponse {
        let resolved = self.gesture.pointer_up(self.state, &self.motion);
        if let Some(resolution) = resolved {
            debug!("gesture resolved: {resolution:?}");
            self.apply(resolution, now_ms);
        }
        let ownership = std::mem::take(&mut self.claimed).then_some(GestureOwnership::Release);
        EventResponse {
            redraw: resolved.is_some(),
            ownership,
        }
    }

    fn apply(&mut self, resolution: Resolution, now_ms: u64) {
        let state = resolution.state();
        self.commit_state(state);
        if !resolution.animates() {
            return;
        }
        if let Some(bounds) = self.motion.boundaries() {
            self.animate_to(bounds.position_for(state), now_ms);
        }
    }

    /// Dispatch a core [`Event`].
    ///
    /// Only the pointer that opened the current session is tracked; other
    /// pointers are ignored until it lifts. Non-left mouse buttons never
    /// start a session.
    pub fn handle_event(&mut self, event: &Event, now_ms: u64) -> EventResponse {
        if let Some(active) = self.active_pointer {
            if event.pointer_id() != active {
                return EventResponse::IGNORED;
            }
        }

        match *event {
            Event::PointerDown {
                pointer_id,
                position,
                button,
                ..
            } => {
                if matches!(button, Some(b) if b != MouseButton::Left) {
                    return EventResponse::IGNORED;
                }
                let response = self.on_pointer_down(position.x, position.y, now_ms);
                if self.gesture.phase() != GesturePhase::Idle {
                    self.active_pointer = Some(pointer_id);
                }
                response
            }
            Event::PointerMove { position, .. } => self.on_pointer_move(position.x, now_ms),
            Event::PointerUp { .. } => {
                self.active_pointer = None;
                self.on_pointer_up(now_ms)
            }
            Event::PointerCancel { .. } => {
                self.active_pointer = None;
                self.on_pointer_cancel(now_ms)
            }
        }
    }

    /// Whether the cursor is held by a pointer.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.gesture.is_pressed()
    }

    /// Current gesture phase.
    #[must_use]
    pub const fn gesture_phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    // ===== Layout and paint =====

    /// Compute the size the control needs inside `padding` without applying it.
    pub fn measure(&self, padding: Insets) -> Result<Size> {
        let cursor = self.cursor.ok_or(Error::NotConfigured)?;
        Ok(SwitchGeometry::compute(&self.config, cursor, padding).measured)
    }

    /// Lay the control out inside `padding` and return its measured size.
    ///
    /// Recomputes the boundaries and rests the cursor on the current state's
    /// boundary, abandoning any animation and gesture in progress. A pointer
    /// that was holding the cursor still gets its `Release` when it lifts.
    pub fn layout(&mut self, padding: Insets) -> Result<Size> {
        let cursor = self.cursor.ok_or(Error::NotConfigured)?;
        Ok(self.apply_layout(cursor, padding))
    }

    fn apply_layout(&mut self, cursor: Size, padding: Insets) -> Size {
        let geometry = SwitchGeometry::compute(&self.config, cursor, padding);

        self.padding = padding;
        self.geometry = Some(geometry);
        self.gesture.reset();
        self.motion.set_boundaries(geometry.boundaries);
        self.motion
            .jump_to(geometry.boundaries.position_for(self.state));
        geometry.measured
    }

    /// Redo the last layout with current settings. No-op before the first one.
    fn relayout(&mut self) {
        if self.geometry.is_none() {
            return;
        }
        if let Some(cursor) = self.cursor {
            self.apply_layout(cursor, self.padding);
        }
    }

    /// Geometry from the last layout.
    #[must_use]
    pub const fn geometry(&self) -> Option<&SwitchGeometry> {
        self.geometry.as_ref()
    }

    /// Whether [`layout`](Self::layout) has run.
    #[must_use]
    pub const fn is_laid_out(&self) -> bool {
        self.geometry.is_some()
    }

    /// Paint the current frame.
    pub fn paint(&self, renderer: &mut dyn Renderer) -> Result<()> {
        let geometry = self.geometry.as_ref().ok_or(Error::NotConfigured)?;
        paint::paint(
            renderer,
            geometry,
            &self.config,
            Frame {
                position: self.motion.position(),
                pressed: self.gesture.is_pressed(),
                has_shadow: self.shadow,
            },
        );
        Ok(())
    }

    // ===== Drawables and config mutators =====

    /// Active (normalised) configuration.
    #[must_use]
    pub const fn config(&self) -> &SwitchConfig {
        &self.config
    }

    /// Set the cursor drawable's intrinsic size. Re-lays out if already laid out.
    pub fn set_cursor_drawable(&mut self, size: Size) {
        if !(size.width.is_finite() && size.height.is_finite())
            || size.width < 0.0
            || size.height < 0.0
        {
            warn!("ignoring cursor drawable with invalid size {size:?}");
            return;
        }
        self.cursor = Some(size);
        self.relayout();
    }

    /// Cursor drawable size, if set.
    #[must_use]
    pub const fn cursor_drawable(&self) -> Option<Size> {
        self.cursor
    }

    /// Show or hide the cursor shadow.
    ///
    /// The shadow is stretched over the cursor bounds grown by
    /// `shadow_expand`, so its own intrinsic size never matters.
    pub fn set_shadow_visible(&mut self, visible: bool) {
        self.shadow = visible;
    }

    /// Whether a shadow is painted beneath the cursor.
    #[must_use]
    pub const fn has_shadow(&self) -> bool {
        self.shadow
    }

    /// Animation length; negative values fall back to the default.
    pub fn set_move_duration_ms(&mut self, duration_ms: i64) {
        self.config.move_duration_ms = config::normalize_duration(duration_ms);
    }

    /// Track fill on the ON side.
    pub fn set_selected_color(&mut self, color: Color) {
        self.config.selected_color = color;
    }

    /// Track fill on the OFF side.
    pub fn set_unselected_color(&mut self, color: Color) {
        self.config.unselected_color = color;
    }

    /// Track width, widened to the cursor width if narrower.
    ///
    /// Requires the cursor drawable.
    pub fn set_track_width(&mut self, width: f32) -> Result<()> {
        let cursor = self.cursor.ok_or(Error::NotConfigured)?;
        let width = if width.is_finite() && width >= cursor.width {
            width
        } else {
            debug!("track width {width} narrower than cursor, widening to {}", cursor.width);
            cursor.width
        };
        self.config.track_width = Some(width);
        self.relayout();
        Ok(())
    }

    /// Gap between track edge and cursor; negative values become zero.
    pub fn set_track_padding(&mut self, padding: f32) {
        self.config.track_padding = config::non_negative("track_padding", padding, 0.0);
        self.relayout();
    }

    /// Extra hit area around the cursor; negative values fall back to the default.
    pub fn set_cursor_touch_expand(&mut self, expand: f32) {
        self.config.cursor_touch_expand =
            config::non_negative("cursor_touch_expand", expand, config::DEFAULT_TOUCH_EXPAND);
    }

    /// Shadow growth around the cursor; negative values are ignored.
    pub fn set_shadow_expand(&mut self, expand: f32) {
        if !expand.is_finite() || expand < 0.0 {
            warn!("ignoring invalid shadow expand {expand}");
            return;
        }
        self.config.shadow_expand = expand;
    }

    /// Horizontal shadow offset.
    pub fn set_shadow_x_diff(&mut self, diff: f32) {
        self.config.shadow_x_diff = diff;
    }

    /// Vertical shadow offset.
    pub fn set_shadow_y_diff(&mut self, diff: f32) {
        self.config.shadow_y_diff = diff;
    }

    /// Drag threshold; negative values fall back to the default.
    pub fn set_touch_slop(&mut self, slop: f32) {
        let slop = config::non_negative("touch_slop", slop, config::DEFAULT_TOUCH_SLOP);
        self.config.touch_slop = slop;
        self.gesture.set_touch_slop(slop);
    }

    /// Settle curve for subsequent animation frames.
    pub fn set_easing(&mut self, easing: Easing) {
        self.config.easing = easing;
        self.motion.set_easing(easing);
    }
}
