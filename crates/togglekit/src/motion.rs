//! Cursor position, travel boundaries and the settle animation.
//!
//! Animation progress is recomputed from the timestamp passed to
//! [`MotionEngine::tick`] rather than accumulated per frame, so dropped frames
//! never cause drift: sampling at any time yields the position for that time.

use crate::state::ToggleState;
use togglekit_core::Easing;

/// Left and right limits of cursor travel.
///
/// Invariant: `left <= right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundaries {
    left: f32,
    right: f32,
}

impl Boundaries {
    /// Create boundaries, raising `right` to `left` if it would fall short.
    #[must_use]
    pub fn new(left: f32, right: f32) -> Self {
        Self {
            left,
            right: right.max(left),
        }
    }

    /// Boundaries for a cursor inside a padded track.
    ///
    /// When the cursor (plus padding) is at least as wide as the track both
    /// limits coincide and the cursor cannot travel.
    #[must_use]
    pub fn compute(track_width: f32, cursor_width: f32, track_padding: f32, padding_left: f32) -> Self {
        let left = padding_left + track_padding;
        let right = padding_left + track_width - cursor_width - track_padding;
        Self::new(left, right)
    }

    /// Left limit (OFF position).
    #[must_use]
    pub const fn left(&self) -> f32 {
        self.left
    }

    /// Right limit (ON position).
    #[must_use]
    pub const fn right(&self) -> f32 {
        self.right
    }

    /// Midpoint used to snap a released drag.
    #[must_use]
    pub fn midpoint(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    /// Length of travel between the limits.
    #[must_use]
    pub fn travel(&self) -> f32 {
        self.right - self.left
    }

    /// Whether the cursor has no room to move.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.right <= self.left
    }

    /// Clamp `position` into `[left, right]`.
    #[must_use]
    pub fn clamp(&self, position: f32) -> f32 {
        position.max(self.left).min(self.right)
    }

    /// Resting position for `state`.
    #[must_use]
    pub const fn position_for(&self, state: ToggleState) -> f32 {
        match state {
            ToggleState::On => self.right,
            ToggleState::Off => self.left,
        }
    }

    /// State nearest to `position`: `< midpoint` is OFF, `>= midpoint` is ON.
    #[must_use]
    pub fn nearest_state(&self, position: f32) -> ToggleState {
        ToggleState::from(position >= self.midpoint())
    }
}

/// Free-function form of [`Boundaries::compute`].
#[must_use]
pub fn compute_boundaries(
    track_width: f32,
    cursor_width: f32,
    track_padding: f32,
    padding_left: f32,
) -> Boundaries {
    Boundaries::compute(track_width, cursor_width, track_padding, padding_left)
}

/// One in-flight settle animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRun {
    /// Position at the start of the run
    pub from: f32,
    /// Position the run ends on
    pub to: f32,
    /// Start timestamp; `None` until the first tick pins it
    pub start_ms: Option<u64>,
    /// Run length
    pub duration_ms: u64,
}

impl AnimationRun {
    /// Position at `now_ms`, or `None` once the run has completed.
    fn sample(&self, now_ms: u64, easing: Easing) -> Option<f32> {
        let elapsed = self
            .start_ms
            .map_or(0, |start| now_ms.saturating_sub(start));
        if elapsed >= self.duration_ms {
            return None;
        }
        let t = elapsed as f64 / self.duration_ms as f64;
        let eased = easing.apply(t);
        let from = f64::from(self.from);
        let to = f64::from(self.to);
        Some((to - from).mul_add(eased, from) as f32)
    }
}

/// Owner of the cursor's horizontal position.
#[derive(Debug, Clone)]
pub struct MotionEngine {
    position: f32,
    boundaries: Option<Boundaries>,
    run: Option<AnimationRun>,
    easing: Easing,
}

impl Default for MotionEngine {
    fn default() -> Self {
        Self::new(Easing::default())
    }
}

impl MotionEngine {
    /// Create an engine at position zero with no boundaries yet.
    #[must_use]
    pub const fn new(easing: Easing) -> Self {
        Self {
            position: 0.0,
            boundaries: None,
            run: None,
            easing,
        }
    }

    /// Current cursor position.
    #[must_use]
    pub const fn position(&self) -> f32 {
        self.position
    }

    /// Boundaries, once layout has supplied them.
    #[must_use]
    pub const fn boundaries(&self) -> Option<Boundaries> {
        self.boundaries
    }

    /// The in-flight run, if any.
    #[must_use]
    pub const fn run(&self) -> Option<&AnimationRun> {
        self.run.as_ref()
    }

    /// Whether a run is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Active settle curve.
    #[must_use]
    pub const fn easing(&self) -> Easing {
        self.easing
    }

    /// Change the settle curve for subsequent samples.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Install new boundaries. Drops any run and re-clamps the position.
    pub fn set_boundaries(&mut self, boundaries: Boundaries) {
        self.boundaries = Some(boundaries);
        self.run = None;
        self.position = boundaries.clamp(self.position);
    }

    /// Clamp into the current boundaries (identity before layout).
    #[must_use]
    pub fn clamp(&self, position: f32) -> f32 {
        self.boundaries.map_or(position, |b| b.clamp(position))
    }

    /// Place the cursor immediately, abandoning any run.
    pub fn jump_to(&mut self, position: f32) {
        self.run = None;
        self.position = self.clamp(position);
    }

    /// Move by `delta`, saturating at the boundaries. Returns the new position.
    pub fn drag_by(&mut self, delta: f32) -> f32 {
        self.position = self.clamp(self.position + delta);
        self.position
    }

    /// Start a run at `now_ms`, superseding any run already in flight.
    ///
    /// A run with `from == to` or zero duration completes immediately.
    pub fn start_animation(&mut self, from: f32, to: f32, duration_ms: u64, now_ms: u64) {
        self.begin(from, to, duration_ms, Some(now_ms));
    }

    /// Start a run whose clock begins at the next [`tick`](Self::tick).
    ///
    /// For callers that have no timestamp at hand, e.g. a programmatic state
    /// change between frames.
    pub fn queue_animation(&mut self, from: f32, to: f32, duration_ms: u64) {
        self.begin(from, to, duration_ms, None);
    }

    fn begin(&mut self, from: f32, to: f32, duration_ms: u64, start_ms: Option<u64>) {
        let from = self.clamp(from);
        let to = self.clamp(to);
        if from == to || duration_ms == 0 {
            self.run = None;
            self.position = to;
            return;
        }
        self.position = from;
        self.run = Some(AnimationRun {
            from,
            to,
            start_ms,
            duration_ms,
        });
    }

    /// Stop the run, holding the position it had reached at `now_ms`.
    pub fn cancel_animation(&mut self, now_ms: u64) {
        if let Some(run) = self.run.take() {
            let held = run.sample(now_ms, self.easing).unwrap_or(run.to);
            self.position = self.clamp(held);
        }
    }

    /// Advance to `now_ms`. Returns the position and whether a run is still going.
    pub fn tick(&mut self, now_ms: u64) -> (f32, bool) {
        let Some(run) = self.run.as_mut() else {
            return (self.position, false);
        };
        if run.start_ms.is_none() {
            run.start_ms = Some(now_ms);
        }
        let run = *run;

        match run.sample(now_ms, self.easing) {
            Some(position) => {
                self.position = self.clamp(position);
                (self.position, true)
            }
            None => {
                self.run = None;
                self.position = run.to;
                (run.to, false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn engine(left: f32, right: f32) -> MotionEngine {
        let mut engine = MotionEngine::default();
        engine.set_boundaries(Boundaries::new(left, right));
        engine
    }

    // ===== Boundaries =====

    #[test]
    fn test_compute_boundaries_formula() {
        let b = compute_boundaries(100.0, 40.0, 4.0, 10.0);
        assert_eq!(b.left(), 14.0);
        assert_eq!(b.right(), 10.0 + 100.0 - 40.0 - 4.0);
    }

    #[test]
    fn test_boundaries_degenerate_when_cursor_fills_track() {
        let b = compute_boundaries(40.0, 40.0, 0.0, 0.0);
        assert_eq!(b.left(), b.right());
        assert!(b.is_degenerate());

        let b = compute_boundaries(40.0, 40.0, 5.0, 0.0);
        assert_eq!(b.left(), 5.0);
        assert_eq!(b.right(), 5.0);
    }

    #[test]
    fn test_boundaries_position_for_state() {
        let b = Boundaries::new(0.0, 100.0);
        assert_eq!(b.position_for(ToggleState::Off), 0.0);
        assert_eq!(b.position_for(ToggleState::On), 100.0);
        assert_eq!(b.travel(), 100.0);
    }

    #[test]
    fn test_nearest_state_midpoint_goes_on() {
        let b = Boundaries::new(0.0, 100.0);
        assert_eq!(b.midpoint(), 50.0);
        assert_eq!(b.nearest_state(49.99), ToggleState::Off);
        assert_eq!(b.nearest_state(50.0), ToggleState::On);
    }

    #[test]
    fn test_nearest_state_uses_offset_midpoint() {
        let b = Boundaries::new(20.0, 60.0);
        assert_eq!(b.nearest_state(39.0), ToggleState::Off);
        assert_eq!(b.nearest_state(40.0), ToggleState::On);
    }

    // ===== Clamping and dragging =====

    #[test]
    fn test_clamp_identity_before_layout() {
        let engine = MotionEngine::default();
        assert_eq!(engine.clamp(-500.0), -500.0);
    }

    #[test]
    fn test_drag_saturates() {
        let mut engine = engine(0.0, 100.0);
        assert_eq!(engine.drag_by(30.0), 30.0);
        assert_eq!(engine.drag_by(500.0), 100.0);
        assert_eq!(engine.drag_by(-1000.0), 0.0);
    }

    #[test]
    fn test_set_boundaries_reclamps_and_drops_run() {
        let mut engine = engine(0.0, 100.0);
        engine.jump_to(90.0);
        engine.start_animation(90.0, 0.0, 200, 0);
        engine.set_boundaries(Boundaries::new(0.0, 50.0));
        assert!(!engine.is_animating());
        assert_eq!(engine.position(), 50.0);
    }

    // ===== Animation =====

    #[test]
    fn test_tick_without_run() {
        let mut engine = engine(0.0, 100.0);
        engine.jump_to(42.0);
        assert_eq!(engine.tick(1_000), (42.0, false));
    }

    #[test]
    fn test_animation_completes_exactly() {
        let mut engine = engine(0.0, 100.0);
        engine.start_animation(0.0, 100.0, 200, 1_000);
        assert_eq!(engine.tick(1_200), (100.0, false));
        assert!(!engine.is_animating());
        assert!(engine.run().is_none());
    }

    #[test]
    fn test_animation_midway_strictly_between() {
        let mut engine = engine(0.0, 100.0);
        engine.start_animation(0.0, 100.0, 200, 1_000);
        let (position, running) = engine.tick(1_100);
        assert!(running);
        assert!(position > 0.0 && position < 100.0);
        // Decelerating: ahead of linear at the halfway mark.
        assert_eq!(position, 75.0);
    }

    #[test]
    fn test_animation_backwards() {
        let mut engine = engine(0.0, 100.0);
        engine.start_animation(100.0, 0.0, 100, 0);
        let (position, running) = engine.tick(50);
        assert!(running);
        assert!(position > 0.0 && position < 100.0);
        assert_eq!(engine.tick(100), (0.0, false));
    }

    #[test]
    fn test_tick_late_frame_no_drift() {
        let mut a = engine(0.0, 100.0);
        let mut b = engine(0.0, 100.0);
        a.start_animation(0.0, 100.0, 200, 0);
        b.start_animation(0.0, 100.0, 200, 0);

        for now in (0..=120).step_by(16) {
            a.tick(now);
        }
        let (pa, _) = a.tick(130);
        let (pb, _) = b.tick(130);
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_tick_before_start_clamps_elapsed() {
        let mut engine = engine(0.0, 100.0);
        engine.start_animation(10.0, 90.0, 200, 5_000);
        assert_eq!(engine.tick(4_000), (10.0, true));
    }

    #[test]
    fn test_same_from_and_to_resolves_immediately() {
        let mut engine = engine(0.0, 100.0);
        engine.start_animation(40.0, 40.0, 200, 0);
        assert!(!engine.is_animating());
        assert_eq!(engine.position(), 40.0);
        assert_eq!(engine.tick(1), (40.0, false));
    }

    #[test]
    fn test_zero_duration_resolves_immediately() {
        let mut engine = engine(0.0, 100.0);
        engine.start_animation(0.0, 100.0, 0, 0);
        assert!(!engine.is_animating());
        assert_eq!(engine.position(), 100.0);
    }

    #[test]
    fn test_new_animation_supersedes_old() {
        let mut engine = engine(0.0, 100.0);
        engine.start_animation(0.0, 100.0, 200, 0);
        engine.tick(100);
        engine.start_animation(engine.position(), 0.0, 200, 100);
        let run = engine.run().copied().unwrap();
        assert_eq!(run.to, 0.0);
        assert_eq!(run.from, 75.0);
        assert_eq!(engine.tick(300), (0.0, false));
    }

    #[test]
    fn test_cancel_holds_interpolated_position() {
        let mut engine = engine(0.0, 100.0);
        engine.start_animation(0.0, 100.0, 200, 0);
        engine.cancel_animation(100);
        assert!(!engine.is_animating());
        assert_eq!(engine.position(), 75.0);
        assert_eq!(engine.tick(1_000), (75.0, false));
    }

    #[test]
    fn test_cancel_after_duration_holds_target() {
        let mut engine = engine(0.0, 100.0);
        engine.start_animation(0.0, 100.0, 200, 0);
        engine.cancel_animation(500);
        assert_eq!(engine.position(), 100.0);
    }

    #[test]
    fn test_queued_animation_starts_on_first_tick() {
        let mut engine = engine(0.0, 100.0);
        engine.queue_animation(0.0, 100.0, 200);
        assert_eq!(engine.run().unwrap().start_ms, None);

        assert_eq!(engine.tick(10_000), (0.0, true));
        assert_eq!(engine.run().unwrap().start_ms, Some(10_000));
        assert_eq!(engine.tick(10_100), (75.0, true));
        assert_eq!(engine.tick(10_200), (100.0, false));
    }

    #[test]
    fn test_start_animation_clamps_endpoints() {
        let mut engine = engine(0.0, 100.0);
        engine.start_animation(-50.0, 500.0, 100, 0);
        let run = engine.run().copied().unwrap();
        assert_eq!(run.from, 0.0);
        assert_eq!(run.to, 100.0);
    }

    #[test]
    fn test_easing_switch() {
        let mut engine = engine(0.0, 100.0);
        engine.set_easing(Easing::CubicOut);
        assert_eq!(engine.easing(), Easing::CubicOut);
        engine.start_animation(0.0, 100.0, 200, 0);
        let (position, _) = engine.tick(100);
        assert_eq!(position, 87.5);
    }

    proptest! {
        #[test]
        fn prop_drag_stays_in_bounds(
            left in -100.0f32..100.0,
            travel in 0.0f32..300.0,
            deltas in proptest::collection::vec(-500.0f32..500.0, 1..40),
        ) {
            let mut engine = engine(left, left + travel);
            for delta in deltas {
                let position = engine.drag_by(delta);
                prop_assert!(position >= left && position <= left + travel);
            }
        }

        #[test]
        fn prop_animation_stays_between_endpoints(
            from in 0.0f32..100.0,
            to in 0.0f32..100.0,
            duration in 1u64..1_000,
            at in 0u64..2_000,
        ) {
            let mut engine = engine(0.0, 100.0);
            engine.start_animation(from, to, duration, 0);
            let (position, running) = engine.tick(at);
            prop_assert!(position >= from.min(to) && position <= from.max(to));
            prop_assert_eq!(running, at < duration && from != to);
        }

        #[test]
        fn prop_animation_monotonic(
            from in 0.0f32..100.0,
            to in 0.0f32..100.0,
            t1 in 0u64..300,
            t2 in 0u64..300,
        ) {
            let (early, late) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            let mut a = engine(0.0, 100.0);
            a.start_animation(from, to, 250, 0);
            let mut b = a.clone();
            let (pa, _) = a.tick(early);
            let (pb, _) = b.tick(late);
            if to >= from {
                prop_assert!(pa <= pb);
            } else {
                prop_assert!(pa >= pb);
            }
        }
    }
}
