//! Decelerating easing curves for the cursor settle animation.
//!
//! Every curve here maps `0.0 -> 0.0` and `1.0 -> 1.0`, is monotonically
//! non-decreasing, and has zero slope at `t = 1.0`, so the cursor arrives at
//! its boundary without a visible jolt.

use serde::{Deserialize, Serialize};

/// Quadratic deceleration: `1 - (1 - t)^2`.
///
/// Input is clamped to `[0.0, 1.0]`.
///
/// # Examples
///
/// ```
/// use togglekit_core::deceleration_curve;
///
/// assert_eq!(deceleration_curve(0.0), 0.0);
/// assert_eq!(deceleration_curve(0.5), 0.75);
/// assert_eq!(deceleration_curve(1.0), 1.0);
/// ```
#[must_use]
pub fn deceleration_curve(t: f64) -> f64 {
    Easing::Decelerate.apply(t)
}

/// Selectable ease-out curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Quadratic ease out
    #[default]
    Decelerate,
    /// Cubic ease out
    CubicOut,
    /// Quartic ease out (fastest start)
    QuartOut,
}

impl Easing {
    /// Apply the curve to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let remaining = 1.0 - t;
        match self {
            Self::Decelerate => remaining.mul_add(-remaining, 1.0),
            Self::CubicOut => 1.0 - remaining.powi(3),
            Self::QuartOut => 1.0 - remaining.powi(4),
        }
    }
}
