//! Switch configuration: defaults, normalisation and YAML loading.
//!
//! Invalid values are normalised rather than rejected. Every correction is
//! logged at `warn` level so a bad config file is visible without being fatal.

use crate::state::ToggleState;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use togglekit_core::{Color, Easing};

/// Cursor settle animation length used when none (or a negative one) is given.
pub const DEFAULT_MOVE_DURATION_MS: i64 = 200;

/// Hit-area margin around the cursor.
pub const DEFAULT_TOUCH_EXPAND: f32 = 20.0;

/// Horizontal travel a press must exceed before it becomes a drag.
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

/// Errors from loading a [`SwitchConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML syntax or schema error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// The config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Construction-time settings for a [`crate::SwitchButton`].
///
/// ```
/// use togglekit::{SwitchConfig, ToggleState};
///
/// let config = SwitchConfig::from_yaml(
///     "move_duration_ms: 120\nselected_color: \"#00aa55\"\ninitial_state: off\n",
/// )
/// .unwrap();
/// assert_eq!(config.move_duration_ms, 120);
/// assert_eq!(config.initial_state, ToggleState::Off);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwitchConfig {
    /// Length of the settle animation in milliseconds.
    pub move_duration_ms: i64,
    /// Track fill on the ON side of the cursor.
    pub selected_color: Color,
    /// Track fill on the OFF side of the cursor.
    pub unselected_color: Color,
    /// Track width; `None` means "as wide as the cursor".
    pub track_width: Option<f32>,
    /// Gap between the track edge and the cursor, on every side.
    pub track_padding: f32,
    /// Extra hit area around the cursor.
    pub cursor_touch_expand: f32,
    /// How far the shadow extends beyond the cursor.
    pub shadow_expand: f32,
    /// Horizontal shadow offset.
    pub shadow_x_diff: f32,
    /// Vertical shadow offset.
    pub shadow_y_diff: f32,
    /// State before any interaction.
    pub initial_state: ToggleState,
    /// Drag threshold in pixels.
    pub touch_slop: f32,
    /// Settle curve.
    pub easing: Easing,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            move_duration_ms: DEFAULT_MOVE_DURATION_MS,
            selected_color: Color::from_rgb8(252, 87, 119),
            unselected_color: Color::from_rgb8(238, 238, 238),
            track_width: None,
            track_padding: 0.0,
            cursor_touch_expand: DEFAULT_TOUCH_EXPAND,
            shadow_expand: 0.0,
            shadow_x_diff: 0.0,
            shadow_y_diff: 0.0,
            initial_state: ToggleState::default(),
            touch_slop: DEFAULT_TOUCH_SLOP,
            easing: Easing::default(),
        }
    }
}

impl SwitchConfig {
    /// Parse and normalise a YAML document.
    ///
    /// Missing keys take their defaults; unknown keys are an error.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        Ok(config.normalized())
    }

    /// Read, parse and normalise a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Serialise to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Replace out-of-range values with their defaults.
    ///
    /// - negative duration -> [`DEFAULT_MOVE_DURATION_MS`]
    /// - negative `shadow_expand` -> `0`
    /// - negative `cursor_touch_expand` -> [`DEFAULT_TOUCH_EXPAND`]
    /// - negative `touch_slop` -> [`DEFAULT_TOUCH_SLOP`]
    /// - negative `track_padding` -> `0`
    /// - non-positive `track_width` -> `None`
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.move_duration_ms = normalize_duration(self.move_duration_ms);
        self.shadow_expand = non_negative("shadow_expand", self.shadow_expand, 0.0);
        self.cursor_touch_expand = non_negative(
            "cursor_touch_expand",
            self.cursor_touch_expand,
            DEFAULT_TOUCH_EXPAND,
        );
        self.touch_slop = non_negative("touch_slop", self.touch_slop, DEFAULT_TOUCH_SLOP);
        self.track_padding = non_negative("track_padding", self.track_padding, 0.0);
        self.shadow_x_diff = finite_or_zero("shadow_x_diff", self.shadow_x_diff);
        self.shadow_y_diff = finite_or_zero("shadow_y_diff", self.shadow_y_diff);
        if let Some(width) = self.track_width {
            if !width.is_finite() || width <= 0.0 {
                warn!("track_width {width} is not positive, falling back to cursor width");
                self.track_width = None;
            }
        }
        self
    }

    /// Animation duration as an unsigned millisecond count.
    #[must_use]
    pub fn move_duration(&self) -> u64 {
        u64::try_from(self.move_duration_ms).unwrap_or(DEFAULT_MOVE_DURATION_MS as u64)
    }
}

pub(crate) fn normalize_duration(duration_ms: i64) -> i64 {
    if duration_ms < 0 {
        warn!("move duration {duration_ms}ms is negative, using {DEFAULT_MOVE_DURATION_MS}ms");
        DEFAULT_MOVE_DURATION_MS
    } else {
        duration_ms
    }
}

pub(crate) fn non_negative(name: &str, value: f32, default: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!("{name} {value} is invalid, using {default}");
        default
    }
}

fn finite_or_zero(name: &str, value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        warn!("{name} {value} is not finite, using 0");
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SwitchConfig::default();
        assert_eq!(config.move_duration_ms, 200);
        assert_eq!(config.selected_color, Color::from_rgb8(252, 87, 119));
        assert_eq!(config.unselected_color, Color::from_rgb8(238, 238, 238));
        assert_eq!(config.track_width, None);
        assert_eq!(config.track_padding, 0.0);
        assert_eq!(config.cursor_touch_expand, 20.0);
        assert_eq!(config.shadow_expand, 0.0);
        assert_eq!(config.initial_state, ToggleState::On);
        assert_eq!(config.touch_slop, 8.0);
        assert_eq!(config.easing, Easing::Decelerate);
    }

    #[test]
    fn test_negative_duration_uses_default() {
        let config = SwitchConfig {
            move_duration_ms: -5,
            ..SwitchConfig::default()
        }
        .normalized();
        assert_eq!(config.move_duration_ms, DEFAULT_MOVE_DURATION_MS);
        assert_eq!(config.move_duration(), 200);
    }

    #[test]
    fn test_zero_duration_kept() {
        let config = SwitchConfig {
            move_duration_ms: 0,
            ..SwitchConfig::default()
        }
        .normalized();
        assert_eq!(config.move_duration(), 0);
    }

    #[test]
    fn test_negative_lengths_normalised() {
        let config = SwitchConfig {
            shadow_expand: -3.0,
            cursor_touch_expand: -1.0,
            touch_slop: f32::NAN,
            track_padding: -2.0,
            track_width: Some(-10.0),
            shadow_x_diff: f32::INFINITY,
            ..SwitchConfig::default()
        }
        .normalized();
        assert_eq!(config.shadow_expand, 0.0);
        assert_eq!(config.cursor_touch_expand, DEFAULT_TOUCH_EXPAND);
        assert_eq!(config.touch_slop, DEFAULT_TOUCH_SLOP);
        assert_eq!(config.track_padding, 0.0);
        assert_eq!(config.track_width, None);
        assert_eq!(config.shadow_x_diff, 0.0);
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = SwitchConfig::from_yaml(
            r##"
move_duration_ms: 350
selected_color: "#00ff00"
track_width: 64
track_padding: 2
initial_state: off
easing: cubic_out
"##,
        )
        .unwrap();
        assert_eq!(config.move_duration_ms, 350);
        assert_eq!(config.selected_color, Color::from_rgb8(0, 255, 0));
        assert_eq!(config.unselected_color, Color::from_rgb8(238, 238, 238));
        assert_eq!(config.track_width, Some(64.0));
        assert_eq!(config.track_padding, 2.0);
        assert_eq!(config.initial_state, ToggleState::Off);
        assert_eq!(config.easing, Easing::CubicOut);
    }

    #[test]
    fn test_from_yaml_normalises() {
        let config = SwitchConfig::from_yaml("move_duration_ms: -1\nshadow_expand: -4\n").unwrap();
        assert_eq!(config.move_duration_ms, DEFAULT_MOVE_DURATION_MS);
        assert_eq!(config.shadow_expand, 0.0);
    }

    #[test]
    fn test_from_yaml_empty_document_is_default() {
        let config = SwitchConfig::from_yaml("{}").unwrap();
        assert_eq!(config, SwitchConfig::default());
    }

    #[test]
    fn test_from_yaml_rejects_unknown_key() {
        let err = SwitchConfig::from_yaml("colour: red\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
        assert!(err.to_string().contains("YAML error"));
    }

    #[test]
    fn test_from_yaml_rejects_bad_color() {
        assert!(SwitchConfig::from_yaml("selected_color: \"#zz0000\"\n").is_err());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SwitchConfig::from_path("/nonexistent/togglekit.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_yaml_survives_reload() {
        let config = SwitchConfig {
            move_duration_ms: 90,
            track_width: Some(48.0),
            initial_state: ToggleState::Off,
            ..SwitchConfig::default()
        };
        let yaml = config.to_yaml().unwrap();
        assert_eq!(SwitchConfig::from_yaml(&yaml).unwrap(), config);
    }
}
