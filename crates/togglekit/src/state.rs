//! Logical switch state.

use serde::{Deserialize, Serialize};

/// Binary state of the switch.
///
/// A freshly constructed switch is `On` unless configured otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleState {
    /// Cursor rests on the right boundary
    #[default]
    On,
    /// Cursor rests on the left boundary
    Off,
}

impl ToggleState {
    /// The other state.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    /// Whether this is [`ToggleState::On`].
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl From<bool> for ToggleState {
    fn from(on: bool) -> Self {
        if on {
            Self::On
        } else {
            Self::Off
        }
    }
}

impl From<ToggleState> for bool {
    fn from(state: ToggleState) -> Self {
        state.is_on()
    }
}
