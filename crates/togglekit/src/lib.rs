//! Draggable ON/OFF toggle switch.
//!
//! The control is split into three cooperating parts:
//! - [`MotionEngine`]: the cursor's clamped position and its settle animation
//! - [`GestureMachine`]: turns raw pointer input into taps and drags
//! - [`SwitchButton`]: the public facade owning the logical [`ToggleState`]
//!
//! The host drives everything from one UI thread: it forwards pointer
//! events, calls [`SwitchButton::tick`] once per frame while a redraw is
//! needed, and paints through a [`togglekit_core::Renderer`].
//!
//! ```
//! use togglekit::{SwitchButton, SwitchConfig, ToggleState};
//! use togglekit_core::{Insets, Size};
//!
//! let config = SwitchConfig {
//!     initial_state: ToggleState::Off,
//!     track_width: Some(60.0),
//!     ..SwitchConfig::default()
//! };
//! let mut switch = SwitchButton::new(config).with_cursor_drawable(Size::new(30.0, 30.0));
//! switch.layout(Insets::ZERO).unwrap();
//!
//! // Tap the cursor.
//! switch.on_pointer_down(10.0, 10.0, 0);
//! switch.on_pointer_up(16);
//! assert_eq!(switch.state(), ToggleState::On);
//!
//! // The cursor catches up over the configured duration.
//! while switch.tick(16 + 250) {}
//! assert_eq!(switch.cursor_position(), 30.0);
//! ```

pub mod config;
pub mod gesture;
pub mod layout;
pub mod motion;
mod paint;
mod state;
pub mod switch;

pub use config::{ConfigError, SwitchConfig};
pub use gesture::{GestureMachine, GestureOwnership, GesturePhase, GestureSession, Resolution};
pub use layout::SwitchGeometry;
pub use motion::{compute_boundaries, AnimationRun, Boundaries, MotionEngine};
pub use state::ToggleState;
pub use switch::{EventResponse, SwitchButton};
