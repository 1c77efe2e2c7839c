//! Core types for the togglekit switch control.
//!
//! This crate provides the leaf primitives the control is built from:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Insets`]
//! - Color representation: [`Color`]
//! - Easing curves for animated settling: [`Easing`], [`deceleration_curve`]
//! - Pointer input: [`Event`]
//! - Rendering seam: [`Renderer`], with [`RecordingRenderer`] for tests

mod color;
mod easing;
mod error;
mod event;
mod geometry;
pub mod render;

pub use color::{Color, ColorParseError};
pub use easing::{deceleration_curve, Easing};
pub use error::{Error, Result};
pub use event::{Event, MouseButton, PointerId, PointerType};
pub use geometry::{Insets, Point, Rect, Size};
pub use render::{DrawCommand, Drawable, DrawableState, RecordingRenderer, Renderer};
