//! Rendering seam between the control and the host's graphics backend.
//!
//! The control never rasterises anything itself. It computes geometry and
//! hands it to a [`Renderer`] supplied by the host.

use crate::{Color, Rect};

/// Image assets the control asks the host to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Drawable {
    /// The draggable cursor (thumb)
    Cursor,
    /// Drop shadow painted beneath the cursor
    Shadow,
}

/// Visual sub-state of a drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawableState {
    /// Resting appearance
    #[default]
    Normal,
    /// A pointer is holding the cursor
    Pressed,
}

/// Drawing surface implemented by the host.
pub trait Renderer {
    /// Fill a rectangle whose corners are rounded by `radius`.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    /// Draw an image asset stretched to `rect`.
    fn draw_drawable(&mut self, rect: Rect, drawable: Drawable, state: DrawableState);
}

/// A recorded draw operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Rounded rectangle fill
    RoundedRect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: f32,
        /// Fill color
        color: Color,
    },
    /// Image asset
    Drawable {
        /// Destination bounds
        bounds: Rect,
        /// Which asset
        drawable: Drawable,
        /// Visual sub-state
        state: DrawableState,
    },
}

/// A [`Renderer`] that records draw operations as [`DrawCommand`]s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Replaying a frame onto a real backend later
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Create a new empty recording renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the renderer.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Bounds of the first recorded draw of `drawable`, if any.
    #[must_use]
    pub fn drawable_bounds(&self, drawable: Drawable) -> Option<Rect> {
        self.commands.iter().find_map(|cmd| match cmd {
            DrawCommand::Drawable {
                bounds,
                drawable: d,
                ..
            } if *d == drawable => Some(*bounds),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands.push(DrawCommand::RoundedRect {
            bounds: rect,
            radius,
            color,
        });
    }

    fn draw_drawable(&mut self, rect: Rect, drawable: Drawable, state: DrawableState) {
        self.commands.push(DrawCommand::Drawable {
            bounds: rect,
            drawable,
            state,
        });
    }
}
