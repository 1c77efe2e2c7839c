//! Geometry derived from the config, the cursor drawable and padding.

use crate::config::SwitchConfig;
use crate::motion::Boundaries;
use log::debug;
use togglekit_core::{Insets, Point, Rect, Size};

/// Everything layout computes; immutable until the next layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchGeometry {
    /// Total size the control wants, padding included.
    pub measured: Size,
    /// Full track rectangle.
    pub track: Rect,
    /// Corner radius of the track (half its height).
    pub track_radius: f32,
    /// Intrinsic cursor size.
    pub cursor_size: Size,
    /// Y of the cursor's top edge.
    pub cursor_top: f32,
    /// Travel limits of the cursor's left edge.
    pub boundaries: Boundaries,
}

impl SwitchGeometry {
    /// Lay the control out inside `padding`.
    ///
    /// A configured track narrower than the cursor is widened to fit it.
    #[must_use]
    pub fn compute(config: &SwitchConfig, cursor: Size, padding: Insets) -> Self {
        let track_width = effective_track_width(config.track_width, cursor.width);
        let track_height = 2.0f32.mul_add(config.track_padding, cursor.height);

        let track = Rect::new(padding.left, padding.top, track_width, track_height);
        let boundaries =
            Boundaries::compute(track_width, cursor.width, config.track_padding, padding.left);

        Self {
            measured: Size::new(
                track_width + padding.horizontal(),
                track_height + padding.vertical(),
            ),
            track,
            track_radius: track_height / 2.0,
            cursor_size: cursor,
            cursor_top: padding.top + config.track_padding,
            boundaries,
        }
    }

    /// Cursor bounds with its left edge at `position`.
    #[must_use]
    pub fn cursor_rect(&self, position: f32) -> Rect {
        Rect::from_origin_size(Point::new(position, self.cursor_top), self.cursor_size)
    }

    /// Area that accepts a press on the cursor.
    #[must_use]
    pub fn touch_rect(&self, position: f32, touch_expand: f32) -> Rect {
        self.cursor_rect(position).outset(touch_expand)
    }

    /// Part of the track painted in the selected color: from the track's
    /// left edge to the cursor's right edge.
    #[must_use]
    pub fn selected_track_rect(&self, position: f32) -> Rect {
        let right = position + self.cursor_size.width;
        Rect::new(
            self.track.x,
            self.track.y,
            (right - self.track.x).max(0.0),
            self.track.height,
        )
    }

    /// Shadow bounds: the cursor grown by `expand`, then offset.
    #[must_use]
    pub fn shadow_rect(&self, position: f32, expand: f32, x_diff: f32, y_diff: f32) -> Rect {
        self.cursor_rect(position).outset(expand).translate(x_diff, y_diff)
    }
}

fn effective_track_width(configured: Option<f32>, cursor_width: f32) -> f32 {
    match configured {
        Some(width) if width >= cursor_width => width,
        Some(width) => {
            debug!("track width {width} narrower than cursor, widening to {cursor_width}");
            cursor_width
        }
        None => cursor_width,
    }
}
