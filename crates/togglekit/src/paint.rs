//! Drawing the switch through a [`Renderer`].

use crate::config::SwitchConfig;
use crate::layout::SwitchGeometry;
use togglekit_core::{Drawable, DrawableState, Renderer};

/// Per-frame inputs that are not part of the geometry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub(crate) position: f32,
    pub(crate) pressed: bool,
    pub(crate) has_shadow: bool,
}

/// Paint track, shadow and cursor, back to front.
pub(crate) fn paint(
    renderer: &mut dyn Renderer,
    geometry: &SwitchGeometry,
    config: &SwitchConfig,
    frame: Frame,
) {
    let bounds = geometry.boundaries;
    let radius = geometry.track_radius;

    // At rest only one color is visible, so skip the overdraw.
    if frame.position == bounds.left() {
        renderer.fill_rounded_rect(geometry.track, radius, config.unselected_color);
    } else if frame.position == bounds.right() {
        renderer.fill_rounded_rect(geometry.track, radius, config.selected_color);
    } else {
        renderer.fill_rounded_rect(geometry.track, radius, config.unselected_color);
        renderer.fill_rounded_rect(
            geometry.selected_track_rect(frame.position),
            radius,
            config.selected_color,
        );
    }

    let state = if frame.pressed {
        DrawableState::Pressed
    } else {
        DrawableState::Normal
    };

    if frame.has_shadow {
        let shadow = geometry.shadow_rect(
            frame.position,
            config.shadow_expand,
            config.shadow_x_diff,
            config.shadow_y_diff,
        );
        renderer.draw_drawable(shadow, Drawable::Shadow, state);
    }

    renderer.draw_drawable(geometry.cursor_rect(frame.position), Drawable::Cursor, state);
}
