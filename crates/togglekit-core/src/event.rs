//! Pointer input events (unified mouse/touch/pen).

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Pointer event delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer down
    PointerDown {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
        /// Button (for mouse pointers)
        button: Option<MouseButton>,
    },
    /// Pointer moved
    PointerMove {
        /// Pointer ID
        pointer_id: PointerId,
        /// Position
        position: Point,
    },
    /// Pointer up
    PointerUp {
        /// Pointer ID
        pointer_id: PointerId,
        /// Position
        position: Point,
    },
    /// Pointer cancelled (e.g. an ancestor took over the gesture)
    PointerCancel {
        /// Pointer ID
        pointer_id: PointerId,
    },
}

impl Event {
    /// Pointer down from a left mouse button press.
    #[must_use]
    pub const fn mouse_down(position: Point) -> Self {
        Self::PointerDown {
            pointer_id: PointerId(0),
            pointer_type: PointerType::Mouse,
            position,
            button: Some(MouseButton::Left),
        }
    }

    /// Pointer down from a touch contact.
    #[must_use]
    pub const fn touch_down(pointer_id: PointerId, position: Point) -> Self {
        Self::PointerDown {
            pointer_id,
            pointer_type: PointerType::Touch,
            position,
            button: None,
        }
    }

    /// The pointer this event belongs to.
    #[must_use]
    pub const fn pointer_id(&self) -> PointerId {
        match self {
            Self::PointerDown { pointer_id, .. }
            | Self::PointerMove { pointer_id, .. }
            | Self::PointerUp { pointer_id, .. }
            | Self::PointerCancel { pointer_id } => *pointer_id,
        }
    }

    /// Event position, if the event carries one.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { position, .. }
            | Self::PointerMove { position, .. }
            | Self::PointerUp { position, .. } => Some(*position),
            Self::PointerCancel { .. } => None,
        }
    }
}

/// Pointer identifier for pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerId(pub u32);

/// Type of pointer device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PointerType {
    /// Mouse pointer
    #[default]
    Mouse,
    /// Touch pointer
    Touch,
    /// Pen/stylus pointer
    Pen,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_down_defaults() {
        let event = Event::mouse_down(Point::new(1.0, 2.0));
        assert_eq!(event.pointer_id(), PointerId(0));
        assert_eq!(event.position(), Some(Point::new(1.0, 2.0)));
        assert!(matches!(
            event,
            Event::PointerDown {
                pointer_type: PointerType::Mouse,
                button: Some(MouseButton::Left),
                ..
            }
        ));
    }

    #[test]
    fn test_touch_down_has_no_button() {
        let event = Event::touch_down(PointerId(7), Point::ORIGIN);
        assert_eq!(event.pointer_id(), PointerId(7));
        assert!(matches!(
            event,
            Event::PointerDown {
                pointer_type: PointerType::Touch,
                button: None,
                ..
            }
        ));
    }

    #[test]
    fn test_cancel_has_no_position() {
        let event = Event::PointerCancel {
            pointer_id: PointerId(3),
        };
        assert_eq!(event.position(), None);
        assert_eq!(event.pointer_id(), PointerId(3));
    }

    #[test]
    fn test_pointer_type_default() {
        assert_eq!(PointerType::default(), PointerType::Mouse);
    }
}
