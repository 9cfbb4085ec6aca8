//! Event types for the PointPicker widget
//!
//! These events provide a decoupled interface between the widget and the
//! host toolkit. The host translates its native events into `HostEvent`s
//! and listens for `PickerEvent`s.

use crate::domain::{Allocation, Point};

/// Mouse button as reported by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    /// Any other button, by toolkit number
    Other(u16),
}

impl From<u16> for PointerButton {
    /// Map toolkit button numbers (1 = left, 2 = middle, 3 = right)
    fn from(button: u16) -> Self {
        match button {
            1 => PointerButton::Left,
            2 => PointerButton::Middle,
            3 => PointerButton::Right,
            n => PointerButton::Other(n),
        }
    }
}

/// Button press or release at a client point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub button: PointerButton,
    pub point: Point,
}

impl PointerEvent {
    pub fn new(button: PointerButton, x: f64, y: f64) -> Self {
        Self {
            button,
            point: Point::new(x, y),
        }
    }

    pub fn left(x: f64, y: f64) -> Self {
        Self::new(PointerButton::Left, x, y)
    }
}

/// Toolkit events routed to the widget by `dispatch`
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    PointerDown(PointerEvent),
    PointerUp(PointerEvent),
    PointerMove(Point),
    /// Layout asks for the preferred size
    SizeRequest,
    /// Layout assigned the final allocation
    SizeAllocate(Allocation),
    /// Surface needs repainting
    Paint,
}

/// Notifications emitted by the picker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerEvent {
    /// Position changed; listeners re-read it from the widget
    PositionChanged,
}

/// Drag gesture state
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    /// Left button held after a press inside the widget
    Tracking,
}
