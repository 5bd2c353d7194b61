//! Input the host forwards to a widget, already translated to logical pixels.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// One unit of input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    MouseMove { position: Point },
    MouseDown { position: Point, button: MouseButton },
    MouseUp { position: Point, button: MouseButton },
    /// Mouse wheel scrolled, in pixels. Positive `delta_y` scrolls down.
    Scroll { delta_x: f32, delta_y: f32 },
    KeyDown { key: Key },
    KeyUp { key: Key },
    /// Committed text, already composed by the host
    TextInput { text: String },
    FocusIn,
    /// Keyboard focus moved elsewhere; an open menu closes
    FocusOut,
    /// The pointer left the widget
    MouseLeave,
    /// The container measured a new size
    Resize { width: f32, height: f32 },
}

impl Event {
    /// Pointer position carried by the event, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::MouseMove { position }
            | Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Only `Left` selects rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keyboard keys the widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    /// Return
    Enter,
    Escape,
    /// Deletes the last query character
    Backspace,
    Tab,
    Space,
}
