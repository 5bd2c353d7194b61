//! The [`Widget`] and [`Canvas`] seams.
//!
//! A host calls `measure`, then `layout` with the bounds it grants, then
//! `paint` as often as it likes. `paint` takes `&self`: anything that
//! depends on input (scroll position, hover) is settled in `event`.
//!
//! `event` may hand back a message for the host to downcast, e.g. a
//! selection change:
//!
//! ```
//! use std::any::Any;
//! use vselect_core::TypeId;
//!
//! let message: Box<dyn Any + Send> = Box::new(42_usize);
//! assert_eq!(message.downcast_ref::<usize>(), Some(&42));
//! assert_ne!(TypeId::of::<usize>(), TypeId::of::<String>());
//! ```

use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Identifies a concrete widget type behind `dyn Widget`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// A retained UI element driven by its host.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept the bounds granted by the host.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Emit draw calls. Must not depend on anything `event` has not settled.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle an input event, optionally producing a message.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Whether the widget currently reacts to input.
    fn is_interactive(&self) -> bool {
        false
    }

    fn is_focusable(&self) -> bool {
        false
    }

    /// Accessible name, matched by `[aria-label=..]` selectors.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Matched by `[data-testid=..]` selectors.
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Bounds from the last `layout`.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Drawing backend. Clips nest; every `push_clip` is paired with a `pop_clip`.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// `position` is the top-left of the text run.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    fn push_clip(&mut self, rect: Rect);

    fn pop_clip(&mut self);
}

/// How a text run is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 14.0,
            color: Color::BLACK,
        }
    }
}

/// Roles a selector can match with `[role=..]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    #[default]
    Generic,
    /// List box
    ListBox,
    /// Option inside a list box
    Option,
    /// The select header with its popup menu
    ComboBox,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Blank;

    impl Widget for Blank {
        fn type_id(&self) -> TypeId {
            TypeId::of::<Self>()
        }
        fn measure(&self, constraints: Constraints) -> Size {
            constraints.constrain(Size::new(10.0, 10.0))
        }
        fn layout(&mut self, bounds: Rect) -> LayoutResult {
            LayoutResult {
                size: bounds.size(),
            }
        }
        fn paint(&self, _canvas: &mut dyn Canvas) {}
        fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
            None
        }
    }

    #[test]
    fn test_widget_defaults() {
        let blank = Blank;
        assert!(!blank.is_interactive());
        assert!(!blank.is_focusable());
        assert_eq!(blank.accessible_name(), None);
        assert_eq!(blank.accessible_role(), AccessibleRole::Generic);
        assert_eq!(blank.test_id(), None);
        assert_eq!(blank.bounds(), Rect::default());
        assert_eq!(Widget::type_id(&blank), TypeId::of::<Blank>());
    }

    #[test]
    fn test_text_style_default() {
        let style = TextStyle::default();
        assert_eq!(style.size, 14.0);
        assert_eq!(style.color, Color::BLACK);
    }

    #[test]
    fn test_role_serializes_by_name() {
        let json = serde_json::to_string(&AccessibleRole::ComboBox).unwrap();
        assert_eq!(json, "\"ComboBox\"");
    }
}
