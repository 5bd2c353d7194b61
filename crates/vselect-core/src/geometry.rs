//! Points, sizes and rectangles in logical pixels.
//!
//! Menu rows are stacked rectangles, so hit-testing uses half-open edges:
//! a pointer on the line between two rows belongs to the lower one.

use serde::{Deserialize, Serialize};

/// A position in logical pixels, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position
    pub x: f32,
    /// Vertical position
    pub y: f32,
}

impl Point {
    /// `(0, 0)`
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height of a widget or viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Nothing can be drawn into it: a dimension is zero, negative or NaN.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Y coordinate just past the last row of pixels.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Hit test with inclusive top/left and exclusive bottom/right edges.
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        (self.x..self.x + self.width).contains(&point.x)
            && (self.y..self.y + self.height).contains(&point.y)
    }

    /// Same x, y and width with a different height.
    #[must_use]
    pub const fn with_height(&self, height: f32) -> Self {
        Self::new(self.x, self.y, self.width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(240.0, 0.0).is_empty());
        assert!(Size::new(-1.0, 40.0).is_empty());
        assert!(Size::new(f32::NAN, 40.0).is_empty());
        assert!(!Size::new(240.0, 40.0).is_empty());
    }

    #[test]
    fn test_stacked_rows_never_share_boundary() {
        let first = Rect::new(0.0, 0.0, 240.0, 40.0);
        let second = Rect::new(0.0, 40.0, 240.0, 40.0);
        let boundary = Point::new(120.0, 40.0);
        assert!(!first.contains_point(&boundary));
        assert!(second.contains_point(&boundary));
        assert!(first.contains_point(&Point::new(0.0, 0.0)));
        assert!(first.contains_point(&Point::new(239.9, 39.9)));
        assert!(!first.contains_point(&Point::new(240.0, 10.0)));
    }

    #[test]
    fn test_empty_rect_contains_nothing() {
        let r = Rect::new(10.0, 10.0, 0.0, 40.0);
        assert!(!r.contains_point(&Point::new(10.0, 20.0)));
    }

    #[test]
    fn test_header_and_menu_geometry() {
        let header = Rect::new(10.0, 20.0, 200.0, 40.0);
        assert_eq!(header.origin(), Point::new(10.0, 20.0));
        assert_eq!(header.size(), Size::new(200.0, 40.0));
        assert_eq!(header.bottom(), 60.0);
        assert_eq!(header.center(), Point::new(110.0, 40.0));

        let menu = header.with_height(200.0);
        assert_eq!(menu, Rect::new(10.0, 20.0, 200.0, 200.0));
    }
}
