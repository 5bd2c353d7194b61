//! Size bounds handed to [`Widget::measure`](crate::Widget::measure).

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Minimum and maximum extents a widget may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Exactly `size`.
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Anything from zero up to `size`, e.g. the space a host window offers.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Clamp a preferred size into these bounds.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_min_width_is_clamped_by_host() {
        let preferred = Size::new(160.0, 40.0);
        let narrow = Constraints::loose(Size::new(120.0, 720.0));
        assert_eq!(narrow.constrain(preferred), Size::new(120.0, 40.0));

        let wide = Constraints::loose(Size::new(1280.0, 720.0));
        assert_eq!(wide.constrain(preferred), preferred);
    }

    #[test]
    fn test_min_bounds_grow_small_sizes() {
        let c = Constraints::new(200.0, 400.0, 30.0, 60.0);
        assert_eq!(c.constrain(Size::new(50.0, 90.0)), Size::new(200.0, 60.0));
    }

    #[test]
    fn test_tight_ignores_preference() {
        let size = Size::new(240.0, 40.0);
        assert_eq!(Constraints::tight(size).constrain(Size::ZERO), size);
        assert_eq!(Constraints::tight(size).constrain(Size::new(999.0, 1.0)), size);
    }
}
