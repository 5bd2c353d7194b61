//! Container measurement.

use vselect_core::Size;

/// Reports the size of the container a widget is placed in.
///
/// Hosts implement this over whatever knows the real layout; the option list
/// only needs the width.
pub trait MeasureProvider {
    /// Current container size, or `None` when it is not known yet.
    fn container_size(&self) -> Option<Size>;
}

impl MeasureProvider for Size {
    fn container_size(&self) -> Option<Size> {
        Some(*self)
    }
}

impl MeasureProvider for Option<Size> {
    fn container_size(&self) -> Option<Size> {
        *self
    }
}

/// Width of a measured container, if positive and finite.
pub(crate) fn usable_width(provider: &dyn MeasureProvider) -> Option<f32> {
    provider
        .container_size()
        .map(|size| size.width)
        .filter(|w| w.is_finite() && *w > 0.0)
}
