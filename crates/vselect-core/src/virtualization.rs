// Scroll virtualization for fixed-height rows.
//
// Provides:
// - A pure visible-window function (what to render for a scroll offset)
// - A scroll model that clamps offsets and scrolls rows into view
//
// Variable row heights are not supported: every row has the same height.

use std::ops::Range;
use tracing::debug;

/// Overscan used when none is configured.
pub const DEFAULT_OVERSCAN: usize = 1;

/// Rows that intersect the viewport plus the rows to render around them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleWindow {
    /// First row intersecting the viewport
    pub start_index: usize,
    /// One past the last row intersecting the viewport
    pub end_index: usize,
    /// One past the last row to render (includes overscan)
    pub render_end: usize,
    /// Overscan rows requested when the window was computed
    pub overscan: usize,
}

impl VisibleWindow {
    /// Rows intersecting the viewport.
    #[must_use]
    pub const fn visible_range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    /// Rows to render.
    #[must_use]
    pub const fn render_range(&self) -> Range<usize> {
        self.start_index..self.render_end
    }

    /// Whether a row intersects the viewport.
    #[must_use]
    pub const fn is_visible(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    /// Number of rows intersecting the viewport.
    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    /// Number of rows to render.
    #[must_use]
    pub const fn render_count(&self) -> usize {
        self.render_end.saturating_sub(self.start_index)
    }

    /// True when nothing is rendered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.render_count() == 0
    }
}

/// Compute which rows to render for a scroll offset.
///
/// Rendering starts at the first row intersecting the viewport and covers
/// `ceil(viewport_height / row_height)` rows plus `overscan`, so a partially
/// scrolled last row is covered by the overscan. The result is always a
/// contiguous, in-bounds slice of `0..total_count`.
///
/// `overscan` is clamped to at least one, the row a partial scroll exposes.
/// Degenerate input (no rows, non-positive or non-finite dimensions) yields
/// an empty window.
///
/// ```
/// use vselect_core::visible_window;
///
/// let window = visible_window(4000.0, 40.0, 200.0, 1000, 1);
/// assert_eq!(window.start_index, 100);
/// assert_eq!(window.visible_count(), 5);
/// assert_eq!(window.render_count(), 6);
/// ```
#[must_use]
pub fn visible_window(
    scroll_offset: f32,
    row_height: f32,
    viewport_height: f32,
    total_count: usize,
    overscan: usize,
) -> VisibleWindow {
    let overscan = overscan.max(1);
    let degenerate = total_count == 0
        || !row_height.is_finite()
        || !viewport_height.is_finite()
        || row_height <= 0.0
        || viewport_height <= 0.0;
    if degenerate {
        return VisibleWindow {
            overscan,
            ..VisibleWindow::default()
        };
    }

    let offset = if scroll_offset.is_finite() {
        scroll_offset.max(0.0)
    } else {
        0.0
    };

    let last = total_count - 1;
    let start = ((offset / row_height).floor() as usize).min(last);
    let rows_per_viewport = (viewport_height / row_height).ceil() as usize;
    // A viewport can straddle at most one row more than it fully holds;
    // the cap keeps float rounding from adding a second.
    let visible_end = (((offset + viewport_height) / row_height).ceil() as usize)
        .min(start + rows_per_viewport + 1)
        .clamp(start + 1, total_count);
    let render_end = (start + rows_per_viewport + overscan)
        .max(visible_end)
        .min(total_count);

    VisibleWindow {
        start_index: start,
        end_index: visible_end,
        render_end,
        overscan,
    }
}

/// Scroll alignment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAlign {
    /// Align row to start of viewport
    Start,
    /// Align row to center of viewport
    Center,
    /// Align row to end of viewport
    End,
    /// Scroll minimally, and only if the row is not fully visible
    #[default]
    Auto,
}

/// Scroll state for a list of equally tall rows.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedRowScroll {
    row_height: f32,
    viewport_height: f32,
    item_count: usize,
    overscan: usize,
    scroll_offset: f32,
}

impl FixedRowScroll {
    /// Create a scroll model. Row height is floored at one pixel and
    /// overscan at one row.
    #[must_use]
    pub fn new(row_height: f32, overscan: usize) -> Self {
        Self {
            row_height: sanitize(row_height).max(1.0),
            viewport_height: 0.0,
            item_count: 0,
            overscan: overscan.max(1),
            scroll_offset: 0.0,
        }
    }

    /// Row height.
    #[must_use]
    pub const fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Viewport height.
    #[must_use]
    pub const fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Total row count.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Current scroll offset in pixels.
    #[must_use]
    pub const fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Set total row count, re-clamping the offset.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        self.clamp_offset();
    }

    /// Set viewport height, re-clamping the offset.
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = sanitize(height);
        self.clamp_offset();
    }

    /// Total content height.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.item_count as f32 * self.row_height
    }

    /// Largest valid scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        (self.content_height() - self.viewport_height).max(0.0)
    }

    /// Set scroll offset, clamped to `[0, max_scroll]`.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = sanitize(offset).min(self.max_scroll());
    }

    /// Scroll by a pixel delta.
    pub fn scroll_by(&mut self, delta: f32) {
        self.set_scroll_offset(self.scroll_offset + sanitize_delta(delta));
    }

    /// Top edge of a row in content coordinates.
    #[must_use]
    pub fn row_top(&self, index: usize) -> f32 {
        index as f32 * self.row_height
    }

    /// Row under a y position measured from the top of the viewport.
    #[must_use]
    pub fn index_at(&self, viewport_y: f32) -> Option<usize> {
        if !(viewport_y >= 0.0 && viewport_y < self.viewport_height) {
            return None;
        }
        let index = ((self.scroll_offset + viewport_y) / self.row_height).floor() as usize;
        (index < self.item_count).then_some(index)
    }

    /// Whether a row lies entirely inside the viewport.
    #[must_use]
    pub fn is_fully_visible(&self, index: usize) -> bool {
        if index >= self.item_count {
            return false;
        }
        let top = self.row_top(index);
        let bottom = top + self.row_height;
        top >= self.scroll_offset - EPSILON
            && bottom <= self.scroll_offset + self.viewport_height + EPSILON
    }

    /// Scroll so a row becomes visible. Returns whether the offset changed.
    ///
    /// Out-of-range indices are ignored.
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign) -> bool {
        if index >= self.item_count {
            return false;
        }

        let top = self.row_top(index);
        let bottom = top + self.row_height;
        let target = match align {
            ScrollAlign::Start => top,
            ScrollAlign::Center => top - (self.viewport_height - self.row_height) / 2.0,
            ScrollAlign::End => bottom - self.viewport_height,
            ScrollAlign::Auto => {
                if self.is_fully_visible(index) {
                    return false;
                }
                if top < self.scroll_offset {
                    top
                } else {
                    bottom - self.viewport_height
                }
            }
        };

        let before = self.scroll_offset;
        self.set_scroll_offset(target);
        let changed = (self.scroll_offset - before).abs() > EPSILON;
        if changed {
            debug!(index, from = before, to = self.scroll_offset, "scrolled row into view");
        }
        changed
    }

    /// Window for the current offset.
    #[must_use]
    pub fn window(&self) -> VisibleWindow {
        visible_window(
            self.scroll_offset,
            self.row_height,
            self.viewport_height,
            self.item_count,
            self.overscan,
        )
    }

    fn clamp_offset(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }
}

impl Default for FixedRowScroll {
    fn default() -> Self {
        Self::new(40.0, DEFAULT_OVERSCAN)
    }
}

const EPSILON: f32 = 1e-3;

fn sanitize(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

fn sanitize_delta(delta: f32) -> f32 {
    if delta.is_finite() {
        delta
    } else {
        0.0
    }
}
