//! Virtualized option list.
//!
//! The list paints only the rows that intersect its viewport (plus an
//! overscan row) so option sets with many thousands of entries stay cheap.
//! It owns no options: the host passes an [`OptionListProps`] every frame
//! and receives row interaction through an [`OptionListHandler`].
//!
//! ```
//! use vselect_core::{RecordingCanvas, Size};
//! use vselect_widgets::{OptionListConfig, OptionListProps, SelectOption, VirtualizedOptionList};
//!
//! let options: Vec<SelectOption> = (0..1000)
//!     .map(|i| SelectOption::simple(format!("host-{i}")))
//!     .collect();
//! let mut list = VirtualizedOptionList::new(OptionListConfig::default());
//! list.measure_with(&Size::new(240.0, 0.0));
//!
//! let props = OptionListProps::new(&options);
//! list.update(&props);
//! list.set_scroll_offset(4000.0);
//!
//! let rows = list.rows(&props);
//! assert_eq!(rows.first().map(|r| r.index), Some(100));
//! assert_eq!(rows.len(), 6);
//!
//! let mut canvas = RecordingCanvas::new();
//! list.paint(&props, &mut canvas);
//! assert_eq!(canvas.texts()[0], "host-100");
//! ```

use crate::config::{OptionListConfig, RowColors};
use crate::measure::{usable_width, MeasureProvider};
use crate::option::{label_of, ListOption, OptionRenderer, DEFAULT_LABEL_KEY};
use tracing::trace;
use vselect_core::{
    visible_window, Canvas, Event, FixedRowScroll, MouseButton, Point, Rect, ScrollAlign, Size,
    TextStyle, VisibleWindow,
};

const TEXT_INSET: f32 = 8.0;

/// Callbacks the list invokes on row interaction.
pub trait OptionListHandler<T> {
    /// An enabled row was clicked.
    fn on_select(&mut self, option: &T);

    /// The pointer moved onto an enabled row.
    fn on_focus(&mut self, option: &T);
}

/// Per-frame inputs supplied by the host.
pub struct OptionListProps<'a, T> {
    /// Ordered option set
    pub options: &'a [T],
    /// Currently focused option, compared by equality
    pub focused: Option<&'a T>,
    /// Field used as the row label
    pub label_key: &'a str,
    /// Custom row text, replacing the label lookup
    pub renderer: Option<&'a OptionRenderer<T>>,
}

impl<T> Clone for OptionListProps<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for OptionListProps<'_, T> {}

impl<'a, T: ListOption + PartialEq> OptionListProps<'a, T> {
    /// Props for an option set with no focus and the default label key.
    #[must_use]
    pub fn new(options: &'a [T]) -> Self {
        Self {
            options,
            focused: None,
            label_key: DEFAULT_LABEL_KEY,
            renderer: None,
        }
    }

    /// Set the focused option.
    #[must_use]
    pub fn focused(mut self, focused: Option<&'a T>) -> Self {
        self.focused = focused;
        self
    }

    /// Set the label key.
    #[must_use]
    pub fn label_key(mut self, key: &'a str) -> Self {
        self.label_key = key;
        self
    }

    /// Set a custom renderer.
    #[must_use]
    pub fn renderer(mut self, renderer: &'a OptionRenderer<T>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Position of the focused option in the set, if it is a member.
    #[must_use]
    pub fn focused_index(&self) -> Option<usize> {
        let focused = self.focused?;
        self.options.iter().position(|option| option == focused)
    }

    /// Row text for an option.
    #[must_use]
    pub fn render_label(&self, option: &T) -> String {
        match self.renderer {
            Some(render) => render(option, self.label_key),
            None => label_of(option, self.label_key),
        }
    }

    fn is_focused(&self, option: &T) -> bool {
        self.focused.is_some_and(|focused| focused == option)
    }
}

/// Visual state of a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowState {
    /// Row equals the focused option
    pub focused: bool,
    /// Row's option is disabled
    pub disabled: bool,
}

/// A materialized row inside the visible window.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionRow {
    /// Index into the option set
    pub index: usize,
    /// Row bounds in canvas coordinates
    pub bounds: Rect,
    /// Rendered text
    pub label: String,
    /// Visual state
    pub state: RowState,
}

/// Fixed-row-height list that renders only its visible window.
#[derive(Debug, Clone)]
pub struct VirtualizedOptionList {
    config: OptionListConfig,
    colors: RowColors,
    scroll: FixedRowScroll,
    origin: Point,
    width: Option<f32>,
    hovered: Option<usize>,
    /// Focus index and option count the viewport was last synced to;
    /// `None` before first sync.
    synced_focus: Option<(Option<usize>, usize)>,
}

impl Default for VirtualizedOptionList {
    fn default() -> Self {
        Self::new(OptionListConfig::default())
    }
}

impl VirtualizedOptionList {
    /// Create a list. Row height and overscan are clamped to at least one.
    #[must_use]
    pub fn new(config: OptionListConfig) -> Self {
        let OptionListConfig {
            max_height,
            option_height,
            overscan,
        } = config;
        let config = OptionListConfig::default()
            .max_height(max_height)
            .option_height(option_height)
            .overscan(overscan);
        let scroll = FixedRowScroll::new(config.option_height, config.overscan);
        Self {
            config,
            colors: RowColors::default(),
            scroll,
            origin: Point::ORIGIN,
            width: None,
            hovered: None,
            synced_focus: None,
        }
    }

    /// Set row colors.
    #[must_use]
    pub fn with_colors(mut self, colors: RowColors) -> Self {
        self.colors = colors;
        self
    }

    /// Sizing configuration.
    #[must_use]
    pub const fn config(&self) -> &OptionListConfig {
        &self.config
    }

    /// Row colors.
    #[must_use]
    pub const fn colors(&self) -> &RowColors {
        &self.colors
    }

    /// Row height.
    #[must_use]
    pub fn option_height(&self) -> f32 {
        self.scroll.row_height()
    }

    /// Viewport height for `count` options: `min(max_height, count * option_height)`.
    #[must_use]
    pub fn height_for(&self, count: usize) -> f32 {
        let max_height = if self.config.max_height.is_finite() {
            self.config.max_height
        } else {
            0.0
        };
        (count as f32 * self.option_height()).min(max_height)
    }

    /// Rows that fit entirely in the viewport (at least one).
    #[must_use]
    pub fn rows_per_page(&self, count: usize) -> usize {
        ((self.height_for(count) / self.option_height()).floor() as usize).max(1)
    }

    /// Top-left corner of the list in canvas coordinates.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Move the list.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Measured width, if known.
    #[must_use]
    pub const fn width(&self) -> Option<f32> {
        self.width
    }

    /// Set the width directly. Zero, negative or non-finite widths mean unknown.
    pub fn set_width(&mut self, width: f32) {
        self.width = (width.is_finite() && width > 0.0).then_some(width);
    }

    /// Refresh the width from a container measurement.
    pub fn measure_with(&mut self, provider: &dyn MeasureProvider) -> Option<f32> {
        self.width = usable_width(provider);
        self.width
    }

    /// Size the list occupies for `count` options, once its width is known.
    #[must_use]
    pub fn size_for(&self, count: usize) -> Option<Size> {
        self.width.map(|w| Size::new(w, self.height_for(count)))
    }

    /// Viewport rectangle for `count` options, once its width is known.
    #[must_use]
    pub fn viewport(&self, count: usize) -> Option<Rect> {
        let size = self.size_for(count)?;
        Some(Rect::new(self.origin.x, self.origin.y, size.width, size.height))
    }

    /// Current scroll offset in pixels.
    #[must_use]
    pub const fn scroll_offset(&self) -> f32 {
        self.scroll.scroll_offset()
    }

    /// Set the scroll offset (clamped to the content).
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll.set_scroll_offset(offset);
        self.hovered = None;
    }

    /// Scroll by a pixel delta. Returns whether the offset changed.
    pub fn scroll_by(&mut self, delta: f32) -> bool {
        let before = self.scroll.scroll_offset();
        self.scroll.scroll_by(delta);
        let changed = self.scroll.scroll_offset() != before;
        if changed {
            self.hovered = None;
        }
        changed
    }

    /// Scroll a row into view. Returns whether the offset changed.
    pub fn scroll_to_index(&mut self, index: usize, align: ScrollAlign) -> bool {
        self.scroll.scroll_to_index(index, align)
    }

    /// Index of the row under the pointer, if any.
    #[must_use]
    pub const fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Forget transient view state: offset, hover and the last focus sync.
    /// The next [`update`](Self::update) behaves like a first mount.
    pub fn reset_view(&mut self) {
        self.scroll.set_scroll_offset(0.0);
        self.hovered = None;
        self.synced_focus = None;
    }

    /// Take in the frame's props: option count, viewport height and focus.
    pub fn update<T: ListOption + PartialEq>(&mut self, props: &OptionListProps<'_, T>) {
        let count = props.options.len();
        if count != self.scroll.item_count() {
            self.hovered = None;
        }
        self.scroll.set_item_count(count);
        self.scroll.set_viewport_height(self.height_for(count));
        self.sync_focus(props.focused_index());
    }

    /// The option set was replaced in place. Forgets the hovered row and
    /// resyncs focus on the next [`update`](Self::update), even when the
    /// count and focus index happen to match the previous set.
    pub fn options_changed(&mut self) {
        self.hovered = None;
        self.synced_focus = None;
    }

    /// Scroll minimally to the focused row on first sync and whenever the
    /// focus index or the option count changes. A focus outside the set
    /// never scrolls.
    pub fn sync_focus(&mut self, focused_index: Option<usize>) -> bool {
        let key = (focused_index, self.scroll.item_count());
        if self.synced_focus == Some(key) {
            return false;
        }
        self.synced_focus = Some(key);
        focused_index.is_some_and(|index| self.scroll.scroll_to_index(index, ScrollAlign::Auto))
    }

    /// Visible window for `count` options at the current offset.
    #[must_use]
    pub fn window_for(&self, count: usize) -> VisibleWindow {
        visible_window(
            self.offset_for(count),
            self.option_height(),
            self.height_for(count),
            count,
            self.config.overscan,
        )
    }

    /// Rows in the render window. Empty while the width is unknown.
    #[must_use]
    pub fn rows<T: ListOption + PartialEq>(&self, props: &OptionListProps<'_, T>) -> Vec<OptionRow> {
        let Some(width) = self.width else {
            return Vec::new();
        };
        let count = props.options.len();
        let window = self.window_for(count);
        trace!(
            start = window.start_index,
            end = window.end_index,
            render_end = window.render_end,
            count,
            "option list window"
        );

        let offset = self.offset_for(count);
        let row_height = self.option_height();
        window
            .render_range()
            .filter_map(|index| {
                let option = props.options.get(index)?;
                let top = self.origin.y + index as f32 * row_height - offset;
                Some(OptionRow {
                    index,
                    bounds: Rect::new(self.origin.x, top, width, row_height),
                    label: props.render_label(option),
                    state: RowState {
                        focused: props.is_focused(option),
                        disabled: option.is_disabled(),
                    },
                })
            })
            .collect()
    }

    /// Index of the row at a canvas point.
    #[must_use]
    pub fn row_at<T>(&self, props: &OptionListProps<'_, T>, point: Point) -> Option<usize> {
        let count = props.options.len();
        let viewport = self.viewport(count)?;
        if !viewport.contains_point(&point) {
            return None;
        }
        let y = self.offset_for(count) + (point.y - self.origin.y);
        let index = (y / self.option_height()).floor() as usize;
        (index < count).then_some(index)
    }

    /// Paint the render window, clipped to the viewport.
    pub fn paint<T: ListOption + PartialEq>(
        &self,
        props: &OptionListProps<'_, T>,
        canvas: &mut dyn Canvas,
    ) {
        let count = props.options.len();
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "VirtualizedOptionList",
            x = self.origin.x,
            y = self.origin.y,
            w = self.width.unwrap_or(0.0),
            h = self.height_for(count),
            items = count
        )
        .entered();

        let Some(viewport) = self.viewport(count) else {
            return;
        };
        if count == 0 {
            return;
        }

        canvas.push_clip(viewport);
        canvas.fill_rect(viewport, self.colors.background);

        let row_height = self.option_height();
        for row in self.rows(props) {
            if row.state.focused {
                canvas.fill_rect(row.bounds, self.colors.focused_background);
            }
            let style = TextStyle {
                color: if row.state.disabled {
                    self.colors.disabled_text
                } else {
                    self.colors.text
                },
                ..TextStyle::default()
            };
            let position = Point::new(
                row.bounds.x + TEXT_INSET,
                row.bounds.y + (row_height - style.size) / 2.0,
            );
            canvas.draw_text(&row.label, position, &style);
        }

        canvas.pop_clip();
    }

    /// Route an input event. Returns whether the list reacted to it.
    ///
    /// Props are synced first so hit-testing sees the same window as paint.
    pub fn handle_event<T: ListOption + PartialEq>(
        &mut self,
        props: &OptionListProps<'_, T>,
        event: &Event,
        handler: &mut dyn OptionListHandler<T>,
    ) -> bool {
        self.update(props);
        match event {
            Event::Resize { width, height } => {
                self.measure_with(&Size::new(*width, *height));
                true
            }
            Event::Scroll { delta_y, .. } => self.scroll_by(*delta_y),
            Event::MouseMove { position } => {
                let row = self.row_at(props, *position);
                if row == self.hovered {
                    return false;
                }
                self.hovered = row;
                let Some(option) = row.and_then(|index| props.options.get(index)) else {
                    return true;
                };
                if !option.is_disabled() {
                    handler.on_focus(option);
                }
                true
            }
            Event::MouseLeave => self.hovered.take().is_some(),
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                let Some(option) = self
                    .row_at(props, *position)
                    .and_then(|index| props.options.get(index))
                else {
                    return false;
                };
                if option.is_disabled() {
                    return false;
                }
                handler.on_select(option);
                true
            }
            _ => false,
        }
    }

    fn offset_for(&self, count: usize) -> f32 {
        let max = (count as f32 * self.option_height() - self.height_for(count)).max(0.0);
        self.scroll.scroll_offset().min(max)
    }
}
