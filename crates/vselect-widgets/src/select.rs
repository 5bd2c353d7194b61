//! Searchable select/dropdown backed by a virtualized option list.

use crate::config::SelectConfig;
use crate::error::ConfigError;
use crate::option::{label_of, ListOption, OptionRenderer};
use crate::option_list::{OptionListHandler, OptionListProps, VirtualizedOptionList};
use std::any::Any;
use tracing::{debug, trace};
use vselect_core::{
    AccessibleRole, Canvas, Constraints, Event, Key, LayoutResult, MouseButton, Point, Rect, Size,
    TextStyle, TypeId, Widget,
};

const TEXT_INSET: f32 = 8.0;

/// Message emitted when an option is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged<T> {
    /// Index of the option in the full (unfiltered) option set
    pub index: usize,
    /// The selected option
    pub option: T,
    /// Rendered label of the selected option
    pub label: String,
}

/// Collects list callbacks while the list holds borrows of the select.
struct MenuActions<T> {
    select: Option<T>,
    focus: Option<T>,
}

impl<T> Default for MenuActions<T> {
    fn default() -> Self {
        Self {
            select: None,
            focus: None,
        }
    }
}

impl<T: Clone> OptionListHandler<T> for MenuActions<T> {
    fn on_select(&mut self, option: &T) {
        self.select = Some(option.clone());
    }

    fn on_focus(&mut self, option: &T) {
        self.focus = Some(option.clone());
    }
}

/// Select widget with search and keyboard navigation.
///
/// The select owns the option set, focus, selection, open state and search
/// text. While open it hands the filtered options to a
/// [`VirtualizedOptionList`] every time its state changes.
pub struct Select<T> {
    options: Vec<T>,
    /// Options matching the query, in display order
    visible: Vec<T>,
    selected: Option<usize>,
    focused: Option<T>,
    query: String,
    open: bool,
    disabled: bool,
    config: SelectConfig,
    list: VirtualizedOptionList,
    renderer: Option<Box<OptionRenderer<T>>>,
    test_id_value: Option<String>,
    accessible_name_value: Option<String>,
    bounds: Rect,
}

impl<T> Default for Select<T>
where
    T: ListOption + PartialEq + Clone,
{
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Select<T>
where
    T: ListOption + PartialEq + Clone,
{
    /// Create a select over an option set with the default configuration.
    #[must_use]
    pub fn new(options: Vec<T>) -> Self {
        let config = SelectConfig::default();
        let list = VirtualizedOptionList::new(config.list.clone());
        let mut select = Self {
            visible: options.clone(),
            options,
            selected: None,
            focused: None,
            query: String::new(),
            open: false,
            disabled: false,
            config,
            list,
            renderer: None,
            test_id_value: None,
            accessible_name_value: None,
            bounds: Rect::default(),
        };
        select.sync_list();
        select
    }

    /// Apply a configuration, rebuilding the option list.
    pub fn with_config(mut self, config: SelectConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let colors = config.palette.resolve()?;
        let width = self.list.width();
        self.list = VirtualizedOptionList::new(config.list.clone()).with_colors(colors);
        self.list.set_origin(self.menu_origin_for(&config));
        if let Some(width) = width {
            self.list.set_width(width);
        }
        self.config = config;
        self.refilter();
        Ok(self)
    }

    /// Replace the option set. Selection and query are cleared.
    #[must_use]
    pub fn options(mut self, options: Vec<T>) -> Self {
        self.options = options;
        self.selected = None;
        self.query.clear();
        self.refilter();
        self
    }

    /// Set the label key.
    #[must_use]
    pub fn label_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        if !key.is_empty() {
            self.config.label_key = key;
        }
        self
    }

    /// Set placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.config.placeholder = text.into();
        self
    }

    /// Enable or disable search.
    #[must_use]
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.config.searchable = searchable;
        self
    }

    /// Set a custom row renderer: `(option, label_key) -> text`.
    #[must_use]
    pub fn renderer(mut self, render: impl Fn(&T, &str) -> String + Send + Sync + 'static) -> Self {
        self.renderer = Some(Box::new(render));
        self
    }

    /// Set selected index. Out-of-range indices clear the selection.
    #[must_use]
    pub fn selected(mut self, index: Option<usize>) -> Self {
        self.selected = index.filter(|&i| i < self.options.len());
        self
    }

    /// Select the option equal to `option`, if present.
    #[must_use]
    pub fn selected_option(mut self, option: &T) -> Self {
        self.selected = self.options.iter().position(|o| o == option);
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Get selected index.
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Get selected option.
    #[must_use]
    pub fn selected_value(&self) -> Option<&T> {
        self.selected.and_then(|i| self.options.get(i))
    }

    /// Get the selected option's rendered label.
    #[must_use]
    pub fn selected_label(&self) -> Option<String> {
        self.selected_value().map(|option| self.render_label(option))
    }

    /// Get the focused option.
    #[must_use]
    pub const fn focused_option(&self) -> Option<&T> {
        self.focused.as_ref()
    }

    /// Get all options.
    #[must_use]
    pub fn get_options(&self) -> &[T] {
        &self.options
    }

    /// Options matching the current query.
    #[must_use]
    pub fn visible_options(&self) -> &[T] {
        &self.visible
    }

    /// Current search text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Check if the menu is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Get option count.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// The option list that renders the menu.
    #[must_use]
    pub const fn list(&self) -> &VirtualizedOptionList {
        &self.list
    }

    /// Open the menu, focusing the selected option or the first enabled one.
    pub fn open_menu(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.focused = self
            .selected_value()
            .filter(|option| self.visible.contains(option))
            .cloned()
            .or_else(|| self.first_enabled().map(|i| self.visible[i].clone()));
        self.list.reset_view();
        self.sync_list();
        debug!(options = self.visible.len(), "select opened");
    }

    /// Close the menu and clear the search text.
    pub fn close_menu(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        if !self.query.is_empty() {
            self.query.clear();
            self.refilter();
        }
        debug!("select closed");
    }

    /// Header rectangle.
    #[must_use]
    pub fn header_rect(&self) -> Rect {
        self.bounds.with_height(self.list.option_height())
    }

    /// Menu rectangle while open. With no matches it is one row tall to
    /// hold the no-results text.
    #[must_use]
    pub fn menu_rect(&self) -> Option<Rect> {
        if !self.open {
            return None;
        }
        let rect = self.list.viewport(self.visible.len())?;
        if self.visible.is_empty() {
            Some(rect.with_height(self.list.option_height()))
        } else {
            Some(rect)
        }
    }

    fn menu_origin_for(&self, config: &SelectConfig) -> Point {
        Point::new(
            self.bounds.x,
            self.bounds.y + config.list.option_height.max(1.0),
        )
    }

    fn render_label(&self, option: &T) -> String {
        match &self.renderer {
            Some(render) => render(option, &self.config.label_key),
            None => label_of(option, &self.config.label_key),
        }
    }

    fn matches_query(&self, option: &T) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let label = label_of(option, &self.config.label_key);
        if self.config.ignore_case {
            label.to_lowercase().contains(&self.query.to_lowercase())
        } else {
            label.contains(&self.query)
        }
    }

    /// Recompute the visible options and keep focus inside them.
    fn refilter(&mut self) {
        let visible: Vec<T> = self
            .options
            .iter()
            .filter(|option| self.matches_query(option))
            .cloned()
            .collect();
        self.visible = visible;
        self.list.options_changed();
        trace!(
            query = %self.query,
            matched = self.visible.len(),
            total = self.options.len(),
            "filtered options"
        );

        let focus_kept = self
            .focused
            .as_ref()
            .is_some_and(|focused| self.visible.contains(focused));
        if !focus_kept {
            self.focused = self.first_enabled().map(|i| self.visible[i].clone());
        }
        self.sync_list();
    }

    fn sync_list(&mut self) {
        let props = OptionListProps {
            options: &self.visible,
            focused: self.focused.as_ref(),
            label_key: &self.config.label_key,
            renderer: self.renderer.as_deref(),
        };
        self.list.update(&props);
    }

    fn focused_visible_index(&self) -> Option<usize> {
        let focused = self.focused.as_ref()?;
        self.visible.iter().position(|option| option == focused)
    }

    fn first_enabled(&self) -> Option<usize> {
        self.visible.iter().position(|option| !option.is_disabled())
    }

    fn last_enabled(&self) -> Option<usize> {
        self.visible.iter().rposition(|option| !option.is_disabled())
    }

    /// Nearest enabled row at or past `goal` moving away from `from`,
    /// falling back to rows between `from` and `goal`.
    fn enabled_toward(&self, goal: usize, from: usize) -> Option<usize> {
        let enabled = |i: &usize| !self.visible[*i].is_disabled();
        if goal > from {
            (goal..self.visible.len())
                .find(enabled)
                .or_else(|| (from + 1..goal).rev().find(enabled))
        } else if goal < from {
            (0..=goal)
                .rev()
                .find(enabled)
                .or_else(|| (goal + 1..from).find(enabled))
        } else {
            None
        }
    }

    fn focus_index(&mut self, index: Option<usize>) {
        if let Some(option) = index.and_then(|i| self.visible.get(i)) {
            self.focused = Some(option.clone());
            self.sync_list();
        }
    }

    fn step_focus(&mut self, delta: isize) {
        if self.visible.is_empty() {
            return;
        }
        let target = match self.focused_visible_index() {
            None if delta >= 0 => self.first_enabled(),
            None => self.last_enabled(),
            Some(current) => {
                let goal = current
                    .saturating_add_signed(delta)
                    .min(self.visible.len() - 1);
                self.enabled_toward(goal, current)
            }
        };
        self.focus_index(target);
    }

    fn page_size(&self) -> isize {
        isize::try_from(self.list.rows_per_page(self.visible.len())).unwrap_or(1)
    }

    fn commit(&mut self, option: T) -> Option<Box<dyn Any + Send>>
    where
        T: Send + 'static,
    {
        if option.is_disabled() {
            return None;
        }
        let index = self.options.iter().position(|o| *o == option)?;
        let label = self.render_label(&option);
        self.selected = Some(index);
        self.focused = Some(option.clone());
        self.close_menu();
        debug!(index, label = %label, "option selected");
        Some(Box::new(SelectionChanged {
            index,
            option,
            label,
        }))
    }

    fn route_to_list(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>
    where
        T: Send + 'static,
    {
        let mut actions = MenuActions::default();
        let props = OptionListProps {
            options: &self.visible,
            focused: self.focused.as_ref(),
            label_key: &self.config.label_key,
            renderer: self.renderer.as_deref(),
        };
        self.list.handle_event(&props, event, &mut actions);

        if let Some(option) = actions.focus {
            self.focused = Some(option);
            self.sync_list();
        }
        actions.select.and_then(|option| self.commit(option))
    }

    fn handle_key(&mut self, key: Key) -> Option<Box<dyn Any + Send>>
    where
        T: Send + 'static,
    {
        if !self.open {
            if matches!(key, Key::Down | Key::Enter | Key::Space) {
                self.open_menu();
            }
            return None;
        }

        match key {
            Key::Down => self.step_focus(1),
            Key::Up => self.step_focus(-1),
            Key::PageDown => self.step_focus(self.page_size()),
            Key::PageUp => self.step_focus(-self.page_size()),
            Key::Home => self.focus_index(self.first_enabled()),
            Key::End => self.focus_index(self.last_enabled()),
            Key::Enter => {
                let focused = self
                    .focused_visible_index()
                    .map(|i| self.visible[i].clone());
                return focused.and_then(|option| self.commit(option));
            }
            Key::Escape | Key::Tab => self.close_menu(),
            Key::Backspace if self.config.searchable => {
                if self.query.pop().is_some() {
                    self.refilter();
                }
            }
            _ => {}
        }
        None
    }

    fn handle_text(&mut self, text: &str) {
        if !self.config.searchable || text.is_empty() {
            return;
        }
        self.open_menu();
        self.query.push_str(text);
        self.refilter();
    }

    fn paint_header(&self, canvas: &mut dyn Canvas) {
        let colors = self.list.colors();
        let header = self.header_rect();
        canvas.fill_rect(header, colors.background);
        canvas.stroke_rect(header, colors.border, 1.0);

        let (text, color) = if self.open && !self.query.is_empty() {
            (self.query.clone(), colors.text)
        } else if let Some(label) = self.selected_label() {
            let color = if self.disabled {
                colors.disabled_text
            } else {
                colors.text
            };
            (label, color)
        } else {
            (self.config.placeholder.clone(), colors.placeholder)
        };
        let style = TextStyle {
            color,
            ..TextStyle::default()
        };
        let position = Point::new(
            header.x + TEXT_INSET,
            header.y + (header.height - style.size) / 2.0,
        );
        canvas.draw_text(&text, position, &style);

        let arrow = Rect::new(
            header.x + header.width - 20.0,
            header.y + header.height / 2.0 - 3.0,
            8.0,
            6.0,
        );
        canvas.fill_rect(arrow, colors.border);
    }
}

impl<T> Widget for Select<T>
where
    T: ListOption + PartialEq + Clone + Send + Sync + 'static,
{
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(self.config.min_width, self.list.option_height()))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.list.set_origin(self.menu_origin_for(&self.config));
        self.list.measure_with(&bounds.size());
        self.sync_list();
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Select",
            x = self.bounds.x,
            y = self.bounds.y,
            w = self.bounds.width,
            open = self.open,
            options = self.visible.len()
        )
        .entered();

        self.paint_header(canvas);

        let Some(menu) = self.menu_rect() else {
            return;
        };
        let colors = self.list.colors();
        if self.visible.is_empty() {
            canvas.fill_rect(menu, colors.background);
            let style = TextStyle {
                color: colors.placeholder,
                ..TextStyle::default()
            };
            let position = Point::new(
                menu.x + TEXT_INSET,
                menu.y + (menu.height - style.size) / 2.0,
            );
            canvas.draw_text(&self.config.no_results_text, position, &style);
        } else {
            let props = OptionListProps {
                options: &self.visible,
                focused: self.focused.as_ref(),
                label_key: &self.config.label_key,
                renderer: self.renderer.as_deref(),
            };
            self.list.paint(&props, canvas);
        }
        canvas.stroke_rect(menu, colors.border, 1.0);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.disabled {
            return None;
        }

        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                if self.header_rect().contains_point(position) {
                    if self.open {
                        self.close_menu();
                    } else {
                        self.open_menu();
                    }
                    return None;
                }
                if self.menu_rect().is_some_and(|menu| menu.contains_point(position)) {
                    return self.route_to_list(event);
                }
                // Clicked outside - close
                self.close_menu();
            }
            Event::MouseMove { .. } | Event::Scroll { .. } | Event::MouseLeave if self.open => {
                return self.route_to_list(event);
            }
            Event::KeyDown { key } => return self.handle_key(*key),
            Event::TextInput { text } => self.handle_text(text),
            Event::FocusOut => self.close_menu(),
            _ => {}
        }

        None
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ComboBox
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
