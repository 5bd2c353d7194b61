//! Test harness for vselect widgets.

use crate::selector::Selector;
use std::any::Any;
use std::collections::VecDeque;
use vselect_core::{
    Constraints, Event, Key, MouseButton, Point, RecordingCanvas, Rect, Size, Widget,
};

/// Drives a widget with synthetic input and records what it paints.
pub struct Harness {
    /// Root widget being tested
    root: Box<dyn Widget>,
    /// Event queue for simulation
    event_queue: VecDeque<Event>,
    /// Messages returned by the root, oldest first
    messages: Vec<Box<dyn Any + Send>>,
    /// Current viewport size
    viewport: Rect,
}

impl Harness {
    /// Create a harness and lay the root out at its measured size.
    pub fn new(root: impl Widget + 'static) -> Self {
        let mut harness = Self {
            root: Box::new(root),
            event_queue: VecDeque::new(),
            messages: Vec::new(),
            viewport: Rect::new(0.0, 0.0, 1280.0, 720.0),
        };
        harness.relayout();
        harness
    }

    /// Set the viewport size and lay out again.
    #[must_use]
    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Rect::new(0.0, 0.0, width, height);
        self.relayout();
        self
    }

    /// Lay the root out at explicit bounds.
    pub fn layout_at(&mut self, bounds: Rect) -> &mut Self {
        self.root.layout(bounds);
        self
    }

    /// The root widget.
    #[must_use]
    pub fn root(&self) -> &dyn Widget {
        &*self.root
    }

    // === Event Simulation ===

    /// Click the center of the widget matching the selector.
    pub fn click(&mut self, selector: &str) -> &mut Self {
        if let Some(bounds) = self.query(selector).map(|widget| widget.bounds()) {
            self.click_at(bounds.center());
        }
        self
    }

    /// Click at a point.
    pub fn click_at(&mut self, position: Point) -> &mut Self {
        self.event_queue.push_back(Event::MouseMove { position });
        self.event_queue.push_back(Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        self.event_queue.push_back(Event::MouseUp {
            position,
            button: MouseButton::Left,
        });
        self.process_events();
        self
    }

    /// Move the pointer to a point.
    pub fn hover(&mut self, position: Point) -> &mut Self {
        self.event_queue.push_back(Event::MouseMove { position });
        self.process_events();
        self
    }

    /// Move the pointer off the widget.
    pub fn leave(&mut self) -> &mut Self {
        self.event_queue.push_back(Event::MouseLeave);
        self.process_events();
        self
    }

    /// Simulate typing, one character per event.
    pub fn type_text(&mut self, text: &str) -> &mut Self {
        self.event_queue.push_back(Event::FocusIn);
        for c in text.chars() {
            self.event_queue.push_back(Event::TextInput {
                text: c.to_string(),
            });
        }
        self.process_events();
        self
    }

    /// Simulate a key press.
    pub fn press_key(&mut self, key: Key) -> &mut Self {
        self.event_queue.push_back(Event::KeyDown { key });
        self.event_queue.push_back(Event::KeyUp { key });
        self.process_events();
        self
    }

    /// Simulate a wheel scroll. Positive deltas scroll down.
    pub fn scroll(&mut self, delta: f32) -> &mut Self {
        self.event_queue.push_back(Event::Scroll {
            delta_x: 0.0,
            delta_y: delta,
        });
        self.process_events();
        self
    }

    /// Simulate focus leaving the widget.
    pub fn blur(&mut self) -> &mut Self {
        self.event_queue.push_back(Event::FocusOut);
        self.process_events();
        self
    }

    /// Send an arbitrary event.
    pub fn send(&mut self, event: Event) -> &mut Self {
        self.event_queue.push_back(event);
        self.process_events();
        self
    }

    // === Messages ===

    /// Number of messages collected so far.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Remove and return every collected message of type `M`, oldest first.
    /// Messages of other types are kept.
    pub fn take_messages<M: 'static>(&mut self) -> Vec<M> {
        let mut taken = Vec::new();
        let mut kept = Vec::new();
        for message in self.messages.drain(..) {
            match message.downcast::<M>() {
                Ok(m) => taken.push(*m),
                Err(other) => kept.push(other),
            }
        }
        self.messages = kept;
        taken
    }

    // === Paint ===

    /// Paint the root into a fresh recording canvas.
    #[must_use]
    pub fn paint(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.root.paint(&mut canvas);
        canvas
    }

    /// Text runs painted by the root, in paint order.
    #[must_use]
    pub fn painted_texts(&self) -> Vec<String> {
        self.paint()
            .texts()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    // === Queries ===

    /// Query for the widget matching the selector.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<&dyn Widget> {
        let sel = Selector::parse(selector).ok()?;
        sel.matches(&*self.root).then_some(&*self.root)
    }

    /// Check if a widget exists.
    #[must_use]
    pub fn exists(&self, selector: &str) -> bool {
        self.query(selector).is_some()
    }

    // === Assertions ===

    /// Assert that a widget exists.
    ///
    /// # Panics
    ///
    /// Panics if the widget does not exist.
    pub fn assert_exists(&self, selector: &str) -> &Self {
        assert!(
            self.exists(selector),
            "Expected widget matching '{selector}' to exist"
        );
        self
    }

    /// Assert that a widget does not exist.
    ///
    /// # Panics
    ///
    /// Panics if the widget exists.
    pub fn assert_not_exists(&self, selector: &str) -> &Self {
        assert!(
            !self.exists(selector),
            "Expected widget matching '{selector}' to not exist"
        );
        self
    }

    /// Assert that some painted text run equals `expected`.
    ///
    /// # Panics
    ///
    /// Panics if no such text was painted.
    pub fn assert_painted(&self, expected: &str) -> &Self {
        let texts = self.painted_texts();
        assert!(
            texts.iter().any(|t| t == expected),
            "Expected '{expected}' to be painted, got {texts:?}"
        );
        self
    }

    /// Assert that no painted text run equals `unexpected`.
    ///
    /// # Panics
    ///
    /// Panics if the text was painted.
    pub fn assert_not_painted(&self, unexpected: &str) -> &Self {
        let texts = self.painted_texts();
        assert!(
            !texts.iter().any(|t| t == unexpected),
            "Expected '{unexpected}' not to be painted, got {texts:?}"
        );
        self
    }

    /// Assert the number of painted text runs.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_text_count(&self, expected: usize) -> &Self {
        let actual = self.painted_texts().len();
        assert_eq!(
            actual, expected,
            "Expected {expected} painted text runs but found {actual}"
        );
        self
    }

    // === Internal ===

    fn relayout(&mut self) {
        let size: Size = self.root.measure(Constraints::loose(self.viewport.size()));
        self.root.layout(Rect::new(
            self.viewport.x,
            self.viewport.y,
            size.width,
            size.height,
        ));
    }

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            if let Some(message) = self.root.event(&event) {
                self.messages.push(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vselect_core::{
        AccessibleRole, Canvas, Color, LayoutResult, TextStyle, TypeId,
    };

    /// Counts clicks and paints the count.
    struct Counter {
        test_id: Option<String>,
        clicks: usize,
        bounds: Rect,
    }

    impl Counter {
        fn new() -> Self {
            Self {
                test_id: None,
                clicks: 0,
                bounds: Rect::default(),
            }
        }

        fn with_test_id(mut self, id: &str) -> Self {
            self.test_id = Some(id.to_string());
            self
        }
    }

    impl Widget for Counter {
        fn type_id(&self) -> TypeId {
            TypeId::of::<Self>()
        }
        fn measure(&self, c: Constraints) -> Size {
            c.constrain(Size::new(100.0, 50.0))
        }
        fn layout(&mut self, b: Rect) -> LayoutResult {
            self.bounds = b;
            LayoutResult { size: b.size() }
        }
        fn paint(&self, canvas: &mut dyn Canvas) {
            canvas.fill_rect(self.bounds, Color::WHITE);
            canvas.draw_text(
                &self.clicks.to_string(),
                self.bounds.origin(),
                &TextStyle::default(),
            );
        }
        fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
            match event {
                Event::MouseDown { position, .. } if self.bounds.contains_point(position) => {
                    self.clicks += 1;
                    Some(Box::new(self.clicks))
                }
                Event::TextInput { text } => Some(Box::new(text.clone())),
                _ => None,
            }
        }
        fn test_id(&self) -> Option<&str> {
            self.test_id.as_deref()
        }
        fn accessible_role(&self) -> AccessibleRole {
            AccessibleRole::Generic
        }
        fn bounds(&self) -> Rect {
            self.bounds
        }
    }

    #[test]
    fn test_harness_lays_out_at_measured_size() {
        let harness = Harness::new(Counter::new());
        assert_eq!(harness.root().bounds(), Rect::new(0.0, 0.0, 100.0, 50.0));

        let harness = Harness::new(Counter::new()).viewport(60.0, 20.0);
        assert_eq!(harness.root().bounds(), Rect::new(0.0, 0.0, 60.0, 20.0));
    }

    #[test]
    fn test_harness_exists() {
        let harness = Harness::new(Counter::new().with_test_id("root"));
        assert!(harness.exists("[data-testid='root']"));
        assert!(!harness.exists("[data-testid='nonexistent']"));
        assert!(harness.exists("[role='generic']"));
        assert!(!harness.exists("not a selector"));
    }

    #[test]
    #[should_panic(expected = "Expected widget matching")]
    fn test_harness_assert_exists_fails() {
        let harness = Harness::new(Counter::new());
        harness.assert_exists("[data-testid='missing']");
    }

    #[test]
    fn test_harness_click_collects_messages() {
        let mut harness = Harness::new(Counter::new().with_test_id("counter"));
        harness.click("[data-testid='counter']");
        harness.click_at(Point::new(10.0, 10.0));
        harness.click_at(Point::new(500.0, 500.0));
        assert_eq!(harness.message_count(), 2);
        assert_eq!(harness.take_messages::<usize>(), vec![1, 2]);
        assert_eq!(harness.message_count(), 0);
        harness.assert_painted("2").assert_text_count(1);
    }

    #[test]
    fn test_harness_take_messages_keeps_other_types() {
        let mut harness = Harness::new(Counter::new());
        harness.type_text("ab");
        harness.click_at(Point::new(1.0, 1.0));
        assert_eq!(harness.take_messages::<usize>(), vec![1]);
        assert_eq!(
            harness.take_messages::<String>(),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_harness_click_missing_selector_is_noop() {
        let mut harness = Harness::new(Counter::new());
        harness.click("[data-testid='nope']");
        assert_eq!(harness.message_count(), 0);
        harness.assert_not_painted("1");
    }
}
