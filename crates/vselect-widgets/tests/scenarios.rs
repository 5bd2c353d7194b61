//! End-to-end scenarios for the option list and select widgets.

use serde_json::json;
use vselect_core::{Event, Key, MouseButton, Point, RecordingCanvas, Rect, Size, Widget};
use vselect_widgets::{
    OptionListHandler, OptionListProps, Select, SelectConfig, SelectOption, SelectionChanged,
    VirtualizedOptionList,
};

/// Host that keeps focus the way a select would.
struct FocusHost {
    focused: Option<usize>,
    selected: Option<usize>,
    options: Vec<SelectOption>,
}

impl OptionListHandler<SelectOption> for FocusHost {
    fn on_select(&mut self, option: &SelectOption) {
        self.selected = self.options.iter().position(|o| o == option);
    }

    fn on_focus(&mut self, option: &SelectOption) {
        self.focused = self.options.iter().position(|o| o == option);
    }
}

fn hosts(n: usize) -> Vec<SelectOption> {
    (0..n)
        .map(|i| SelectOption::new(format!("h{i}"), format!("host-{i}")))
        .collect()
}

// =============================================================================
// Option List Scenarios
// =============================================================================

#[test]
fn test_thousand_option_viewport() {
    let options = hosts(1000);
    let props = OptionListProps::new(&options);
    let mut list = VirtualizedOptionList::default();
    list.measure_with(&Size::new(300.0, 0.0));
    list.update(&props);

    assert_eq!(list.height_for(options.len()), 200.0);
    let window = list.window_for(options.len());
    assert_eq!(window.visible_count(), 5);
    assert_eq!(window.render_count(), 6);

    list.set_scroll_offset(4000.0);
    assert_eq!(list.window_for(options.len()).start_index, 100);
}

#[test]
fn test_three_option_viewport() {
    let options = hosts(3);
    let props = OptionListProps::new(&options);
    let mut list = VirtualizedOptionList::default();
    list.measure_with(&Size::new(300.0, 0.0));
    list.update(&props);

    assert_eq!(list.height_for(options.len()), 120.0);
    assert_eq!(list.rows(&props).len(), 3);
}

#[test]
fn test_host_feedback_loop() {
    let options = hosts(500);
    let mut host = FocusHost {
        focused: None,
        selected: None,
        options: options.clone(),
    };
    let mut list = VirtualizedOptionList::default();
    list.measure_with(&Size::new(300.0, 0.0));

    // Scroll down, hover a row, and feed the focus back as the next frame.
    let props = OptionListProps::new(&options);
    list.handle_event(
        &props,
        &Event::Scroll {
            delta_x: 0.0,
            delta_y: 800.0,
        },
        &mut host,
    );
    list.handle_event(
        &props,
        &Event::MouseMove {
            position: Point::new(10.0, 50.0),
        },
        &mut host,
    );
    assert_eq!(host.focused, Some(21));

    let focused = host.focused.map(|i| &options[i]);
    let props = OptionListProps::new(&options).focused(focused);
    list.update(&props);
    assert_eq!(list.scroll_offset(), 800.0);

    list.handle_event(
        &props,
        &Event::MouseDown {
            position: Point::new(10.0, 50.0),
            button: MouseButton::Left,
        },
        &mut host,
    );
    assert_eq!(host.selected, Some(21));

    let mut canvas = RecordingCanvas::new();
    list.paint(&props, &mut canvas);
    assert_eq!(canvas.texts()[0], "host-20");
}

// =============================================================================
// Select Scenarios
// =============================================================================

#[test]
fn test_select_configured_from_yaml() {
    let yaml = r##"
label_key: name_label
placeholder: Choose a host
list:
  max_height: 120
  option_height: 30
palette:
  focused_background: "#ddeeff"
"##;
    let config = SelectConfig::from_yaml(yaml).expect("valid config");
    let options: Vec<serde_json::Value> = (0..200)
        .map(|i| json!({"id": i, "name_label": format!("vm-{i:03}")}))
        .collect();

    let mut select = Select::new(options).with_config(config).expect("valid config");
    select.layout(Rect::new(0.0, 0.0, 260.0, 30.0));

    let mut canvas = RecordingCanvas::new();
    select.paint(&mut canvas);
    assert_eq!(canvas.texts(), vec!["Choose a host"]);

    select.event(&Event::TextInput {
        text: "vm-1".to_string(),
    });
    assert_eq!(select.visible_options().len(), 100);

    for _ in 0..10 {
        select.event(&Event::KeyDown { key: Key::Down });
    }
    let result = select.event(&Event::KeyDown { key: Key::Enter });
    let msg = result
        .expect("selection message")
        .downcast::<SelectionChanged<serde_json::Value>>()
        .expect("selection type");
    assert_eq!(msg.label, "vm-110");
    assert_eq!(msg.index, 110);
    assert!(!select.is_open());
}

#[test]
fn test_select_mouse_flow_over_large_set() {
    let mut select = Select::new(hosts(5000)).with_test_id("host-select");
    select.layout(Rect::new(0.0, 0.0, 240.0, 40.0));

    select.event(&Event::MouseDown {
        position: Point::new(100.0, 20.0),
        button: MouseButton::Left,
    });
    assert!(select.is_open());

    select.event(&Event::Scroll {
        delta_x: 0.0,
        delta_y: 1_000_000.0,
    });
    let max_scroll = 5000.0 * 40.0 - 200.0;
    assert_eq!(select.list().scroll_offset(), max_scroll);

    let mut canvas = RecordingCanvas::new();
    select.paint(&mut canvas);
    let texts = canvas.texts();
    assert_eq!(texts.last(), Some(&"host-4999"));
    assert!(texts.len() <= 1 + 6);

    let result = select.event(&Event::MouseDown {
        position: Point::new(100.0, 40.0 + 200.0 - 1.0),
        button: MouseButton::Left,
    });
    let msg = result
        .expect("selection message")
        .downcast::<SelectionChanged<SelectOption>>()
        .expect("selection type");
    assert_eq!(msg.index, 4999);
    assert_eq!(select.selected_label().as_deref(), Some("host-4999"));
}
