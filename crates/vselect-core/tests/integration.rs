//! Integration tests for vselect-core.
//!
//! These tests verify the public API works correctly end-to-end.

use vselect_core::{
    visible_window, Canvas, Color, Constraints, FixedRowScroll, Point, RecordingCanvas, Rect,
    ScrollAlign, Size, TextStyle,
};

// =============================================================================
// Virtualization Integration Tests
// =============================================================================

#[test]
fn test_thousand_rows_scrolled_to_4000() {
    let mut scroll = FixedRowScroll::new(40.0, 1);
    scroll.set_item_count(1000);
    scroll.set_viewport_height(200.0);
    scroll.set_scroll_offset(4000.0);

    let window = scroll.window();
    assert_eq!(window.start_index, 100);
    assert_eq!(window.visible_range(), 100..105);
    assert_eq!(window.render_range(), 100..106);
}

#[test]
fn test_scroll_walk_keeps_window_consistent() {
    let mut scroll = FixedRowScroll::new(40.0, 2);
    scroll.set_item_count(250);
    scroll.set_viewport_height(200.0);

    let mut previous_start = 0;
    for _ in 0..400 {
        scroll.scroll_by(37.0);
        let window = scroll.window();
        assert!(window.start_index >= previous_start);
        assert!(window.render_end <= 250);
        assert!(window.render_count() <= 5 + 2);
        previous_start = window.start_index;
    }
    assert_eq!(scroll.scroll_offset(), scroll.max_scroll());
    assert_eq!(scroll.window().render_end, 250);
}

#[test]
fn test_keyboard_style_walk_with_scroll_into_view() {
    let mut scroll = FixedRowScroll::new(40.0, 1);
    scroll.set_item_count(50);
    scroll.set_viewport_height(200.0);

    for index in 0..50 {
        scroll.scroll_to_index(index, ScrollAlign::Auto);
        assert!(scroll.is_fully_visible(index), "row {index} hidden");
    }
    for index in (0..50).rev() {
        scroll.scroll_to_index(index, ScrollAlign::Auto);
        assert!(scroll.is_fully_visible(index), "row {index} hidden");
    }
    assert_eq!(scroll.scroll_offset(), 0.0);
}

#[test]
fn test_pure_window_matches_scroll_model() {
    let mut scroll = FixedRowScroll::new(32.0, 1);
    scroll.set_item_count(77);
    scroll.set_viewport_height(150.0);
    scroll.set_scroll_offset(333.0);

    assert_eq!(
        scroll.window(),
        visible_window(333.0, 32.0, 150.0, 77, 1)
    );
}

// =============================================================================
// Canvas / Geometry Integration Tests
// =============================================================================

#[test]
fn test_recording_canvas_through_trait_object() {
    let mut canvas = RecordingCanvas::new();
    {
        let dyn_canvas: &mut dyn Canvas = &mut canvas;
        dyn_canvas.push_clip(Rect::new(0.0, 0.0, 100.0, 40.0));
        dyn_canvas.fill_rect(Rect::new(0.0, 0.0, 100.0, 40.0), Color::WHITE);
        dyn_canvas.draw_text("row", Point::new(8.0, 12.0), &TextStyle::default());
        dyn_canvas.pop_clip();
    }
    assert_eq!(canvas.command_count(), 4);
    assert_eq!(canvas.texts(), vec!["row"]);
    assert_eq!(canvas.clip_depth(), 0);
}

#[test]
fn test_constraints_with_hex_colors() {
    let size = Constraints::loose(Size::new(300.0, 200.0)).constrain(Size::new(500.0, 120.0));
    assert_eq!(size, Size::new(300.0, 120.0));
    let color = Color::from_hex("#336699").expect("valid hex");
    assert_eq!(color.to_hex(), "#336699");
}
