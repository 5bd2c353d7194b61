//! Benchmarks for option list and select operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vselect_core::{Event, Key, RecordingCanvas, Rect, Size, Widget};
use vselect_widgets::{OptionListProps, Select, SelectOption, VirtualizedOptionList};

fn hosts(n: usize) -> Vec<SelectOption> {
    (0..n)
        .map(|i| SelectOption::new(format!("h{i}"), format!("host-{i}")))
        .collect()
}

fn bench_list_paint_100k(c: &mut Criterion) {
    let options = hosts(100_000);
    let props = OptionListProps::new(&options).focused(Some(&options[50_000]));
    let mut list = VirtualizedOptionList::default();
    list.measure_with(&Size::new(240.0, 0.0));
    list.update(&props);

    c.bench_function("option_list_paint_100k", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            list.paint(black_box(&props), &mut canvas);
            canvas.command_count()
        })
    });
}

fn bench_list_scroll_and_rows(c: &mut Criterion) {
    let options = hosts(100_000);
    let props = OptionListProps::new(&options);
    let mut list = VirtualizedOptionList::default();
    list.measure_with(&Size::new(240.0, 0.0));
    list.update(&props);

    c.bench_function("option_list_scroll_rows", |b| {
        let mut offset = 0.0_f32;
        b.iter(|| {
            offset = (offset + 1_234.0) % 3_000_000.0;
            list.set_scroll_offset(offset);
            list.rows(black_box(&props)).len()
        })
    });
}

fn bench_select_search(c: &mut Criterion) {
    let options = hosts(10_000);

    c.bench_function("select_search_10k", |b| {
        b.iter(|| {
            let mut select = Select::new(black_box(options.clone()));
            select.layout(Rect::new(0.0, 0.0, 240.0, 40.0));
            select.event(&Event::TextInput {
                text: "99".to_string(),
            });
            select.event(&Event::KeyDown { key: Key::Enter })
        })
    });
}

criterion_group!(
    benches,
    bench_list_paint_100k,
    bench_list_scroll_and_rows,
    bench_select_search
);
criterion_main!(benches);
