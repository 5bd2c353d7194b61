//! Benchmarks for window computation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vselect_core::{visible_window, FixedRowScroll, ScrollAlign};

fn bench_visible_window(c: &mut Criterion) {
    c.bench_function("visible_window_1m_rows", |b| {
        b.iter(|| {
            visible_window(
                black_box(1_234_567.0),
                black_box(40.0),
                black_box(200.0),
                black_box(1_000_000),
                black_box(1),
            )
        })
    });
}

fn bench_scroll_to_index(c: &mut Criterion) {
    let mut scroll = FixedRowScroll::new(40.0, 1);
    scroll.set_item_count(100_000);
    scroll.set_viewport_height(200.0);

    c.bench_function("scroll_to_index_alternating", |b| {
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let index = if flip { 90_000 } else { 10 };
            scroll.scroll_to_index(black_box(index), ScrollAlign::Auto)
        })
    });
}

criterion_group!(benches, bench_visible_window, bench_scroll_to_index);
criterion_main!(benches);
