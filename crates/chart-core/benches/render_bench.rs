// File: crates/chart-core/benches/render_bench.rs
// Summary: Criterion benchmarks for single-chart and dashboard PNG rendering.

use chart_core::{Axis, Chart, Figure, Note, RenderOptions, Series, SeriesType};
use chart_core::binning::{arange, histogram};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart_xy(n: usize) -> Chart {
    let mut ch = Chart::new();
    let mut data = Vec::with_capacity(n);
    for i in 0..n {
        let x = i as f64;
        let y = (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001);
        data.push((x, y));
    }
    ch.x_axis = Axis::new("X", 0.0, (n - 1) as f64);
    ch.y_axis = Axis::new("Y", -12.0, 12.0);
    ch.add_series(Series::with_data(SeriesType::Line, data));
    ch
}

fn build_histogram() -> Chart {
    let edges = arange(30.0, 121.0, 3.0);
    let values: Vec<f64> = (0..2825).map(|i| 30.0 + (i as f64 * 7.919) % 90.0).collect();
    let counts = histogram(&values, &edges);
    let mut ch = Chart::new();
    ch.x_axis = Axis::new("Days", 25.0, 120.0);
    ch.y_axis = Axis::new("Count", 0.0, 150.0);
    ch.add_series(Series::histogram(&edges, &counts));
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("xy_{n}"), |b| {
            let ch = build_chart_xy(n);
            let mut opts = RenderOptions::from_inches(10.0, 6.0, 150.0);
            opts.draw_labels = false;
            b.iter(|| {
                let bytes = ch.render_to_png_bytes(&opts).expect("render");
                black_box(bytes);
            });
        });
    }
    group.bench_function("figure_2x3", |b| {
        let mut fig = Figure::new(2, 3).with_title("Dashboard");
        for i in 0..5 {
            fig.add(i / 3, i % 3, build_histogram());
        }
        fig.add(1, 2, Note::new("AUC: 0.66", chart_core::Color::from_argb(77, 147, 197, 253)));
        let opts = RenderOptions::from_inches(16.0, 10.0, 150.0);
        b.iter(|| {
            let bytes = fig.render_to_png_bytes(&opts).expect("render");
            black_box(bytes);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
