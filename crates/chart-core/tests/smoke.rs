// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke tests writing PNGs.

use chart_core::{Annotation, Axis, Chart, Figure, LineStyle, Note, RenderOptions, Series, SeriesType};

fn small_chart() -> Chart {
    let mut chart = Chart::new().with_title("Smoke");
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(
        SeriesType::Line,
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)],
    ));
    chart.annotate(Annotation::hline(2.0, LineStyle::dashed(chart_core::Color::RED, 1.5)));
    chart
}

#[test]
fn render_smoke_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("nested/smoke.png");

    let opts = RenderOptions::default();
    small_chart().render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = small_chart().render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn png_dimensions_follow_dpi() {
    let opts = RenderOptions::from_inches(4.0, 3.0, 150.0);
    let bytes = small_chart().render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (600, 450));
}

#[test]
fn figure_with_note_renders() {
    let mut fig = Figure::new(1, 2).with_title("Panels");
    fig.add(0, 0, small_chart());
    fig.add(0, 1, Note::new("METRICS\nAUC: 0.66", chart_core::Color::from_argb(77, 147, 197, 253)).with_title("Notes"));

    let opts = RenderOptions::from_inches(8.0, 3.0, 72.0);
    let bytes = fig.render_to_png_bytes(&opts).expect("figure bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (576, 216));
}
