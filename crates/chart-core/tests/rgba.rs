// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chart_core::{Annotation, Axis, Chart, Color, RenderOptions, Series, SeriesType};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (4.0, 4.0)]));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is opaque white background (RGBA)
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn bar_fill_lands_inside_plot() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::categories("", &["only"]);
    chart.y_axis = Axis::new("", 0.0, 1.0);
    chart.add_series(Series::bars(&[1.0]).bar_width(1.0).color(Color::from_rgb(220, 38, 38)));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.scale = 1.0;
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");

    // Plot area center in points == pixels at scale 1.0
    let cx = (opts.insets.left + chart.insets.left) as i32
        + (w - (opts.insets.hsum() + chart.insets.hsum()) as i32) / 2;
    let cy = (opts.insets.top + chart.insets.top) as i32
        + (h - (opts.insets.vsum() + chart.insets.vsum()) as i32) / 2;
    let i = cy as usize * stride + cx as usize * 4;
    assert_eq!(&px[i..i + 3], &[220, 38, 38]);
}

#[test]
fn vertical_span_tints_plot() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("", 0.0, 10.0);
    chart.y_axis = Axis::new("", 0.0, 10.0);
    chart.show_grid = false;
    chart.annotate(Annotation::vspan(0.0, 10.0, Color::from_rgb(5, 150, 105)));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.scale = 1.0;
    let (px, _, _, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    let x = (opts.insets.left + chart.insets.left + 10) as usize;
    let y = (opts.insets.top + chart.insets.top + 10) as usize;
    let i = y * stride + x * 4;
    assert_eq!(&px[i..i + 3], &[5, 150, 105]);
}
