// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over mixed series types.

use chart_core::{Chart, Series, SeriesType, ViewState, YAxisSide};

#[test]
fn autoscale_mixed_series() {
    let mut chart = Chart::new();

    // XY series
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 1.0), (5.0, 3.0)]));

    // Bars (width 0.8 around x, from baseline 0)
    chart.add_series(Series::with_data(SeriesType::Bar, vec![(2.0, 6.0), (3.0, 2.5)]));

    chart.autoscale_axes(0.0);

    // X spans 0..5 from line vs 1.6..3.4 from bars => expect ~0..5
    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 5.0 - 1e-9);

    // Bars start at baseline 0 => y min 0; tallest bar 6
    assert!(chart.y_axis.min <= 0.0 + 1e-9);
    assert!(chart.y_axis.max >= 6.0 - 1e-9);
}

#[test]
fn right_axis_series_do_not_stretch_left_axis() {
    let mut chart = Chart::new();
    chart.add_series(Series::bars(&[4.1, 11.8]));
    chart.add_series(Series::bars(&[158.8, 6.5]).on_axis(YAxisSide::Right));

    let view = ViewState::from_chart(&chart);
    assert!((view.y_max - 11.8).abs() < 1e-9);
}

#[test]
fn padding_grows_both_ends() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(SeriesType::Scatter, vec![(0.0, 10.0), (1.0, 20.0)]));
    chart.autoscale_axes(0.1);
    assert!((chart.y_axis.min - 9.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 21.0).abs() < 1e-9);
}

#[test]
fn empty_chart_falls_back_to_unit_square() {
    let chart = Chart::new();
    let v = ViewState::from_chart(&chart);
    assert_eq!((v.x_min, v.x_max, v.y_min, v.y_max), (0.0, 1.0, 0.0, 1.0));
}
