// File: crates/churn-charts/src/charts/quadrant_matrix.rs
// Summary: Importance vs actionability scatter split into four labelled quadrants.

use std::path::PathBuf;

use anyhow::Result;
use chart_core::{
    with_alpha, Annotation, Axis, Chart, Color, HAlign, Label, LineStyle, Marker, MarkerShape, Series, SeriesType,
    TextOptions, VAlign,
};

use super::emit;
use crate::config::Config;
use crate::data::{QuadrantCategory, ACTIONABILITY_SPLIT, IMPORTANCE_SPLIT, QUADRANT_FEATURES};
use crate::palette::{GRAY, PRIMARY, SUCCESS, WARNING, WHITE};

pub const FILE: &str = "05_four_quadrant_matrix.png";
const SIZE_IN: (f32, f32) = (10.0, 8.0);
const X_RANGE: (f64, f64) = (0.0, 0.55);
/// Right edge of the quadrant fills; past the axis limit so they reach the border.
const FILL_RIGHT: f64 = 0.6;

pub fn category_color(category: QuadrantCategory) -> Color {
    match category {
        QuadrantCategory::PriorityTarget => SUCCESS,
        QuadrantCategory::QuickWin => WARNING,
        QuadrantCategory::LowPriority => GRAY,
        QuadrantCategory::Monitor | QuadrantCategory::Accept => PRIMARY,
    }
}

/// Filled rectangle in data space, expressed as a horizontal span over an x fraction.
fn quadrant(x0: f64, x1: f64, y0: f64, y1: f64, color: Color) -> Annotation {
    let span = X_RANGE.1 - X_RANGE.0;
    let frac = ((x0 - X_RANGE.0) / span, (x1 - X_RANGE.0) / span);
    Annotation::HSpan { y0, y1, x_frac: frac, fill: with_alpha(color, 0.1) }
}

pub fn build(cfg: &Config) -> Chart {
    let ink = cfg.theme.axis_label;
    let mut chart = Chart::new().with_title("Feature Selection Matrix: Importance vs Actionability");
    chart.x_axis = Axis::new("Predictive Importance (|coefficient|)", X_RANGE.0, X_RANGE.1);
    chart.y_axis = Axis::new("Actionability Score", 0.0, 1.0);

    let split_style = LineStyle::dashed(with_alpha(GRAY, 0.5), 1.5);
    chart.annotate(Annotation::hline(ACTIONABILITY_SPLIT, split_style));
    chart.annotate(Annotation::vline(IMPORTANCE_SPLIT, split_style));

    let (xs, ys) = (IMPORTANCE_SPLIT, ACTIONABILITY_SPLIT);
    chart.annotate(quadrant(0.0, xs, ys, 1.0, WARNING));
    chart.annotate(quadrant(xs, FILL_RIGHT, ys, 1.0, SUCCESS));
    chart.annotate(quadrant(0.0, xs, 0.0, ys, GRAY));
    chart.annotate(quadrant(xs, FILL_RIGHT, 0.0, ys, PRIMARY));

    let captions = [
        ((0.075, 0.92), VAlign::Top, "QUICK WINS\nLow impact, easy to change", WARNING),
        ((0.35, 0.92), VAlign::Top, "PRIORITY TARGETS\nHigh impact, easy to change", SUCCESS),
        ((0.075, 0.08), VAlign::Bottom, "LOW PRIORITY\nLow impact, hard to change", GRAY),
        ((0.35, 0.08), VAlign::Bottom, "ACCEPT/MONITOR\nHigh impact, hard to change", PRIMARY),
    ];
    for (at, valign, text, color) in captions {
        let opts = TextOptions::new(10.0, color).bold().align(HAlign::Center, valign);
        chart.annotate(Annotation::text(at, Label::new(text, opts)));
    }

    let points = QUADRANT_FEATURES.iter().map(|f| (f.importance, f.actionability)).collect();
    let colors = QUADRANT_FEATURES.iter().map(|f| category_color(f.category)).collect();
    chart.add_series(
        Series::with_data(SeriesType::Scatter, points)
            .point_colors(colors)
            .marker(Marker::new(MarkerShape::Circle, 7.0).with_edge(WHITE, 2.0)),
    );

    for f in &QUADRANT_FEATURES {
        let upper = f.actionability > ACTIONABILITY_SPLIT;
        let (offset, valign) = if upper { ((5.0, 5.0), VAlign::Bottom) } else { ((5.0, -15.0), VAlign::Top) };
        let opts = TextOptions::new(9.0, ink).align(HAlign::Left, valign);
        chart.annotate(Annotation::text_offset(
            (f.importance, f.actionability),
            offset,
            Label::new(f.name.replace('_', "\n"), opts),
        ));
    }
    chart
}

pub fn render(cfg: &Config) -> Result<PathBuf> {
    emit(cfg, FILE, SIZE_IN, &build(cfg))
}
