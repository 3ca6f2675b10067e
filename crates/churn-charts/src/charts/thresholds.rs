// File: crates/churn-charts/src/charts/thresholds.rs
// Summary: Precision, recall and F1 across decision thresholds with the selected threshold marked.

use std::path::PathBuf;

use anyhow::Result;
use chart_core::{
    with_alpha, Annotation, Axis, BoxStyle, Chart, HAlign, Label, LegendPosition, LineStyle, Marker, MarkerShape,
    Series, SeriesType, TextOptions, VAlign,
};

use super::emit;
use crate::config::Config;
use crate::data::{selected_threshold, THRESHOLDS};
use crate::palette::{DANGER, PRIMARY, SECONDARY, SUCCESS, WHITE};

pub const FILE: &str = "03_threshold_analysis.png";
const SIZE_IN: (f32, f32) = (10.0, 6.0);

fn metric_line(values: Vec<(f64, f64)>, color: chart_core::Color, shape: MarkerShape, label: &str) -> Series {
    Series::with_data(SeriesType::Line, values)
        .color(color)
        .stroke_width(2.0)
        .marker(Marker::new(shape, 4.0))
        .label(label)
}

pub fn build(cfg: &Config) -> Chart {
    let ink = cfg.theme.axis_label;
    let thresholds: Vec<f64> = THRESHOLDS.iter().map(|r| r.threshold).collect();
    let precision = THRESHOLDS.iter().map(|r| (r.threshold, r.precision)).collect();
    let recall = THRESHOLDS.iter().map(|r| (r.threshold, r.recall)).collect();
    let f1 = THRESHOLDS.iter().map(|r| (r.threshold, r.f1 * 100.0)).collect();

    let mut chart = Chart::new().with_title("Precision-Recall Trade-off by Threshold");
    chart.x_axis = Axis::new("Classification Threshold", 0.25, 0.75).with_ticks(thresholds);
    chart.y_axis = Axis::new("Score (%)", 0.0, 105.0);
    chart.legend = Some(LegendPosition::CenterRight);

    chart.add_series(metric_line(precision, PRIMARY, MarkerShape::Circle, "Precision (%)"));
    chart.add_series(metric_line(recall, SUCCESS, MarkerShape::Square, "Recall (%)"));
    chart.add_series(metric_line(f1, SECONDARY, MarkerShape::Triangle, "F1 Score (×100)"));

    let best = selected_threshold();
    chart.annotate(Annotation::vline(best.threshold, LineStyle::dashed(with_alpha(DANGER, 0.7), 2.0)));
    let dot = Marker::new(MarkerShape::Circle, 6.0).with_edge(WHITE, 2.0);
    for y in [best.precision, best.recall, best.f1 * 100.0] {
        chart.annotate(Annotation::point((best.threshold, y), dot, DANGER));
    }

    let text = format!(
        "Selected: {}\nBest F1 ({:.3})\nRecall: {:.1}%",
        best.threshold, best.f1, best.recall
    );
    let opts = TextOptions::new(10.0, ink).align(HAlign::Left, VAlign::Bottom);
    chart.annotate(Annotation::arrow(
        (best.threshold + 0.08, 75.0),
        (best.threshold, best.recall),
        DANGER,
        Label::new(text, opts).boxed(BoxStyle::new(WHITE, Some(DANGER))),
    ));
    chart
}

pub fn render(cfg: &Config) -> Result<PathBuf> {
    emit(cfg, FILE, SIZE_IN, &build(cfg))
}
