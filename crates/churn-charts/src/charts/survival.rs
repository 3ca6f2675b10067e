// File: crates/churn-charts/src/charts/survival.rs
// Summary: 120-day survival curve with confidence band, milestone callouts and the optimal window.

use std::path::PathBuf;

use anyhow::Result;
use chart_core::{
    with_alpha, Annotation, Axis, Chart, HAlign, Insets, Label, LegendPosition, LineStyle, Marker, MarkerShape,
    Series, SeriesType, TextOptions, VAlign,
};

use super::emit;
use crate::config::Config;
use crate::data::OPTIMAL_WINDOW;
use crate::palette::{DANGER, GRAY, PRIMARY, SUCCESS};
use crate::survival::{survival_curve, HORIZON_DAYS, MILESTONES};

pub const FILE: &str = "02_survival_curves.png";
const SIZE_IN: (f32, f32) = (10.0, 6.0);
/// Half-width of the shaded band around the curve, in percentage points.
const BAND_HALF_WIDTH: f64 = 2.0;

pub fn build(cfg: &Config) -> Chart {
    let ink = cfg.theme.axis_label;
    let curve = survival_curve(cfg.seed);
    let pct = curve.percent();
    let (lower, upper) = curve.band(BAND_HALF_WIDTH);
    let points: Vec<(f64, f64)> = curve.days.iter().copied().zip(pct.iter().copied()).collect();

    let mut chart = Chart::new().with_title("Customer Survival Curve (120-Day Observation Window)");
    // milestone text runs past the last day
    chart.insets = Insets::new(72, 120, 40, 56);
    chart.x_axis = Axis::new("Days Since Observation Start", 0.0, HORIZON_DAYS as f64);
    chart.y_axis = Axis::new("Survival Probability (%)", 70.0, 102.0);
    chart.legend = Some(LegendPosition::LowerLeft);

    // fills sit under the curve
    chart.add_series(Series::with_data(SeriesType::Area, points.clone()).color(PRIMARY).alpha(0.2));
    chart.add_series(Series::band(&curve.days, &lower, &upper).color(PRIMARY).alpha(0.1));
    chart.add_series(
        Series::with_data(SeriesType::Line, points)
            .color(PRIMARY)
            .stroke_width(2.5)
            .label("Overall Survival"),
    );

    for (day, surv) in MILESTONES {
        chart.annotate(Annotation::point((day, surv), Marker::new(MarkerShape::Circle, 4.5), DANGER));
        let text = format!("Day {day:.0}: {surv:.0}% survive\n({:.0}% churned)", 100.0 - surv);
        let opts = TextOptions::new(9.0, ink).align(HAlign::Left, VAlign::Bottom);
        chart.annotate(Annotation::arrow((day + 8.0, surv + 3.0), (day, surv), GRAY, Label::new(text, opts)).arrow_width(0.5));
    }

    let (start, end) = OPTIMAL_WINDOW;
    chart.annotate(
        Annotation::vspan(start, end, with_alpha(SUCCESS, 0.15))
            .labelled(format!("Optimal Window (Day {start:.0}-{end:.0})")),
    );
    for x in [start, end] {
        chart.annotate(Annotation::vline(x, LineStyle::dashed(with_alpha(SUCCESS, 0.7), 1.5)));
    }
    chart
}

pub fn render(cfg: &Config) -> Result<PathBuf> {
    emit(cfg, FILE, SIZE_IN, &build(cfg))
}
