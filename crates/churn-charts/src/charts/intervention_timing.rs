// File: crates/churn-charts/src/charts/intervention_timing.rs
// Summary: Histogram of predicted days until churn, colored by intervention zone.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::{
    with_alpha, Annotation, Axis, BoxStyle, Chart, HAlign, Label, LegendPosition, LineStyle, Series, TextOptions,
    VAlign,
};

use super::{above, emit};
use crate::config::Config;
use crate::data::{OPTIMAL_WINDOW, PEAK_DAY, TIMING_RANGE};
use crate::labels::thousands;
use crate::palette::{DANGER, GRAY, SUCCESS, WARNING, WHITE};
use crate::timing::{predicted_days, quartiles, TimingHistogram, TimingZone};

pub const FILE: &str = "06_intervention_timing.png";
const SIZE_IN: (f32, f32) = (12.0, 6.0);

fn zone_fill(zone: TimingZone) -> chart_core::Color {
    match zone {
        TimingZone::Optimal => with_alpha(SUCCESS, 0.8),
        TimingZone::TooEarly => with_alpha(WARNING, 0.5),
        TimingZone::TooLate => with_alpha(DANGER, 0.5),
    }
}

pub fn build(cfg: &Config) -> Result<Chart> {
    let ink = cfg.theme.axis_label;
    let sample = predicted_days(cfg.seed);
    let hist = TimingHistogram::new(&sample);
    let (p25, p50, p75) = quartiles(&sample).context("empty timing sample")?;
    log::debug!("timing sample: n={}, quartiles {p25:.1}/{p50:.1}/{p75:.1}", sample.len());

    let max_height = hist.max_count() as f64 * 1.1;
    let mut chart = Chart::new().with_title(format!(
        "Intervention Window Derived from Survival Model (n={} high-risk customers)",
        thousands(sample.len() as u64)
    ));
    chart.x_axis = Axis::new("Predicted Days Until Churn", 25.0, TIMING_RANGE.1);
    // headroom for the zone captions
    chart.y_axis = Axis::new("Number of High-Risk Customers", 0.0, max_height * 1.3);
    chart.legend = Some(LegendPosition::UpperLeft);

    let colors = hist.zones().into_iter().map(zone_fill).collect();
    chart.add_series(Series::histogram(&hist.edges, &hist.counts).point_colors(colors).edge(WHITE, 0.5));

    let (start, end) = OPTIMAL_WINDOW;
    for x in [start, end] {
        chart.annotate(Annotation::vline(x, LineStyle::dashed(GRAY, 2.0)));
    }
    chart.annotate(
        Annotation::vline(PEAK_DAY, LineStyle::solid(SUCCESS, 2.0)).labelled(format!("Peak (Day {PEAK_DAY:.0})")),
    );

    chart.annotate(Annotation::text(
        (30.0, max_height * 0.8),
        Label::new("TOO EARLY\nDays 0-45\nCustomer not yet\nexperiencing friction", above(10.0, WARNING).bold()),
    ));
    chart.annotate(Annotation::text(
        (70.0, max_height * 0.9),
        Label::new("OPTIMAL WINDOW\nDays 45-95\nCustomer receptive,\nhasn't decided to leave", above(11.0, SUCCESS).bold())
            .boxed(BoxStyle::new(WHITE, Some(SUCCESS)).pad(3.0)),
    ));
    chart.annotate(Annotation::text(
        (107.0, max_height * 0.8),
        Label::new("TOO LATE\nDays 95+\n>50% already\nchurned", above(10.0, DANGER).bold()),
    ));

    let text = format!("25th: Day {p25:.0}\n50th: Day {p50:.0}\n75th: Day {p75:.0}");
    let opts = TextOptions::new(9.0, ink).align(HAlign::Left, VAlign::Bottom);
    chart.annotate(Annotation::text(
        (108.0, max_height * 0.5),
        Label::new(text, opts).boxed(BoxStyle::new(WHITE, Some(GRAY)).pad(3.0)),
    ));
    Ok(chart)
}

pub fn render(cfg: &Config) -> Result<PathBuf> {
    let chart = build(cfg)?;
    emit(cfg, FILE, SIZE_IN, &chart)
}
