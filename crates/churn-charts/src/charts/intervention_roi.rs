// File: crates/churn-charts/src/charts/intervention_roi.rs
// Summary: Return on cost per intervention channel.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::{Annotation, Axis, BoxStyle, Chart, Insets, Label, Series};

use super::{above, emit};
use crate::config::Config;
use crate::data::{best_roi, roi_ratio, CHANNEL_ROI};
use crate::palette::{PRIMARY, SUCCESS, WARNING, WHITE};

pub const FILE: &str = "09_intervention_roi.png";
const SIZE_IN: (f32, f32) = (10.0, 6.0);

pub fn build(cfg: &Config) -> Result<Chart> {
    let ink = cfg.theme.axis_label;
    let names: Vec<&str> = CHANNEL_ROI.iter().map(|c| c.channel).collect();
    let roi: Vec<f64> = CHANNEL_ROI.iter().map(|c| c.roi).collect();

    let mut chart =
        Chart::new().with_title("Intervention ROI Comparison\nROI = (CLV × Absolute Lift) / Cost per Customer");
    chart.insets = Insets::new(72, 24, 60, 56);
    chart.x_axis = Axis::categories("Intervention Channel", &names);
    chart.y_axis = Axis::new("ROI (× return on cost)", 0.0, 180.0);

    chart.add_series(
        Series::bars(&roi)
            .point_colors(vec![SUCCESS, PRIMARY, PRIMARY, WARNING])
            .edge(WHITE, 2.0),
    );
    for (i, c) in CHANNEL_ROI.iter().enumerate() {
        let text = format!("{:.1}x\n(${:.1}/customer)", c.roi, c.cost_per_customer);
        chart.annotate(Annotation::text_offset((i as f64, c.roi), (0.0, 5.0), Label::new(text, above(11.0, ink).bold())));
    }

    let best = best_roi();
    let best_idx = CHANNEL_ROI.iter().position(|c| c.channel == best.channel).unwrap_or(0);
    let ratio = roi_ratio(best.channel, "Call").context("missing Call channel")?;
    let text = format!("BEST ROI\n{ratio:.0}x more efficient\nthan Call");
    chart.annotate(
        Annotation::arrow(
            (best_idx as f64 + 1.2, 140.0),
            (best_idx as f64, best.roi),
            SUCCESS,
            Label::new(text, above(10.0, SUCCESS).bold()).boxed(BoxStyle::new(WHITE, Some(SUCCESS)).pad(3.0)),
        )
        .arrow_width(2.0),
    );
    Ok(chart)
}

pub fn render(cfg: &Config) -> Result<PathBuf> {
    let chart = build(cfg)?;
    emit(cfg, FILE, SIZE_IN, &chart)
}
