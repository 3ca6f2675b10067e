// File: crates/churn-charts/src/charts/ab_test.rs
// Summary: Churn rate per A/B arm against the control baseline, with lift and significance.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::{Annotation, Axis, Chart, Insets, Label, LegendPosition, LineStyle, Series};

use super::{above, emit};
use crate::config::Config;
use crate::data::{control, winning_variant, AbVariant, AB_VARIANTS, BONFERRONI_ALPHA, CUSTOMERS_PER_ARM};
use crate::labels::p_value;
use crate::palette::{DANGER, GRAY, SUCCESS, WARNING, WHITE};

pub const FILE: &str = "08_ab_test_results.png";
const SIZE_IN: (f32, f32) = (10.0, 6.0);

pub fn variant_color(v: &AbVariant) -> chart_core::Color {
    match (v.p_value, v.significant) {
        (None, _) => GRAY,
        (Some(_), true) => SUCCESS,
        (Some(_), false) => WARNING,
    }
}

pub fn build(cfg: &Config) -> Result<Chart> {
    let ink = cfg.theme.axis_label;
    let baseline = control().churn_rate;
    let names: Vec<&str> = AB_VARIANTS.iter().map(|v| v.name).collect();
    let rates: Vec<f64> = AB_VARIANTS.iter().map(|v| v.churn_rate).collect();

    let mut chart = Chart::new().with_title(format!(
        "A/B Test Results: Churn Rate by Intervention\n(Bonferroni-corrected α = {BONFERRONI_ALPHA})"
    ));
    chart.insets = Insets::new(72, 24, 60, 56);
    chart.x_axis = Axis::categories(format!("Intervention Variant (n={CUSTOMERS_PER_ARM} each)"), &names);
    chart.y_axis = Axis::new("Churn Rate (%)", 0.0, 28.0);
    chart.legend = Some(LegendPosition::UpperRight);

    chart.add_series(
        Series::bars(&rates)
            .point_colors(AB_VARIANTS.iter().map(variant_color).collect())
            .edge(WHITE, 2.0),
    );
    chart.annotate(
        Annotation::hline(baseline, LineStyle::dashed(DANGER, 2.0))
            .labelled(format!("Control baseline ({baseline}%)")),
    );

    for (i, v) in AB_VARIANTS.iter().enumerate() {
        let x = i as f64;
        chart.annotate(Annotation::text_offset(
            (x, v.churn_rate),
            (0.0, 5.0),
            Label::new(format!("{:.1}%", v.churn_rate), above(12.0, ink).bold()),
        ));
        // control has no test of its own
        let Some(p) = v.p_value else { continue };
        let sig = if v.significant { "✓ Significant" } else { "✗ Not sig." };
        let text = format!("+{:.1}% lift\n{}\n{sig}", v.lift(baseline), p_value(p));
        chart.annotate(Annotation::text((x, 2.0), Label::new(text, above(9.0, variant_color(v)))));
    }

    let (idx, winner) = winning_variant().context("no significant variant")?;
    chart.annotate(
        Annotation::arrow(
            (idx as f64, 4.0),
            (idx as f64, winner.churn_rate),
            SUCCESS,
            Label::new("WINNER", above(11.0, SUCCESS).bold()),
        )
        .arrow_width(2.0),
    );
    Ok(chart)
}

pub fn render(cfg: &Config) -> Result<PathBuf> {
    let chart = build(cfg)?;
    emit(cfg, FILE, SIZE_IN, &chart)
}
