// File: crates/churn-charts/src/charts/executive_summary.rs
// Summary: Six-panel dashboard combining risk, timing, A/B, model, ROI and business outcomes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::{
    with_alpha, Annotation, Axis, Chart, Figure, HAlign, Insets, Label, LineStyle, Note, Series, TextOptions, VAlign,
};

use super::ab_test::variant_color;
use super::{above, emit};
use crate::config::Config;
use crate::data::{
    best_roi, control, selected_threshold, winning_variant, AB_VARIANTS, CHANNEL_ROI, CLASSIFICATION_AUC,
    CLV_AT_RISK, CUSTOMERS_SAVED, OPTIMAL_WINDOW, REVENUE_PROTECTED_K, RISK_TIERS, SURVIVAL_C_INDEX,
};
use crate::labels::{dollars, millions, p_value};
use crate::palette::{CRITICAL, DANGER, GRAY, LIGHT_BLUE, LIGHT_GREEN, PRIMARY, SUCCESS, WARNING, WHITE};

pub const FILE: &str = "Executive_summary.png";
const SIZE_IN: (f32, f32) = (16.0, 10.0);
const PANEL_TITLE_SIZE: f32 = 12.0;

fn panel(title: &str) -> Chart {
    let mut chart = Chart::new().with_title(title);
    chart.title_size = Some(PANEL_TITLE_SIZE);
    chart.insets = Insets::new(64, 16, 32, 48);
    chart
}

fn risk_panel() -> Chart {
    let names: Vec<&str> = RISK_TIERS.iter().map(|t| t.name).collect();
    let counts: Vec<f64> = RISK_TIERS.iter().map(|t| t.count as f64).collect();
    let max = counts.iter().copied().fold(0.0, f64::max);

    let mut chart = panel("Risk Distribution");
    chart.x_axis = Axis::categories("", &names);
    chart.y_axis = Axis::new("Customers", 0.0, max * 1.05);
    chart.add_series(
        Series::bars(&counts)
            .point_colors(vec![SUCCESS, WARNING, DANGER, CRITICAL])
            .edge(WHITE, 1.0),
    );
    chart.annotate(Annotation::text(
        (2.5, 1400.0),
        Label::new(format!("{}\nat risk", millions(CLV_AT_RISK)), above(10.0, DANGER).bold()),
    ));
    chart
}

fn window_panel(cfg: &Config) -> Chart {
    let ink = cfg.theme.axis_label;
    let (start, end) = OPTIMAL_WINDOW;

    let mut chart = panel("Optimal Intervention Window");
    chart.insets = Insets::new(24, 16, 32, 48);
    chart.x_axis = Axis::new("Days", 0.0, 120.0);
    chart.y_axis = Axis::new("", 0.0, 1.0).with_ticks(Vec::new());

    chart.annotate(Annotation::hline(0.5, LineStyle::solid(with_alpha(GRAY, 0.3), 3.0)));
    chart.annotate(Annotation::vspan(0.0, start, with_alpha(WARNING, 0.3)));
    chart.annotate(Annotation::vspan(start, end, with_alpha(SUCCESS, 0.3)));
    chart.annotate(Annotation::vspan(end, 120.0, with_alpha(DANGER, 0.3)));

    chart.annotate(Annotation::text((start / 2.0, 0.7), Label::new("Too Early", above(10.0, WARNING))));
    chart.annotate(Annotation::text(((start + end) / 2.0, 0.7), Label::new("OPTIMAL", above(12.0, SUCCESS).bold())));
    chart.annotate(Annotation::text(((end + 120.0) / 2.0, 0.7), Label::new("Too Late", above(10.0, DANGER))));
    chart.annotate(Annotation::text(
        ((start + end) / 2.0, 0.3),
        Label::new(format!("Day {start:.0}-{end:.0}"), above(11.0, ink)),
    ));
    chart
}

fn ab_panel() -> Result<Chart> {
    let names: Vec<&str> = AB_VARIANTS.iter().map(|v| v.name).collect();
    let rates: Vec<f64> = AB_VARIANTS.iter().map(|v| v.churn_rate).collect();
    let baseline = control().churn_rate;
    // significant arms other than the winner are shown in the neutral blue
    let (winner_idx, winner) = winning_variant().context("no significant variant")?;
    let colors = AB_VARIANTS
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let c = variant_color(v);
            if c == SUCCESS && i != winner_idx { PRIMARY } else { c }
        })
        .collect();

    let mut chart = panel("A/B Test Results");
    chart.insets = Insets::new(72, 16, 32, 48);
    chart.x_axis = Axis::new("Churn Rate (%)", 0.0, baseline * 1.05);
    chart.y_axis = Axis::categories("", &names).inverted();
    chart.add_series(Series::hbars(&rates).point_colors(colors).edge(WHITE, 1.0));
    chart.annotate(Annotation::vline(baseline, LineStyle::dashed(with_alpha(DANGER, 0.7), 1.5)));

    let p = winner.p_value.map(|p| if p < 0.001 { "p < 0.0001".to_string() } else { p_value(p) }).unwrap_or_default();
    let text = format!("Winner: {:.1}% lift\n{p}", winner.lift(baseline));
    let opts = TextOptions::new(9.0, SUCCESS).bold().align(HAlign::Left, VAlign::Bottom);
    chart.annotate(Annotation::arrow(
        (14.0, winner_idx as f64 + 0.5),
        (winner.churn_rate, winner_idx as f64),
        SUCCESS,
        Label::new(text, opts),
    ));
    Ok(chart)
}

fn roi_panel() -> Chart {
    let names: Vec<&str> = CHANNEL_ROI.iter().map(|c| c.channel).collect();
    let roi: Vec<f64> = CHANNEL_ROI.iter().map(|c| c.roi).collect();
    let best = best_roi();

    let mut chart = panel("Channel ROI");
    chart.x_axis = Axis::categories("", &names);
    chart.y_axis = Axis::new("ROI (×)", 0.0, 180.0);
    chart.add_series(
        Series::bars(&roi)
            .point_colors(vec![SUCCESS, PRIMARY, PRIMARY, WARNING])
            .edge(WHITE, 1.0),
    );
    chart.annotate(Annotation::text((0.0, 165.0), Label::new(format!("{:.1}×", best.roi), above(11.0, SUCCESS).bold())));
    chart
}

fn metrics_note() -> Note {
    let t = selected_threshold();
    let body = format!(
        "MODEL METRICS\n(Gating Checks)\n\nClassification AUC: {CLASSIFICATION_AUC:.4}\nSurvival C-Index: {SURVIVAL_C_INDEX:.4}\nThreshold: {}\nF1 Score: {:.3}",
        t.threshold, t.f1
    );
    Note::new(body, with_alpha(LIGHT_BLUE, 0.3)).with_title("Model Performance")
}

fn impact_note() -> Result<Note> {
    let baseline = control().churn_rate;
    let (_, winner) = winning_variant().context("no significant variant")?;
    let best = best_roi();
    let body = format!(
        "BUSINESS IMPACT\n\nCLV at Risk: {}\nCustomers Saved: ~{CUSTOMERS_SAVED}\nRevenue Protected: ~${REVENUE_PROTECTED_K:.0}K\n\nBest Lift: {} (+{:.1}%)\nBest ROI: {} ({:.1}×)",
        dollars(CLV_AT_RISK),
        winner.name,
        winner.lift(baseline),
        best.channel,
        best.roi
    );
    Ok(Note::new(body, with_alpha(LIGHT_GREEN, 0.3)).with_title("Business Outcomes"))
}

pub fn build(cfg: &Config) -> Result<Figure> {
    let mut fig = Figure::new(2, 3)
        .with_title("Proactive Churn Prevention System: Executive Summary")
        .with_gaps(48.0, 48.0);
    fig.title_size = Some(16.0);

    fig.add(0, 0, risk_panel());
    fig.add(0, 1, window_panel(cfg));
    fig.add(0, 2, ab_panel()?);
    fig.add(1, 0, metrics_note());
    fig.add(1, 1, roi_panel());
    fig.add(1, 2, impact_note()?);
    Ok(fig)
}

pub fn render(cfg: &Config) -> Result<PathBuf> {
    let fig = build(cfg)?;
    emit(cfg, FILE, SIZE_IN, &fig)
}
