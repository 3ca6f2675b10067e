// File: crates/churn-charts/src/charts/risk_distribution.rs
// Summary: Customer count per risk tier with the high-risk half shaded and called out.

use std::path::PathBuf;

use anyhow::Result;
use chart_core::{with_alpha, Annotation, Axis, BoxStyle, Chart, Insets, Label, Series};

use super::{above, emit};
use crate::config::Config;
use crate::data::{customer_share, high_risk_customers, total_customers, CLV_AT_RISK, RISK_TIERS};
use crate::labels::{millions, thousands};
use crate::palette::{CRITICAL, DANGER, SUCCESS, WARNING, WHITE};

pub const FILE: &str = "01_risk_distribution.png";
const SIZE_IN: (f32, f32) = (10.0, 6.0);

pub fn build(cfg: &Config) -> Chart {
    let ink = cfg.theme.axis_label;
    let counts: Vec<f64> = RISK_TIERS.iter().map(|t| t.count as f64).collect();
    let names: Vec<String> = RISK_TIERS.iter().map(|t| t.tick_label()).collect();
    let max = counts.iter().copied().fold(0.0, f64::max);

    let mut chart = Chart::new().with_title(format!(
        "Customer Risk Distribution (n={})",
        thousands(total_customers() as u64)
    ));
    chart.insets = Insets::new(80, 24, 40, 72);
    chart.x_axis = Axis::categories("Risk Tier (Churn Probability)", &names);
    chart.y_axis = Axis::new("Number of Customers", 0.0, max * 1.25);

    // shade the high-risk half of the plot
    chart.annotate(Annotation::HSpan { y0: 0.0, y1: max * 1.15, x_frac: (0.5, 1.0), fill: with_alpha(DANGER, 0.1) });

    chart.add_series(
        Series::bars(&counts)
            .point_colors(vec![SUCCESS, WARNING, DANGER, CRITICAL])
            .edge(WHITE, 2.0),
    );

    for (i, tier) in RISK_TIERS.iter().enumerate() {
        let text = format!("{}\n({:.1}%)", thousands(tier.count as u64), customer_share(tier.count));
        chart.annotate(Annotation::text_offset(
            (i as f64, tier.count as f64),
            (0.0, 5.0),
            Label::new(text, above(11.0, ink).bold()),
        ));
    }

    let high = high_risk_customers();
    let callout = format!(
        "High-Risk Zone\n{} customers ({:.1}%)\n{} CLV at risk",
        thousands(high as u64),
        customer_share(high),
        millions(CLV_AT_RISK)
    );
    chart.annotate(Annotation::text(
        (2.5, 1500.0),
        Label::new(callout, above(10.0, ink)).boxed(BoxStyle::new(WHITE, Some(DANGER)).pad(5.0)),
    ));
    chart
}

pub fn render(cfg: &Config) -> Result<PathBuf> {
    let chart = build(cfg);
    log::debug!("risk tiers: {} customers, {} high risk", total_customers(), high_risk_customers());
    emit(cfg, FILE, SIZE_IN, &chart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_risk_callout_is_plain_text_in_a_danger_box() {
        let cfg = Config::default();
        let chart = build(&cfg);
        let label = chart
            .annotations
            .iter()
            .find_map(|a| match a {
                Annotation::Text { label, .. } if label.text.starts_with("High-Risk Zone") => Some(label),
                _ => None,
            })
            .expect("callout present");
        assert_eq!(label.text, "High-Risk Zone\n2,825 customers (47.1%)\n$2.54M CLV at risk");
        assert_eq!(label.opts.size, 10.0);
        assert!(!label.opts.bold);
        assert_eq!(label.opts.color, cfg.theme.axis_label);
        let frame = label.boxed.expect("boxed callout");
        assert_eq!(frame.stroke, Some(DANGER));
        assert_eq!(frame.fill, WHITE);
    }
}
