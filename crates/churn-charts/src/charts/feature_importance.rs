// File: crates/churn-charts/src/charts/feature_importance.rs
// Summary: Side-by-side ranking of features by raw coefficient and by actionability-weighted score.

use std::path::PathBuf;

use anyhow::Result;
use chart_core::{Annotation, Axis, Chart, Color, Figure, HAlign, Insets, Label, Series, TextOptions, VAlign};

use super::emit;
use crate::config::Config;
use crate::data::FEATURES;
use crate::palette::{GRAY, PRIMARY, SUCCESS};

pub const FILE: &str = "04_feature_importance_comparison.png";
const SIZE_IN: (f32, f32) = (14.0, 6.0);
/// Features the business can move most, highlighted in the weighted ranking.
const PRIORITY_FEATURES: [&str; 2] = ["engagement_score", "feature_usage_pct"];

/// `(value, name)` pairs sorted descending by value, then by name.
pub fn ranked(score: impl Fn(&crate::data::FeatureWeight) -> f64) -> Vec<(f64, &'static str)> {
    let mut rows: Vec<(f64, &'static str)> = FEATURES.iter().map(|f| (score(f), f.name)).collect();
    rows.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| b.1.cmp(a.1)));
    rows
}

struct Ranking<'a> {
    title: &'a str,
    x_label: &'a str,
    rows: Vec<(f64, &'static str)>,
    colors: Vec<Color>,
    /// Note anchored beside the top bar: (x, text, color).
    note: (f64, &'a str, Color),
}

fn ranking_panel(cfg: &Config, r: Ranking) -> Chart {
    let ink = cfg.theme.axis_label;
    let values: Vec<f64> = r.rows.iter().map(|(v, _)| *v).collect();
    let names: Vec<&str> = r.rows.iter().map(|(_, n)| *n).collect();
    let max = values.iter().copied().fold(0.0, f64::max);

    let mut chart = Chart::new().with_title(r.title);
    chart.title_size = Some(12.0);
    chart.insets = Insets::new(132, 16, 32, 52);
    chart.x_axis = Axis::new(r.x_label, 0.0, max * 1.05);
    chart.y_axis = Axis::categories("", &names).inverted();
    chart.add_series(Series::hbars(&values).point_colors(r.colors));

    let opts = TextOptions::new(9.0, ink).align(HAlign::Left, VAlign::Middle);
    for (i, v) in values.iter().enumerate() {
        chart.annotate(Annotation::text_offset((*v, i as f64), (3.0, 0.0), Label::new(format!("{v:.2}"), opts)));
    }
    let (x, text, color) = r.note;
    let note_opts = TextOptions::new(9.0, color).align(HAlign::Left, VAlign::Middle);
    chart.annotate(Annotation::text((x, 0.0), Label::new(text, note_opts)));
    chart
}

pub fn build(cfg: &Config) -> Figure {
    let traditional = ranked(|f| f.coefficient);
    let combined = ranked(|f| f.combined());

    let trad_colors = traditional.iter().map(|(_, n)| if n.contains("tenure") { GRAY } else { PRIMARY }).collect();
    let comb_colors = combined
        .iter()
        .map(|(_, n)| if PRIORITY_FEATURES.contains(n) { SUCCESS } else { PRIMARY })
        .collect();

    let mut fig = Figure::new(1, 2).with_title("Feature Importance: Traditional vs Business-Focused");
    fig.title_size = Some(14.0);
    fig.add(0, 0, ranking_panel(cfg, Ranking {
        title: "Traditional Feature Importance",
        x_label: "Coefficient (absolute)",
        rows: traditional,
        colors: trad_colors,
        note: (0.45, "Cannot change ↓", GRAY),
    }));
    fig.add(0, 1, ranking_panel(cfg, Ranking {
        title: "Actionability-Weighted Importance",
        x_label: "Combined Score (coefficient × actionability)",
        rows: combined,
        colors: comb_colors,
        note: (0.5, "Priority targets ↓", SUCCESS),
    }));
    fig
}

pub fn render(cfg: &Config) -> Result<PathBuf> {
    emit(cfg, FILE, SIZE_IN, &build(cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_ranking_promotes_engagement() {
        let combined = ranked(|f| f.combined());
        assert_eq!(combined[0].1, "engagement_score");
        assert!(combined.windows(2).all(|w| w[0].0 >= w[1].0));
        let traditional = ranked(|f| f.coefficient);
        assert_eq!(traditional[0].1, "tenure_months");
    }
}
