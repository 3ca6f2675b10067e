// File: crates/churn-charts/src/charts/mod.rs
// Summary: The eleven chart procedures, their fixed output names and the run-all entry point.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{Chart, Figure, HAlign, RenderOptions, RenderResult, TextOptions, VAlign};

use crate::config::Config;

pub mod ab_test;
pub mod executive_summary;
pub mod feature_importance;
pub mod intervention_roi;
pub mod intervention_timing;
pub mod lift_vs_roi;
pub mod quadrant_matrix;
pub mod revenue_impact;
pub mod risk_distribution;
pub mod survival;
pub mod thresholds;

/// One chart procedure: renders its figure into `Config::out_dir` and returns the path.
#[derive(Clone, Copy)]
pub struct ChartJob {
    pub name: &'static str,
    pub file: &'static str,
    pub render: fn(&Config) -> Result<PathBuf>,
}

/// Every chart, in output order.
pub const ALL: [ChartJob; 11] = [
    ChartJob { name: "risk distribution", file: risk_distribution::FILE, render: risk_distribution::render },
    ChartJob { name: "survival curve", file: survival::FILE, render: survival::render },
    ChartJob { name: "threshold analysis", file: thresholds::FILE, render: thresholds::render },
    ChartJob { name: "feature importance", file: feature_importance::FILE, render: feature_importance::render },
    ChartJob { name: "quadrant matrix", file: quadrant_matrix::FILE, render: quadrant_matrix::render },
    ChartJob { name: "intervention timing", file: intervention_timing::FILE, render: intervention_timing::render },
    ChartJob { name: "revenue impact", file: revenue_impact::FILE, render: revenue_impact::render },
    ChartJob { name: "A/B test results", file: ab_test::FILE, render: ab_test::render },
    ChartJob { name: "intervention ROI", file: intervention_roi::FILE, render: intervention_roi::render },
    ChartJob { name: "lift vs ROI", file: lift_vs_roi::FILE, render: lift_vs_roi::render },
    ChartJob { name: "executive summary", file: executive_summary::FILE, render: executive_summary::render },
];

/// Render every chart in order. The first failure aborts the run.
pub fn generate_all(cfg: &Config) -> Result<Vec<PathBuf>> {
    cfg.ensure_out_dir()?;
    let mut written = Vec::with_capacity(ALL.len());
    for job in &ALL {
        let path = (job.render)(cfg).with_context(|| format!("rendering {} chart", job.name))?;
        written.push(path);
    }
    log::info!("{} charts written to {}", written.len(), cfg.out_dir().display());
    Ok(written)
}

/// Anything that can be rasterized to a PNG file.
pub(crate) trait PngTarget {
    fn write_png(&self, opts: &RenderOptions, path: &Path) -> RenderResult<()>;
}

impl PngTarget for Chart {
    fn write_png(&self, opts: &RenderOptions, path: &Path) -> RenderResult<()> {
        self.render_to_png(opts, path)
    }
}

impl PngTarget for Figure {
    fn write_png(&self, opts: &RenderOptions, path: &Path) -> RenderResult<()> {
        self.render_to_png(opts, path)
    }
}

/// Write `target` as `file` at `w_in` x `h_in` inches and report it.
pub(crate) fn emit(cfg: &Config, file: &str, (w_in, h_in): (f32, f32), target: &impl PngTarget) -> Result<PathBuf> {
    let path = cfg.path_for(file);
    let opts = cfg.render_options(w_in, h_in);
    target
        .write_png(&opts, &path)
        .with_context(|| format!("writing {}", path.display()))?;
    let (w, h) = opts.pixel_size();
    log::info!("wrote {} ({w}x{h} px)", path.display());
    println!("✓ Created: {file}");
    Ok(path)
}

/// Text centered horizontally, sitting on its anchor.
pub(crate) fn above(size: f32, color: chart_core::Color) -> TextOptions {
    TextOptions::new(size, color).align(HAlign::Center, VAlign::Bottom)
}

/// Text centered on its anchor.
pub(crate) fn centered(size: f32, color: chart_core::Color) -> TextOptions {
    TextOptions::new(size, color).align(HAlign::Center, VAlign::Middle)
}
