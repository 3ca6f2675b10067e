// File: crates/churn-charts/src/config.rs
// Summary: Output location, resolution and theme shared by every chart procedure.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{RenderOptions, Theme};

pub const OUTPUT_DIR: &str = "viz";
pub const DPI: f32 = 150.0;
/// Seed for every synthetic sample (survival noise, timing clusters).
pub const SEED: u64 = 42;

#[derive(Clone, Debug)]
pub struct Config {
    pub out_dir: PathBuf,
    pub dpi: f32,
    pub seed: u64,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(OUTPUT_DIR), dpi: DPI, seed: SEED, theme: Theme::whitegrid() }
    }
}

impl Config {
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    /// Render options for a figure of `w_in` x `h_in` inches.
    pub fn render_options(&self, w_in: f32, h_in: f32) -> RenderOptions {
        let mut opts = RenderOptions::from_inches(w_in, h_in, self.dpi);
        opts.background = self.theme.background;
        opts.theme = self.theme;
        opts
    }

    pub fn path_for(&self, file: &str) -> PathBuf {
        self.out_dir.join(file)
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Create the output directory if needed.
    pub fn ensure_out_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("creating output directory {}", self.out_dir.display()))
    }
}
