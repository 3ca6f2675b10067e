// File: crates/churn-charts/src/survival.rs
// Summary: Synthetic 120-day survival curve calibrated to 79% retention at the horizon.

use chart_core::binning::{cumsum, reverse_cummax};

use crate::rng::SampleRng;

pub const HORIZON_DAYS: usize = 120;
/// Share of customers still active on the last observed day.
pub const SURVIVAL_AT_HORIZON: f64 = 0.79;
pub const NOISE_STD: f64 = 0.005;

/// Day and survival % for the annotated points on the curve.
pub const MILESTONES: [(f64, f64); 3] = [(30.0, 92.0), (60.0, 87.0), (120.0, 79.0)];

/// Constant hazard giving `SURVIVAL_AT_HORIZON` at `HORIZON_DAYS`.
pub fn hazard_rate() -> f64 {
    -SURVIVAL_AT_HORIZON.ln() / HORIZON_DAYS as f64
}

#[derive(Clone, Debug, PartialEq)]
pub struct SurvivalCurve {
    pub days: Vec<f64>,
    /// Survival probability per day, in [0, 1] and non-increasing.
    pub survival: Vec<f64>,
}

impl SurvivalCurve {
    /// Survival as percentages.
    pub fn percent(&self) -> Vec<f64> {
        self.survival.iter().map(|s| s * 100.0).collect()
    }

    /// Percentage band `±half_width` around the curve, clipped to [0, 100].
    pub fn band(&self, half_width: f64) -> (Vec<f64>, Vec<f64>) {
        let pct = self.percent();
        let lower = pct.iter().map(|p| (p - half_width).clamp(0.0, 100.0)).collect();
        let upper = pct.iter().map(|p| (p + half_width).clamp(0.0, 100.0)).collect();
        (lower, upper)
    }
}

/// Exponential decay plus a small seeded random walk, pinned to 1.0 on day 0
/// and flattened into a non-increasing sequence.
pub fn survival_curve(seed: u64) -> SurvivalCurve {
    let lambda = hazard_rate();
    let days: Vec<f64> = (0..=HORIZON_DAYS).map(|d| d as f64).collect();

    let mut rng = SampleRng::new(seed).with_name("survival");
    let mut walk = rng.normals(0.0, NOISE_STD, days.len());
    cumsum(&mut walk);

    let mut survival: Vec<f64> = days
        .iter()
        .zip(&walk)
        .map(|(d, w)| ((-lambda * d).exp() + w * 0.1 * 0.01).clamp(0.0, 1.0))
        .collect();
    survival[0] = 1.0;
    reverse_cummax(&mut survival);

    log::debug!(
        "{} curve: lambda={lambda:.6}, day {} = {:.4}",
        rng.name,
        HORIZON_DAYS,
        survival[HORIZON_DAYS]
    );
    SurvivalCurve { days, survival }
}
