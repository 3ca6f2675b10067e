// File: crates/churn-charts/src/timing.rs
// Summary: Synthetic predicted-days-until-churn sample for the high-risk cohort and its binning.

use chart_core::binning::{arange, histogram, percentile};

use crate::data::{OPTIMAL_WINDOW, TIMING_BIN_DAYS, TIMING_CLUSTERS, TIMING_RANGE};
use crate::rng::SampleRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimingZone {
    TooEarly,
    Optimal,
    TooLate,
}

impl TimingZone {
    /// Zone of a bin by its left edge.
    pub fn for_day(day: f64) -> Self {
        let (start, end) = OPTIMAL_WINDOW;
        if day < start {
            TimingZone::TooEarly
        } else if day < end {
            TimingZone::Optimal
        } else {
            TimingZone::TooLate
        }
    }
}

/// Draw every cluster in order from one seeded stream, then clip to the observed range.
pub fn predicted_days(seed: u64) -> Vec<f64> {
    let mut rng = SampleRng::new(seed).with_name("timing");
    let (lo, hi) = TIMING_RANGE;
    let days: Vec<f64> = TIMING_CLUSTERS
        .iter()
        .flat_map(|c| rng.normals(c.mean, c.std_dev, c.n))
        .map(|d| d.clamp(lo, hi))
        .collect();
    log::debug!("{} sample: {} predicted days from {} clusters", rng.name, days.len(), TIMING_CLUSTERS.len());
    days
}

/// Bin edges 30, 33, ..., 120.
pub fn bin_edges() -> Vec<f64> {
    let (lo, hi) = TIMING_RANGE;
    arange(lo, hi + 1.0, TIMING_BIN_DAYS)
}

/// Histogram of a sample together with the edges it was binned on.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingHistogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl TimingHistogram {
    pub fn new(sample: &[f64]) -> Self {
        let edges = bin_edges();
        let counts = histogram(sample, &edges);
        Self { edges, counts }
    }

    pub fn zones(&self) -> Vec<TimingZone> {
        self.edges.iter().take(self.counts.len()).map(|&e| TimingZone::for_day(e)).collect()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// 25th, 50th and 75th percentiles of the sample.
pub fn quartiles(sample: &[f64]) -> Option<(f64, f64, f64)> {
    Some((percentile(sample, 25.0)?, percentile(sample, 50.0)?, percentile(sample, 75.0)?))
}
