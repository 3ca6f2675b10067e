// File: crates/churn-charts/tests/curves.rs
// Purpose: Properties of the seeded survival curve and timing sample.

use churn_charts::config::SEED;
use churn_charts::data::{OPTIMAL_WINDOW, TIMING_RANGE};
use churn_charts::survival::{hazard_rate, survival_curve, HORIZON_DAYS, SURVIVAL_AT_HORIZON};
use churn_charts::timing::{bin_edges, predicted_days, quartiles, TimingHistogram, TimingZone};

#[test]
fn hazard_hits_target_at_horizon() {
    let s = (-hazard_rate() * HORIZON_DAYS as f64).exp();
    assert!((s - SURVIVAL_AT_HORIZON).abs() < 1e-12);
}

#[test]
fn survival_is_monotone_and_bounded() {
    let curve = survival_curve(SEED);
    assert_eq!(curve.days.len(), HORIZON_DAYS + 1);
    assert_eq!(curve.survival[0], 1.0);
    assert!(curve.survival.iter().all(|s| (0.0..=1.0).contains(s)));
    assert!(curve.survival.windows(2).all(|w| w[1] <= w[0]));
    // noise is tiny next to the decay
    assert!((curve.survival[HORIZON_DAYS] - SURVIVAL_AT_HORIZON).abs() < 0.01);
}

#[test]
fn survival_is_reproducible() {
    assert_eq!(survival_curve(SEED), survival_curve(SEED));
}

#[test]
fn band_is_clipped_to_percent_range() {
    let (lower, upper) = survival_curve(SEED).band(2.0);
    assert_eq!(upper[0], 100.0);
    assert!((lower[0] - 98.0).abs() < 1e-9);
    assert!(upper.iter().all(|u| *u <= 100.0));
}

#[test]
fn timing_sample_is_reproducible_and_clipped() {
    let a = predicted_days(SEED);
    assert_eq!(a, predicted_days(SEED));
    assert_eq!(a.len(), 2825);
    let (lo, hi) = TIMING_RANGE;
    assert!(a.iter().all(|d| (lo..=hi).contains(d)));
}

#[test]
fn timing_median_is_inside_optimal_window() {
    let (p25, p50, p75) = quartiles(&predicted_days(SEED)).expect("non-empty");
    let (start, end) = OPTIMAL_WINDOW;
    assert!(p25 <= p50 && p50 <= p75);
    assert!(p50 >= start && p50 < end, "median {p50}");
}

#[test]
fn histogram_bins_every_sample() {
    let sample = predicted_days(SEED);
    let hist = TimingHistogram::new(&sample);
    assert_eq!(bin_edges().first(), Some(&30.0));
    assert_eq!(bin_edges().last(), Some(&120.0));
    assert_eq!(hist.counts.len(), 30);
    assert_eq!(hist.counts.iter().sum::<usize>(), sample.len());

    let zones = hist.zones();
    assert_eq!(zones[0], TimingZone::TooEarly);
    assert_eq!(zones[5], TimingZone::Optimal); // left edge 45
    assert_eq!(zones[22], TimingZone::TooLate); // left edge 96
}
