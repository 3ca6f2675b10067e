// File: crates/chart-core/tests/binning.rs
// Purpose: Histogram, percentile and monotone-accumulation helpers.

use chart_core::binning::{arange, cumsum, histogram, percentile, reverse_cummax};

#[test]
fn arange_excludes_stop() {
    let edges = arange(30.0, 121.0, 3.0);
    assert_eq!(edges.len(), 31);
    assert_eq!(edges[0], 30.0);
    assert_eq!(edges[30], 120.0);
    assert!(arange(5.0, 5.0, 1.0).is_empty());
}

#[test]
fn histogram_closes_last_bin() {
    let edges = [0.0, 1.0, 2.0, 3.0];
    let counts = histogram(&[0.0, 0.5, 1.0, 2.9, 3.0, 3.1, -0.1], &edges);
    assert_eq!(counts, vec![2, 1, 2]);
}

#[test]
fn percentile_interpolates_linearly() {
    let v = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(percentile(&v, 50.0), Some(2.5));
    assert_eq!(percentile(&v, 0.0), Some(1.0));
    assert_eq!(percentile(&v, 100.0), Some(4.0));
    assert!((percentile(&v, 25.0).unwrap() - 1.75).abs() < 1e-12);
    assert_eq!(percentile(&[], 50.0), None);
}

#[test]
fn reverse_cummax_is_non_increasing() {
    let mut v = vec![1.0, 0.9, 0.95, 0.8, 0.85, 0.7];
    reverse_cummax(&mut v);
    assert_eq!(v, vec![1.0, 0.95, 0.95, 0.85, 0.85, 0.7]);
    assert!(v.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn cumsum_accumulates() {
    let mut v = vec![1.0, -2.0, 0.5];
    cumsum(&mut v);
    assert_eq!(v, vec![1.0, -1.0, -0.5]);
}
