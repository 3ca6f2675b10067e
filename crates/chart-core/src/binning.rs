// File: crates/chart-core/src/binning.rs
// Summary: Histogram binning and order-statistic helpers for distribution charts.

/// Evenly spaced values `start, start + step, ...` strictly below `stop`.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || stop <= start { return Vec::new(); }
    let n = ((stop - start) / step).ceil() as usize;
    (0..n).map(|i| start + step * i as f64).collect()
}

/// Count `values` into the bins described by ascending `edges`.
/// Bins are half-open `[e_i, e_{i+1})` except the last, which also takes values
/// equal to the final edge. Values outside `[edges[0], edges[n-1]]` are dropped.
pub fn histogram(values: &[f64], edges: &[f64]) -> Vec<usize> {
    if edges.len() < 2 { return Vec::new(); }
    let bins = edges.len() - 1;
    let first = edges[0];
    let last = edges[bins];
    let mut counts = vec![0usize; bins];
    for &v in values {
        if !(v >= first && v <= last) { continue; }
        // index of the last edge <= v
        let idx = edges.partition_point(|e| *e <= v).saturating_sub(1).min(bins - 1);
        counts[idx] += 1;
    }
    counts
}

/// `p`-th percentile (0..=100) using linear interpolation between the two
/// nearest order statistics. Returns `None` for an empty input.
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() { return None; }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let rank = (p.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Running maximum taken from the right: element `i` becomes `max(v[i..])`.
/// The result never increases from left to right.
pub fn reverse_cummax(values: &mut [f64]) {
    let mut running = f64::NEG_INFINITY;
    for v in values.iter_mut().rev() {
        running = running.max(*v);
        *v = running;
    }
}

/// Running sum in place.
pub fn cumsum(values: &mut [f64]) {
    let mut acc = 0.0;
    for v in values.iter_mut() {
        acc += *v;
        *v = acc;
    }
}
