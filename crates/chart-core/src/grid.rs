// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Pick a "nice" tick step (1, 2, 2.5 or 5 times a power of ten) so that
/// `[min, max]` gets at most roughly `target` intervals.
pub fn nice_step(min: f64, max: f64, target: usize) -> f64 {
    let span = (max - min).abs().max(1e-12);
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions at multiples of a nice step that fall inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let step = nice_step(lo, hi, target);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            // squash -0.0 and float noise such as 0.30000000000000004
            let r = (v / step).round() * step;
            if r.abs() < step * 1e-9 { 0.0 } else { r }
        })
        .collect()
}

/// Format a tick value with just enough decimals for the given step.
pub fn format_tick(value: f64, step: f64) -> String {
    let step = step.abs().max(1e-12);
    let mag = (step.log10() + 1e-9).floor();
    let mut decimals = (-mag).max(0.0) as usize;
    // 2.5 x 10^k needs one more digit than its magnitude suggests
    let lead = step / 10f64.powf(mag);
    if (lead - 2.5).abs() < 1e-6 { decimals += 1; }
    let v = if value.abs() < step * 1e-9 { 0.0 } else { value };
    format!("{:.*}", decimals, v)
}

/// Smallest distance between consecutive ticks, used to pick decimals for
/// explicitly supplied tick lists.
pub fn min_gap(ticks: &[f64]) -> f64 {
    ticks
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .filter(|d| *d > 1e-12)
        .fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_ticks_for_percent_axis() {
        assert_eq!(nice_ticks(0.0, 100.0, 6), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn nice_ticks_skip_values_outside_range() {
        let t = nice_ticks(70.0, 102.0, 7);
        assert_eq!(t.first().copied(), Some(70.0));
        assert!(t.iter().all(|v| *v >= 70.0 && *v <= 102.0));
    }

    #[test]
    fn format_tick_uses_step_precision() {
        assert_eq!(format_tick(0.3, 0.1), "0.3");
        assert_eq!(format_tick(1500.0, 500.0), "1500");
        assert_eq!(format_tick(0.25, 0.25), "0.25");
        assert_eq!(format_tick(-0.0, 1.0), "0");
    }
}
