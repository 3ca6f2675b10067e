// File: crates/chart-core/src/view.rs
// Summary: Visible data ranges and helpers for autoscaling a chart's primary axes.

use crate::series::YAxisSide;
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Extents of every left-axis series (bars include their width and baseline).
    /// Falls back to the unit square when the chart has no data.
    pub fn from_chart(chart: &Chart) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in chart.series.iter().filter(|s| s.axis == YAxisSide::Left) {
            if let Some((a, b, c, d)) = s.extents() {
                x_min = x_min.min(a);
                x_max = x_max.max(b);
                y_min = y_min.min(c);
                y_max = y_max.max(d);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        Self { x_min, x_max, y_min, y_max }
    }

    /// Grow the y range by `frac` of its span on both ends.
    pub fn padded_y(mut self, frac: f64) -> Self {
        let m = (self.y_max - self.y_min) * frac.max(0.0);
        self.y_min -= m;
        self.y_max += m;
        self
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}
