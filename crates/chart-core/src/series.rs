// File: crates/chart-core/src/series.rs
// Summary: Series model for line, scatter, bar, horizontal bar, histogram, area and band data.
// Notes:
// - `data_xy` holds (x, y) for every type. Horizontal bars store (category, value),
//   histograms store (left_edge, count) with `bar_width` as the bin width.
// - Bands use `data_xy` for the lower edge and `upper` for the matching upper values.

use skia_safe as skia;

use crate::theme::with_alpha;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Scatter,
    Bar,           // vertical bars centered on x (+ offset)
    HorizontalBar, // bars along x, stacked on category positions in y
    Histogram,     // vertical bars starting at x spanning `bar_width`
    Area,          // filled region between the line and the baseline
    Band,          // filled region between `data_xy` and `upper`
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Square,
    Triangle,
}

#[derive(Clone, Copy, Debug)]
pub struct Marker {
    pub shape: MarkerShape,
    /// Radius in points.
    pub size: f32,
    pub edge: Option<(skia::Color, f32)>,
}

impl Marker {
    pub fn new(shape: MarkerShape, size: f32) -> Self {
        Self { shape, size, edge: None }
    }
    pub fn with_edge(mut self, color: skia::Color, width: f32) -> Self {
        self.edge = Some((color, width));
        self
    }
}

/// Which vertical axis a series (or annotation) is measured against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum YAxisSide {
    #[default]
    Left,
    Right,
}

#[derive(Clone, Debug)]
pub struct SeriesStyle {
    pub color: skia::Color,
    /// Per-point fill colors for bars, histograms and scatters.
    pub point_colors: Option<Vec<skia::Color>>,
    pub alpha: f32,
    pub stroke_width: f32,
    pub dash: Option<[f32; 2]>,
    pub marker: Option<Marker>,
    /// Bar thickness in data units.
    pub bar_width: f64,
    /// Shift applied to the category coordinate of each bar (grouped bars).
    pub bar_offset: f64,
    pub edge: Option<(skia::Color, f32)>,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            color: skia::Color::from_argb(255, 64, 160, 255),
            point_colors: None,
            alpha: 1.0,
            stroke_width: 2.0,
            dash: None,
            marker: None,
            bar_width: 0.8,
            bar_offset: 0.0,
            edge: None,
        }
    }
}

#[derive(Clone)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
    pub upper: Vec<f64>,           // used by Band
    pub baseline: Option<f64>,     // used by Bar/HorizontalBar/Histogram/Area (origin)
    pub style: SeriesStyle,
    pub label: Option<String>,
    pub axis: YAxisSide,
}

impl Series {
    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self {
            series_type,
            data_xy: data,
            upper: Vec::new(),
            baseline: None,
            style: SeriesStyle::default(),
            label: None,
            axis: YAxisSide::Left,
        }
    }

    /// Bars at category positions `0..n` with the given heights.
    pub fn bars(values: &[f64]) -> Self {
        Self::with_data(SeriesType::Bar, indexed(values))
    }

    /// Horizontal bars at category positions `0..n` with the given lengths.
    pub fn hbars(values: &[f64]) -> Self {
        Self::with_data(SeriesType::HorizontalBar, indexed(values))
    }

    /// Histogram bars from bin `edges` (n + 1 values) and `counts` (n values).
    pub fn histogram(edges: &[f64], counts: &[usize]) -> Self {
        let data = edges.iter().zip(counts).map(|(e, c)| (*e, *c as f64)).collect();
        let width = edges.windows(2).map(|w| w[1] - w[0]).next().unwrap_or(1.0);
        let mut s = Self::with_data(SeriesType::Histogram, data);
        s.style.bar_width = width;
        s
    }

    /// Filled band between `lower` and `upper`, sharing the x values.
    pub fn band(xs: &[f64], lower: &[f64], upper: &[f64]) -> Self {
        let data = xs.iter().zip(lower).map(|(x, y)| (*x, *y)).collect();
        let mut s = Self::with_data(SeriesType::Band, data);
        s.upper = upper.to_vec();
        s
    }

    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Get baseline value or default (0.0) when not set.
    pub fn baseline_value(&self) -> f64 { self.baseline.unwrap_or(0.0) }

    pub fn color(mut self, color: skia::Color) -> Self {
        self.style.color = color;
        self
    }

    pub fn point_colors(mut self, colors: Vec<skia::Color>) -> Self {
        self.style.point_colors = Some(colors);
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.style.alpha = alpha;
        self
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.style.stroke_width = width;
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.style.marker = Some(marker);
        self
    }

    pub fn bar_width(mut self, width: f64) -> Self {
        self.style.bar_width = width;
        self
    }

    pub fn bar_offset(mut self, offset: f64) -> Self {
        self.style.bar_offset = offset;
        self
    }

    pub fn edge(mut self, color: skia::Color, width: f32) -> Self {
        self.style.edge = Some((color, width));
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn on_axis(mut self, axis: YAxisSide) -> Self {
        self.axis = axis;
        self
    }

    /// Fill color of point `i`, including the series alpha.
    pub fn fill_for(&self, i: usize) -> skia::Color {
        let base = self
            .style
            .point_colors
            .as_ref()
            .and_then(|c| c.get(i).copied())
            .unwrap_or(self.style.color);
        if self.style.alpha < 1.0 { with_alpha(base, self.style.alpha) } else { base }
    }

    /// Data-space extents (x_min, x_max, y_min, y_max) covered by this series,
    /// including bar thickness and baselines. `None` for an empty series.
    pub fn extents(&self) -> Option<(f64, f64, f64, f64)> {
        if self.data_xy.is_empty() { return None; }
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let half = self.style.bar_width * 0.5;
        for (i, &(x, y)) in self.data_xy.iter().enumerate() {
            let (xs, ys): ([f64; 2], [f64; 2]) = match self.series_type {
                SeriesType::Bar => {
                    let c = x + self.style.bar_offset;
                    ([c - half, c + half], [y, self.baseline_value()])
                }
                SeriesType::HorizontalBar => {
                    // category on y, value on x
                    let c = x + self.style.bar_offset;
                    ([y, self.baseline_value()], [c - half, c + half])
                }
                SeriesType::Histogram => ([x, x + self.style.bar_width], [y, self.baseline_value()]),
                SeriesType::Area => ([x, x], [y, self.baseline_value()]),
                SeriesType::Band => ([x, x], [y, self.upper.get(i).copied().unwrap_or(y)]),
                SeriesType::Line | SeriesType::Scatter => ([x, x], [y, y]),
            };
            x_min = x_min.min(xs[0].min(xs[1]));
            x_max = x_max.max(xs[0].max(xs[1]));
            y_min = y_min.min(ys[0].min(ys[1]));
            y_max = y_max.max(ys[0].max(ys[1]));
        }
        Some((x_min, x_max, y_min, y_max))
    }
}

fn indexed(values: &[f64]) -> Vec<(f64, f64)> {
    values.iter().enumerate().map(|(i, v)| (i as f64, *v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_series_takes_bin_width_from_edges() {
        let s = Series::histogram(&[30.0, 33.0, 36.0], &[4, 7]);
        assert_eq!(s.style.bar_width, 3.0);
        assert_eq!(s.data_xy, vec![(30.0, 4.0), (33.0, 7.0)]);
        assert_eq!(s.extents(), Some((30.0, 36.0, 0.0, 7.0)));
    }

    #[test]
    fn hbar_extents_put_values_on_x() {
        let s = Series::hbars(&[0.5, 0.2]).with_baseline(0.0).bar_width(0.6);
        let (x0, x1, y0, y1) = s.extents().expect("non-empty");
        assert_eq!((x0, x1), (0.0, 0.5));
        assert!((y0 + 0.3).abs() < 1e-12 && (y1 - 1.3).abs() < 1e-12);
    }

    #[test]
    fn point_colors_fall_back_to_series_color() {
        let red = skia::Color::from_rgb(255, 0, 0);
        let blue = skia::Color::from_rgb(0, 0, 255);
        let s = Series::bars(&[1.0, 2.0]).color(blue).point_colors(vec![red]);
        assert_eq!(s.fill_for(0), red);
        assert_eq!(s.fill_for(1), blue);
    }
}
