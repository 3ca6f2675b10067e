// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges, explicit ticks and categorical tick labels.

use skia_safe as skia;

use crate::grid::{format_tick, min_gap, nice_step, nice_ticks};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    /// Integer positions `0..n` labelled by `Axis::tick_labels`.
    Category,
}

#[derive(Clone)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    /// Explicit tick positions; `None` picks nice ticks automatically and an
    /// empty list hides ticks and their grid lines.
    pub ticks: Option<Vec<f64>>,
    pub tick_labels: Vec<String>,
    pub inverted: bool,
    /// Overrides the theme color for label and tick text.
    pub color: Option<skia::Color>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            kind: ScaleKind::Linear,
            ticks: None,
            tick_labels: Vec::new(),
            inverted: false,
            color: None,
        }
    }

    /// Categorical axis: one slot per label at positions `0..n`, padded half a slot each side.
    pub fn categories<S: AsRef<str>>(label: impl Into<String>, names: &[S]) -> Self {
        let n = names.len().max(1) as f64;
        let mut a = Self::new(label, -0.5, n - 0.5);
        a.kind = ScaleKind::Category;
        a.tick_labels = names.iter().map(|s| s.as_ref().to_string()).collect();
        a
    }

    pub fn with_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.ticks = Some(ticks);
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    /// Tick positions and their text, honoring explicit ticks and categories.
    pub fn tick_marks(&self) -> Vec<(f64, String)> {
        match self.kind {
            ScaleKind::Category => self
                .tick_labels
                .iter()
                .enumerate()
                .map(|(i, s)| (i as f64, s.clone()))
                .collect(),
            ScaleKind::Linear => {
                let (ticks, step) = match &self.ticks {
                    Some(t) => {
                        let gap = min_gap(t);
                        (t.clone(), if gap.is_finite() { gap } else { 1.0 })
                    }
                    None => (nice_ticks(self.min, self.max, 6), nice_step(self.min, self.max, 6)),
                };
                ticks
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| {
                        let text = self.tick_labels.get(i).cloned().unwrap_or_else(|| format_tick(v, step));
                        (v, text)
                    })
                    .collect()
            }
        }
    }

    pub fn default_x() -> Self {
        Self::new("", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("", 0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_axis_spans_slots() {
        let a = Axis::categories("Tier", &["Low", "Medium", "High"]);
        assert_eq!((a.min, a.max), (-0.5, 2.5));
        let marks = a.tick_marks();
        assert_eq!(marks[2], (2.0, "High".to_string()));
    }

    #[test]
    fn explicit_ticks_format_with_their_spacing() {
        let a = Axis::new("Threshold", 0.25, 0.75).with_ticks(vec![0.3, 0.4, 0.5, 0.6, 0.7]);
        let text: Vec<String> = a.tick_marks().into_iter().map(|(_, s)| s).collect();
        assert_eq!(text, vec!["0.3", "0.4", "0.5", "0.6", "0.7"]);
    }
}
