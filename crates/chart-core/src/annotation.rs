// File: crates/chart-core/src/annotation.rs
// Summary: Reference lines, shaded spans, markers, text callouts and arrows drawn over a chart.

use skia_safe as skia;

use crate::series::{Marker, YAxisSide};
use crate::text::TextOptions;

/// Rounded box drawn behind a label.
#[derive(Clone, Copy, Debug)]
pub struct BoxStyle {
    pub fill: skia::Color,
    pub stroke: Option<skia::Color>,
    pub pad: f32,
}

impl BoxStyle {
    pub fn new(fill: skia::Color, stroke: Option<skia::Color>) -> Self {
        Self { fill, stroke, pad: 4.0 }
    }
    pub fn pad(mut self, pad: f32) -> Self {
        self.pad = pad;
        self
    }
}

#[derive(Clone, Debug)]
pub struct Label {
    pub text: String,
    pub opts: TextOptions,
    pub boxed: Option<BoxStyle>,
}

impl Label {
    pub fn new(text: impl Into<String>, opts: TextOptions) -> Self {
        Self { text: text.into(), opts, boxed: None }
    }
    pub fn boxed(mut self, style: BoxStyle) -> Self {
        self.boxed = Some(style);
        self
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LineStyle {
    pub color: skia::Color,
    pub width: f32,
    pub dash: Option<[f32; 2]>,
}

impl LineStyle {
    pub fn solid(color: skia::Color, width: f32) -> Self {
        Self { color, width, dash: None }
    }
    pub fn dashed(color: skia::Color, width: f32) -> Self {
        Self { color, width, dash: Some([6.0, 4.0]) }
    }
}

#[derive(Clone, Debug)]
pub enum Annotation {
    /// Text anchored at a data point, shifted by `offset` points (x right, y up).
    Text {
        at: (f64, f64),
        offset: (f32, f32),
        label: Label,
        axis: YAxisSide,
    },
    /// Arrow from the label position `from` to the data point `to`.
    Arrow {
        from: (f64, f64),
        to: (f64, f64),
        color: skia::Color,
        width: f32,
        label: Option<Label>,
        axis: YAxisSide,
    },
    /// Single marker at a data point, drawn above series.
    Point {
        at: (f64, f64),
        marker: Marker,
        color: skia::Color,
        axis: YAxisSide,
    },
    HLine { y: f64, style: LineStyle, label: Option<String> },
    VLine { x: f64, style: LineStyle, label: Option<String> },
    /// Horizontal band between `y0` and `y1`, limited to a fraction of the x axis.
    HSpan { y0: f64, y1: f64, x_frac: (f64, f64), fill: skia::Color },
    /// Vertical band between `x0` and `x1` spanning the full plot height.
    VSpan { x0: f64, x1: f64, fill: skia::Color, label: Option<String> },
}

impl Annotation {
    pub fn text(at: (f64, f64), label: Label) -> Self {
        Annotation::Text { at, offset: (0.0, 0.0), label, axis: YAxisSide::Left }
    }

    pub fn text_offset(at: (f64, f64), offset: (f32, f32), label: Label) -> Self {
        Annotation::Text { at, offset, label, axis: YAxisSide::Left }
    }

    pub fn arrow(from: (f64, f64), to: (f64, f64), color: skia::Color, label: Label) -> Self {
        Annotation::Arrow { from, to, color, width: 1.0, label: Some(label), axis: YAxisSide::Left }
    }

    pub fn point(at: (f64, f64), marker: Marker, color: skia::Color) -> Self {
        Annotation::Point { at, marker, color, axis: YAxisSide::Left }
    }

    pub fn hline(y: f64, style: LineStyle) -> Self {
        Annotation::HLine { y, style, label: None }
    }

    pub fn vline(x: f64, style: LineStyle) -> Self {
        Annotation::VLine { x, style, label: None }
    }

    pub fn vspan(x0: f64, x1: f64, fill: skia::Color) -> Self {
        Annotation::VSpan { x0, x1, fill, label: None }
    }

    /// Attach a legend entry to a line or span.
    pub fn labelled(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            Annotation::HLine { label, .. }
            | Annotation::VLine { label, .. }
            | Annotation::VSpan { label, .. } => *label = Some(text.into()),
            _ => {}
        }
        self
    }

    /// Measure this annotation against the given y axis.
    pub fn on_axis(mut self, side: YAxisSide) -> Self {
        match &mut self {
            Annotation::Text { axis, .. }
            | Annotation::Arrow { axis, .. }
            | Annotation::Point { axis, .. } => *axis = side,
            _ => {}
        }
        self
    }

    /// Set the arrow stroke width; no-op for other annotations.
    pub fn arrow_width(mut self, w: f32) -> Self {
        if let Annotation::Arrow { width, .. } = &mut self { *width = w; }
        self
    }
}
