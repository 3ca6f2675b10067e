// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;

use crate::annotation::{Annotation, Label, LineStyle};
use crate::axis::Axis;
use crate::error::{RenderError, RenderResult};
use crate::geometry::RectF;
use crate::scale::ValueScale;
use crate::series::{Marker, MarkerShape, Series, SeriesType, YAxisSide};
use crate::text::{HAlign, TextOptions, TextShaper, VAlign};
use crate::theme::{with_alpha, Theme};
use crate::types::{inches, Insets, DEFAULT_DPI, HEIGHT, POINTS_PER_INCH, WIDTH};
use crate::view::ViewState;

pub struct RenderOptions {
    /// Logical width in points.
    pub width: i32,
    /// Logical height in points.
    pub height: i32,
    /// Output pixels per point.
    pub scale: f32,
    /// Outer margin around the whole figure, in points.
    pub insets: Insets,
    pub background: skia::Color,
    pub theme: Theme,
    /// Disable to skip all text (deterministic pixels across platforms).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        let theme = Theme::whitegrid();
        Self {
            width: WIDTH,
            height: HEIGHT,
            scale: DEFAULT_DPI / POINTS_PER_INCH,
            insets: Insets::new(8, 8, 8, 8),
            background: theme.background,
            theme,
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Figure of `w_in` x `h_in` inches rendered at `dpi`.
    pub fn from_inches(w_in: f32, h_in: f32, dpi: f32) -> Self {
        Self {
            width: inches(w_in),
            height: inches(h_in),
            scale: dpi / POINTS_PER_INCH,
            ..Self::default()
        }
    }

    /// Output size in pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        (
            (self.width as f32 * self.scale).round().max(1.0) as i32,
            (self.height as f32 * self.scale).round().max(1.0) as i32,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
    UpperCenter,
    UpperRight,
    CenterRight,
    LowerLeft,
}

/// Shared state for one render pass.
pub struct DrawContext<'a> {
    pub theme: &'a Theme,
    pub shaper: &'a TextShaper,
    pub draw_labels: bool,
}

pub struct Chart {
    pub title: Option<String>,
    /// Overrides `Theme::title_size` (smaller titles for dashboard panels).
    pub title_size: Option<f32>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Secondary y axis on the right edge; series opt in via `YAxisSide::Right`.
    pub y2_axis: Option<Axis>,
    pub annotations: Vec<Annotation>,
    pub legend: Option<LegendPosition>,
    pub show_grid: bool,
    /// Space between the panel edge and the plot area (ticks, labels, title).
    pub insets: Insets,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            title_size: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            y2_axis: None,
            annotations: Vec::new(),
            legend: None,
            show_grid: true,
            insets: Insets::new(72, 24, 40, 56),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn annotate(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Fit both primary axes to the left-axis series, padding the y range by
    /// `margin` (a fraction of its span).
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self).padded_y(margin).apply_to_chart(self);
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> RenderResult<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_png(output_png_path.as_ref(), &bytes)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> RenderResult<Vec<u8>> {
        let (px, w, h, _) = self.render_to_rgba8(opts)?;
        encode_png(px, w as u32, h as u32)
    }

    /// Render to a tightly packed RGBA8 buffer: (pixels, width, height, row stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> RenderResult<(Vec<u8>, i32, i32, usize)> {
        rasterize(opts, |canvas, ctx, area| self.draw(canvas, ctx, area))
    }

    /// Draw the chart into `panel` (points). Used directly by multi-panel figures.
    pub fn draw(&self, canvas: &skia::Canvas, ctx: &DrawContext, panel: RectF) {
        let plot = panel.inset(&self.insets);
        let scales = Scales::new(self, plot);
        let theme = ctx.theme;

        canvas.draw_rect(plot.to_skia(), &fill_paint(theme.plot_background));
        if self.show_grid {
            draw_grid(canvas, theme, plot, &self.x_axis, &scales.x, &self.y_axis, &scales.y);
        }

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for a in &self.annotations {
            draw_span(canvas, a, plot, &scales);
        }
        for s in &self.series {
            draw_series(canvas, s, &scales);
        }
        for a in &self.annotations {
            draw_reference_line(canvas, a, plot, &scales);
        }
        canvas.restore();

        // spines
        let mut spine = stroke_paint(theme.axis_line, 1.0, None);
        spine.set_anti_alias(false);
        canvas.draw_rect(plot.to_skia(), &spine);

        if ctx.draw_labels {
            draw_axes_text(canvas, ctx, self, plot);
        }
        for a in &self.annotations {
            draw_callout(canvas, ctx, a, &scales);
        }
        if ctx.draw_labels {
            if let Some(pos) = self.legend {
                draw_legend(canvas, ctx, self, plot, pos);
            }
            if let Some(title) = &self.title {
                let opts = TextOptions::new(self.title_size.unwrap_or(theme.title_size), theme.title)
                    .bold()
                    .align(HAlign::Center, VAlign::Bottom);
                ctx.shaper.draw(canvas, title, plot.center_x(), plot.top - 8.0, &opts);
            }
        }
    }
}

// ---- rasterization ------------------------------------------------------------

/// Create a raster surface sized for `opts`, run `draw` in point space and
/// read the pixels back as unpremultiplied RGBA.
pub(crate) fn rasterize<F>(opts: &RenderOptions, draw: F) -> RenderResult<(Vec<u8>, i32, i32, usize)>
where
    F: FnOnce(&skia::Canvas, &DrawContext, RectF),
{
    let (w, h) = opts.pixel_size();
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or(RenderError::Surface { width: w, height: h })?;
    {
        let canvas = surface.canvas();
        canvas.clear(opts.background);
        canvas.save();
        canvas.scale((opts.scale, opts.scale));
        let shaper = TextShaper::new();
        let ctx = DrawContext { theme: &opts.theme, shaper: &shaper, draw_labels: opts.draw_labels };
        let area = RectF::from_ltwh(0.0, 0.0, opts.width as f32, opts.height as f32).inset(&opts.insets);
        draw(canvas, &ctx, area);
        canvas.restore();
    }

    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(RenderError::ReadPixels);
    }
    log::debug!("rasterized {w}x{h} px at scale {:.3}", opts.scale);
    Ok((pixels, w, h, stride))
}

pub(crate) fn encode_png(rgba: Vec<u8>, width: u32, height: u32) -> RenderResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(width, height, rgba).ok_or(RenderError::ReadPixels)?;
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)?;
    Ok(out.into_inner())
}

pub(crate) fn write_png(path: &Path, bytes: &[u8]) -> RenderResult<()> {
    let io_err = |source| RenderError::Write { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    std::fs::write(path, bytes).map_err(io_err)
}

// ---- helpers ----------------------------------------------------------------

struct Scales {
    x: ValueScale,
    y: ValueScale,
    y2: Option<ValueScale>,
}

impl Scales {
    fn new(chart: &Chart, plot: RectF) -> Self {
        let x = ValueScale::horizontal(plot.left, plot.right, chart.x_axis.min, chart.x_axis.max, chart.x_axis.inverted);
        let y = ValueScale::vertical(plot.top, plot.bottom, chart.y_axis.min, chart.y_axis.max, chart.y_axis.inverted);
        let y2 = chart
            .y2_axis
            .as_ref()
            .map(|a| ValueScale::vertical(plot.top, plot.bottom, a.min, a.max, a.inverted));
        Self { x, y, y2 }
    }

    fn y_for(&self, side: YAxisSide) -> &ValueScale {
        match side {
            YAxisSide::Left => &self.y,
            YAxisSide::Right => self.y2.as_ref().unwrap_or(&self.y),
        }
    }

    fn point(&self, p: (f64, f64), side: YAxisSide) -> (f32, f32) {
        (self.x.to_px(p.0), self.y_for(side).to_px(p.1))
    }
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn stroke_paint(color: skia::Color, width: f32, dash: Option<[f32; 2]>) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    if let Some(d) = dash {
        paint.set_path_effect(skia::PathEffect::dash(&d, 0.0));
    }
    paint
}

fn line_paint(style: &LineStyle) -> skia::Paint {
    stroke_paint(style.color, style.width, style.dash)
}

fn draw_grid(
    canvas: &skia::Canvas,
    theme: &Theme,
    plot: RectF,
    x_axis: &Axis,
    x: &ValueScale,
    y_axis: &Axis,
    y: &ValueScale,
) {
    let paint = stroke_paint(theme.grid, 0.8, None);
    for (v, _) in x_axis.tick_marks() {
        if v < x_axis.min || v > x_axis.max { continue; }
        let px = x.to_px(v);
        canvas.draw_line((px, plot.top), (px, plot.bottom), &paint);
    }
    for (v, _) in y_axis.tick_marks() {
        if v < y_axis.min || v > y_axis.max { continue; }
        let py = y.to_px(v);
        canvas.draw_line((plot.left, py), (plot.right, py), &paint);
    }
}

fn draw_span(canvas: &skia::Canvas, a: &Annotation, plot: RectF, scales: &Scales) {
    match *a {
        Annotation::HSpan { y0, y1, x_frac, fill } => {
            let top = scales.y.to_px(y0.max(y1));
            let bottom = scales.y.to_px(y0.min(y1));
            let left = plot.left + x_frac.0 as f32 * plot.width();
            let right = plot.left + x_frac.1 as f32 * plot.width();
            let rect = skia::Rect::from_ltrb(left, top.min(bottom), right, top.max(bottom));
            canvas.draw_rect(rect, &fill_paint(fill));
        }
        Annotation::VSpan { x0, x1, fill, .. } => {
            let a = scales.x.to_px(x0);
            let b = scales.x.to_px(x1);
            let rect = skia::Rect::from_ltrb(a.min(b), plot.top, a.max(b), plot.bottom);
            canvas.draw_rect(rect, &fill_paint(fill));
        }
        _ => {}
    }
}

fn draw_reference_line(canvas: &skia::Canvas, a: &Annotation, plot: RectF, scales: &Scales) {
    match a {
        Annotation::HLine { y, style, .. } => {
            let py = scales.y.to_px(*y);
            canvas.draw_line((plot.left, py), (plot.right, py), &line_paint(style));
        }
        Annotation::VLine { x, style, .. } => {
            let px = scales.x.to_px(*x);
            canvas.draw_line((px, plot.top), (px, plot.bottom), &line_paint(style));
        }
        _ => {}
    }
}

fn draw_series(canvas: &skia::Canvas, s: &Series, scales: &Scales) {
    let ys = scales.y_for(s.axis);
    let xs = &scales.x;
    let half = s.style.bar_width * 0.5;
    let base = s.baseline_value();

    match s.series_type {
        SeriesType::Line => {
            if s.data_xy.len() >= 2 {
                let mut path = skia::Path::new();
                let (x0, y0) = s.data_xy[0];
                path.move_to((xs.to_px(x0), ys.to_px(y0)));
                for &(x, y) in s.data_xy.iter().skip(1) {
                    path.line_to((xs.to_px(x), ys.to_px(y)));
                }
                let color = if s.style.alpha < 1.0 { with_alpha(s.style.color, s.style.alpha) } else { s.style.color };
                canvas.draw_path(&path, &stroke_paint(color, s.style.stroke_width, s.style.dash));
            }
            if let Some(m) = s.style.marker {
                for (i, &(x, y)) in s.data_xy.iter().enumerate() {
                    draw_marker(canvas, &m, (xs.to_px(x), ys.to_px(y)), s.fill_for(i));
                }
            }
        }
        SeriesType::Scatter => {
            let m = s.style.marker.unwrap_or_else(|| Marker::new(MarkerShape::Circle, 4.0));
            for (i, &(x, y)) in s.data_xy.iter().enumerate() {
                draw_marker(canvas, &m, (xs.to_px(x), ys.to_px(y)), s.fill_for(i));
            }
        }
        SeriesType::Bar | SeriesType::HorizontalBar | SeriesType::Histogram => {
            for (i, &(x, y)) in s.data_xy.iter().enumerate() {
                let rect = match s.series_type {
                    SeriesType::Bar => {
                        let c = x + s.style.bar_offset;
                        ltrb(xs.to_px(c - half), ys.to_px(y), xs.to_px(c + half), ys.to_px(base))
                    }
                    SeriesType::HorizontalBar => {
                        let c = x + s.style.bar_offset;
                        ltrb(xs.to_px(base), ys.to_px(c - half), xs.to_px(y), ys.to_px(c + half))
                    }
                    _ => ltrb(xs.to_px(x), ys.to_px(y), xs.to_px(x + s.style.bar_width), ys.to_px(base)),
                };
                canvas.draw_rect(rect, &fill_paint(s.fill_for(i)));
                if let Some((color, width)) = s.style.edge {
                    canvas.draw_rect(rect, &stroke_paint(color, width, None));
                }
            }
        }
        SeriesType::Area | SeriesType::Band => {
            if s.data_xy.len() < 2 { return; }
            let mut path = skia::Path::new();
            let (x0, y0) = s.data_xy[0];
            path.move_to((xs.to_px(x0), ys.to_px(y0)));
            for &(x, y) in s.data_xy.iter().skip(1) {
                path.line_to((xs.to_px(x), ys.to_px(y)));
            }
            if s.series_type == SeriesType::Band {
                for (i, &(x, lower)) in s.data_xy.iter().enumerate().rev() {
                    let up = s.upper.get(i).copied().unwrap_or(lower);
                    path.line_to((xs.to_px(x), ys.to_px(up)));
                }
            } else {
                let (xl, _) = s.data_xy[s.data_xy.len() - 1];
                path.line_to((xs.to_px(xl), ys.to_px(base)));
                path.line_to((xs.to_px(x0), ys.to_px(base)));
            }
            path.close();
            canvas.draw_path(&path, &fill_paint(with_alpha(s.style.color, s.style.alpha)));
        }
    }
}

fn ltrb(a: f32, b: f32, c: f32, d: f32) -> skia::Rect {
    skia::Rect::from_ltrb(a.min(c), b.min(d), a.max(c), b.max(d))
}

fn draw_marker(canvas: &skia::Canvas, m: &Marker, (cx, cy): (f32, f32), fill: skia::Color) {
    let r = m.size;
    let path = match m.shape {
        MarkerShape::Circle => {
            canvas.draw_circle((cx, cy), r, &fill_paint(fill));
            if let Some((color, width)) = m.edge {
                canvas.draw_circle((cx, cy), r, &stroke_paint(color, width, None));
            }
            return;
        }
        MarkerShape::Square => {
            let mut p = skia::Path::new();
            p.add_rect(skia::Rect::from_ltrb(cx - r, cy - r, cx + r, cy + r), None);
            p
        }
        MarkerShape::Triangle => {
            let mut p = skia::Path::new();
            p.move_to((cx, cy - r * 1.15));
            p.line_to((cx + r, cy + r * 0.85));
            p.line_to((cx - r, cy + r * 0.85));
            p.close();
            p
        }
    };
    canvas.draw_path(&path, &fill_paint(fill));
    if let Some((color, width)) = m.edge {
        canvas.draw_path(&path, &stroke_paint(color, width, None));
    }
}

fn axis_text_color(axis: &Axis, fallback: skia::Color) -> skia::Color {
    axis.color.unwrap_or(fallback)
}

fn draw_axes_text(canvas: &skia::Canvas, ctx: &DrawContext, chart: &Chart, plot: RectF) {
    let theme = ctx.theme;
    let shaper = ctx.shaper;

    // x ticks below the plot
    let x_axis = &chart.x_axis;
    let mut tick_h = 0.0f32;
    {
        let opts = TextOptions::new(theme.tick_size, axis_text_color(x_axis, theme.tick)).align(HAlign::Center, VAlign::Top);
        let x = ValueScale::horizontal(plot.left, plot.right, x_axis.min, x_axis.max, x_axis.inverted);
        for (v, text) in x_axis.tick_marks() {
            if v < x_axis.min.min(x_axis.max) || v > x_axis.max.max(x_axis.min) { continue; }
            let r = shaper.draw(canvas, &text, x.to_px(v), plot.bottom + 4.0, &opts);
            tick_h = tick_h.max(r.height());
        }
    }
    if !x_axis.label.is_empty() {
        let opts = TextOptions::new(theme.label_size, axis_text_color(x_axis, theme.axis_label)).align(HAlign::Center, VAlign::Top);
        shaper.draw(canvas, &x_axis.label, plot.center_x(), plot.bottom + 8.0 + tick_h, &opts);
    }

    draw_y_axis_text(canvas, ctx, &chart.y_axis, plot, YAxisSide::Left);
    if let Some(a) = &chart.y2_axis {
        draw_y_axis_text(canvas, ctx, a, plot, YAxisSide::Right);
    }
}

fn draw_y_axis_text(canvas: &skia::Canvas, ctx: &DrawContext, axis: &Axis, plot: RectF, side: YAxisSide) {
    let theme = ctx.theme;
    let y = ValueScale::vertical(plot.top, plot.bottom, axis.min, axis.max, axis.inverted);
    let (edge, halign, dir) = match side {
        YAxisSide::Left => (plot.left - 6.0, HAlign::Right, -1.0),
        YAxisSide::Right => (plot.right + 6.0, HAlign::Left, 1.0),
    };
    let mut tick_w = 0.0f32;
    {
        let opts = TextOptions::new(theme.tick_size, axis_text_color(axis, theme.tick)).align(halign, VAlign::Middle);
        for (v, text) in axis.tick_marks() {
            if v < axis.min.min(axis.max) || v > axis.max.max(axis.min) { continue; }
            let r = ctx.shaper.draw(canvas, &text, edge, y.to_px(v), &opts);
            tick_w = tick_w.max(r.width());
        }
    }
    if !axis.label.is_empty() {
        let opts = TextOptions::new(theme.label_size, axis_text_color(axis, theme.axis_label));
        let (_, h) = ctx.shaper.measure(&axis.label, &opts);
        let x = edge + dir * (tick_w + 4.0 + h * 0.5);
        ctx.shaper.draw_vertical(canvas, &axis.label, x, plot.center_y(), &opts);
    }
}

/// Draw a label (and its optional box) anchored at `(x, y)`; returns the box drawn.
fn draw_label(canvas: &skia::Canvas, shaper: &TextShaper, label: &Label, x: f32, y: f32) -> RectF {
    let bounds = shaper.bounds(&label.text, x, y, &label.opts);
    let mut outer = bounds;
    if let Some(b) = label.boxed {
        outer = RectF::from_ltrb(bounds.left - b.pad, bounds.top - b.pad, bounds.right + b.pad, bounds.bottom + b.pad);
        let rect = outer.to_skia();
        canvas.draw_round_rect(rect, 4.0, 4.0, &fill_paint(b.fill));
        if let Some(stroke) = b.stroke {
            canvas.draw_round_rect(rect, 4.0, 4.0, &stroke_paint(stroke, 1.0, None));
        }
    }
    shaper.draw(canvas, &label.text, x, y, &label.opts);
    outer
}

fn draw_callout(canvas: &skia::Canvas, ctx: &DrawContext, a: &Annotation, scales: &Scales) {
    match a {
        Annotation::Point { at, marker, color, axis } => {
            draw_marker(canvas, marker, scales.point(*at, *axis), *color);
        }
        Annotation::Text { at, offset, label, axis } => {
            if !ctx.draw_labels { return; }
            let (x, y) = scales.point(*at, *axis);
            draw_label(canvas, ctx.shaper, label, x + offset.0, y - offset.1);
        }
        Annotation::Arrow { from, to, color, width, label, axis } => {
            let start = scales.point(*from, *axis);
            let tip = scales.point(*to, *axis);
            let tail = match (label, ctx.draw_labels) {
                (Some(l), true) => {
                    let bounds = ctx.shaper.bounds(&l.text, start.0, start.1, &l.opts);
                    let pad = l.boxed.map(|b| b.pad).unwrap_or(0.0) + 2.0;
                    let grown = RectF::from_ltrb(bounds.left - pad, bounds.top - pad, bounds.right + pad, bounds.bottom + pad);
                    exit_point(&grown, tip)
                }
                _ => start,
            };
            draw_arrow(canvas, tail, tip, *color, *width);
            if let (Some(l), true) = (label, ctx.draw_labels) {
                draw_label(canvas, ctx.shaper, l, start.0, start.1);
            }
        }
        _ => {}
    }
}

/// Point where the segment from the center of `rect` towards `target` leaves `rect`.
fn exit_point(rect: &RectF, target: (f32, f32)) -> (f32, f32) {
    let (cx, cy) = (rect.center_x(), rect.center_y());
    let (dx, dy) = (target.0 - cx, target.1 - cy);
    let hw = rect.width() * 0.5;
    let hh = rect.height() * 0.5;
    let tx = if dx.abs() > 1e-6 { hw / dx.abs() } else { f32::INFINITY };
    let ty = if dy.abs() > 1e-6 { hh / dy.abs() } else { f32::INFINITY };
    let t = tx.min(ty).min(1.0);
    (cx + dx * t, cy + dy * t)
}

fn draw_arrow(canvas: &skia::Canvas, tail: (f32, f32), tip: (f32, f32), color: skia::Color, width: f32) {
    let (dx, dy) = (tip.0 - tail.0, tip.1 - tail.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1.0 { return; }
    let paint = stroke_paint(color, width, None);
    canvas.draw_line(tail, tip, &paint);
    let (ux, uy) = (dx / len, dy / len);
    let head = 7.0 + width * 1.5;
    let spread = 0.45f32;
    let (s, c) = spread.sin_cos();
    let left = (tip.0 - head * (ux * c - uy * s), tip.1 - head * (uy * c + ux * s));
    let right = (tip.0 - head * (ux * c + uy * s), tip.1 - head * (uy * c - ux * s));
    canvas.draw_line(tip, left, &paint);
    canvas.draw_line(tip, right, &paint);
}

enum Swatch {
    Line { color: skia::Color, width: f32, dash: Option<[f32; 2]>, marker: Option<Marker> },
    Patch(skia::Color),
    Dot(Marker, skia::Color),
}

fn legend_entries(chart: &Chart) -> Vec<(String, Swatch)> {
    let mut out = Vec::new();
    for s in &chart.series {
        let Some(label) = &s.label else { continue };
        let swatch = match s.series_type {
            SeriesType::Line => Swatch::Line {
                color: s.style.color,
                width: s.style.stroke_width,
                dash: s.style.dash,
                marker: s.style.marker,
            },
            SeriesType::Scatter => Swatch::Dot(
                s.style.marker.unwrap_or_else(|| Marker::new(MarkerShape::Circle, 4.0)),
                s.style.color,
            ),
            SeriesType::Area | SeriesType::Band => Swatch::Patch(with_alpha(s.style.color, s.style.alpha)),
            _ => Swatch::Patch(s.fill_for(0)),
        };
        out.push((label.clone(), swatch));
    }
    for a in &chart.annotations {
        match a {
            Annotation::HLine { style, label: Some(l), .. } | Annotation::VLine { style, label: Some(l), .. } => {
                out.push((l.clone(), Swatch::Line { color: style.color, width: style.width, dash: style.dash, marker: None }));
            }
            Annotation::VSpan { fill, label: Some(l), .. } => out.push((l.clone(), Swatch::Patch(*fill))),
            _ => {}
        }
    }
    out
}

fn draw_legend(canvas: &skia::Canvas, ctx: &DrawContext, chart: &Chart, plot: RectF, pos: LegendPosition) {
    let entries = legend_entries(chart);
    if entries.is_empty() { return; }
    let theme = ctx.theme;
    let opts = TextOptions::new(theme.legend_size, theme.axis_label).align(HAlign::Left, VAlign::Middle);

    let sizes: Vec<(f32, f32)> = entries.iter().map(|(t, _)| ctx.shaper.measure(t, &opts)).collect();
    let (pad, swatch_w, gap) = (6.0f32, 22.0f32, 6.0f32);
    let row_h: Vec<f32> = sizes.iter().map(|(_, h)| h.max(10.0) + 4.0).collect();
    let text_w = sizes.iter().map(|(w, _)| *w).fold(0.0f32, f32::max);
    let w = pad * 2.0 + swatch_w + gap + text_w;
    let h = pad * 2.0 + row_h.iter().sum::<f32>();

    let margin = 8.0;
    let left = match pos {
        LegendPosition::UpperLeft | LegendPosition::LowerLeft => plot.left + margin,
        LegendPosition::UpperCenter => plot.center_x() - w * 0.5,
        LegendPosition::UpperRight | LegendPosition::CenterRight => plot.right - margin - w,
    };
    let top = match pos {
        LegendPosition::UpperLeft | LegendPosition::UpperCenter | LegendPosition::UpperRight => plot.top + margin,
        LegendPosition::CenterRight => plot.center_y() - h * 0.5,
        LegendPosition::LowerLeft => plot.bottom - margin - h,
    };
    let rect = skia::Rect::from_ltrb(left, top, left + w, top + h);
    canvas.draw_round_rect(rect, 3.0, 3.0, &fill_paint(theme.legend_background));
    canvas.draw_round_rect(rect, 3.0, 3.0, &stroke_paint(theme.legend_border, 0.8, None));

    let mut y = top + pad;
    for ((text, swatch), rh) in entries.iter().zip(&row_h) {
        let cy = y + rh * 0.5;
        let sx = left + pad;
        match swatch {
            Swatch::Line { color, width, dash, marker } => {
                canvas.draw_line((sx, cy), (sx + swatch_w, cy), &stroke_paint(*color, *width, *dash));
                if let Some(m) = marker {
                    let small = Marker { size: m.size.min(4.0), ..*m };
                    draw_marker(canvas, &small, (sx + swatch_w * 0.5, cy), *color);
                }
            }
            Swatch::Patch(color) => {
                let r = skia::Rect::from_ltrb(sx, cy - 5.0, sx + swatch_w, cy + 5.0);
                canvas.draw_rect(r, &fill_paint(*color));
            }
            Swatch::Dot(m, color) => draw_marker(canvas, m, (sx + swatch_w * 0.5, cy), *color),
        }
        ctx.shaper.draw(canvas, text, sx + swatch_w + gap, cy, &opts);
        y += rh;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_size_follows_dpi() {
        let opts = RenderOptions::from_inches(10.0, 6.0, 150.0);
        assert_eq!((opts.width, opts.height), (720, 432));
        assert_eq!(opts.pixel_size(), (1500, 900));
    }

    #[test]
    fn exit_point_lands_on_box_edge() {
        let r = RectF::from_ltrb(0.0, 0.0, 20.0, 10.0);
        let p = exit_point(&r, (110.0, 5.0));
        assert!((p.0 - 20.0).abs() < 1e-4 && (p.1 - 5.0).abs() < 1e-4);
    }

    #[test]
    fn legend_collects_series_and_labelled_lines() {
        let mut chart = Chart::new();
        chart.add_series(Series::bars(&[1.0]).label("Potential"));
        chart.add_series(Series::bars(&[2.0]));
        chart.annotate(Annotation::hline(1.0, LineStyle::dashed(skia::Color::RED, 2.0)).labelled("Baseline"));
        let names: Vec<String> = legend_entries(&chart).into_iter().map(|(t, _)| t).collect();
        assert_eq!(names, vec!["Potential", "Baseline"]);
    }
}
