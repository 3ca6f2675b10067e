// File: crates/chart-core/src/figure.rs
// Summary: Multi-panel figures: a grid of charts and text notes under an optional title.

use std::path::Path;

use skia_safe as skia;

use crate::chart::{encode_png, rasterize, write_png, Chart, DrawContext, RenderOptions};
use crate::error::RenderResult;
use crate::geometry::RectF;
use crate::text::{HAlign, TextOptions, VAlign};

/// A boxed block of text occupying one grid cell (e.g. a metrics summary).
pub struct Note {
    pub title: Option<String>,
    pub body: String,
    pub fill: skia::Color,
    pub size: f32,
    pub mono: bool,
}

impl Note {
    pub fn new(body: impl Into<String>, fill: skia::Color) -> Self {
        Self { title: None, body: body.into(), fill, size: 11.0, mono: true }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn draw(&self, canvas: &skia::Canvas, ctx: &DrawContext, cell: RectF) {
        if !ctx.draw_labels { return; }
        let theme = ctx.theme;
        if let Some(t) = &self.title {
            let opts = TextOptions::new(theme.label_size, theme.title).bold().align(HAlign::Center, VAlign::Top);
            ctx.shaper.draw(canvas, t, cell.center_x(), cell.top + 8.0, &opts);
        }
        let mut opts = TextOptions::new(self.size, theme.axis_label).align(HAlign::Center, VAlign::Middle);
        if self.mono { opts = opts.mono(); }
        let bounds = ctx.shaper.bounds(&self.body, cell.center_x(), cell.center_y() + 8.0, &opts);
        let pad = 12.0;
        let rect = skia::Rect::from_ltrb(bounds.left - pad, bounds.top - pad, bounds.right + pad, bounds.bottom + pad);
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(self.fill);
        canvas.draw_round_rect(rect, 8.0, 8.0, &paint);
        ctx.shaper.draw(canvas, &self.body, cell.center_x(), cell.center_y() + 8.0, &opts);
    }
}

pub enum Panel {
    Chart(Chart),
    Note(Note),
}

impl From<Chart> for Panel {
    fn from(c: Chart) -> Self { Panel::Chart(c) }
}

impl From<Note> for Panel {
    fn from(n: Note) -> Self { Panel::Note(n) }
}

pub struct Figure {
    pub title: Option<String>,
    /// Overrides the default suptitle size (two points above `Theme::title_size`).
    pub title_size: Option<f32>,
    pub rows: usize,
    pub cols: usize,
    /// Horizontal space between columns, in points.
    pub hgap: f32,
    /// Vertical space between rows, in points.
    pub vgap: f32,
    pub cells: Vec<(usize, usize, Panel)>,
}

impl Figure {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { title: None, title_size: None, rows: rows.max(1), cols: cols.max(1), hgap: 24.0, vgap: 24.0, cells: Vec::new() }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_gaps(mut self, hgap: f32, vgap: f32) -> Self {
        self.hgap = hgap;
        self.vgap = vgap;
        self
    }

    /// Place `panel` at grid cell `(row, col)`; out-of-range cells are clamped to the grid.
    pub fn add(&mut self, row: usize, col: usize, panel: impl Into<Panel>) {
        self.cells.push((row.min(self.rows - 1), col.min(self.cols - 1), panel.into()));
    }

    pub fn draw(&self, canvas: &skia::Canvas, ctx: &DrawContext, area: RectF) {
        let theme = ctx.theme;
        let size = self.title_size.unwrap_or(theme.title_size + 2.0);
        let title_opts = TextOptions::new(size, theme.title).bold().align(HAlign::Center, VAlign::Top);
        let mut body = area;
        if let Some(t) = &self.title {
            let (_, h) = ctx.shaper.measure(t, &title_opts);
            let reserved = h.max(size * 1.2) + 12.0;
            if ctx.draw_labels {
                ctx.shaper.draw(canvas, t, area.center_x(), area.top + 4.0, &title_opts);
            }
            body = RectF::from_ltrb(area.left, area.top + reserved, area.right, area.bottom);
        }
        for (row, col, panel) in &self.cells {
            let cell = body.grid_cell(self.rows, self.cols, *row, *col, self.hgap, self.vgap);
            match panel {
                Panel::Chart(c) => c.draw(canvas, ctx, cell),
                Panel::Note(n) => n.draw(canvas, ctx, cell),
            }
        }
    }

    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> RenderResult<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_png(output_png_path.as_ref(), &bytes)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> RenderResult<Vec<u8>> {
        let (px, w, h, _) = rasterize(opts, |canvas, ctx, area| self.draw(canvas, ctx, area))?;
        encode_png(px, w as u32, h as u32)
    }
}
