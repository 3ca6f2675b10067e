// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout with alignment, weight and multi-line support.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

use crate::geometry::RectF;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

#[derive(Clone, Copy, Debug)]
pub struct TextOptions {
    pub size: f32,
    pub color: skia::Color,
    pub bold: bool,
    pub italic: bool,
    pub mono: bool,
    pub halign: HAlign,
    pub valign: VAlign,
}

impl TextOptions {
    pub fn new(size: f32, color: skia::Color) -> Self {
        Self {
            size,
            color,
            bold: false,
            italic: false,
            mono: false,
            halign: HAlign::Left,
            valign: VAlign::Bottom,
        }
    }
    pub fn bold(mut self) -> Self { self.bold = true; self }
    pub fn italic(mut self) -> Self { self.italic = true; self }
    pub fn mono(mut self) -> Self { self.mono = true; self }
    pub fn align(mut self, halign: HAlign, valign: VAlign) -> Self {
        self.halign = halign;
        self.valign = valign;
        self
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(opts: &TextOptions) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(opts.size.max(1.0));
        ts.set_color(opts.color);
        if opts.mono {
            ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        } else {
            ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        }
        let style = match (opts.bold, opts.italic) {
            (true, true) => skia::FontStyle::bold_italic(),
            (true, false) => skia::FontStyle::bold(),
            (false, true) => skia::FontStyle::italic(),
            (false, false) => skia::FontStyle::normal(),
        };
        ts.set_font_style(style);
        ts
    }

    fn build(&self, text: &str, opts: &TextOptions, align: TextAlign) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(align);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(opts);
        builder.push_style(&style);
        builder.add_text(text);
        builder.build()
    }

    /// Lay out `text` (which may contain newlines) and return the paragraph
    /// along with its width and height in points.
    pub fn layout(&self, text: &str, opts: &TextOptions) -> (Paragraph, f32, f32) {
        let mut sizing = self.build(text, opts, TextAlign::Left);
        sizing.layout(10_000.0);
        let width = sizing.max_intrinsic_width().ceil() + 1.0;
        let align = match opts.halign {
            HAlign::Left => TextAlign::Left,
            HAlign::Center => TextAlign::Center,
            HAlign::Right => TextAlign::Right,
        };
        let mut paragraph = self.build(text, opts, align);
        paragraph.layout(width);
        let height = paragraph.height();
        (paragraph, width, height)
    }

    pub fn measure(&self, text: &str, opts: &TextOptions) -> (f32, f32) {
        let (_, w, h) = self.layout(text, opts);
        (w, h)
    }

    /// Bounding box `text` would occupy when anchored at `(x, y)`.
    pub fn bounds(&self, text: &str, x: f32, y: f32, opts: &TextOptions) -> RectF {
        let (w, h) = self.measure(text, opts);
        anchor_box(x, y, w, h, opts)
    }

    /// Draw `text` anchored at `(x, y)` per the alignment in `opts`; returns the box it occupies.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, opts: &TextOptions) -> RectF {
        let (paragraph, w, h) = self.layout(text, opts);
        let rect = anchor_box(x, y, w, h, opts);
        paragraph.paint(canvas, (rect.left, rect.top));
        rect
    }

    /// Draw `text` centered on `(x, y)` and rotated 90 degrees counter-clockwise.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, opts: &TextOptions) {
        let centered = opts.align(HAlign::Center, VAlign::Middle);
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(-90.0, None);
        self.draw(canvas, text, 0.0, 0.0, &centered);
        canvas.restore();
    }
}

fn anchor_box(x: f32, y: f32, w: f32, h: f32, opts: &TextOptions) -> RectF {
    let left = match opts.halign {
        HAlign::Left => x,
        HAlign::Center => x - w * 0.5,
        HAlign::Right => x - w,
    };
    let top = match opts.valign {
        VAlign::Top => y,
        VAlign::Middle => y - h * 0.5,
        VAlign::Bottom => y - h,
    };
    RectF::from_ltwh(left, top, w, h)
}
