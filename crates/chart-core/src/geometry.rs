// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for point-space layout.

use crate::types::Insets;

/// Axis-aligned rectangle in logical points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }

    /// Shrink by `insets`, never collapsing below a 1pt square.
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left as f32;
        let top = self.top + insets.top as f32;
        let right = (self.right - insets.right as f32).max(left + 1.0);
        let bottom = (self.bottom - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }

    /// Cell `(row, col)` of a `rows x cols` grid laid over this rectangle.
    /// `hgap`/`vgap` are the spaces between neighbouring cells.
    pub fn grid_cell(&self, rows: usize, cols: usize, row: usize, col: usize, hgap: f32, vgap: f32) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let cw = ((self.width() - hgap * (cols - 1) as f32) / cols as f32).max(1.0);
        let ch = ((self.height() - vgap * (rows - 1) as f32) / rows as f32).max(1.0);
        let left = self.left + col as f32 * (cw + hgap);
        let top = self.top + row as f32 * (ch + vgap);
        Self::from_ltwh(left, top, cw, ch)
    }

    pub fn to_skia(&self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}
