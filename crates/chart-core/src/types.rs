// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, resolution, paddings).

/// Logical units per inch. All layout happens in points; `RenderOptions::scale`
/// maps points to output pixels.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Default surface width in points (10 in).
pub const WIDTH: i32 = 720;
/// Default surface height in points (6 in).
pub const HEIGHT: i32 = 432;

/// Default output resolution.
pub const DEFAULT_DPI: f32 = 150.0;

/// Convert a physical size in inches to logical points.
#[inline]
pub fn inches(v: f32) -> i32 {
    (v * POINTS_PER_INCH).round() as i32
}

/// Screen margins around a plot area, in points.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 40, 56)
    }
}
