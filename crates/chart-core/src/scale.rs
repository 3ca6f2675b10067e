// File: crates/chart-core/src/scale.rs
// Summary: Linear value scale mapping a data range onto a pixel span.

/// Value coordinate (e.g., a count, a rate or a category position).
pub type Value = f64;

/// Maps `[vmin, vmax]` onto `[px0, px1]`. `px0` receives `vmin`, so a
/// vertical scale passes the bottom edge as `px0`; an inverted axis swaps them.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub px0: f32,
    pub px1: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new(px0: f32, px1: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { px0, px1, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    /// Horizontal scale over `[left, right]`.
    pub fn horizontal(left: f32, right: f32, vmin: Value, vmax: Value, inverted: bool) -> Self {
        if inverted { Self::new(right, left, vmin, vmax) } else { Self::new(left, right, vmin, vmax) }
    }

    /// Vertical scale over `[top, bottom]`; larger values sit higher unless inverted.
    pub fn vertical(top: f32, bottom: f32, vmin: Value, vmax: Value, inverted: bool) -> Self {
        if inverted { Self::new(top, bottom, vmin, vmax) } else { Self::new(bottom, top, vmin, vmax) }
    }

    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let span = self.vmax - self.vmin;
        self.px0 + ((v - self.vmin) / span) as f32 * (self.px1 - self.px0)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_scale_puts_max_on_top() {
        let s = ValueScale::vertical(10.0, 110.0, 0.0, 100.0, false);
        assert_eq!(s.to_px(0.0), 110.0);
        assert_eq!(s.to_px(100.0), 10.0);
        assert!((s.to_px(50.0) - 60.0).abs() < 1e-4);
    }

    #[test]
    fn inverted_vertical_scale_puts_min_on_top() {
        let s = ValueScale::vertical(0.0, 80.0, -0.5, 7.5, true);
        assert!((s.to_px(-0.5) - 0.0).abs() < 1e-4);
        assert!((s.to_px(7.5) - 80.0).abs() < 1e-4);
    }

    #[test]
    fn degenerate_range_is_widened() {
        let s = ValueScale::new(0.0, 100.0, 3.0, 3.0);
        assert_eq!(s.vmax, 4.0);
        assert!((s.to_px(3.5) - 50.0).abs() < 1e-4);
    }
}
