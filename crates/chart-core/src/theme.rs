// File: crates/chart-core/src/theme.rs
// Summary: Shared styling defaults for chart rendering colors and font sizes.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    pub title_size: f32,
    pub label_size: f32,
    pub tick_size: f32,
    pub legend_size: f32,
}

impl Theme {
    /// White background with a light grey grid and no heavy spines.
    pub fn whitegrid() -> Self {
        Self {
            name: "whitegrid",
            background: skia::Color::WHITE,
            plot_background: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 0xdd, 0xdd, 0xdd),
            axis_line: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            axis_label: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            tick: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            title: skia::Color::from_argb(255, 0x11, 0x11, 0x11),
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            title_size: 14.0,
            label_size: 12.0,
            tick_size: 10.0,
            legend_size: 10.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::whitegrid() }
}

/// Same color at `alpha` opacity in `[0, 1]`.
pub fn with_alpha(c: skia::Color, alpha: f32) -> skia::Color {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(a, c.r(), c.g(), c.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = with_alpha(skia::Color::from_rgb(10, 20, 30), 0.5);
        assert_eq!((c.r(), c.g(), c.b()), (10, 20, 30));
        assert_eq!(c.a(), 128);
    }
}
