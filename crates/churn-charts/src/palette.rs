// File: crates/churn-charts/src/palette.rs
// Summary: Shared color palette for every churn chart.

use chart_core::Color;

pub const PRIMARY: Color = Color::new(0xFF25_63EB);
pub const SECONDARY: Color = Color::new(0xFF7C_3AED);
pub const SUCCESS: Color = Color::new(0xFF05_9669);
pub const WARNING: Color = Color::new(0xFFD9_7706);
pub const DANGER: Color = Color::new(0xFFDC_2626);
pub const GRAY: Color = Color::new(0xFF6B_7280);
pub const LIGHT_BLUE: Color = Color::new(0xFF93_C5FD);
pub const LIGHT_GREEN: Color = Color::new(0xFF6E_E7B7);
pub const LIGHT_RED: Color = Color::new(0xFFFC_A5A5);
pub const LIGHT_PURPLE: Color = Color::new(0xFFC4_B5FD);

/// Deepest red, used for the critical risk tier only.
pub const CRITICAL: Color = Color::new(0xFF99_1B1B);
/// Callout box fill for strategy notes.
pub const LIGHT_YELLOW: Color = Color::new(0xFFFF_FFE0);
pub const WHITE: Color = Color::WHITE;
