// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart/figure construction and rendering.

pub mod annotation;
pub mod axis;
pub mod binning;
pub mod chart;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use annotation::{Annotation, BoxStyle, Label, LineStyle};
pub use axis::{Axis, ScaleKind};
pub use chart::{Chart, DrawContext, LegendPosition, RenderOptions};
pub use error::{RenderError, RenderResult};
pub use figure::{Figure, Note, Panel};
pub use series::{Marker, MarkerShape, Series, SeriesType, YAxisSide};
pub use text::{HAlign, TextOptions, TextShaper, VAlign};
pub use theme::{with_alpha, Theme};
pub use types::Insets;
pub use view::ViewState;

/// Re-exported so callers can name colors without depending on skia-safe directly.
pub use skia_safe::Color;
