// File: crates/churn-charts/src/charts/lift_vs_roi.rs
// Summary: Dual-axis comparison of absolute lift and ROI per channel.

use std::path::PathBuf;

use anyhow::Result;
use chart_core::{
    Annotation, Axis, BoxStyle, Chart, HAlign, Insets, Label, LegendPosition, Series, TextOptions, VAlign, YAxisSide,
};

use super::{above, emit};
use crate::config::Config;
use crate::data::CHANNEL_LIFT;
use crate::palette::{LIGHT_YELLOW, PRIMARY, SUCCESS, WARNING, WHITE};

pub const FILE: &str = "10_lift_vs_roi.png";
const SIZE_IN: (f32, f32) = (11.0, 6.0);
const BAR_WIDTH: f64 = 0.35;

pub fn build(cfg: &Config) -> Chart {
    let ink = cfg.theme.axis_label;
    let names: Vec<&str> = CHANNEL_LIFT.iter().map(|c| c.channel).collect();
    let lift: Vec<f64> = CHANNEL_LIFT.iter().map(|c| c.lift_pp).collect();
    let roi: Vec<f64> = CHANNEL_LIFT.iter().map(|c| c.roi).collect();
    let half = BAR_WIDTH / 2.0;

    let mut chart = Chart::new().with_title("The Trade-off: Lift vs ROI by Channel");
    // strategy box sits under the axis label
    chart.insets = Insets::new(72, 72, 40, 104);
    chart.x_axis = Axis::categories("Intervention Channel", &names);
    chart.y_axis = Axis::new("Absolute Lift (percentage points)", 0.0, 15.0).with_color(PRIMARY);
    chart.y2_axis = Some(Axis::new("ROI (× return)", 0.0, 180.0).with_color(SUCCESS));
    chart.legend = Some(LegendPosition::UpperCenter);

    chart.add_series(
        Series::bars(&lift)
            .bar_width(BAR_WIDTH)
            .bar_offset(-half)
            .color(PRIMARY)
            .edge(WHITE, 2.0)
            .label("Absolute Lift (pp)"),
    );
    chart.add_series(
        Series::bars(&roi)
            .bar_width(BAR_WIDTH)
            .bar_offset(half)
            .color(SUCCESS)
            .edge(WHITE, 2.0)
            .label("ROI (×)")
            .on_axis(YAxisSide::Right),
    );

    for (i, c) in CHANNEL_LIFT.iter().enumerate() {
        let x = i as f64;
        chart.annotate(Annotation::text_offset(
            (x - half, c.lift_pp),
            (0.0, 3.0),
            Label::new(format!("{:.1}pp", c.lift_pp), above(10.0, PRIMARY).bold()),
        ));
        chart.annotate(
            Annotation::text_offset(
                (x + half, c.roi),
                (0.0, 3.0),
                Label::new(format!("{:.1}x", c.roi), above(10.0, SUCCESS).bold()),
            )
            .on_axis(YAxisSide::Right),
        );
    }

    chart.annotate(Annotation::arrow(
        (2.8, 13.0),
        (2.0 - half, 11.8),
        PRIMARY,
        Label::new("Highest LIFT\nbut lower ROI", above(9.0, PRIMARY)),
    ));
    chart.annotate(
        Annotation::arrow(
            (-0.5, 140.0),
            (half, 158.8),
            SUCCESS,
            Label::new("Highest ROI\nbut lower lift", above(9.0, SUCCESS)),
        )
        .on_axis(YAxisSide::Right),
    );

    let strategy = TextOptions::new(10.0, ink).italic().align(HAlign::Center, VAlign::Top);
    chart.annotate(Annotation::text_offset(
        (1.5, 0.0),
        (0.0, -64.0),
        Label::new(
            "Strategy: Use Email for broad outreach (high ROI), Call for high-value customers (high impact)",
            strategy,
        )
        .boxed(BoxStyle::new(LIGHT_YELLOW, Some(WARNING)).pad(5.0)),
    ));
    chart
}

pub fn render(cfg: &Config) -> Result<PathBuf> {
    emit(cfg, FILE, SIZE_IN, &build(cfg))
}
