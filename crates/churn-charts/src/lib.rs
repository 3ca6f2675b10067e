// File: crates/churn-charts/src/lib.rs
// Summary: Churn portfolio chart generator: data tables, synthetic samples and the chart procedures.

pub mod charts;
pub mod config;
pub mod data;
pub mod labels;
pub mod palette;
pub mod rng;
pub mod survival;
pub mod timing;

pub use charts::{generate_all, ChartJob, ALL};
pub use config::Config;
