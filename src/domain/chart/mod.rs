//! Chart presentation model: chart types, palette and option building.

pub mod config;
pub mod value_objects;

pub use config::{ChartConfig, PLACEHOLDER_TITLE, build_chart_config};
pub use value_objects::*;
