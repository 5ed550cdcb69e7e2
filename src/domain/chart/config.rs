//! Declarative option object handed to the charting library.

use serde::Serialize;

use super::value_objects::{ChartType, palette_color};
use crate::domain::market_data::{ChartDataMap, SeriesPoint};

pub const PLACEHOLDER_TITLE: &str = "Select symbols to display a chart";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleConfig {
    pub text: String,
    pub left: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipConfig {
    pub trigger: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendConfig {
    pub data: Vec<String>,
    pub bottom: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    pub scale: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub show_symbol: bool,
    pub line_style: LineStyle,
    pub item_style: LineStyle,
    /// `[timestamp_ms, y]` pairs
    pub data: Vec<(u64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub title: TitleConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<AxisConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<AxisConfig>,
    pub series: Vec<SeriesConfig>,
}

impl ChartConfig {
    pub fn placeholder() -> Self {
        Self {
            title: TitleConfig {
                text: PLACEHOLDER_TITLE.to_string(),
                left: "center",
                top: Some("middle"),
            },
            tooltip: None,
            legend: None,
            x_axis: None,
            y_axis: None,
            series: Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.series.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn y_value(point: &SeriesPoint, chart_type: ChartType) -> f64 {
    match chart_type {
        ChartType::Price => point.close,
        ChartType::Percentage => point.percentage_change,
    }
}

/// Pure translation of chart data into a chart option object.
pub fn build_chart_config(data: &ChartDataMap, chart_type: ChartType) -> ChartConfig {
    if data.is_empty() {
        return ChartConfig::placeholder();
    }

    let series: Vec<SeriesConfig> = data
        .iter()
        .enumerate()
        .map(|(index, (symbol, points))| {
            let color = palette_color(index).css();
            SeriesConfig {
                name: symbol.value().to_string(),
                kind: "line",
                show_symbol: false,
                line_style: LineStyle { color: color.clone() },
                item_style: LineStyle { color },
                data: points
                    .iter()
                    .map(|p| (p.timestamp.value(), y_value(p, chart_type)))
                    .collect(),
            }
        })
        .collect();

    let title = match chart_type {
        ChartType::Price => "Price comparison",
        ChartType::Percentage => "Performance comparison",
    };

    ChartConfig {
        title: TitleConfig { text: title.to_string(), left: "center", top: None },
        tooltip: Some(TooltipConfig { trigger: "axis" }),
        legend: Some(LegendConfig {
            data: series.iter().map(|s| s.name.clone()).collect(),
            bottom: 0,
        }),
        x_axis: Some(AxisConfig { kind: "time", name: None, scale: false }),
        y_axis: Some(AxisConfig {
            kind: "value",
            name: Some(chart_type.axis_name()),
            scale: true,
        }),
        series,
    }
}
