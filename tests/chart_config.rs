mod common;

use common::point;
use insta::assert_snapshot;
use symbol_chart_wasm::domain::chart::{ChartType, PALETTE, build_chart_config};
use symbol_chart_wasm::domain::market_data::{ChartDataMap, Symbol};

fn two_series() -> ChartDataMap {
    let mut data = ChartDataMap::new();
    data.insert(Symbol::from("MSFT"), vec![point(2_000, 310.0, 1.5), point(1_000, 305.0, 0.0)]);
    data.insert(Symbol::from("AAPL"), vec![point(1_000, 190.0, 0.0), point(2_000, 185.0, -2.5)]);
    data
}

#[test]
fn empty_data_renders_placeholder() {
    let config = build_chart_config(&ChartDataMap::new(), ChartType::Percentage);
    assert!(config.is_placeholder());

    let json = serde_json::to_string_pretty(&config).unwrap();
    assert_snapshot!(json, @r#"
    {
      "title": {
        "text": "Select symbols to display a chart",
        "left": "center",
        "top": "middle"
      },
      "series": []
    }
    "#);
}

#[test]
fn price_chart_plots_close_per_symbol_in_order() {
    let config = build_chart_config(&two_series(), ChartType::Price);

    assert_eq!(config.series.len(), 2);
    assert_eq!(config.series[0].name, "MSFT");
    assert_eq!(config.series[0].data, vec![(1_000, 305.0), (2_000, 310.0)]);
    assert_eq!(config.series[1].name, "AAPL");
    assert_eq!(config.series[0].line_style.color, PALETTE[0].css());
    assert_eq!(config.series[1].line_style.color, PALETTE[1].css());
    assert_eq!(config.legend.unwrap().data, ["MSFT", "AAPL"]);
}

#[test]
fn percentage_chart_plots_change_from_start() {
    let config = build_chart_config(&two_series(), ChartType::Percentage);

    assert_eq!(config.series[1].data, vec![(1_000, 0.0), (2_000, -2.5)]);
    assert_eq!(config.y_axis.unwrap().name, Some("Change (%)"));
    assert_eq!(config.title.text, "Performance comparison");
}

#[test]
fn option_json_uses_library_field_names() {
    let json = build_chart_config(&two_series(), ChartType::Price).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["xAxis"]["type"], "time");
    assert_eq!(value["yAxis"]["scale"], true);
    assert_eq!(value["series"][0]["type"], "line");
    assert_eq!(value["series"][0]["showSymbol"], false);
    assert_eq!(value["series"][0]["data"][0], serde_json::json!([1000, 305.0]));
}
