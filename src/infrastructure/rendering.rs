//! ECharts binding. The chart library is loaded by the host page as `window.echarts`.

use wasm_bindgen::prelude::*;

use crate::domain::chart::ChartConfig;
use crate::domain::errors::AppResult;
use crate::domain::logging::{LogComponent, get_logger};

#[wasm_bindgen(inline_js = r#"
export function echarts_available() {
    return typeof window !== "undefined" && !!window.echarts;
}

export function echarts_render(elementId, optionJson) {
    const element = document.getElementById(elementId);
    if (!element || !window.echarts) {
        return false;
    }
    const chart = window.echarts.getInstanceByDom(element) || window.echarts.init(element);
    chart.setOption(JSON.parse(optionJson), true);
    return true;
}

export function echarts_resize(elementId) {
    const element = document.getElementById(elementId);
    if (!element || !window.echarts) {
        return;
    }
    const chart = window.echarts.getInstanceByDom(element);
    if (chart) {
        chart.resize();
    }
}
"#)]
extern "C" {
    fn echarts_available() -> bool;
    fn echarts_render(element_id: &str, option_json: &str) -> bool;
    fn echarts_resize(element_id: &str);
}

/// Chart mounted into a DOM element by id
#[derive(Debug, Clone)]
pub struct EChartsSurface {
    element_id: &'static str,
}

impl EChartsSurface {
    pub fn new(element_id: &'static str) -> Self {
        Self { element_id }
    }

    /// Replace the whole chart option. Missing library or element is not an error;
    /// the next render after mount picks the config up again.
    pub fn render(&self, config: &ChartConfig) -> AppResult<()> {
        let json = config.to_json()?;
        if !echarts_available() {
            get_logger().warn(LogComponent::Infrastructure("ECharts"), "window.echarts is not loaded");
            return Ok(());
        }
        if gloo::utils::document().get_element_by_id(self.element_id).is_none() {
            get_logger().debug(
                LogComponent::Infrastructure("ECharts"),
                &format!("#{} not mounted yet, skipping render", self.element_id),
            );
            return Ok(());
        }
        if echarts_render(self.element_id, &json) {
            get_logger().debug(
                LogComponent::Infrastructure("ECharts"),
                &format!("Rendered {} series", config.series.len()),
            );
        }
        Ok(())
    }

    pub fn resize(&self) {
        echarts_resize(self.element_id);
    }
}
