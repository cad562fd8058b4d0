//! Drawing primitive backed by the page's Chart.js

use serde::Serialize;
use telemetry_charts_config::{ChartDrawer, Result};
use telemetry_charts_shared::{map_chart_error, ChartConfig, TelemetryChartsError};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// The global `Chart` constructor
    #[wasm_bindgen(js_name = Chart)]
    type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(ctx: &JsValue, config: &JsValue) -> std::result::Result<ChartJs, JsValue>;
}

/// Draws onto a canvas, canvas context or canvas id with `new Chart(...)`.
///
/// The target is handed to the library untouched; a bad target surfaces as
/// whatever the library throws.
pub struct CanvasDrawer {
    target: JsValue,
}

impl CanvasDrawer {
    pub fn new(target: JsValue) -> Self {
        Self { target }
    }
}

/// Convert a chart configuration into a plain JS object
pub fn to_js_config(config: &ChartConfig) -> std::result::Result<JsValue, TelemetryChartsError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    map_chart_error!(
        config.serialize(&serializer),
        JsInterop,
        "Failed to convert chart config"
    )
}

impl ChartDrawer for CanvasDrawer {
    fn draw(&mut self, config: &ChartConfig) -> Result<()> {
        let js_config = to_js_config(config)?;

        ChartJs::new(&self.target, &js_config).map_err(|e| TelemetryChartsError::JsInterop {
            message: format!("Chart construction failed: {e:?}"),
        })?;

        Ok(())
    }
}
