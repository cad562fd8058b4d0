//! WASM bridge for the telemetry dashboard charts
//! Exposes one entry point per report type to the page scripts and routes
//! them all through the chart adapter

use serde::de::DeserializeOwned;
use telemetry_charts_config::{
    presets, render, ConfigError, ConfigParser, PresetManager, ReportPreset, ReportSubject,
    ValidationMode,
};
use telemetry_charts_shared::{
    reshape_weekly_table, weekly_series_report, ErrorResponse, Report, TableCell,
    TelemetryChartsError,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub mod dom;
pub mod draw;
pub mod navigation;

use draw::CanvasDrawer;
use navigation::NavConfig;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // Already initialised when the module is instantiated twice
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Telemetry charts initialized");
}

fn error_response(error: TelemetryChartsError, operation: &str) -> ErrorResponse {
    log::error!("{operation} failed: {error}");
    ErrorResponse::new(error).with_context("ChartAdapter", operation)
}

fn js_error(error: TelemetryChartsError, operation: &str) -> JsValue {
    JsValue::from_str(&error_response(error, operation).to_json())
}

fn config_error(error: ConfigError, operation: &str) -> JsValue {
    js_error(error.into_charts_error(), operation)
}

fn from_js<T: DeserializeOwned>(value: JsValue, what: &str, operation: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        js_error(
            TelemetryChartsError::InvalidFormat {
                expected: what.to_string(),
                actual: e.to_string(),
            },
            operation,
        )
    })
}

fn draw_preset(
    ctx: JsValue,
    preset: ReportPreset,
    report: &Report,
    operation: &str,
) -> Result<(), JsValue> {
    let mut drawer = CanvasDrawer::new(ctx);
    render(
        &mut drawer,
        &preset.chart_preset(),
        report,
        ValidationMode::Permissive,
    )
    .map_err(|e| config_error(e, operation))
}

fn draw_single_series(
    ctx: JsValue,
    preset: ReportPreset,
    labels: JsValue,
    values: JsValue,
    operation: &str,
) -> Result<(), JsValue> {
    let labels: Vec<String> = from_js(labels, "an array of labels", operation)?;
    let values: Vec<f64> = from_js(values, "an array of numbers", operation)?;
    let report = Report::single(preset.name(), labels, values);
    draw_preset(ctx, preset, &report, operation)
}

/// Records per build
#[wasm_bindgen(js_name = renderBuilds)]
pub fn render_builds(ctx: JsValue, labels: JsValue, values: JsValue) -> Result<(), JsValue> {
    draw_single_series(
        ctx,
        ReportPreset::BuildsPerRecord,
        labels,
        values,
        "renderBuilds",
    )
}

/// Crash reports by classification
#[wasm_bindgen(js_name = renderCrashStats)]
pub fn render_crash_stats(ctx: JsValue, labels: JsValue, values: JsValue) -> Result<(), JsValue> {
    draw_single_series(
        ctx,
        ReportPreset::Classification(ReportSubject::Crash),
        labels,
        values,
        "renderCrashStats",
    )
}

/// Crash reports by build
#[wasm_bindgen(js_name = renderCrashReports)]
pub fn render_crash_reports(
    ctx: JsValue,
    labels: JsValue,
    values: JsValue,
) -> Result<(), JsValue> {
    draw_single_series(
        ctx,
        ReportPreset::CountPerBuild(ReportSubject::Crash),
        labels,
        values,
        "renderCrashReports",
    )
}

/// MCE reports by classification
#[wasm_bindgen(js_name = renderMCEClass)]
pub fn render_mce_class(ctx: JsValue, labels: JsValue, values: JsValue) -> Result<(), JsValue> {
    draw_single_series(
        ctx,
        ReportPreset::Classification(ReportSubject::Mce),
        labels,
        values,
        "renderMCEClass",
    )
}

/// MCE reports by build
#[wasm_bindgen(js_name = renderMCEReports)]
pub fn render_mce_reports(ctx: JsValue, labels: JsValue, values: JsValue) -> Result<(), JsValue> {
    draw_single_series(
        ctx,
        ReportPreset::CountPerBuild(ReportSubject::Mce),
        labels,
        values,
        "renderMCEReports",
    )
}

/// Internal and external machines per build
#[wasm_bindgen(js_name = renderMachinesPerBuild)]
pub fn render_machines_per_build(
    ctx: JsValue,
    title: String,
    labels: JsValue,
    internal: JsValue,
    external: JsValue,
) -> Result<(), JsValue> {
    let operation = "renderMachinesPerBuild";
    let labels: Vec<String> = from_js(labels, "an array of builds", operation)?;
    let internal: Vec<f64> = from_js(internal, "an array of machine counts", operation)?;
    let external: Vec<f64> = from_js(external, "an array of machine counts", operation)?;

    let report = presets::population_report(labels, internal, external);
    draw_preset(ctx, ReportPreset::Population { title }, &report, operation)
}

/// Distribution pie chart, used for both the platform and class stats
#[wasm_bindgen(js_name = renderStats)]
pub fn render_stats(
    ctx: JsValue,
    title: String,
    labels: JsValue,
    values: JsValue,
) -> Result<(), JsValue> {
    draw_single_series(
        ctx,
        ReportPreset::Stats { title },
        labels,
        values,
        "renderStats",
    )
}

/// Thermal records per week from the `[header row, value row]` table
#[wasm_bindgen(js_name = renderThermal)]
pub fn render_thermal(ctx: JsValue, table: JsValue) -> Result<(), JsValue> {
    let operation = "renderThermal";
    let table: Vec<Vec<TableCell>> = from_js(table, "an array of table rows", operation)?;
    let report = reshape_weekly_table(&table, ValidationMode::Permissive)
        .map_err(|e| js_error(e, operation))?;
    draw_preset(ctx, ReportPreset::ThermalByWeek, &report, operation)
}

/// Per-week breakdown of one MCE class from a `{week: count}` object
#[wasm_bindgen(js_name = renderWeeklyBreakdown)]
pub fn render_weekly_breakdown(ctx: JsValue, name: String, weeks: JsValue) -> Result<(), JsValue> {
    let operation = "renderWeeklyBreakdown";
    let weeks = weekly_counts(&weeks).map_err(|e| js_error(e, operation))?;
    let report = weekly_series_report(&name, &weeks);
    draw_preset(ctx, ReportPreset::WeeklyBreakdown, &report, operation)
}

/// Read `{week: count}` pairs in the object's own key order
pub fn weekly_counts(weeks: &JsValue) -> Result<Vec<(String, f64)>, TelemetryChartsError> {
    let object = weeks
        .dyn_ref::<js_sys::Object>()
        .ok_or_else(|| TelemetryChartsError::InvalidFormat {
            expected: "an object of weekly counts".to_string(),
            actual: format!("{weeks:?}"),
        })?;

    js_sys::Object::entries(object)
        .iter()
        .map(|entry| -> Result<(String, f64), TelemetryChartsError> {
            let pair: js_sys::Array = entry.unchecked_into();
            let week = pair.get(0).as_string().unwrap_or_default();
            let count = pair.get(1).as_f64().ok_or_else(|| TelemetryChartsError::DataParse {
                message: format!("count for week {week} is not a number"),
            })?;
            Ok((week, count))
        })
        .collect()
}

/// Render any report by preset name.
///
/// `report` is `{labels, series: [{label, values, color?}]}`. `overrides` is
/// optional display options layered over the preset, written in
/// `overrides_format` (`json`, `yaml` or `toml`; JSON when absent). Errors
/// carry the preset name and mode in their context metadata.
#[wasm_bindgen(js_name = renderPreset)]
pub fn render_preset(
    ctx: JsValue,
    preset_name: &str,
    report: JsValue,
    overrides: Option<String>,
    overrides_format: Option<String>,
    strict: bool,
) -> Result<(), JsValue> {
    let operation = "renderPreset";
    let fail = |error: TelemetryChartsError| {
        JsValue::from_str(
            &error_response(error, operation)
                .with_metadata(serde_json::json!({
                    "preset": preset_name,
                    "strict": strict,
                }))
                .to_json(),
        )
    };

    let report: Report = serde_wasm_bindgen::from_value(report).map_err(|e| {
        fail(TelemetryChartsError::InvalidFormat {
            expected: "a report object".to_string(),
            actual: e.to_string(),
        })
    })?;

    let overrides = overrides
        .map(|text| ConfigParser::parse_named(&text, overrides_format.as_deref()))
        .transpose()
        .map_err(|e| fail(e.into_charts_error()))?;

    let preset = PresetManager::new()
        .apply_preset(preset_name, overrides)
        .map_err(|e| fail(e.into_charts_error()))?;

    let mode = if strict {
        ValidationMode::Strict
    } else {
        ValidationMode::Permissive
    };

    let mut drawer = CanvasDrawer::new(ctx);
    render(&mut drawer, &preset, &report, mode).map_err(|e| fail(e.into_charts_error()))
}

/// Names accepted by `renderPreset`
#[wasm_bindgen(js_name = presetNames)]
pub fn preset_names() -> js_sys::Array {
    PresetManager::new()
        .list_presets_by_name()
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}

/// Highlight the nav tab for the current page
#[wasm_bindgen(js_name = initTabs)]
pub fn init_tabs() -> Result<Option<usize>, JsValue> {
    dom::init_tabs(&NavConfig::default())
}

/// Move an element one step through a cycle of classes
#[wasm_bindgen(js_name = toggleColorClass)]
pub fn toggle_color_class(element_id: &str, classes: Vec<String>) -> Result<(), JsValue> {
    dom::toggle_color_class_by_id(element_id, &classes)
}

/// Cycle an element's classes on every click of a button
#[wasm_bindgen(js_name = bindToggleButton)]
pub fn bind_toggle_button(
    button_id: &str,
    target_id: &str,
    classes: Vec<String>,
) -> Result<(), JsValue> {
    dom::bind_toggle_button(button_id, target_id, classes)
}
