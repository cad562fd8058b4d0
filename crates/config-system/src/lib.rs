//! Configuration system for the telemetry dashboard charts
//! Manages report presets, display options and the chart adapter that turns
//! a report into a drawable chart configuration

use serde::{Deserialize, Serialize};
use telemetry_charts_shared::{ChartKind, LegendPosition, TelemetryChartsError};
use thiserror::Error;

pub mod adapter;
pub mod builder;
pub mod parser;
pub mod presets;
pub mod validation;

pub use adapter::{render, render_with_options, ChartDrawer};
pub use builder::build_config;
pub use parser::{ConfigFormat, ConfigParser};
pub use presets::{ReportPreset, ReportSubject};
pub use telemetry_charts_shared::ValidationMode;
pub use validation::{OptionsValidator, ReportValidator};

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Charts(#[from] TelemetryChartsError),
}

impl ConfigError {
    /// Flatten into the shared error type for the JavaScript boundary
    pub fn into_charts_error(self) -> TelemetryChartsError {
        match self {
            ConfigError::Charts(err) => err,
            ConfigError::Validation(message) => TelemetryChartsError::InvalidConfig {
                message,
                field: None,
            },
            ConfigError::Parse(message) => TelemetryChartsError::DataParse { message },
        }
    }
}

/// How palette colors are assigned to datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorScheme {
    /// One color per category, `palette[i % len]`
    PerCategory,
    /// One color per series, `palette[series index]`
    PerSeries,
}

/// Display options for one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub title: Option<String>,
    pub show_title: bool,
    pub title_font_size: Option<u32>,
    pub show_legend: bool,
    pub legend_position: Option<LegendPosition>,
    /// Stack both axes
    pub stacked: bool,
    pub bar_thickness: Option<u32>,
    pub y_axis_label: Option<String>,
    pub x_axis_label: Option<String>,
    pub begin_y_at_zero: bool,
    pub responsive: Option<bool>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: None,
            show_title: false,
            title_font_size: None,
            show_legend: true,
            legend_position: None,
            stacked: false,
            bar_thickness: None,
            y_axis_label: None,
            x_axis_label: None,
            begin_y_at_zero: false,
            responsive: None,
        }
    }
}

/// Partial options layered over a preset's defaults.
///
/// Keys that are absent keep the preset value; unrecognized keys are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartOptionsOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_title: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_position: Option<LegendPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_thickness: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_y_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
}

impl ChartOptionsOverride {
    pub fn apply_to(self, mut base: ChartOptions) -> ChartOptions {
        if self.title.is_some() {
            base.title = self.title;
        }
        if let Some(show_title) = self.show_title {
            base.show_title = show_title;
        }
        if self.title_font_size.is_some() {
            base.title_font_size = self.title_font_size;
        }
        if let Some(show_legend) = self.show_legend {
            base.show_legend = show_legend;
        }
        if self.legend_position.is_some() {
            base.legend_position = self.legend_position;
        }
        if let Some(stacked) = self.stacked {
            base.stacked = stacked;
        }
        if self.bar_thickness.is_some() {
            base.bar_thickness = self.bar_thickness;
        }
        if self.y_axis_label.is_some() {
            base.y_axis_label = self.y_axis_label;
        }
        if self.x_axis_label.is_some() {
            base.x_axis_label = self.x_axis_label;
        }
        if let Some(begin) = self.begin_y_at_zero {
            base.begin_y_at_zero = begin;
        }
        if self.responsive.is_some() {
            base.responsive = self.responsive;
        }
        base
    }
}

/// A fully resolved report preset: what kind of chart, how datasets are
/// labelled and colored, and the display options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPreset {
    pub name: String,
    pub description: String,
    pub kind: ChartKind,
    /// Replaces the label of a single-series report
    pub dataset_label: Option<String>,
    pub color_scheme: ColorScheme,
    pub options: ChartOptions,
}

impl ChartPreset {
    /// Layer an override on top of this preset's options
    pub fn with_override(mut self, overrides: ChartOptionsOverride) -> Self {
        self.options = overrides.apply_to(self.options);
        self
    }
}

/// Preset manager for the dashboard's report types
pub struct PresetManager {
    presets: Vec<ChartPreset>,
}

impl Default for PresetManager {
    fn default() -> Self {
        let presets = presets::get_all_presets();
        Self { presets }
    }
}

impl PresetManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_presets_by_name(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    /// Get all presets
    pub fn get_all_presets(&self) -> &[ChartPreset] {
        &self.presets
    }

    pub fn find_preset(&self, name: &str) -> Option<&ChartPreset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Resolve a preset by name and layer overrides onto its options.
    ///
    /// Presets that take their title from the caller have none when resolved
    /// by name, so a shown title must come from the overrides.
    pub fn apply_preset(
        &self,
        name: &str,
        overrides: Option<ChartOptionsOverride>,
    ) -> Result<ChartPreset> {
        let base = self
            .find_preset(name)
            .cloned()
            .ok_or_else(|| TelemetryChartsError::UnknownPreset {
                name: name.to_string(),
            })?;

        let preset = match overrides {
            Some(overrides) => base.with_override(overrides),
            None => base,
        };

        if preset.options.show_title && preset.options.title.is_none() {
            return Err(ConfigError::Validation(format!(
                "Preset {name} shows a title but none was given"
            )));
        }

        OptionsValidator::validate(&preset.options)?;
        Ok(preset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_override_keeps_unset_fields() {
        let base = presets::builds_per_record().options;
        let overrides = ChartOptionsOverride {
            bar_thickness: Some(20),
            ..Default::default()
        };

        let options = overrides.apply_to(base.clone());
        assert_eq!(options.bar_thickness, Some(20));
        assert_eq!(options.y_axis_label, base.y_axis_label);
        assert_eq!(options.show_legend, base.show_legend);
    }

    #[test]
    fn test_override_ignores_unknown_keys() {
        let overrides: ChartOptionsOverride =
            serde_json::from_value(json!({"title": "Builds", "animation": false})).unwrap();
        assert_eq!(overrides.title.as_deref(), Some("Builds"));
    }

    #[test]
    fn test_preset_manager_lists_every_report() {
        let manager = PresetManager::new();
        let names = manager.list_presets_by_name();
        for name in [
            "builds",
            "crash-classification",
            "mce-classification",
            "crash-reports",
            "mce-reports",
            "population",
            "stats",
            "thermal",
            "mce-weekly",
        ] {
            assert!(names.contains(&name), "missing preset {name}");
        }
    }

    #[test]
    fn test_apply_preset_with_title() {
        let manager = PresetManager::new();
        let preset = manager
            .apply_preset(
                "stats",
                Some(ChartOptionsOverride {
                    title: Some("Platform distribution".to_string()),
                    ..Default::default()
                }),
            )
            .unwrap();
        assert_eq!(preset.options.title.as_deref(), Some("Platform distribution"));
    }

    #[test]
    fn test_apply_preset_requires_title() {
        let manager = PresetManager::new();
        let err = manager.apply_preset("stats", None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_apply_preset_accepts_empty_title() {
        let manager = PresetManager::new();
        let preset = manager
            .apply_preset(
                "population",
                Some(ChartOptionsOverride {
                    title: Some(String::new()),
                    ..Default::default()
                }),
            )
            .unwrap();
        assert_eq!(preset.options.title.as_deref(), Some(""));
    }

    #[test]
    fn test_apply_unknown_preset() {
        let manager = PresetManager::new();
        let err = manager.apply_preset("heatmap", None).unwrap_err();
        assert!(matches!(
            err.into_charts_error(),
            TelemetryChartsError::UnknownPreset { .. }
        ));
    }
}
