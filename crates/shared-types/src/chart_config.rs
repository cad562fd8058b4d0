//! Chart configuration handed to the charting library
//!
//! These types serialize to the object the Chart.js v2 constructor takes:
//! `{type, data: {labels, datasets}, options: {legend, title, scales}}`.
//! Settings left as `None` are omitted so the library applies its own
//! defaults.

use serde::{Deserialize, Serialize};

use crate::ChartKind;

/// Complete chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptionsConfig,
}

impl ChartConfig {
    pub fn dataset_count(&self) -> usize {
        self.data.datasets.len()
    }

    pub fn legend_displayed(&self) -> bool {
        self.options
            .legend
            .as_ref()
            .and_then(|l| l.display)
            .unwrap_or(true)
    }

    pub fn x_axis(&self) -> Option<&AxisConfig> {
        self.options.scales.as_ref()?.x_axes.first()
    }

    pub fn y_axis(&self) -> Option<&AxisConfig> {
        self.options.scales.as_ref()?.y_axes.first()
    }
}

/// Category labels and datasets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// One dataset as the charting library sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<BackgroundColor>,
    pub data: Vec<f64>,
}

/// Either one color for the whole dataset or one per category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BackgroundColor {
    Single(String),
    PerCategory(Vec<String>),
}

/// Display options block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartOptionsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<ScalesConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LegendPosition>,
}

/// Where the legend sits relative to the plot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleConfig {
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalesConfig {
    pub x_axes: Vec<AxisConfig>,
    pub y_axes: Vec<AxisConfig>,
}

/// Axis configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_label: Option<ScaleLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_thickness: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TicksConfig>,
}

impl AxisConfig {
    pub fn is_empty(&self) -> bool {
        self == &AxisConfig::default()
    }

    pub fn begins_at_zero(&self) -> bool {
        self.ticks.as_ref().is_some_and(|t| t.begin_at_zero)
    }
}

/// Axis title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleLabel {
    pub display: bool,
    pub label_string: String,
    pub font_size: u32,
    pub font_style: String,
}

impl ScaleLabel {
    /// Italic axis title at the dashboard's axis font size
    pub fn italic(label: impl Into<String>) -> Self {
        Self {
            display: true,
            label_string: label.into(),
            font_size: 15,
            font_style: "italic".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicksConfig {
    pub begin_at_zero: bool,
}
