//! Shared types for the telemetry dashboard charts
//!
//! This crate contains the types shared between the config-system and
//! wasm-bridge crates: the report data model, the chart configuration that
//! is handed to the charting library, the color palette and the common
//! error type.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use tsify::Tsify;

pub mod chart_config;
pub mod data_types;
pub mod errors;

pub use chart_config::*;
pub use data_types::*;
pub use errors::{ErrorContext, ErrorResponse, TelemetryChartsError, TelemetryChartsResult};

/// Chart kinds supported by the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Pie => write!(f, "pie"),
        }
    }
}

/// How strictly report input is checked before drawing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Mismatched lengths and unreadable counts are passed through to the
    /// charting library
    #[default]
    Permissive,
    /// Mismatched lengths fail with `MalformedReport`, unreadable counts with
    /// `DataParse`
    Strict,
}

/// Background colors shared by every chart on the dashboard
pub const PALETTE: [&str; 15] = [
    "#3e95cd", "#8e5ea2", "#3cba9f", "#e8c3b9", "#c45850", "#ff8c00", "#483d8b", "#00bfff",
    "#1e90ff", "#008000", "#df42f4", "#c7f441", "#f47641", "#f44141", "#43f441",
];

/// Palette color for a series or category index, wrapping around.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Palette colors for `count` consecutive categories
pub fn palette_colors(count: usize) -> Vec<String> {
    (0..count).map(|i| palette_color(i).to_string()).collect()
}
