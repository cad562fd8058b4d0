//! Common error types used across the telemetry chart crates
//! Provides consistent error handling and reporting

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for all chart operations
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum TelemetryChartsError {
    // Data-related errors
    #[error("Malformed report: series {series} has {actual} values but there are {expected} labels")]
    MalformedReport {
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid data format: {expected} but got {actual}")]
    InvalidFormat { expected: String, actual: String },

    #[error("Data parse error: {message}")]
    DataParse { message: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String,
        field: Option<String>,
    },

    #[error("Unknown preset: {name}")]
    UnknownPreset { name: String },

    // WASM-specific errors
    #[error("JavaScript interop error: {message}")]
    JsInterop { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Result type alias for chart operations
pub type TelemetryChartsResult<T> = Result<T, TelemetryChartsError>;

/// Error response structure for JavaScript interop
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: TelemetryChartsError,
    pub timestamp: u64,
    pub context: Option<ErrorContext>,
}

/// Additional context for error reporting
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
    pub metadata: serde_json::Value,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: TelemetryChartsError) -> Self {
        Self {
            success: false,
            error,
            timestamp: chrono::Utc::now().timestamp_millis() as u64,
            context: None,
        }
    }

    /// Add context to the error response
    pub fn with_context(mut self, component: &str, operation: &str) -> Self {
        self.context = Some(ErrorContext {
            component: component.to_string(),
            operation: operation.to_string(),
            metadata: serde_json::Value::Null,
        });
        self
    }

    /// Add metadata to the error context
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        if let Some(ref mut ctx) = self.context {
            ctx.metadata = metadata;
        }
        self
    }

    /// Convert to JSON string for JavaScript
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":{"type":"Internal","details":{"message":"Failed to serialize error"}}}"#.to_string()
        })
    }
}

impl From<serde_json::Error> for TelemetryChartsError {
    fn from(err: serde_json::Error) -> Self {
        TelemetryChartsError::DataParse {
            message: err.to_string(),
        }
    }
}

/// Helper macro for converting Results to TelemetryChartsResult
#[macro_export]
macro_rules! map_chart_error {
    ($result:expr, $error_variant:ident, $message:expr) => {
        $result.map_err(|e| $crate::errors::TelemetryChartsError::$error_variant {
            message: format!("{}: {}", $message, e),
        })
    };
}
