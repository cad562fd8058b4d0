//! Report and options validation

use log::warn;
use telemetry_charts_shared::Report;

use crate::{ChartOptions, ConfigError, Result, ValidationMode};

/// Checks report shape according to the adapter's validation mode
pub struct ReportValidator;

impl ReportValidator {
    /// Validate series lengths against the label count.
    ///
    /// In permissive mode a mismatch is only logged and the report is drawn
    /// as-is.
    pub fn validate(report: &Report, mode: ValidationMode) -> Result<()> {
        match (report.check_lengths(), mode) {
            (Ok(()), _) => Ok(()),
            (Err(err), ValidationMode::Strict) => Err(err.into()),
            (Err(err), ValidationMode::Permissive) => {
                warn!("Drawing malformed report: {err}");
                Ok(())
            }
        }
    }
}

/// Display options validation
pub struct OptionsValidator;

impl OptionsValidator {
    pub fn validate(options: &ChartOptions) -> Result<()> {
        if options.bar_thickness == Some(0) {
            return Err(ConfigError::Validation(
                "Invalid bar thickness: 0. Must be at least 1".to_string(),
            ));
        }

        if options.title_font_size == Some(0) {
            return Err(ConfigError::Validation(
                "Invalid title font size: 0. Must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
