//! Preset configurations for the dashboard's report types

pub mod report_presets;

pub use report_presets::*;

use crate::ChartPreset;

/// Get all presets, caller-titled ones left untitled
pub fn get_all_presets() -> Vec<ChartPreset> {
    vec![
        builds_per_record(),
        classification(ReportSubject::Crash),
        classification(ReportSubject::Mce),
        count_per_build(ReportSubject::Crash),
        count_per_build(ReportSubject::Mce),
        population(None),
        stats(None),
        thermal_by_week(),
        weekly_breakdown(),
    ]
}
