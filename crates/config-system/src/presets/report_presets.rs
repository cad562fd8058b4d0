//! Report preset configurations
//!
//! Every dashboard chart is one of these bundles of display options fed
//! through the same configuration builder.

use serde::{Deserialize, Serialize};
use telemetry_charts_shared::{ChartKind, LegendPosition, Report, Series};

use crate::{ChartOptions, ChartPreset, ColorScheme};

/// Bar thickness for per-build charts
const BUILD_BAR_THICKNESS: u32 = 15;
/// Bar thickness for per-week charts
const WEEK_BAR_THICKNESS: u32 = 30;
const TITLE_FONT_SIZE: u32 = 18;

/// Which kind of record a classification or per-build chart counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSubject {
    Crash,
    Mce,
}

impl ReportSubject {
    pub fn noun(&self) -> &'static str {
        match self {
            ReportSubject::Crash => "Crash",
            ReportSubject::Mce => "MCE",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            ReportSubject::Crash => "crash",
            ReportSubject::Mce => "mce",
        }
    }
}

/// The closed set of charts the dashboard draws
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportPreset {
    BuildsPerRecord,
    Classification(ReportSubject),
    CountPerBuild(ReportSubject),
    Population { title: String },
    /// Platform and class distribution share this preset
    Stats { title: String },
    ThermalByWeek,
    WeeklyBreakdown,
}

impl ReportPreset {
    pub fn name(&self) -> &'static str {
        match self {
            ReportPreset::BuildsPerRecord => "builds",
            ReportPreset::Classification(ReportSubject::Crash) => "crash-classification",
            ReportPreset::Classification(ReportSubject::Mce) => "mce-classification",
            ReportPreset::CountPerBuild(ReportSubject::Crash) => "crash-reports",
            ReportPreset::CountPerBuild(ReportSubject::Mce) => "mce-reports",
            ReportPreset::Population { .. } => "population",
            ReportPreset::Stats { .. } => "stats",
            ReportPreset::ThermalByWeek => "thermal",
            ReportPreset::WeeklyBreakdown => "mce-weekly",
        }
    }

    pub fn chart_preset(&self) -> ChartPreset {
        match self {
            ReportPreset::BuildsPerRecord => builds_per_record(),
            ReportPreset::Classification(subject) => classification(*subject),
            ReportPreset::CountPerBuild(subject) => count_per_build(*subject),
            ReportPreset::Population { title } => population(Some(title.as_str())),
            ReportPreset::Stats { title } => stats(Some(title.as_str())),
            ReportPreset::ThermalByWeek => thermal_by_week(),
            ReportPreset::WeeklyBreakdown => weekly_breakdown(),
        }
    }
}

impl From<ReportPreset> for ChartPreset {
    fn from(preset: ReportPreset) -> Self {
        preset.chart_preset()
    }
}

/// Records per build bar chart
pub fn builds_per_record() -> ChartPreset {
    let title = "Records per Build";
    ChartPreset {
        name: ReportPreset::BuildsPerRecord.name().to_string(),
        description: "Number of records received for each build".to_string(),
        kind: ChartKind::Bar,
        dataset_label: Some(title.to_string()),
        color_scheme: ColorScheme::PerSeries,
        options: ChartOptions {
            title: Some(title.to_string()),
            show_title: true,
            title_font_size: Some(TITLE_FONT_SIZE),
            show_legend: false,
            bar_thickness: Some(BUILD_BAR_THICKNESS),
            y_axis_label: Some("Records".to_string()),
            x_axis_label: Some("Builds".to_string()),
            begin_y_at_zero: true,
            ..Default::default()
        },
    }
}

/// Crash or MCE reports by classification pie chart
pub fn classification(subject: ReportSubject) -> ChartPreset {
    let title = format!("{} reports by classification", subject.noun());
    ChartPreset {
        name: ReportPreset::Classification(subject).name().to_string(),
        description: format!("{} reports grouped by classification", subject.noun()),
        kind: ChartKind::Pie,
        dataset_label: Some(title.clone()),
        color_scheme: ColorScheme::PerCategory,
        options: ChartOptions {
            title: Some(title),
            show_title: true,
            title_font_size: Some(TITLE_FONT_SIZE),
            show_legend: true,
            legend_position: Some(LegendPosition::Right),
            ..Default::default()
        },
    }
}

/// Crash or MCE reports per build bar chart
pub fn count_per_build(subject: ReportSubject) -> ChartPreset {
    let title = format!("{} reports by build", subject.noun());
    // The crash page uses a smaller heading than the MCE page
    let title_font_size = match subject {
        ReportSubject::Crash => 15,
        ReportSubject::Mce => TITLE_FONT_SIZE,
    };

    ChartPreset {
        name: format!("{}-reports", subject.slug()),
        description: format!("{} reports received for each build", subject.noun()),
        kind: ChartKind::Bar,
        dataset_label: Some(title.clone()),
        color_scheme: ColorScheme::PerSeries,
        options: ChartOptions {
            title: Some(title),
            show_title: true,
            title_font_size: Some(title_font_size),
            show_legend: false,
            bar_thickness: Some(BUILD_BAR_THICKNESS),
            y_axis_label: Some(format!("{} count", subject.noun())),
            x_axis_label: Some("Builds".to_string()),
            begin_y_at_zero: true,
            ..Default::default()
        },
    }
}

/// Internal and external machines per build, stacked
pub fn population(title: Option<&str>) -> ChartPreset {
    ChartPreset {
        name: "population".to_string(),
        description: "Internal and external machines reporting per build".to_string(),
        kind: ChartKind::Bar,
        dataset_label: None,
        color_scheme: ColorScheme::PerSeries,
        options: ChartOptions {
            title: title.map(str::to_string),
            show_title: true,
            title_font_size: Some(TITLE_FONT_SIZE),
            show_legend: true,
            legend_position: Some(LegendPosition::Right),
            stacked: true,
            bar_thickness: Some(BUILD_BAR_THICKNESS),
            y_axis_label: Some("Machines".to_string()),
            x_axis_label: Some("Builds".to_string()),
            responsive: Some(true),
            ..Default::default()
        },
    }
}

/// Distribution pie chart titled by the caller
pub fn stats(title: Option<&str>) -> ChartPreset {
    ChartPreset {
        name: "stats".to_string(),
        description: "Distribution of records over a single column".to_string(),
        kind: ChartKind::Pie,
        dataset_label: title.map(str::to_string),
        color_scheme: ColorScheme::PerCategory,
        options: ChartOptions {
            title: title.map(str::to_string),
            show_title: true,
            title_font_size: Some(TITLE_FONT_SIZE),
            show_legend: false,
            ..Default::default()
        },
    }
}

/// Thermal records grouped by week
pub fn thermal_by_week() -> ChartPreset {
    ChartPreset {
        name: "thermal".to_string(),
        description: "Thermal records per week".to_string(),
        kind: ChartKind::Bar,
        dataset_label: None,
        color_scheme: ColorScheme::PerSeries,
        options: ChartOptions {
            show_title: false,
            show_legend: true,
            legend_position: Some(LegendPosition::Right),
            bar_thickness: Some(WEEK_BAR_THICKNESS),
            begin_y_at_zero: true,
            ..Default::default()
        },
    }
}

/// MCE records of one class broken down by week
pub fn weekly_breakdown() -> ChartPreset {
    ChartPreset {
        name: "mce-weekly".to_string(),
        description: "MCE records of one class per week".to_string(),
        kind: ChartKind::Bar,
        dataset_label: None,
        color_scheme: ColorScheme::PerSeries,
        options: ChartOptions {
            show_title: false,
            show_legend: true,
            legend_position: Some(LegendPosition::Right),
            bar_thickness: Some(WEEK_BAR_THICKNESS),
            ..Default::default()
        },
    }
}

/// Population report: always "Internal" then "External"
pub fn population_report(labels: Vec<String>, internal: Vec<f64>, external: Vec<f64>) -> Report {
    Report::new(
        labels,
        vec![
            Series::new("Internal", internal),
            Series::new("External", external),
        ],
    )
}
