//! Chart configuration builder
//!
//! Every report type goes through `build_config`; presets only differ in
//! the options and color scheme they pass in.

use telemetry_charts_shared::{
    palette_color, palette_colors, AxisConfig, BackgroundColor, ChartConfig, ChartData, ChartKind,
    ChartOptionsConfig, Dataset, LegendConfig, Report, ScaleLabel, ScalesConfig, TicksConfig,
    TitleConfig,
};

use crate::{ChartOptions, ChartPreset, ColorScheme};

/// Build the configuration for a report.
///
/// `dataset_label` replaces the label of a single-series report; reports
/// with several series keep their own labels.
pub fn build_config(
    kind: ChartKind,
    report: &Report,
    options: &ChartOptions,
    scheme: ColorScheme,
    dataset_label: Option<&str>,
) -> ChartConfig {
    let single = report.series.len() == 1;

    let datasets = report
        .series
        .iter()
        .enumerate()
        .map(|(index, series)| {
            let label = match dataset_label {
                Some(label) if single => label.to_string(),
                _ => series.label.clone(),
            };

            let background_color = match scheme {
                ColorScheme::PerCategory => {
                    BackgroundColor::PerCategory(palette_colors(report.labels.len()))
                }
                ColorScheme::PerSeries => BackgroundColor::Single(
                    series
                        .color
                        .clone()
                        .unwrap_or_else(|| palette_color(index).to_string()),
                ),
            };

            Dataset {
                label,
                background_color: Some(background_color),
                data: series.values.clone(),
            }
        })
        .collect();

    ChartConfig {
        kind,
        data: ChartData {
            labels: report.labels.clone(),
            datasets,
        },
        options: build_options(options),
    }
}

/// Build the configuration for a report using a preset's settings
pub fn build_from_preset(preset: &ChartPreset, report: &Report) -> ChartConfig {
    build_config(
        preset.kind,
        report,
        &preset.options,
        preset.color_scheme,
        preset.dataset_label.as_deref(),
    )
}

fn build_options(options: &ChartOptions) -> ChartOptionsConfig {
    let legend = LegendConfig {
        display: Some(options.show_legend),
        position: options.legend_position,
    };

    let title = TitleConfig {
        display: options.show_title,
        text: options.title.clone(),
        font_size: options.title_font_size,
    };

    let stacked = options.stacked.then_some(true);

    let x_axis = AxisConfig {
        stacked,
        scale_label: options.x_axis_label.as_deref().map(ScaleLabel::italic),
        bar_thickness: options.bar_thickness,
        ticks: None,
    };

    let y_axis = AxisConfig {
        stacked,
        scale_label: options.y_axis_label.as_deref().map(ScaleLabel::italic),
        bar_thickness: None,
        ticks: options.begin_y_at_zero.then(|| TicksConfig {
            begin_at_zero: true,
        }),
    };

    // Pie charts carry no axis settings at all
    let scales = if x_axis.is_empty() && y_axis.is_empty() {
        None
    } else {
        Some(ScalesConfig {
            x_axes: vec![x_axis],
            y_axes: vec![y_axis],
        })
    };

    ChartOptionsConfig {
        legend: Some(legend),
        title: Some(title),
        responsive: options.responsive,
        scales,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use telemetry_charts_shared::{Series, PALETTE};

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("build-{i}")).collect()
    }

    #[test]
    fn test_dataset_and_category_counts() {
        let report = Report::new(
            labels(4),
            vec![
                Series::new("Internal", vec![1.0, 2.0, 3.0, 4.0]),
                Series::new("External", vec![4.0, 3.0, 2.0, 1.0]),
            ],
        );

        let config = build_from_preset(&presets::population(Some("Overall")), &report);
        assert_eq!(config.data.labels.len(), 4);
        assert_eq!(config.dataset_count(), 2);
        for dataset in &config.data.datasets {
            assert_eq!(dataset.data.len(), 4);
        }
    }

    #[test]
    fn test_per_category_colors_wrap() {
        let report = Report::single("Stats", labels(17), vec![1.0; 17]);
        let config = build_from_preset(&presets::stats(Some("Class distribution")), &report);

        match &config.data.datasets[0].background_color {
            Some(BackgroundColor::PerCategory(colors)) => {
                assert_eq!(colors.len(), 17);
                for (i, color) in colors.iter().enumerate() {
                    assert_eq!(color, PALETTE[i % PALETTE.len()]);
                }
            }
            other => panic!("unexpected background {other:?}"),
        }
    }

    #[test]
    fn test_per_series_colors_by_index() {
        let report = presets::population_report(labels(2), vec![1.0, 2.0], vec![3.0, 4.0]);
        let config = build_from_preset(&presets::population(Some("Overall")), &report);

        assert_eq!(
            config.data.datasets[0].background_color,
            Some(BackgroundColor::Single(PALETTE[0].to_string()))
        );
        assert_eq!(
            config.data.datasets[1].background_color,
            Some(BackgroundColor::Single(PALETTE[1].to_string()))
        );
    }

    #[test]
    fn test_series_color_wins_over_palette() {
        let report = Report::new(
            vec!["thermal".to_string()],
            vec![Series::new("Week 1", vec![3.0]).with_color("#000000")],
        );
        let config = build_from_preset(&presets::thermal_by_week(), &report);
        assert_eq!(
            config.data.datasets[0].background_color,
            Some(BackgroundColor::Single("#000000".to_string()))
        );
    }

    #[test]
    fn test_pie_has_no_scales() {
        let report = Report::single("c", labels(3), vec![1.0, 2.0, 3.0]);
        let config = build_from_preset(
            &presets::classification(presets::ReportSubject::Crash),
            &report,
        );
        assert!(config.options.scales.is_none());
        assert_eq!(
            config.options.legend.as_ref().and_then(|l| l.position),
            Some(telemetry_charts_shared::LegendPosition::Right)
        );
    }

    #[test]
    fn test_dataset_label_only_for_single_series() {
        let single = Report::single("raw", labels(1), vec![1.0]);
        let config = build_config(
            ChartKind::Bar,
            &single,
            &ChartOptions::default(),
            ColorScheme::PerSeries,
            Some("Records per Build"),
        );
        assert_eq!(config.data.datasets[0].label, "Records per Build");

        let double = presets::population_report(labels(1), vec![1.0], vec![2.0]);
        let config = build_config(
            ChartKind::Bar,
            &double,
            &ChartOptions::default(),
            ColorScheme::PerSeries,
            Some("ignored"),
        );
        assert_eq!(config.data.datasets[0].label, "Internal");
        assert_eq!(config.data.datasets[1].label, "External");
    }

    #[test]
    fn test_mismatched_report_passes_through() {
        let report = Report::single("Records", labels(3), vec![1.0]);
        let config = build_from_preset(&presets::builds_per_record(), &report);
        assert_eq!(config.data.labels.len(), 3);
        assert_eq!(config.data.datasets[0].data, vec![1.0]);
    }
}
