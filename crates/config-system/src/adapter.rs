//! Chart adapter: validate a report, build its configuration and hand it to
//! the drawing primitive

use log::debug;
use telemetry_charts_shared::{ChartConfig, Report};

use crate::builder::build_from_preset;
use crate::validation::{OptionsValidator, ReportValidator};
use crate::{ChartOptions, ChartPreset, Result, ValidationMode};

/// The drawing primitive every chart is funnelled through
pub trait ChartDrawer {
    fn draw(&mut self, config: &ChartConfig) -> Result<()>;
}

/// Render a report with a preset's settings.
pub fn render<D: ChartDrawer + ?Sized>(
    drawer: &mut D,
    preset: &ChartPreset,
    report: &Report,
    mode: ValidationMode,
) -> Result<()> {
    OptionsValidator::validate(&preset.options)?;
    ReportValidator::validate(report, mode)?;

    let config = build_from_preset(preset, report);
    debug!(
        "Drawing {} chart '{}' with {} categories and {} datasets",
        config.kind,
        preset.name,
        config.data.labels.len(),
        config.dataset_count()
    );

    drawer.draw(&config)
}

/// Render a report with a preset's chart kind and coloring but explicit
/// display options
pub fn render_with_options<D: ChartDrawer + ?Sized>(
    drawer: &mut D,
    preset: &ChartPreset,
    options: ChartOptions,
    report: &Report,
    mode: ValidationMode,
) -> Result<()> {
    let preset = ChartPreset {
        options,
        ..preset.clone()
    };
    render(drawer, &preset, report, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use crate::ConfigError;

    #[derive(Default)]
    struct Recorder {
        configs: Vec<ChartConfig>,
    }

    impl ChartDrawer for Recorder {
        fn draw(&mut self, config: &ChartConfig) -> Result<()> {
            self.configs.push(config.clone());
            Ok(())
        }
    }

    #[test]
    fn test_render_draws_once() {
        let mut recorder = Recorder::default();
        let report = Report::single("Records", vec!["b1".into()], vec![2.0]);

        render(
            &mut recorder,
            &presets::builds_per_record(),
            &report,
            ValidationMode::Strict,
        )
        .unwrap();

        assert_eq!(recorder.configs.len(), 1);
        assert_eq!(recorder.configs[0].data.labels, vec!["b1".to_string()]);
    }

    #[test]
    fn test_strict_render_does_not_draw_malformed() {
        let mut recorder = Recorder::default();
        let report = Report::single("Records", vec!["b1".into(), "b2".into()], vec![2.0]);

        let result = render(
            &mut recorder,
            &presets::builds_per_record(),
            &report,
            ValidationMode::Strict,
        );

        assert!(matches!(result, Err(ConfigError::Charts(_))));
        assert!(recorder.configs.is_empty());
    }

    #[test]
    fn test_render_with_options_replaces_options() {
        let mut recorder = Recorder::default();
        let report = Report::empty();
        let options = ChartOptions {
            show_legend: false,
            ..Default::default()
        };

        render_with_options(
            &mut recorder,
            &presets::thermal_by_week(),
            options,
            &report,
            ValidationMode::Permissive,
        )
        .unwrap();

        assert!(!recorder.configs[0].legend_displayed());
        assert!(recorder.configs[0].options.scales.is_none());
    }
}
