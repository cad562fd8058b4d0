//! Report data model and the reshape routines that build reports from
//! dashboard tables

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use tsify::Tsify;

use crate::errors::{TelemetryChartsError, TelemetryChartsResult};
use crate::{palette_color, ValidationMode};

/// A named run of values plotted under one visual style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Series {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Category labels plus the series plotted against them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(Tsify))]
pub struct Report {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl Report {
    pub fn new(labels: Vec<String>, series: Vec<Series>) -> Self {
        Self { labels, series }
    }

    /// Report with no categories and no series; renders nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// One series holding one value per label
    pub fn single(series_label: impl Into<String>, labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            labels,
            series: vec![Series::new(series_label, values)],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.series.is_empty()
    }

    pub fn category_count(&self) -> usize {
        self.labels.len()
    }

    /// Check that every series has exactly one value per label.
    ///
    /// Labels being empty while a series carries values is covered by the
    /// same rule.
    pub fn check_lengths(&self) -> TelemetryChartsResult<()> {
        let expected = self.labels.len();
        match self.series.iter().find(|s| s.values.len() != expected) {
            Some(series) => Err(TelemetryChartsError::MalformedReport {
                series: series.label.clone(),
                expected,
                actual: series.values.len(),
            }),
            None => Ok(()),
        }
    }
}

/// One cell of a dashboard table: a label, a count or nothing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableCell {
    Number(f64),
    Text(String),
    Empty,
}

impl TableCell {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TableCell::Number(n) => Some(*n),
            TableCell::Text(_) | TableCell::Empty => None,
        }
    }

    /// Read a count the way the charting library would: numeric text is
    /// parsed and anything else becomes NaN, which is drawn as a gap.
    pub fn to_count_lossy(&self) -> f64 {
        match self {
            TableCell::Number(n) => *n,
            TableCell::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
            TableCell::Empty => f64::NAN,
        }
    }
}

impl std::fmt::Display for TableCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableCell::Text(s) => write!(f, "{s}"),
            TableCell::Number(n) if n.fract() == 0.0 && n.is_finite() => write!(f, "{}", *n as i64),
            TableCell::Number(n) => write!(f, "{n}"),
            TableCell::Empty => Ok(()),
        }
    }
}

impl From<&str> for TableCell {
    fn from(s: &str) -> Self {
        TableCell::Text(s.to_string())
    }
}

impl From<f64> for TableCell {
    fn from(n: f64) -> Self {
        TableCell::Number(n)
    }
}

/// Turn a two-row weekly table into one series per week.
///
/// Row 0 is `[record type name, week, week, ...]` and row 1 is
/// `[record type label, count, count, ...]`. The leading cell of each row
/// is dropped; the value row's leading cell becomes the single category.
/// An empty table yields an empty report.
///
/// Counts that are not numbers fail with `DataParse` in strict mode and are
/// passed on as NaN otherwise.
pub fn reshape_weekly_table(
    table: &[Vec<TableCell>],
    mode: ValidationMode,
) -> TelemetryChartsResult<Report> {
    let Some(header) = table.first() else {
        return Ok(Report::empty());
    };

    let values = table
        .get(1)
        .ok_or_else(|| TelemetryChartsError::InvalidFormat {
            expected: "a header row and a value row".to_string(),
            actual: "header row only".to_string(),
        })?;

    let (category, counts) = values
        .split_first()
        .ok_or_else(|| TelemetryChartsError::InvalidFormat {
            expected: "a record type label in the value row".to_string(),
            actual: "empty value row".to_string(),
        })?;

    let weeks = header.get(1..).unwrap_or_default();

    let series = counts
        .iter()
        .enumerate()
        .map(|(i, cell)| -> TelemetryChartsResult<Series> {
            let value = match (cell.as_number(), mode) {
                (Some(n), _) => n,
                (None, ValidationMode::Permissive) => cell.to_count_lossy(),
                (None, ValidationMode::Strict) => {
                    return Err(TelemetryChartsError::DataParse {
                        message: format!("count in column {} is not numeric: {cell:?}", i + 1),
                    })
                }
            };
            let label = weeks.get(i).map(ToString::to_string).unwrap_or_default();
            Ok(Series::new(label, vec![value]).with_color(palette_color(i)))
        })
        .collect::<TelemetryChartsResult<Vec<_>>>()?;

    Ok(Report::new(vec![category.to_string()], series))
}

/// Build a per-week breakdown for a single record class.
///
/// Each `(week, count)` pair becomes a series labelled `Week <week>`.
pub fn weekly_series_report(name: &str, weeks: &[(String, f64)]) -> Report {
    let series = weeks
        .iter()
        .enumerate()
        .map(|(i, (week, count))| {
            Series::new(format!("Week {week}"), vec![*count]).with_color(palette_color(i))
        })
        .collect();

    Report::new(vec![name.to_string()], series)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[TableCell]) -> Vec<TableCell> {
        cells.to_vec()
    }

    #[test]
    fn test_reshape_drops_leading_cells() {
        let table = vec![
            row(&["T".into(), "Week 2".into(), "Week 1".into()]),
            row(&["t".into(), 5.0.into(), 7.0.into()]),
        ];

        let report = reshape_weekly_table(&table, ValidationMode::Strict).unwrap();
        assert_eq!(report.labels, vec!["t".to_string()]);
        assert_eq!(report.series.len(), 2);
        assert_eq!(report.series[0].label, "Week 2");
        assert_eq!(report.series[0].values, vec![5.0]);
        assert_eq!(report.series[1].label, "Week 1");
        assert_eq!(report.series[1].values, vec![7.0]);
    }

    #[test]
    fn test_reshape_empty_table() {
        let report = reshape_weekly_table(&[], ValidationMode::Strict).unwrap();
        assert!(report.is_empty());
        assert!(report.labels.is_empty());
        assert!(report.series.is_empty());
    }

    #[test]
    fn test_reshape_from_json() {
        let json = r#"[["Thermal records", "Week: 30", "Week: 29"], ["org.clearlinux/mce/thermal", 155444, 28]]"#;
        let table: Vec<Vec<TableCell>> = serde_json::from_str(json).unwrap();

        let report = reshape_weekly_table(&table, ValidationMode::Strict).unwrap();
        assert_eq!(report.labels, vec!["org.clearlinux/mce/thermal".to_string()]);
        assert_eq!(report.series[0].label, "Week: 30");
        assert_eq!(report.series[0].values, vec![155444.0]);
        assert_eq!(report.series[1].color.as_deref(), Some(palette_color(1)));
    }

    #[test]
    fn test_reshape_header_only() {
        let table = vec![row(&["T".into(), "Week 1".into()])];
        assert!(matches!(
            reshape_weekly_table(&table, ValidationMode::Permissive),
            Err(TelemetryChartsError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_reshape_non_numeric_count_strict() {
        let table = vec![
            row(&["T".into(), "Week 1".into()]),
            row(&["t".into(), "many".into()]),
        ];
        assert!(matches!(
            reshape_weekly_table(&table, ValidationMode::Strict),
            Err(TelemetryChartsError::DataParse { .. })
        ));
    }

    #[test]
    fn test_reshape_passes_unreadable_counts_through() {
        let json = r#"[["T", "Week 3", "Week 2", "Week 1"], ["t", null, "12", "many"]]"#;
        let table: Vec<Vec<TableCell>> = serde_json::from_str(json).unwrap();
        assert_eq!(table[1][1], TableCell::Empty);

        let report = reshape_weekly_table(&table, ValidationMode::Permissive).unwrap();
        assert_eq!(report.series.len(), 3);
        assert!(report.series[0].values[0].is_nan());
        assert_eq!(report.series[1].values, vec![12.0]);
        assert!(report.series[2].values[0].is_nan());
        assert!(report.check_lengths().is_ok());
    }

    #[test]
    fn test_weekly_series_report() {
        let weeks = vec![("12".to_string(), 4.0), ("13".to_string(), 9.0)];
        let report = weekly_series_report("bank0", &weeks);

        assert_eq!(report.labels, vec!["bank0".to_string()]);
        assert_eq!(report.series[0].label, "Week 12");
        assert_eq!(report.series[1].values, vec![9.0]);
        assert_eq!(report.series[1].color.as_deref(), Some("#8e5ea2"));
    }

    #[test]
    fn test_check_lengths() {
        let ok = Report::single("Records", vec!["a".into(), "b".into()], vec![1.0, 2.0]);
        assert!(ok.check_lengths().is_ok());

        let bad = Report::single("Records", vec!["a".into(), "b".into()], vec![1.0]);
        assert_eq!(
            bad.check_lengths(),
            Err(TelemetryChartsError::MalformedReport {
                series: "Records".to_string(),
                expected: 2,
                actual: 1,
            })
        );

        let no_labels = Report::single("Records", vec![], vec![3.0]);
        assert!(no_labels.check_lengths().is_err());
    }

    #[test]
    fn test_number_cell_display() {
        assert_eq!(TableCell::Number(30.0).to_string(), "30");
        assert_eq!(TableCell::Number(2.5).to_string(), "2.5");
        assert_eq!(TableCell::Empty.to_string(), "");
    }
}
