//! Aligned merge of per-metric forecast series

use super::sources::{ForecastSources, IntegrateError};
use crate::analyzer_core::ingest;
use crate::analyzer_core::monthly::{metric_monthly_full, MetricMonthlyFull};
use crate::analyzer_core::table::{Metric, MetricMap};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// One merged forecast row
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRecord {
    pub date: NaiveDate,
    pub pr: f64,
    pub psi: f64,
    pub vpi: f64,
    pub lar: f64,
    pub actual_vpi: f64,
}

impl ForecastRecord {
    /// Forecast value for a metric; None for metrics outside the forecast set
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Pr => Some(self.pr),
            Metric::Psi => Some(self.psi),
            Metric::Vpi => Some(self.vpi),
            Metric::Lar => Some(self.lar),
            Metric::ActualVpi => Some(self.actual_vpi),
            Metric::Vs | Metric::Cs => None,
        }
    }
}

/// Date-aligned forecast rows for the five forecast metrics
#[derive(Debug, Clone)]
pub struct ForecastTable {
    records: Vec<ForecastRecord>,
}

impl ForecastTable {
    pub fn new(records: Vec<ForecastRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ForecastRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records.iter().map(|r| r.date).collect()
    }

    pub fn values(&self, metric: Metric) -> Vec<f64> {
        self.records
            .iter()
            .filter_map(|r| r.value(metric))
            .collect()
    }
}

/// Merge the per-metric forecast files into one table
///
/// The PR series anchors the merge: every other series must match its row
/// count and its dates row for row.
pub fn merge_sources(sources: &ForecastSources) -> Result<ForecastTable, IntegrateError> {
    sources.validate()?;

    let anchor = parse_series(Metric::Pr, sources.require(Metric::Pr)?)?;
    log::debug!("📖 Read {} anchor rows from the PR forecast", anchor.len());

    let psi = merge_column(Metric::Psi, sources, &anchor)?;
    let vpi = merge_column(Metric::Vpi, sources, &anchor)?;
    let lar = merge_column(Metric::Lar, sources, &anchor)?;
    let actual_vpi = merge_column(Metric::ActualVpi, sources, &anchor)?;

    let records = anchor
        .iter()
        .enumerate()
        .map(|(i, (date, pr))| ForecastRecord {
            date: *date,
            pr: *pr,
            psi: psi[i],
            vpi: vpi[i],
            lar: lar[i],
            actual_vpi: actual_vpi[i],
        })
        .collect();

    Ok(ForecastTable::new(records))
}

/// Full monthly statistics for every forecast metric, in forecast order
pub fn monthly_statistics_forecast(table: &ForecastTable) -> MetricMap<MetricMonthlyFull> {
    let dates = table.dates();
    let mut out = MetricMap::new();
    for metric in Metric::forecast_set() {
        out.insert(metric, metric_monthly_full(&dates, &table.values(metric)));
    }
    out
}

/// Read one aligned column, enforcing row count and date agreement with
/// the anchor series
fn merge_column(
    metric: Metric,
    sources: &ForecastSources,
    anchor: &[(NaiveDate, f64)],
) -> Result<Vec<f64>, IntegrateError> {
    let series = parse_series(metric, sources.require(metric)?)?;
    if series.len() != anchor.len() {
        return Err(IntegrateError::RowCountMismatch {
            metric,
            expected: anchor.len(),
            found: series.len(),
        });
    }
    for (row, ((anchor_date, _), (date, _))) in anchor.iter().zip(series.iter()).enumerate() {
        if anchor_date != date {
            return Err(IntegrateError::DateMismatch {
                metric,
                row: row + 1,
            });
        }
    }
    Ok(series.into_iter().map(|(_, value)| value).collect())
}

/// Parse one forecast file: a header line, then positional rows of date
/// and forecasted value
fn parse_series(metric: Metric, path: &Path) -> Result<Vec<(NaiveDate, f64)>, IntegrateError> {
    let content = fs::read_to_string(path)?;
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_start_matches('\u{feff}').trim()))
        .filter(|(_, line)| !line.is_empty());

    // Columns are positional, the header names are not inspected
    lines.next().ok_or(IntegrateError::MissingHeader { metric })?;

    let mut series = Vec::new();
    for (line_no, line) in lines {
        let fields: Vec<&str> = line.split(',').map(|f| f.trim()).collect();
        if fields.len() < 2 {
            return Err(IntegrateError::RaggedRow {
                metric,
                line: line_no,
                found: fields.len(),
            });
        }
        let date = parse_forecast_date(fields[0]).ok_or_else(|| IntegrateError::InvalidDate {
            metric,
            line: line_no,
            value: fields[0].to_string(),
        })?;
        let value: f64 = fields[1]
            .parse()
            .map_err(|_| IntegrateError::InvalidNumber {
                metric,
                line: line_no,
                value: fields[1].to_string(),
            })?;
        series.push((date, value));
    }
    Ok(series)
}

/// Day-first formats take precedence, ISO as a fallback
fn parse_forecast_date(value: &str) -> Option<NaiveDate> {
    ingest::parse_day_first(value).or_else(|| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
}
