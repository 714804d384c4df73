//! Calendar-month aggregation in first-seen month order

use super::stats;
use super::table::{Metric, MetricMap, TimeSeriesTable};
use chrono::{Datelike, NaiveDate};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Calendar month grouping key derived from a record date
///
/// A derived key only, never a persisted identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Month label used in serialized output, e.g. "2024-03"
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Group record indices by month, keeping months in first-seen order
pub fn group_months(dates: &[NaiveDate]) -> Vec<(MonthKey, Vec<usize>)> {
    let mut groups: Vec<(MonthKey, Vec<usize>)> = Vec::new();
    for (i, date) in dates.iter().enumerate() {
        let key = MonthKey::from_date(*date);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, indices)) => indices.push(i),
            None => groups.push((key, vec![i])),
        }
    }
    groups
}

/// Month-label-keyed series preserving first-seen order
///
/// Serializes as a JSON object.
#[derive(Debug, Clone)]
pub struct MonthSeries<T> {
    entries: Vec<(String, T)>,
}

impl<T> MonthSeries<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, label: String, value: T) {
        self.entries.push((label, value));
    }

    pub fn get(&self, label: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for MonthSeries<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize> Serialize for MonthSeries<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// Per-month slice of the basic monthly variant
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MonthBasic {
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

/// Whole-series totals of the basic monthly variant
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OverallBasic {
    pub mean: Option<f64>,
    pub max: Option<f64>,
}

/// One metric's basic monthly view
#[derive(Debug, Clone, Serialize)]
pub struct MetricMonthly {
    pub monthly_data: MonthSeries<MonthBasic>,
    pub overall_stats: OverallBasic,
}

/// Five-number aggregate used by the full monthly variant, per month and
/// overall
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FullStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub avg: Option<f64>,
    pub median: Option<f64>,
    pub std: Option<f64>,
}

impl FullStats {
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            min: stats::min(values),
            max: stats::max(values),
            avg: stats::mean(values),
            median: stats::median(values),
            std: stats::sample_std(values),
        }
    }
}

/// One metric's full monthly view
#[derive(Debug, Clone, Serialize)]
pub struct MetricMonthlyFull {
    pub monthly_data: MonthSeries<FullStats>,
    pub overall_stats: FullStats,
}

/// Basic monthly view of one series: {avg, max} per month, {mean, max} overall
pub fn metric_monthly(dates: &[NaiveDate], values: &[f64]) -> MetricMonthly {
    let mut monthly_data = MonthSeries::new();
    for (key, indices) in group_months(dates) {
        let group: Vec<f64> = indices.iter().map(|&i| values[i]).collect();
        monthly_data.insert(
            key.label(),
            MonthBasic {
                avg: stats::mean(&group),
                max: stats::max(&group),
            },
        );
    }

    MetricMonthly {
        monthly_data,
        overall_stats: OverallBasic {
            mean: stats::mean(values),
            max: stats::max(values),
        },
    }
}

/// Full monthly view of one series: {min, max, avg, median, std} per month
/// and overall
pub fn metric_monthly_full(dates: &[NaiveDate], values: &[f64]) -> MetricMonthlyFull {
    let mut monthly_data = MonthSeries::new();
    for (key, indices) in group_months(dates) {
        let group: Vec<f64> = indices.iter().map(|&i| values[i]).collect();
        monthly_data.insert(key.label(), FullStats::from_values(&group));
    }

    MetricMonthlyFull {
        monthly_data,
        overall_stats: FullStats::from_values(values),
    }
}

/// Basic monthly statistics for every metric, in record-column order
pub fn monthly_statistics(table: &TimeSeriesTable) -> MetricMap<MetricMonthly> {
    let dates = table.dates();
    let mut out = MetricMap::new();
    for metric in Metric::all() {
        out.insert(metric, metric_monthly(&dates, &table.values(metric)));
    }
    out
}

/// Historical votable-supply monthly series
pub fn monthly_statistics_vs(table: &TimeSeriesTable) -> MetricMonthly {
    metric_monthly(&table.dates(), &table.values(Metric::Vs))
}
