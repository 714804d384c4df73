//! Per-metric descriptive statistics

use super::stats;
use super::table::{Metric, MetricMap, TimeSeriesTable};
use serde::Serialize;

/// Six-number summary for one metric column
///
/// Fields are `None` when undefined: everything on an empty table, `std` for
/// fewer than two records, `skew` for fewer than three.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricSummary {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub std: Option<f64>,
    pub skew: Option<f64>,
}

impl MetricSummary {
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            min: stats::min(values),
            max: stats::max(values),
            mean: stats::mean(values),
            median: stats::median(values),
            std: stats::sample_std(values),
            skew: stats::skewness(values),
        }
    }
}

/// Descriptive statistics for every metric, in reporting order (CS first)
pub fn descriptive_statistics(table: &TimeSeriesTable) -> MetricMap<MetricSummary> {
    let mut out = MetricMap::new();
    for metric in Metric::descriptive_order() {
        out.insert(metric, MetricSummary::from_values(&table.values(metric)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer_core::table::MetricRecord;
    use chrono::NaiveDate;

    fn create_test_table(vs_values: &[f64]) -> TimeSeriesTable {
        let records = vs_values
            .iter()
            .enumerate()
            .map(|(i, vs)| MetricRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 1 + i as u32).unwrap(),
                pr: 0.4 + i as f64 * 0.01,
                psi: 0.6,
                vpi: 0.3,
                lar: 0.8,
                actual_vpi: 0.28,
                vs: *vs,
                cs: 10_000.0,
            })
            .collect();
        TimeSeriesTable::new(records)
    }

    #[test]
    fn test_summary_values() {
        let table = create_test_table(&[100.0, 300.0, 200.0]);
        let stats = descriptive_statistics(&table);

        let vs = stats.get(Metric::Vs).unwrap();
        assert_eq!(vs.min, Some(100.0));
        assert_eq!(vs.max, Some(300.0));
        assert_eq!(vs.mean, Some(200.0));
        assert_eq!(vs.median, Some(200.0));
        assert_eq!(vs.std, Some(100.0));
    }

    #[test]
    fn test_bounds_ordering() {
        let table = create_test_table(&[120.0, 80.0, 100.0, 90.0]);
        for (_, summary) in descriptive_statistics(&table).iter() {
            let (min, max) = (summary.min.unwrap(), summary.max.unwrap());
            assert!(min <= summary.mean.unwrap() && summary.mean.unwrap() <= max);
            assert!(min <= summary.median.unwrap() && summary.median.unwrap() <= max);
        }
    }

    #[test]
    fn test_constant_column_has_zero_spread() {
        let table = create_test_table(&[100.0, 100.0, 100.0, 100.0]);
        let cs = descriptive_statistics(&table).get(Metric::Cs).copied().unwrap();
        assert_eq!(cs.std, Some(0.0));
        assert_eq!(cs.skew, Some(0.0));
    }

    #[test]
    fn test_empty_table_is_all_undefined() {
        let stats = descriptive_statistics(&create_test_table(&[]));
        assert_eq!(stats.len(), 7);
        for (_, summary) in stats.iter() {
            assert_eq!(summary.min, None);
            assert_eq!(summary.max, None);
            assert_eq!(summary.mean, None);
            assert_eq!(summary.median, None);
            assert_eq!(summary.std, None);
            assert_eq!(summary.skew, None);
        }
    }

    #[test]
    fn test_reporting_order() {
        let table = create_test_table(&[100.0]);
        let names: Vec<&str> = descriptive_statistics(&table)
            .iter()
            .map(|(m, _)| m.column_name())
            .collect();
        assert_eq!(
            names,
            vec!["CS", "VS", "PR", "PSI", "LAR", "VPI", "Actual VPI"]
        );
    }
}
