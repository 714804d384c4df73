//! Core table types for the governance metrics time series

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// The fixed set of governance metrics tracked per observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Pr,
    Psi,
    Vpi,
    Lar,
    ActualVpi,
    Vs,
    Cs,
}

impl Metric {
    /// Column header used in the historical CSV and in serialized output
    pub fn column_name(&self) -> &'static str {
        match self {
            Metric::Pr => "PR",
            Metric::Psi => "PSI",
            Metric::Vpi => "VPI",
            Metric::Lar => "LAR",
            Metric::ActualVpi => "Actual VPI",
            Metric::Vs => "VS",
            Metric::Cs => "CS",
        }
    }

    /// Filename stem used by per-metric forecast files
    pub fn file_stem(&self) -> &'static str {
        match self {
            Metric::ActualVpi => "Actual-VPI",
            _ => self.column_name(),
        }
    }

    pub fn from_column(s: &str) -> Option<Self> {
        match s {
            "PR" => Some(Metric::Pr),
            "PSI" => Some(Metric::Psi),
            "VPI" => Some(Metric::Vpi),
            "LAR" => Some(Metric::Lar),
            "Actual VPI" => Some(Metric::ActualVpi),
            "VS" => Some(Metric::Vs),
            "CS" => Some(Metric::Cs),
            _ => None,
        }
    }

    /// Record-column order, also the monthly aggregation order
    pub fn all() -> [Metric; 7] {
        [
            Metric::Pr,
            Metric::Psi,
            Metric::Vpi,
            Metric::Lar,
            Metric::ActualVpi,
            Metric::Vs,
            Metric::Cs,
        ]
    }

    /// Reporting order for descriptive statistics and correlation
    pub fn descriptive_order() -> [Metric; 7] {
        [
            Metric::Cs,
            Metric::Vs,
            Metric::Pr,
            Metric::Psi,
            Metric::Lar,
            Metric::Vpi,
            Metric::ActualVpi,
        ]
    }

    /// Metrics with per-metric forecast sources; the first is the merge base
    pub fn forecast_set() -> [Metric; 5] {
        [
            Metric::Pr,
            Metric::Psi,
            Metric::Vpi,
            Metric::Lar,
            Metric::ActualVpi,
        ]
    }
}

/// One dated governance observation with a value for every metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub date: NaiveDate,
    pub pr: f64,
    pub psi: f64,
    pub vpi: f64,
    pub lar: f64,
    pub actual_vpi: f64,
    pub vs: f64,
    pub cs: f64,
}

impl MetricRecord {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Pr => self.pr,
            Metric::Psi => self.psi,
            Metric::Vpi => self.vpi,
            Metric::Lar => self.lar,
            Metric::ActualVpi => self.actual_vpi,
            Metric::Vs => self.vs,
            Metric::Cs => self.cs,
        }
    }
}

/// Ordered collection of metric records
///
/// Records keep their input order; duplicate dates are independent rows.
#[derive(Debug, Clone)]
pub struct TimeSeriesTable {
    records: Vec<MetricRecord>,
}

impl TimeSeriesTable {
    pub fn new(records: Vec<MetricRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MetricRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All values of one metric, in record order
    pub fn values(&self, metric: Metric) -> Vec<f64> {
        self.records.iter().map(|r| r.value(metric)).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records.iter().map(|r| r.date).collect()
    }

    /// Earliest and latest observation dates
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }
}

/// Insertion-ordered metric-to-value map
///
/// Serializes as a JSON object keyed by `column_name`, preserving the order
/// entries were inserted in.
#[derive(Debug, Clone)]
pub struct MetricMap<T> {
    entries: Vec<(Metric, T)>,
}

impl<T> MetricMap<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, metric: Metric, value: T) {
        self.entries.push((metric, value));
    }

    pub fn get(&self, metric: Metric) -> Option<&T> {
        self.entries
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, &T)> {
        self.entries.iter().map(|(m, v)| (*m, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for MetricMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize> Serialize for MetricMap<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (metric, value) in &self.entries {
            map.serialize_entry(metric.column_name(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(date: NaiveDate) -> MetricRecord {
        MetricRecord {
            date,
            pr: 0.45,
            psi: 0.6,
            vpi: 0.3,
            lar: 0.8,
            actual_vpi: 0.28,
            vs: 500.0,
            cs: 10_000.0,
        }
    }

    #[test]
    fn test_metric_orders() {
        assert_eq!(Metric::all().len(), 7);
        assert_eq!(Metric::descriptive_order()[0], Metric::Cs);
        assert_eq!(Metric::descriptive_order()[1], Metric::Vs);
        assert_eq!(Metric::forecast_set()[0], Metric::Pr);
        assert_eq!(Metric::forecast_set().len(), 5);
    }

    #[test]
    fn test_column_name_round_trip() {
        for metric in Metric::all() {
            assert_eq!(Metric::from_column(metric.column_name()), Some(metric));
        }
        assert_eq!(Metric::from_column("Month-Year"), None);
    }

    #[test]
    fn test_file_stem_has_no_spaces() {
        for metric in Metric::all() {
            assert!(!metric.file_stem().contains(' '));
        }
        assert_eq!(Metric::ActualVpi.file_stem(), "Actual-VPI");
    }

    #[test]
    fn test_record_value_accessor() {
        let record = create_test_record(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(record.value(Metric::Pr), 0.45);
        assert_eq!(record.value(Metric::ActualVpi), 0.28);
        assert_eq!(record.value(Metric::Cs), 10_000.0);
    }

    #[test]
    fn test_table_accessors() {
        let table = TimeSeriesTable::new(vec![
            create_test_record(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            create_test_record(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
        ]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.values(Metric::Vs), vec![500.0, 500.0]);
        assert_eq!(
            table.date_range(),
            Some((
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
            ))
        );
    }

    #[test]
    fn test_empty_table() {
        let table = TimeSeriesTable::new(vec![]);
        assert!(table.is_empty());
        assert_eq!(table.date_range(), None);
        assert!(table.values(Metric::Pr).is_empty());
    }

    #[test]
    fn test_metric_map_preserves_insertion_order() {
        let mut map = MetricMap::new();
        map.insert(Metric::Cs, 1);
        map.insert(Metric::Vs, 2);
        map.insert(Metric::Pr, 3);

        let keys: Vec<&str> = map.iter().map(|(m, _)| m.column_name()).collect();
        assert_eq!(keys, vec!["CS", "VS", "PR"]);
        assert_eq!(map.get(Metric::Vs), Some(&2));
        assert_eq!(map.get(Metric::Lar), None);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"CS":1,"VS":2,"PR":3}"#);
    }
}
