//! Pairwise Pearson correlation across the metric set

use super::stats;
use super::table::{Metric, TimeSeriesTable};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Symmetric metric-by-metric Pearson correlation matrix
///
/// The diagonal is always 1.0, even for degenerate tables. Off-diagonal
/// entries are `None` when the coefficient is undefined (fewer than two
/// records, or a zero-variance column).
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    metrics: Vec<Metric>,
    values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Coefficient for one metric pair
    pub fn get(&self, a: Metric, b: Metric) -> Option<f64> {
        let i = self.metrics.iter().position(|m| *m == a)?;
        let j = self.metrics.iter().position(|m| *m == b)?;
        self.values[i][j]
    }
}

impl Serialize for CorrelationMatrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        struct Row<'a> {
            metrics: &'a [Metric],
            values: &'a [Option<f64>],
        }

        impl Serialize for Row<'_> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let mut map = serializer.serialize_map(Some(self.metrics.len()))?;
                for (metric, value) in self.metrics.iter().zip(self.values) {
                    map.serialize_entry(metric.column_name(), value)?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(self.metrics.len()))?;
        for (metric, row) in self.metrics.iter().zip(&self.values) {
            map.serialize_entry(
                metric.column_name(),
                &Row {
                    metrics: &self.metrics,
                    values: row,
                },
            )?;
        }
        map.end()
    }
}

/// Pearson correlation for every metric pair, in reporting order
///
/// Each unordered pair is computed once and mirrored, so the matrix is
/// symmetric by construction.
pub fn correlation_matrix(table: &TimeSeriesTable) -> CorrelationMatrix {
    let metrics: Vec<Metric> = Metric::descriptive_order().to_vec();
    let columns: Vec<Vec<f64>> = metrics.iter().map(|m| table.values(*m)).collect();

    let k = metrics.len();
    let mut values = vec![vec![None; k]; k];
    for i in 0..k {
        values[i][i] = Some(1.0);
        for j in (i + 1)..k {
            let r = stats::pearson(&columns[i], &columns[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix { metrics, values }
}
