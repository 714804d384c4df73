//! Middle-band votable supply analysis conditioned on participation rank

use super::stats;
use super::table::TimeSeriesTable;
use serde::Serialize;

/// Votable-supply statistics within the middle participation band
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OptimalRangeResult {
    pub optimal_vs_mean: Option<f64>,
    pub optimal_vs_median: Option<f64>,
    pub optimal_vs_std: Option<f64>,
    pub participation_range: Option<(f64, f64)>,
}

/// VS statistics over the middle 50% of records ranked by PR
///
/// Records are stable-sorted by participation ratio (ties keep input order)
/// and the band covers sorted positions `[n/4, 3n/4)`. The band is a rank
/// band, not a value quantile. An empty band (n <= 1) leaves every field
/// undefined.
pub fn optimal_vs_analysis(table: &TimeSeriesTable) -> OptimalRangeResult {
    let records = table.records();
    let n = records.len();

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        records[a]
            .pr
            .partial_cmp(&records[b].pr)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let band = &order[n / 4..(3 * n) / 4];
    if band.is_empty() {
        return OptimalRangeResult {
            optimal_vs_mean: None,
            optimal_vs_median: None,
            optimal_vs_std: None,
            participation_range: None,
        };
    }

    let vs: Vec<f64> = band.iter().map(|&i| records[i].vs).collect();
    let pr: Vec<f64> = band.iter().map(|&i| records[i].pr).collect();

    OptimalRangeResult {
        optimal_vs_mean: stats::mean(&vs),
        optimal_vs_median: stats::median(&vs),
        optimal_vs_std: stats::sample_std(&vs),
        participation_range: stats::min(&pr).zip(stats::max(&pr)),
    }
}
