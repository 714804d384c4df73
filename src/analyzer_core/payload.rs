//! Combined analysis artifact assembled from the individual analyses

use super::attack_cost::{attack_cost_model, AttackCostModel};
use super::correlate::{correlation_matrix, CorrelationMatrix};
use super::describe::{descriptive_statistics, MetricSummary};
use super::monthly::{monthly_statistics, MetricMonthly};
use super::optimal_range::{optimal_vs_analysis, OptimalRangeResult};
use super::table::{MetricMap, TimeSeriesTable};
use serde::Serialize;

/// Everything the analyses produce for one table, in reporting order
///
/// Field order is serialization order.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisPayload {
    pub monthly_stats: MetricMap<MetricMonthly>,
    pub descriptive_stats: MetricMap<MetricSummary>,
    pub correlation_matrix: CorrelationMatrix,
    pub optimal_vs: OptimalRangeResult,
    pub attack_cost_model: AttackCostModel,
}

impl AnalysisPayload {
    pub fn from_table(table: &TimeSeriesTable) -> Self {
        Self {
            monthly_stats: monthly_statistics(table),
            descriptive_stats: descriptive_statistics(table),
            correlation_matrix: correlation_matrix(table),
            optimal_vs: optimal_vs_analysis(table),
            attack_cost_model: attack_cost_model(table),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
