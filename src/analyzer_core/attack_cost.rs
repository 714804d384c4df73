//! Heuristic attack-cost scoring from supply ratios

use super::stats;
use super::table::{Metric, TimeSeriesTable};
use serde::Serialize;

/// Supply means and the derived attack-resistance score
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AttackCostModel {
    pub total_supply: Option<f64>,
    pub votable_supply: Option<f64>,
    pub participation_ratio: Option<f64>,
    pub attack_resistance_score: Option<f64>,
}

/// Score how costly governance capture is, from mean supply levels
///
/// `attack_resistance_score = 1 - (mean(VS) / mean(CS))^2`, in `(-inf, 1]`.
/// Undefined when the table is empty or mean circulating supply is zero.
pub fn attack_cost_model(table: &TimeSeriesTable) -> AttackCostModel {
    let cs = stats::mean(&table.values(Metric::Cs));
    let vs = stats::mean(&table.values(Metric::Vs));
    let pr = stats::mean(&table.values(Metric::Pr));

    let score = match (vs, cs) {
        (Some(vs), Some(cs)) if cs != 0.0 => Some(1.0 - (vs / cs).powi(2)),
        _ => None,
    };

    AttackCostModel {
        total_supply: cs,
        votable_supply: vs,
        participation_ratio: pr,
        attack_resistance_score: score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer_core::table::MetricRecord;
    use chrono::NaiveDate;

    fn create_test_table(vs_cs: &[(f64, f64)]) -> TimeSeriesTable {
        let records = vs_cs
            .iter()
            .enumerate()
            .map(|(i, (vs, cs))| MetricRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 1 + i as u32).unwrap(),
                pr: 0.5,
                psi: 0.6,
                vpi: 0.3,
                lar: 0.8,
                actual_vpi: 0.28,
                vs: *vs,
                cs: *cs,
            })
            .collect();
        TimeSeriesTable::new(records)
    }

    #[test]
    fn test_score_from_supply_means() {
        // mean(VS) = 650, mean(CS) = 10000
        let pairs: Vec<(f64, f64)> = (1..=12).map(|i| (i as f64 * 100.0, 10_000.0)).collect();
        let model = attack_cost_model(&create_test_table(&pairs));

        assert_eq!(model.total_supply, Some(10_000.0));
        assert_eq!(model.votable_supply, Some(650.0));
        let score = model.attack_resistance_score.unwrap();
        assert!((score - 0.995775).abs() < 1e-12, "got {}", score);
    }

    #[test]
    fn test_score_is_one_when_vs_is_zero() {
        let model = attack_cost_model(&create_test_table(&[(0.0, 5_000.0), (0.0, 5_000.0)]));
        assert_eq!(model.attack_resistance_score, Some(1.0));
    }

    #[test]
    fn test_zero_circulating_supply_is_undefined() {
        let model = attack_cost_model(&create_test_table(&[(100.0, 0.0), (200.0, 0.0)]));
        assert_eq!(model.attack_resistance_score, None);
        assert_eq!(model.votable_supply, Some(150.0));
    }

    #[test]
    fn test_empty_table_is_undefined() {
        let model = attack_cost_model(&create_test_table(&[]));
        assert_eq!(model.total_supply, None);
        assert_eq!(model.votable_supply, None);
        assert_eq!(model.participation_ratio, None);
        assert_eq!(model.attack_resistance_score, None);
    }

    #[test]
    fn test_score_can_go_negative() {
        // Votable supply above circulating supply drives the score below zero
        let model = attack_cost_model(&create_test_table(&[(200.0, 100.0)]));
        let score = model.attack_resistance_score.unwrap();
        assert!((score - (1.0 - 4.0)).abs() < 1e-12, "got {}", score);
    }
}
