//! Prompt text for the prediction exchanges

pub const ANALYST_SYSTEM_ROLE: &str = "You are a financial analyst specializing in token \
     governance and economic modeling. Your expertise is in analyzing and predicting token \
     supply metrics with a focus on security and attack vector costs.";

pub const INTEGRATOR_SYSTEM_ROLE: &str = "You are a financial analyst specializing in token \
     governance and economic modeling, with expertise in security and attack vector analysis.";

/// Task asking for forward parameter predictions from the full analysis
/// payload
pub fn supply_prediction_task(payload_json: &str) -> String {
    format!(
        "Task: Analyze the historical data and predict parameters for Dec 2024 - Dec 2025 \
         that would maximize the cost of attack vector while maintaining trend continuity \
         from Nov 2024. Calculate each parameter in relation to others to determine the \
         optimal Votable Supply.\n\
         \n\
         Historical Data Context:\n\
         {}\n\
         \n\
         Your predictions should:\n\
         - First predict PR, PSI, VPI, LAR, and Actual VPI based on historical trends\n\
         - Ensure December 2024 predictions follow November 2024's trend\n\
         - Each parameter should be calculated considering its impact on attack cost\n\
         - Parameters should show logical month-over-month progression\n\
         - Calculate ideal Votable Supply as a function of other predicted parameters\n\
         - VS should maximize cost of attack while maintaining realistic growth\n\
         - Show how VS relates to other parameters in the attack cost equation\n\
         - Identify growth patterns in historical data and use them to inform forward \
         predictions\n\
         - Consider seasonal patterns if present in historical data\n\
         \n\
         Required Output Format:\n\
         1. Predictions Table:\n\
         - Time period: Dec 2024 - Dec 2025 (13 months)\n\
         - Columns: Month (MMM-YYYY) | PR | PSI | VPI | LAR | Actual VPI | VS\n\
         - PR, PSI, VPI, LAR, Actual VPI: 4 decimal places; VS: whole numbers\n\
         - Show monthly progression with consistent growth rates\n\
         - Ensure December 2024 values logically follow from November 2024\n\
         \n\
         2. Calculation Methodology:\n\
         - Explain how each parameter affects others and show the formulas used\n\
         - Demonstrate how parameters combine to maximize attack cost\n\
         - Document how predictions maintain trend continuity from November 2024\n\
         - Explain the growth rates used for each parameter\n\
         \n\
         3. Attack Cost Analysis:\n\
         - Show how predicted parameters maximize attack cost\n\
         - Demonstrate the relationship between parameters and attack resistance\n\
         - Quantify the improvement in security from the current state",
        payload_json
    )
}

/// Task asking for monthly votable-supply predictions from the merged
/// forecast statistics plus the historical VS series
pub fn votable_supply_task(monthly_stats_json: &str, vs_history_json: &str) -> String {
    format!(
        "Task: As a financial analyst specializing in token governance and economic \
         modeling, predict the ideal monthly Votable Supply (VS) from Dec 2024 to Dec 2025 \
         that maximizes attack cost based on the provided metrics.\n\
         \n\
         Parameter Definitions:\n\
         - PR (Participation Ratio): Ratio of tokens participating in governance\n\
         - PSI (Protocol Staking Index): Measure of tokens staked in protocol\n\
         - VPI (Voting Power Index): Measure of voting power distribution\n\
         - LAR (Liquidity Availability Ratio): Measure of token liquidity\n\
         - Actual VPI: Realized voting power index\n\
         - VS (Votable Supply): Amount of tokens eligible for voting\n\
         \n\
         Your predictions should:\n\
         - Maximize the cost of potential attacks on the system\n\
         - Optimize Votable Supply (VS) based on its relationship with the other metrics\n\
         - Consider monthly patterns and trends in the historical VS data\n\
         - Maintain realistic growth patterns from the historical VS data\n\
         \n\
         Monthly Statistics for Key Metrics:\n\
         {}\n\
         \n\
         Monthly Statistics for Historical data of VS:\n\
         {}\n\
         \n\
         Required Output Format:\n\
         1. Month-by-Month VS Predictions Table:\n\
         - Columns: Month | Predicted VS (whole numbers)\n\
         - Show monthly progression with consistent growth rates\n\
         - Ensure December 2024 values logically follow from November 2024\n\
         - Include all months from Dec 2024 to Dec 2025\n\
         \n\
         2. Methodology Documentation:\n\
         - Explain how the predicted VS values maximize attack cost\n\
         - Document relationships between metrics that influenced predictions\n\
         - Detail any patterns or trends considered\n\
         \n\
         3. Security Analysis:\n\
         - Explain how these VS predictions enhance system security\n\
         - Analyze potential attack vectors and their costs\n\
         - Quantify the improvement in security metrics",
        monthly_stats_json, vs_history_json
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supply_prediction_task_embeds_payload() {
        let task = supply_prediction_task("{\"attack_cost_model\":{}}");
        assert!(task.starts_with("Task: Analyze the historical data"));
        assert!(task.contains("Historical Data Context:\n{\"attack_cost_model\":{}}\n"));
        assert!(task.contains("3. Attack Cost Analysis:"));
    }

    #[test]
    fn test_votable_supply_task_embeds_both_blocks() {
        let task = votable_supply_task("{\"PR\":1}", "{\"monthly_data\":2}");
        let stats_at = task.find("{\"PR\":1}").unwrap();
        let history_at = task.find("{\"monthly_data\":2}").unwrap();
        assert!(stats_at < history_at);
        assert!(task.contains("Parameter Definitions:"));
        assert!(task.contains("1. Month-by-Month VS Predictions Table:"));
    }
}
