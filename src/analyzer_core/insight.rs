//! Insight report generation
//!
//! Flow:
//!
//! ```text
//! AnalysisPayload ──► collaborator narrative (when configured)
//!        │                      │ any failure
//!        └──────────────────────▼
//!                     deterministic text rendering
//! ```

use super::payload::AnalysisPayload;
use crate::forecaster::{prompt, CollaboratorError, ForecastRequest, Forecaster};
use std::time::Duration;

/// Which path produced the report text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightSource {
    Collaborator,
    Fallback,
}

impl InsightSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightSource::Collaborator => "collaborator",
            InsightSource::Fallback => "fallback",
        }
    }
}

/// Markdown insight report plus its provenance
#[derive(Debug, Clone)]
pub struct InsightReport {
    pub text: String,
    pub source: InsightSource,
}

/// Produce the insight report for a payload
///
/// A configured collaborator gets the first attempt. Any failure on that
/// path (transport, API error, empty reply, timeout) degrades to the
/// deterministic text rendering rather than failing the run.
pub async fn generate_insights(
    payload: &AnalysisPayload,
    collaborator: Option<&dyn Forecaster>,
    timeout: Duration,
) -> InsightReport {
    if let Some(forecaster) = collaborator {
        match submit_payload(payload, forecaster, timeout).await {
            Ok(text) => {
                return InsightReport {
                    text,
                    source: InsightSource::Collaborator,
                }
            }
            Err(e) => {
                log::warn!(
                    "📝 {} insights unavailable, rendering text fallback: {}",
                    forecaster.name(),
                    e
                );
            }
        }
    }

    InsightReport {
        text: render_text_insights(payload),
        source: InsightSource::Fallback,
    }
}

async fn submit_payload(
    payload: &AnalysisPayload,
    forecaster: &dyn Forecaster,
    timeout: Duration,
) -> Result<String, CollaboratorError> {
    let request = ForecastRequest {
        system: prompt::ANALYST_SYSTEM_ROLE.to_string(),
        task: prompt::supply_prediction_task(&payload.to_json_pretty()?),
    };

    let text = tokio::time::timeout(timeout, forecaster.submit(&request))
        .await
        .map_err(|_| CollaboratorError::Timeout(timeout.as_secs()))??;

    if text.trim().is_empty() {
        return Err(CollaboratorError::EmptyResponse);
    }
    Ok(text)
}

/// Render the deterministic markdown report
///
/// Undefined statistics print as "NaN" so the report shape is stable
/// regardless of how much data backed the analyses.
pub fn render_text_insights(payload: &AnalysisPayload) -> String {
    let mut out = String::from("# Token Governance Analysis Insights\n\n");

    out.push_str("## Descriptive Statistics\n");
    for (metric, summary) in payload.descriptive_stats.iter() {
        out.push_str(&format!("### {} Metrics\n", metric.column_name()));
        out.push_str(&format!("- Mean: {}\n", fmt_stat(summary.mean)));
        out.push_str(&format!("- Median: {}\n", fmt_stat(summary.median)));
        out.push_str(&format!("- Min: {}\n", fmt_stat(summary.min)));
        out.push_str(&format!("- Max: {}\n", fmt_stat(summary.max)));
    }

    out.push_str("\n## Optimal Votable Supply (VS) Analysis\n");
    out.push_str(&format!(
        "- Mean Optimal VS: {}\n",
        fmt_stat(payload.optimal_vs.optimal_vs_mean)
    ));
    out.push_str(&format!(
        "- Median Optimal VS: {}\n",
        fmt_stat(payload.optimal_vs.optimal_vs_median)
    ));
    out.push_str(&format!(
        "- Participation Range: {}\n",
        fmt_range(payload.optimal_vs.participation_range)
    ));

    out.push_str("\n## Attack Cost Model\n");
    out.push_str(&format!(
        "- Total Supply: {}\n",
        fmt_stat(payload.attack_cost_model.total_supply)
    ));
    out.push_str(&format!(
        "- Votable Supply: {}\n",
        fmt_stat(payload.attack_cost_model.votable_supply)
    ));
    out.push_str(&format!(
        "- Attack Resistance Score: {}\n",
        fmt_stat(payload.attack_cost_model.attack_resistance_score)
    ));

    out
}

pub(crate) fn fmt_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => "NaN".to_string(),
    }
}

pub(crate) fn fmt_range(range: Option<(f64, f64)>) -> String {
    match range {
        Some((lo, hi)) => format!("({:.4}, {:.4})", lo, hi),
        None => "NaN".to_string(),
    }
}
