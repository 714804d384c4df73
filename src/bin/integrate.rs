//! Integrate Binary - Forecast Merge and Votable Supply Prediction
//!
//! Merges the per-metric forecast series, derives their monthly statistics,
//! and asks the chat collaborator for month-by-month votable supply
//! predictions, falling back to a deterministic summary.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin integrate
//! ```
//!
//! ## Environment Variables
//!
//! - GOVFLOW_FORECAST_DIR - Root of the per-metric forecast files (default: forecasts)
//! - GOVFLOW_DATA_PATH - Historical merged metrics CSV (default: merged_data.csv)
//! - GOVFLOW_OUTPUT_DIR - Output directory for artifacts (default: current directory)
//! - OPENAI_API_KEY - Enables the chat collaborator when set
//! - GOVFLOW_LLM_MODEL - Chat model (default: gpt-4)
//! - GOVFLOW_LLM_BASE_URL - Chat endpoint (default: https://api.openai.com)
//! - GOVFLOW_LLM_TIMEOUT_SECS - Reply deadline in seconds (default: 120)
//! - RUST_LOG - Logging level (optional, default: info)

use govflow::analyzer_core::{
    load_table, monthly_statistics_vs, MetricMap, MetricMonthly, MetricMonthlyFull,
};
use govflow::forecaster::{
    openai::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS},
    prompt, CollaboratorError, ForecastRequest, Forecaster, OpenAiForecaster,
};
use govflow::integrator_core::{
    merge_sources, monthly_statistics_forecast, render_forecast_summary, ForecastSources,
};
use serde::Serialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug)]
struct IntegrateConfig {
    forecast_dir: PathBuf,
    data_path: PathBuf,
    output_dir: PathBuf,
    api_key: Option<String>,
    model: String,
    base_url: String,
    timeout_secs: u64,
}

impl IntegrateConfig {
    fn from_env() -> Self {
        Self {
            forecast_dir: env::var("GOVFLOW_FORECAST_DIR")
                .unwrap_or_else(|_| "forecasts".to_string())
                .into(),
            data_path: env::var("GOVFLOW_DATA_PATH")
                .unwrap_or_else(|_| "merged_data.csv".to_string())
                .into(),
            output_dir: env::var("GOVFLOW_OUTPUT_DIR")
                .unwrap_or_else(|_| ".".to_string())
                .into(),
            api_key: env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            model: env::var("GOVFLOW_LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: env::var("GOVFLOW_LLM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout_secs: env::var("GOVFLOW_LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Serialized shape of token_metrics_analysis.json
#[derive(Serialize)]
struct IntegrationResults<'a> {
    monthly_statistics: &'a MetricMap<MetricMonthlyFull>,
    llm_predictions: &'a str,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    dotenv::dotenv().ok();

    let config = IntegrateConfig::from_env();

    log::info!("🚀 Starting forecast integration");
    log::info!("   Forecast dir: {}", config.forecast_dir.display());
    log::info!("   Historical data: {}", config.data_path.display());
    log::info!("   Output: {}", config.output_dir.display());

    let sources = ForecastSources::from_dir(&config.forecast_dir);
    let forecast_table = merge_sources(&sources)?;
    log::info!("📖 Merged {} forecast rows", forecast_table.len());

    let forecast_stats = monthly_statistics_forecast(&forecast_table);

    let historical = load_table(&config.data_path)?;
    log::info!("📊 Historical records: {}", historical.len());
    let vs_history = monthly_statistics_vs(&historical);

    let predictions = match &config.api_key {
        Some(key) => match predict(key, &config, &forecast_stats, &vs_history).await {
            Ok(text) => {
                log::info!("🎯 Collaborator predictions received");
                text
            }
            Err(e) => {
                log::warn!("📝 Falling back to the forecast summary: {}", e);
                render_forecast_summary(&forecast_stats, &vs_history)
            }
        },
        None => {
            log::warn!("🔑 OPENAI_API_KEY not set, using the forecast summary");
            render_forecast_summary(&forecast_stats, &vs_history)
        }
    };

    std::fs::create_dir_all(&config.output_dir)?;

    let results = IntegrationResults {
        monthly_statistics: &forecast_stats,
        llm_predictions: &predictions,
    };
    let json_path = config.output_dir.join("token_metrics_analysis.json");
    std::fs::write(&json_path, serde_json::to_string_pretty(&results)?)?;
    log::info!("📝 Wrote {}", json_path.display());

    let md_path = config.output_dir.join("token_metrics_analysis.md");
    std::fs::write(&md_path, &predictions)?;
    log::info!("📝 Wrote {}", md_path.display());

    log::info!("✅ Integration complete");
    Ok(())
}

async fn predict(
    api_key: &str,
    config: &IntegrateConfig,
    forecast_stats: &MetricMap<MetricMonthlyFull>,
    vs_history: &MetricMonthly,
) -> Result<String, CollaboratorError> {
    let collaborator = OpenAiForecaster::with_endpoint(
        api_key.to_string(),
        config.base_url.clone(),
        config.model.clone(),
        Duration::from_secs(config.timeout_secs),
    )?;

    let request = ForecastRequest {
        system: prompt::INTEGRATOR_SYSTEM_ROLE.to_string(),
        task: prompt::votable_supply_task(
            &serde_json::to_string_pretty(forecast_stats)?,
            &serde_json::to_string_pretty(vs_history)?,
        ),
    };

    tokio::time::timeout(
        Duration::from_secs(config.timeout_secs),
        collaborator.submit(&request),
    )
    .await
    .map_err(|_| CollaboratorError::Timeout(config.timeout_secs))?
}
