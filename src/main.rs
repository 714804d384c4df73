#[cfg(test)]
mod tests;

pub mod analyzer_core;
mod config;
pub mod forecaster;
pub mod integrator_core;

use {
    analyzer_core::{generate_insights, load_table, AnalysisPayload},
    config::AnalyzerConfig,
    forecaster::{Forecaster, OpenAiForecaster},
    std::time::Instant,
};

#[tokio::main]
pub async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = AnalyzerConfig::from_env();
    let started = Instant::now();

    log::info!("🚀 Starting token governance analysis...");
    log::info!("📊 Configuration:");
    log::info!("   Data: {}", config.data_path.display());
    log::info!("   Output: {}", config.output_dir.display());
    log::info!(
        "   Collaborator: {}",
        match &config.api_key {
            Some(_) => config.model.as_str(),
            None => "disabled",
        }
    );

    let table = load_table(&config.data_path)?;
    match table.date_range() {
        Some((start, end)) => {
            log::info!(
                "📖 Loaded {} records spanning {} to {}",
                table.len(),
                start,
                end
            )
        }
        None => log::warn!("📖 Loaded an empty table, statistics will be undefined"),
    }

    let payload = AnalysisPayload::from_table(&table);

    std::fs::create_dir_all(&config.output_dir)?;

    let stats_path = config.output_dir.join("descriptive_stats.json");
    std::fs::write(
        &stats_path,
        serde_json::to_string_pretty(&payload.descriptive_stats)?,
    )?;
    log::info!("📝 Wrote {}", stats_path.display());

    let forecaster = match &config.api_key {
        Some(key) => Some(OpenAiForecaster::with_endpoint(
            key.clone(),
            config.base_url.clone(),
            config.model.clone(),
            config.timeout(),
        )?),
        None => {
            log::warn!("🔑 OPENAI_API_KEY not set, insights will use the text fallback");
            None
        }
    };

    let report = generate_insights(
        &payload,
        forecaster.as_ref().map(|f| f as &dyn Forecaster),
        config.timeout(),
    )
    .await;

    let insights_path = config.output_dir.join("token_governance_insights.md");
    std::fs::write(&insights_path, &report.text)?;
    log::info!(
        "📝 Wrote {} ({} insights)",
        insights_path.display(),
        report.source.as_str()
    );

    log::info!(
        "✅ Analysis complete in {:.2}s",
        started.elapsed().as_secs_f64()
    );

    Ok(())
}
