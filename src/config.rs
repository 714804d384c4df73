//! Runtime configuration from environment variables

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::forecaster::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};

/// Analysis pipeline settings
///
/// Environment:
/// - `GOVFLOW_DATA_PATH`: merged metrics CSV (default: merged_data.csv)
/// - `GOVFLOW_OUTPUT_DIR`: artifact directory (default: current directory)
/// - `OPENAI_API_KEY`: enables the chat collaborator when set
/// - `GOVFLOW_LLM_MODEL`: chat model (default: gpt-4)
/// - `GOVFLOW_LLM_BASE_URL`: chat endpoint (default: https://api.openai.com)
/// - `GOVFLOW_LLM_TIMEOUT_SECS`: reply deadline (default: 120)
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub data_path: PathBuf,
    pub output_dir: PathBuf,
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl AnalyzerConfig {
    pub fn from_env() -> Self {
        Self {
            data_path: env::var("GOVFLOW_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("merged_data.csv")),
            output_dir: env::var("GOVFLOW_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
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

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
