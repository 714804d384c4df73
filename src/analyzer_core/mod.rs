//! Analyzer Core - Token Governance Metrics Engine
//!
//! This module provides the deterministic analysis pipeline for historical
//! token governance time series: schema-validated ingestion, descriptive
//! statistics, correlation structure, optimal votable-supply estimation,
//! attack-cost scoring, and calendar-month aggregation.
//!
//! # Architecture
//!
//! ```text
//! CSV (Date, PR, PSI, VPI, LAR, Actual VPI, VS, CS)
//!     ↓
//! ingest (schema validation + day-first dates)
//!     ↓
//! TimeSeriesTable
//!     ↓
//! describe / correlate / optimal_range / attack_cost / monthly
//!     ↓
//! AnalysisPayload (JSON wire contract)
//!     ↓
//! insight → Forecaster collaborator or deterministic fallback report
//! ```

pub mod table;
pub mod ingest;
pub mod stats;
pub mod describe;
pub mod correlate;
pub mod optimal_range;
pub mod attack_cost;
pub mod monthly;
pub mod payload;
pub mod insight;

pub use table::{Metric, MetricMap, MetricRecord, TimeSeriesTable};
pub use ingest::{load_table, parse_table, IngestError};
pub use describe::{descriptive_statistics, MetricSummary};
pub use correlate::{correlation_matrix, CorrelationMatrix};
pub use optimal_range::{optimal_vs_analysis, OptimalRangeResult};
pub use attack_cost::{attack_cost_model, AttackCostModel};
pub use monthly::{monthly_statistics, monthly_statistics_vs, MetricMonthly, MetricMonthlyFull, MonthKey};
pub use payload::AnalysisPayload;
pub use insight::{generate_insights, render_text_insights, InsightReport, InsightSource};
