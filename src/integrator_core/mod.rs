//! Forecast integration
//!
//! ```text
//! <dir>/<stem>/<stem>-forecast-data.csv ──► parse ──► aligned merge ──► ForecastTable
//!                                                                          │
//!                              monthly statistics + collaborator/summary ◄─┘
//! ```

pub mod merge;
pub mod report;
pub mod sources;

pub use merge::{merge_sources, monthly_statistics_forecast, ForecastRecord, ForecastTable};
pub use report::render_forecast_summary;
pub use sources::{ForecastSources, IntegrateError};
