//! Forecast source registry and validation

use crate::analyzer_core::table::Metric;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Errors from forecast integration
#[derive(Debug)]
pub enum IntegrateError {
    Io(io::Error),
    MissingMetric(Metric),
    SourceNotFound {
        metric: Metric,
        path: PathBuf,
    },
    MissingHeader {
        metric: Metric,
    },
    InvalidDate {
        metric: Metric,
        line: usize,
        value: String,
    },
    InvalidNumber {
        metric: Metric,
        line: usize,
        value: String,
    },
    RaggedRow {
        metric: Metric,
        line: usize,
        found: usize,
    },
    RowCountMismatch {
        metric: Metric,
        expected: usize,
        found: usize,
    },
    DateMismatch {
        metric: Metric,
        row: usize,
    },
}

impl fmt::Display for IntegrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrateError::Io(e) => write!(f, "I/O error: {}", e),
            IntegrateError::MissingMetric(metric) => {
                write!(
                    f,
                    "no forecast source registered for {}",
                    metric.column_name()
                )
            }
            IntegrateError::SourceNotFound { metric, path } => {
                write!(
                    f,
                    "forecast file for {} not found at {}",
                    metric.column_name(),
                    path.display()
                )
            }
            IntegrateError::MissingHeader { metric } => {
                write!(
                    f,
                    "forecast file for {} has no header row",
                    metric.column_name()
                )
            }
            IntegrateError::InvalidDate {
                metric,
                line,
                value,
            } => {
                write!(
                    f,
                    "invalid date in {} forecast at line {}: '{}'",
                    metric.column_name(),
                    line,
                    value
                )
            }
            IntegrateError::InvalidNumber {
                metric,
                line,
                value,
            } => {
                write!(
                    f,
                    "invalid number in {} forecast at line {}: '{}'",
                    metric.column_name(),
                    line,
                    value
                )
            }
            IntegrateError::RaggedRow {
                metric,
                line,
                found,
            } => {
                write!(
                    f,
                    "ragged row in {} forecast at line {}: found {} fields, expected 2",
                    metric.column_name(),
                    line,
                    found
                )
            }
            IntegrateError::RowCountMismatch {
                metric,
                expected,
                found,
            } => {
                write!(
                    f,
                    "{} forecast has {} rows, expected {}",
                    metric.column_name(),
                    found,
                    expected
                )
            }
            IntegrateError::DateMismatch { metric, row } => {
                write!(
                    f,
                    "{} forecast date at row {} does not match the anchor series",
                    metric.column_name(),
                    row
                )
            }
        }
    }
}

impl std::error::Error for IntegrateError {}

impl From<io::Error> for IntegrateError {
    fn from(e: io::Error) -> Self {
        IntegrateError::Io(e)
    }
}

/// Where each per-metric forecast CSV lives
#[derive(Debug, Clone)]
pub struct ForecastSources {
    paths: HashMap<Metric, PathBuf>,
}

impl ForecastSources {
    pub fn new() -> Self {
        Self {
            paths: HashMap::new(),
        }
    }

    /// Conventional layout under one root: `<dir>/<stem>/<stem>-forecast-data.csv`
    pub fn from_dir(dir: &Path) -> Self {
        let mut sources = Self::new();
        for metric in Metric::forecast_set() {
            let stem = metric.file_stem();
            sources.insert(
                metric,
                dir.join(stem).join(format!("{}-forecast-data.csv", stem)),
            );
        }
        sources
    }

    pub fn insert(&mut self, metric: Metric, path: PathBuf) {
        self.paths.insert(metric, path);
    }

    pub fn path(&self, metric: Metric) -> Option<&Path> {
        self.paths.get(&metric).map(|p| p.as_path())
    }

    pub(crate) fn require(&self, metric: Metric) -> Result<&Path, IntegrateError> {
        self.path(metric)
            .ok_or(IntegrateError::MissingMetric(metric))
    }

    /// Check every forecast metric has a registered, existing file
    pub fn validate(&self) -> Result<(), IntegrateError> {
        for metric in Metric::forecast_set() {
            let path = self.require(metric)?;
            if !path.exists() {
                return Err(IntegrateError::SourceNotFound {
                    metric,
                    path: path.to_path_buf(),
                });
            }
        }
        Ok(())
    }
}

impl Default for ForecastSources {
    fn default() -> Self {
        Self::new()
    }
}
