//! CSV ingestion and schema validation for the historical metrics table

use super::table::{MetricRecord, TimeSeriesTable};
use chrono::NaiveDate;
use std::path::Path;

/// Column headers that must be present in the historical CSV
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Date",
    "PR",
    "PSI",
    "VPI",
    "LAR",
    "Actual VPI",
    "VS",
    "CS",
];

/// Accepted day-first date formats
const DATE_FORMATS: [&str; 2] = ["%d-%m-%Y", "%d/%m/%Y"];

#[derive(Debug)]
pub enum IngestError {
    Io(std::io::Error),
    MissingHeader,
    MissingColumn(String),
    InvalidDate {
        line: usize,
        value: String,
    },
    InvalidNumber {
        line: usize,
        column: &'static str,
        value: String,
    },
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        IngestError::Io(err)
    }
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::Io(e) => write!(f, "IO error: {}", e),
            IngestError::MissingHeader => write!(f, "input has no header row"),
            IngestError::MissingColumn(name) => write!(f, "missing required column: {}", name),
            IngestError::InvalidDate { line, value } => {
                write!(
                    f,
                    "line {}: unparseable date '{}' (expected day-first)",
                    line, value
                )
            }
            IngestError::InvalidNumber {
                line,
                column,
                value,
            } => {
                write!(f, "line {}: invalid number '{}' in column {}", line, value, column)
            }
            IngestError::RaggedRow {
                line,
                expected,
                found,
            } => {
                write!(
                    f,
                    "line {}: expected at least {} fields, found {}",
                    line, expected, found
                )
            }
        }
    }
}

impl std::error::Error for IngestError {}

/// Parse a day-first date, trying each accepted format in order
pub(crate) fn parse_day_first(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// Parse the historical metrics table from comma-delimited text
///
/// The header is validated before any row is parsed: every required column
/// must be present; extra columns are ignored. Dates are day-first. Value
/// ranges are not checked, so negative supplies or out-of-range ratios pass
/// through unchanged.
pub fn parse_table(text: &str) -> Result<TimeSeriesTable, IngestError> {
    let mut lines = text.lines().enumerate();

    let (_, header) = lines
        .find(|(_, l)| !l.trim().is_empty())
        .ok_or(IngestError::MissingHeader)?;
    let header = header.trim_start_matches('\u{feff}');
    let columns: Vec<&str> = header.split(',').map(|c| c.trim()).collect();

    // Schema check comes first, in required-column order
    let mut indices = Vec::with_capacity(REQUIRED_COLUMNS.len());
    for name in REQUIRED_COLUMNS {
        let idx = columns
            .iter()
            .position(|c| *c == name)
            .ok_or_else(|| IngestError::MissingColumn(name.to_string()))?;
        indices.push(idx);
    }
    let date_idx = indices[0];
    let needed = indices.iter().max().copied().unwrap_or(0) + 1;

    let mut records = Vec::new();
    for (i, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(|f| f.trim()).collect();
        if fields.len() < needed {
            return Err(IngestError::RaggedRow {
                line: i + 1,
                expected: needed,
                found: fields.len(),
            });
        }

        let date_raw = fields[date_idx];
        let date = parse_day_first(date_raw).ok_or_else(|| IngestError::InvalidDate {
            line: i + 1,
            value: date_raw.to_string(),
        })?;

        let metric_at = |slot: usize| -> Result<f64, IngestError> {
            let raw = fields[indices[slot]];
            raw.parse().map_err(|_| IngestError::InvalidNumber {
                line: i + 1,
                column: REQUIRED_COLUMNS[slot],
                value: raw.to_string(),
            })
        };

        records.push(MetricRecord {
            date,
            pr: metric_at(1)?,
            psi: metric_at(2)?,
            vpi: metric_at(3)?,
            lar: metric_at(4)?,
            actual_vpi: metric_at(5)?,
            vs: metric_at(6)?,
            cs: metric_at(7)?,
        });
    }

    Ok(TimeSeriesTable::new(records))
}

/// Load and validate the historical metrics table from a CSV file
pub fn load_table(path: &Path) -> Result<TimeSeriesTable, IngestError> {
    let text = std::fs::read_to_string(path)?;
    let table = parse_table(&text)?;
    log::debug!("Loaded {} records from {}", table.len(), path.display());
    Ok(table)
}
