//! Population file ingest.
//!
//! Input format:
//!
//! ```text
//! Year Population            <- header, logged and otherwise ignored
//! 1990 1000
//! 1991 -1                    <- `-1` marks a missing year
//! 1992 1500
//! ```
//!
//! Fields are whitespace separated; tokens after the second are ignored and
//! blank lines are skipped. Anything else that does not parse aborts the load
//! with the offending line number. The engine never sees partial input.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{Observation, Series};

/// Token that marks a missing observation.
pub const MISSING_SENTINEL: &str = "-1";

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),

    #[error("input is empty (expected a header line)")]
    Empty,

    #[error("line {line}: expected `<year> <value>`, got `{content}`")]
    Malformed { line: usize, content: String },

    #[error("line {line}: invalid year `{token}`")]
    InvalidYear { line: usize, token: String },

    #[error("line {line}: invalid population value `{token}`")]
    InvalidValue { line: usize, token: String },

    #[error("line {line}: duplicate year {year}")]
    DuplicateYear { line: usize, year: i32 },

    #[error("no data rows after the header")]
    NoData,

    #[error("invalid series JSON '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Ingest output: the header line plus the parsed series.
#[derive(Debug, Clone)]
pub struct LoadedSeries {
    pub header: String,
    pub series: Series,
}

/// Load a series from a file on disk.
pub fn load_series(path: &Path) -> Result<LoadedSeries, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let loaded = read_series(BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        rows = loaded.series.len(),
        "loaded population series"
    );
    Ok(loaded)
}

/// Parse a series from in-memory text.
pub fn parse_series(text: &str) -> Result<LoadedSeries, DataLoadError> {
    read_series(text.as_bytes())
}

/// Parse a series from any buffered reader.
pub fn read_series<R: BufRead>(reader: R) -> Result<LoadedSeries, DataLoadError> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => normalize_header(&line?),
        None => return Err(DataLoadError::Empty),
    };
    tracing::debug!(%header, "read header");

    let mut entries = Vec::new();
    let mut seen = HashSet::new();

    for (idx, line) in lines.enumerate() {
        // +2: enumerate is 0-based and the header took line 1.
        let line_no = idx + 2;
        let line = line?;
        let Some(obs) = parse_line(&line, line_no)? else {
            continue;
        };
        if !seen.insert(obs.year) {
            return Err(DataLoadError::DuplicateYear {
                line: line_no,
                year: obs.year,
            });
        }
        entries.push(obs);
    }

    if entries.is_empty() {
        return Err(DataLoadError::NoData);
    }

    Ok(LoadedSeries {
        header,
        series: Series::new(entries),
    })
}

fn normalize_header(line: &str) -> String {
    // Editors on some platforms prepend a UTF-8 BOM to the first line.
    line.trim_start_matches('\u{feff}').trim().to_string()
}

fn parse_line(line: &str, line_no: usize) -> Result<Option<Observation>, DataLoadError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let mut tokens = trimmed.split_whitespace();
    let (Some(year_tok), Some(value_tok)) = (tokens.next(), tokens.next()) else {
        return Err(DataLoadError::Malformed {
            line: line_no,
            content: trimmed.to_string(),
        });
    };

    let year = year_tok
        .parse::<i32>()
        .map_err(|_| DataLoadError::InvalidYear {
            line: line_no,
            token: year_tok.to_string(),
        })?;

    if value_tok == MISSING_SENTINEL {
        return Ok(Some(Observation::missing(year)));
    }

    let value = value_tok
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DataLoadError::InvalidValue {
            line: line_no,
            token: value_tok.to_string(),
        })?;

    Ok(Some(Observation::observed(year, value)))
}
