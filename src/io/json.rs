//! Read/write series JSON files.
//!
//! Series JSON is the portable representation of a completed run:
//! - tool name and chart title
//! - every entry with its value and `observed` flag
//!
//! The schema is defined by `domain::SeriesFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{Series, SeriesFile};
use crate::io::export::OutputWriteError;
use crate::io::ingest::DataLoadError;

/// Write a series JSON file.
pub fn write_series_json(path: &Path, series: &Series, title: &str) -> Result<(), OutputWriteError> {
    let file = File::create(path).map_err(|source| OutputWriteError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    let doc = SeriesFile {
        tool: "popfill".to_string(),
        title: title.to_string(),
        series: series.clone(),
    };

    serde_json::to_writer_pretty(file, &doc).map_err(|source| OutputWriteError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "series JSON written");
    Ok(())
}

/// Read a series JSON file.
pub fn read_series_json(path: &Path) -> Result<SeriesFile, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(file).map_err(|source| DataLoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
