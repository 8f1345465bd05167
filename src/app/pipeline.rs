//! Shared run pipeline used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load -> analyse -> complete -> (reports, chart, viewer)
//!
//! The caller can then focus on presentation (printing, files, viewer).

use crate::domain::{RunConfig, Series};
use crate::error::AppError;
use crate::interp::{Completion, complete_series, missing_years, observed_count};
use crate::io::ingest::{LoadedSeries, load_series};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub header: String,
    pub input: Series,
    pub known_count: usize,
    pub missing: Vec<i32>,
    pub completion: Completion,
}

impl RunOutput {
    pub fn completed(&self) -> &Series {
        &self.completion.series
    }
}

/// Load the configured input and complete it.
pub fn run_pipeline(config: &RunConfig) -> Result<RunOutput, AppError> {
    let loaded = load_series(&config.input_path)?;
    complete_loaded(loaded)
}

/// Complete an already loaded series.
///
/// Per-year estimation failures are logged and kept in the output; only a
/// series without any known point is an error.
pub fn complete_loaded(loaded: LoadedSeries) -> Result<RunOutput, AppError> {
    let LoadedSeries { header, series } = loaded;

    let known_count = observed_count(&series);
    let missing = missing_years(&series);
    tracing::debug!(known = known_count, missing = missing.len(), "analysed series");

    let completion = complete_series(&series)?;
    for failure in &completion.failures {
        tracing::warn!(year = failure.year, error = %failure.error, "could not interpolate year");
    }

    Ok(RunOutput {
        header,
        input: series,
        known_count,
        missing,
        completion,
    })
}
