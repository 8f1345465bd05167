//! Write text reports to disk.
//!
//! Write failures never change computed values; callers log them and carry on.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::Series;
use crate::report::{format_plot_data, format_results};

#[derive(Debug, Error)]
pub enum OutputWriteError {
    #[error("failed to create output directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to render chart '{}': {message}", .path.display())]
    Chart { path: PathBuf, message: String },
}

/// Create the output directory (and parents) if needed.
pub fn ensure_output_dir(dir: &Path) -> Result<(), OutputWriteError> {
    fs::create_dir_all(dir).map_err(|source| OutputWriteError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write the full per-year table used for plotting.
pub fn write_plot_data(path: &Path, series: &Series) -> Result<(), OutputWriteError> {
    write_text(path, &format_plot_data(series))?;
    tracing::info!(path = %path.display(), "plot data written");
    Ok(())
}

/// Write the table of interpolated years only.
pub fn write_interpolation_results(path: &Path, series: &Series) -> Result<(), OutputWriteError> {
    write_text(path, &format_results(series))?;
    tracing::info!(path = %path.display(), "interpolation results written");
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> Result<(), OutputWriteError> {
    fs::write(path, contents).map_err(|source| OutputWriteError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Observation;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("popfill-export-{name}-{}", std::process::id()))
    }

    #[test]
    fn writes_both_reports() {
        let dir = scratch_dir("reports");
        ensure_output_dir(&dir).unwrap();

        let series = Series::new(vec![
            Observation::observed(2000, 10.0),
            Observation::observed(2001, 20.0),
        ]);
        let plot = dir.join("plot_data.txt");
        let results = dir.join("interpolation_results.txt");
        write_plot_data(&plot, &series).unwrap();
        write_interpolation_results(&results, &series).unwrap();

        assert_eq!(fs::read_to_string(&plot).unwrap(), format_plot_data(&series));
        assert!(fs::read_to_string(&results)
            .unwrap()
            .contains("No interpolation needed"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn write_into_missing_dir_fails() {
        let path = scratch_dir("missing").join("nested").join("plot_data.txt");
        let err = write_plot_data(&path, &Series::default()).unwrap_err();
        assert!(matches!(err, OutputWriteError::Write { .. }));
    }
}
