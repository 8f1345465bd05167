//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during interpolation
//! - exported to text reports and JSON
//! - reloaded later for plotting

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One year of the analysis window.
///
/// `observed = false` entries start without a value and receive a derived
/// value from the engine. They keep `observed = false` afterwards so reports
/// can always tell measured data from estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub year: i32,
    pub value: Option<f64>,
    pub observed: bool,
}

impl Observation {
    /// A measured value read from the input.
    pub fn observed(year: i32, value: f64) -> Self {
        Self {
            year,
            value: Some(value),
            observed: true,
        }
    }

    /// A gap in the input that still needs an estimate.
    pub fn missing(year: i32) -> Self {
        Self {
            year,
            value: None,
            observed: false,
        }
    }

    pub fn kind(&self) -> DataKind {
        if self.observed {
            DataKind::Original
        } else {
            DataKind::Interpolated
        }
    }
}

/// Ordered per-year collection spanning the analysis window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    entries: Vec<Observation>,
}

impl Series {
    pub fn new(entries: Vec<Observation>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Observation] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, year: i32) -> Option<&Observation> {
        self.entries.iter().find(|o| o.year == year)
    }

    /// Smallest and largest year in the window.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.entries.iter().map(|o| o.year).min()?;
        let max = self.entries.iter().map(|o| o.year).max()?;
        Some((min, max))
    }
}

impl FromIterator<Observation> for Series {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A `(year, value)` pair fed to the Lagrange estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnownPoint {
    pub year: i32,
    pub value: f64,
}

impl KnownPoint {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

/// Report label for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataKind {
    Original,
    Interpolated,
}

impl DataKind {
    pub fn label(self) -> &'static str {
        match self {
            DataKind::Original => "original",
            DataKind::Interpolated => "interpolated",
        }
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    /// Chart title; the year range is appended when rendering.
    pub title: String,

    pub show: bool,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_json: Option<PathBuf>,
}

impl RunConfig {
    pub fn plot_data_path(&self) -> PathBuf {
        self.output_dir.join("plot_data.txt")
    }

    pub fn results_path(&self) -> PathBuf {
        self.output_dir.join("interpolation_results.txt")
    }

    pub fn chart_path(&self) -> PathBuf {
        self.output_dir.join("population_plot.svg")
    }
}

/// A saved series file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesFile {
    pub tool: String,
    pub title: String,
    pub series: Series,
}
