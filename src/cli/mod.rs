//! Command-line parsing for the population gap filler.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the interpolation code. Every option has a default, so a bare
//! `popfill` runs the fixed `data/population.txt` -> `output/` path.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "popfill", version, about = "Fill gaps in yearly population data (Lagrange interpolation)")]
pub struct Cli {
    /// Log filter for diagnostics on stderr (e.g. `info`, `popfill=debug`).
    #[arg(long, global = true, default_value = "warn")]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load the series, fill missing years, write reports and the chart.
    Run(RunArgs),
    /// Plot a previously exported series JSON.
    Plot(PlotArgs),
}

/// Options for a full run.
#[derive(Debug, Parser, Clone)]
pub struct RunArgs {
    /// Input file: a header line, then `<year> <population>` rows (`-1` = missing).
    #[arg(short, long, default_value = "data/population.txt")]
    pub input: PathBuf,

    /// Directory for `plot_data.txt`, `interpolation_results.txt` and the chart.
    #[arg(short, long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Chart title (the year range is appended).
    #[arg(long, default_value = "Population Evolution")]
    pub title: String,

    /// Open the interactive chart viewer after writing outputs.
    #[arg(long)]
    pub show: bool,

    /// Print an ASCII chart to the terminal.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export the completed series to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

/// Options for plotting a saved series.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Series JSON file produced by `popfill run --export-json`.
    #[arg(long, value_name = "JSON")]
    pub series: PathBuf,

    /// Open the interactive chart viewer instead of printing.
    #[arg(long)]
    pub show: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}
