//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and sets up logging
//! - loads and completes the series
//! - prints the console summary
//! - writes reports, the chart and optional exports
//! - optionally opens the viewer

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, PlotArgs, RunArgs};
use crate::domain::{RunConfig, Series};
use crate::error::AppError;
use crate::io::export::{OutputWriteError, ensure_output_dir, write_interpolation_results, write_plot_data};
use crate::io::json::{read_series_json, write_series_json};
use crate::plot::{render_ascii_plot, write_svg_chart};
use crate::report::{format_analysis_summary, format_console_results};

pub mod pipeline;

/// Entry point for the `popfill` binary.
pub fn run() -> Result<(), AppError> {
    // A bare `popfill` (or `popfill --input ...`) behaves like `popfill run ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    init_tracing(&cli.log);

    match cli.command {
        Command::Run(args) => handle_run(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_run(args: RunArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args);
    let run = pipeline::run_pipeline(&config)?;

    println!("Reading: {}", run.header);
    print!("{}", format_analysis_summary(run.known_count, &run.missing));
    if !run.missing.is_empty() {
        println!();
        print!("{}", format_console_results(run.completed()));
    }

    write_outputs(&config, run.completed());

    if let Some(path) = &config.export_json {
        report_write(write_series_json(path, run.completed(), &config.title), path);
    }

    if config.plot {
        println!("{}", render_ascii_plot(run.completed(), config.plot_width, config.plot_height));
    }

    if config.show {
        crate::tui::show(run.completed(), &config.title)?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let doc = read_series_json(&args.series)?;

    if args.show {
        return crate::tui::show(&doc.series, &doc.title);
    }

    println!("{}", render_ascii_plot(&doc.series, args.width, args.height));
    Ok(())
}

/// Write both text reports and the chart.
///
/// Failures are logged and do not abort the run: the computed values are
/// already on the console.
fn write_outputs(config: &RunConfig, series: &Series) {
    if let Err(err) = ensure_output_dir(&config.output_dir) {
        tracing::error!(error = %err, "skipping report and chart output");
        return;
    }

    let path = config.plot_data_path();
    report_write(write_plot_data(&path, series), &path);

    let path = config.results_path();
    report_write(write_interpolation_results(&path, series), &path);

    let path = config.chart_path();
    report_write(write_svg_chart(&path, series, &config.title), &path);
}

fn report_write(result: Result<(), OutputWriteError>, path: &Path) {
    match result {
        Ok(()) => println!("Written: {}", path.display()),
        Err(err) => tracing::error!(error = %err, "output not written"),
    }
}

pub fn run_config_from_args(args: &RunArgs) -> RunConfig {
    RunConfig {
        input_path: args.input.clone(),
        output_dir: args.output_dir.clone(),
        title: args.title.clone(),
        show: args.show,
        plot: args.plot,
        plot_width: args.width,
        plot_height: args.height,
        export_json: args.export_json.clone(),
    }
}

/// Rewrite argv so `popfill` defaults to `popfill run`.
///
/// Rules:
/// - `popfill`                      -> `popfill run`
/// - `popfill --input x ...`        -> `popfill run --input x ...`
/// - `popfill --help/--version/-h`  -> unchanged (show top-level help/version)
/// - a leading `--log <filter>` is kept in front of whatever follows
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    // Skip the global `--log` option so it can precede a subcommand.
    let mut pos = 1;
    while let Some(tok) = argv.get(pos) {
        if tok == "--log" {
            pos += 2;
        } else if tok.starts_with("--log=") {
            pos += 1;
        } else {
            break;
        }
    }
    let pos = pos.min(argv.len());

    let Some(arg1) = argv.get(pos).cloned() else {
        argv.push("run".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "run" | "plot");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "run flags".
    if arg1.starts_with('-') {
        argv.insert(pos, "run".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_runs() {
        assert_eq!(rewrite_args(args(&["popfill"])), args(&["popfill", "run"]));
    }

    #[test]
    fn leading_flags_go_to_run() {
        assert_eq!(
            rewrite_args(args(&["popfill", "--input", "x.txt"])),
            args(&["popfill", "run", "--input", "x.txt"])
        );
    }

    #[test]
    fn leading_log_filter_is_skipped() {
        assert_eq!(
            rewrite_args(args(&["popfill", "--log", "debug"])),
            args(&["popfill", "--log", "debug", "run"])
        );
        assert_eq!(
            rewrite_args(args(&["popfill", "--log=info", "--plot"])),
            args(&["popfill", "--log=info", "run", "--plot"])
        );
        let raw = args(&["popfill", "--log", "info", "plot", "--series", "s.json"]);
        assert_eq!(rewrite_args(raw.clone()), raw);
    }

    #[test]
    fn subcommands_and_help_untouched() {
        for raw in [
            &["popfill", "plot", "--series", "s.json"][..],
            &["popfill", "--help"][..],
            &["popfill", "run"][..],
        ] {
            assert_eq!(rewrite_args(args(raw)), args(raw));
        }
    }

    #[test]
    fn config_paths_live_in_output_dir() {
        let cli = crate::cli::Cli::parse_from(["popfill", "run", "--output-dir", "out"]);
        let Command::Run(run_args) = cli.command else {
            panic!("expected run");
        };
        let config = run_config_from_args(&run_args);
        assert_eq!(config.plot_data_path(), Path::new("out").join("plot_data.txt"));
        assert_eq!(config.results_path(), Path::new("out").join("interpolation_results.txt"));
        assert_eq!(config.chart_path(), Path::new("out").join("population_plot.svg"));
    }
}
