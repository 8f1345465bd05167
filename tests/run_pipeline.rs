use std::fs;
use std::path::PathBuf;

use popfill::app::pipeline::run_pipeline;
use popfill::domain::RunConfig;
use popfill::io::{ensure_output_dir, read_series_json, write_interpolation_results, write_plot_data, write_series_json};
use popfill::plot::write_svg_chart;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("popfill-it-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn config(dir: &std::path::Path, input: &str) -> RunConfig {
    let input_path = dir.join("population.txt");
    fs::write(&input_path, input).unwrap();
    RunConfig {
        input_path,
        output_dir: dir.join("out"),
        title: "Population Evolution".to_string(),
        show: false,
        plot: false,
        plot_width: 80,
        plot_height: 20,
        export_json: None,
    }
}

#[test]
fn fills_gaps_and_writes_every_artifact() {
    let dir = scratch("full");
    let cfg = config(
        &dir,
        "Year Population\n1990 1000\n1991 -1\n1992 1500\n1993 -1\n1994 2000\n",
    );

    let run = run_pipeline(&cfg).unwrap();
    assert_eq!(run.known_count, 3);
    assert_eq!(run.missing, vec![1991, 1993]);
    assert!(run.completion.is_complete());
    assert_eq!(run.completed().get(1991).unwrap().value, Some(1250.0));
    assert_eq!(run.completed().get(1993).unwrap().value, Some(1750.0));

    ensure_output_dir(&cfg.output_dir).unwrap();
    write_plot_data(&cfg.plot_data_path(), run.completed()).unwrap();
    write_interpolation_results(&cfg.results_path(), run.completed()).unwrap();
    write_svg_chart(&cfg.chart_path(), run.completed(), &cfg.title).unwrap();

    let plot_data = fs::read_to_string(cfg.plot_data_path()).unwrap();
    assert_eq!(plot_data.lines().count(), 2 + 5);
    assert!(plot_data.contains("1993       1,750  interpolated"));
    assert!(plot_data.contains("1994       2,000  original"));

    let results = fs::read_to_string(cfg.results_path()).unwrap();
    assert!(results.starts_with("INTERPOLATION RESULTS\n"));
    assert!(results.contains("1991       1,250\n"));
    assert!(!results.contains("1990"));

    let svg = fs::read_to_string(cfg.chart_path()).unwrap();
    assert!(svg.contains("Population Evolution (1990-1994)"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn exported_series_reloads_for_plotting() {
    let dir = scratch("json");
    let cfg = config(&dir, "h\n2000 10\n2001 -1\n2002 30\n");
    let run = run_pipeline(&cfg).unwrap();

    let path = dir.join("series.json");
    write_series_json(&path, run.completed(), &cfg.title).unwrap();
    let doc = read_series_json(&path).unwrap();

    assert_eq!(doc.title, cfg.title);
    assert_eq!(doc.series, *run.completed());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn load_and_engine_errors_map_to_exit_codes() {
    let dir = scratch("errors");

    let mut cfg = config(&dir, "h\n2000 -1\n2001 -1\n");
    assert_eq!(run_pipeline(&cfg).unwrap_err().exit_code(), 3);

    cfg.input_path = dir.join("does-not-exist.txt");
    assert_eq!(run_pipeline(&cfg).unwrap_err().exit_code(), 2);

    let cfg = config(&dir, "h\n2000 abc\n");
    assert_eq!(run_pipeline(&cfg).unwrap_err().exit_code(), 2);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn single_known_point_reports_per_year_failures() {
    let dir = scratch("single");
    let cfg = config(&dir, "h\n2000 100\n2001 -1\n2002 -1\n");

    let run = run_pipeline(&cfg).unwrap();
    let failed: Vec<i32> = run.completion.failures.iter().map(|f| f.year).collect();
    assert_eq!(failed, vec![2001, 2002]);
    assert_eq!(run.completed().get(2001).unwrap().value, None);

    let _ = fs::remove_dir_all(&dir);
}
