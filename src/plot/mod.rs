//! Charts: SVG artifact, terminal preview, and the series prep they share.

pub mod ascii;
pub mod chart;

pub use ascii::render_ascii_plot;
pub use chart::write_svg_chart;

use crate::domain::Series;

/// Series and bounds for one chart, computed outside any render call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Every valued year, sorted by year.
    pub trend: Vec<(f64, f64)>,
    pub observed: Vec<(f64, f64)>,
    pub interpolated: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl ChartData {
    pub fn from_series(series: &Series) -> Self {
        let mut observed = Vec::new();
        let mut interpolated = Vec::new();
        for obs in series {
            let Some(v) = obs.value else { continue };
            let pt = (f64::from(obs.year), v);
            if obs.observed {
                observed.push(pt);
            } else {
                interpolated.push(pt);
            }
        }

        let (x0, x1) = year_bounds(series);
        let (y0, y1) = value_range(series).unwrap_or((0.0, 1.0));
        let (y0, y1) = pad_range(y0, y1, 0.05);

        Self {
            trend: trend_points(series),
            observed,
            interpolated,
            x_bounds: [x0, x1],
            y_bounds: [y0, y1],
        }
    }
}

/// Chart title with the covered year range appended.
pub fn chart_title(title: &str, series: &Series) -> String {
    match series.year_range() {
        Some((a, b)) => format!("{title} ({a}-{b})"),
        None => title.to_string(),
    }
}

pub(crate) fn trend_points(series: &Series) -> Vec<(f64, f64)> {
    let mut pts: Vec<(f64, f64)> = series
        .iter()
        .filter_map(|o| o.value.map(|v| (f64::from(o.year), v)))
        .collect();
    pts.sort_by(|a, b| a.0.total_cmp(&b.0));
    pts
}

/// Year axis bounds; a single-year window is widened by one year each side.
pub(crate) fn year_bounds(series: &Series) -> (f64, f64) {
    match series.year_range() {
        Some((a, b)) if b > a => (f64::from(a), f64::from(b)),
        Some((a, _)) => (f64::from(a) - 1.0, f64::from(a) + 1.0),
        None => (0.0, 1.0),
    }
}

pub(crate) fn value_range(series: &Series) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for v in series.iter().filter_map(|o| o.value) {
        min_y = min_y.min(v);
        max_y = max_y.max(v);
    }

    if !(min_y.is_finite() && max_y.is_finite()) {
        return None;
    }
    if max_y > min_y {
        Some((min_y, max_y))
    } else {
        // Flat series: open a unit band around the value.
        Some((min_y - 0.5, max_y + 0.5))
    }
}

pub(crate) fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}
