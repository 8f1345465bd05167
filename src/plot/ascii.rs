//! Terminal chart on a fixed character grid.
//!
//! Output is fully deterministic for a given series and size, so it is
//! pinned by a golden test. Glyphs:
//! - `-` trend line through every valued year
//! - `o` observed year
//! - `*` interpolated year

use crate::domain::Series;
use crate::plot::{pad_range, trend_points, value_range, year_bounds};

/// Render a terminal plot of a (completed) series.
pub fn render_ascii_plot(series: &Series, width: usize, height: usize) -> String {
    let years = year_bounds(series);
    let (lo, hi) = value_range(series).unwrap_or((0.0, 1.0));
    let values = pad_range(lo, hi, 0.05);

    let mut canvas = Canvas::new(width.max(10), height.max(5), years, values);

    // Markers go last so they sit on top of the line.
    canvas.trace(&trend_points(series));
    for obs in series {
        let Some(v) = obs.value else { continue };
        let at = canvas.cell(f64::from(obs.year), v);
        canvas.set(at, if obs.observed { 'o' } else { '*' });
    }

    let header = format!(
        "Plot: year=[{:.0}, {:.0}] | population=[{:.1}, {:.1}]",
        years.0, years.1, values.0, values.1
    );
    canvas.render(&header)
}

struct Canvas {
    cells: Vec<Vec<char>>,
    years: (f64, f64),
    values: (f64, f64),
}

impl Canvas {
    fn new(width: usize, height: usize, years: (f64, f64), values: (f64, f64)) -> Self {
        Self {
            cells: vec![vec![' '; width]; height],
            years,
            values,
        }
    }

    fn width(&self) -> usize {
        self.cells[0].len()
    }

    fn height(&self) -> usize {
        self.cells.len()
    }

    /// `(column, row)` for a data point; row 0 is the top (largest value).
    fn cell(&self, year: f64, value: f64) -> (usize, usize) {
        let fx = ((year - self.years.0) / (self.years.1 - self.years.0)).clamp(0.0, 1.0);
        let fy = ((value - self.values.0) / (self.values.1 - self.values.0)).clamp(0.0, 1.0);
        let last_col = (self.width() - 1) as f64;
        let last_row = (self.height() - 1) as f64;
        let col = (fx * last_col).round() as usize;
        let row = (last_row - fy * last_row).round() as usize;
        (col, row)
    }

    fn set(&mut self, (col, row): (usize, usize), ch: char) {
        self.cells[row][col] = ch;
    }

    /// Connect consecutive points with `-`, leaving occupied cells alone.
    fn trace(&mut self, points: &[(f64, f64)]) {
        if points.len() < 2 {
            return;
        }
        let cells: Vec<(usize, usize)> = points.iter().map(|&(x, y)| self.cell(x, y)).collect();
        self.set(cells[0], '-');
        for pair in cells.windows(2) {
            self.stroke(pair[0], pair[1], '-');
        }
    }

    /// Bresenham segment between two cells; only blank cells are drawn.
    fn stroke(&mut self, from: (usize, usize), to: (usize, usize), ch: char) {
        let (mut x, mut y) = (from.0 as i64, from.1 as i64);
        let (tx, ty) = (to.0 as i64, to.1 as i64);
        let dx = (tx - x).abs();
        let dy = -(ty - y).abs();
        let step_x = (tx - x).signum();
        let step_y = (ty - y).signum();
        let mut err = dx + dy;

        loop {
            let in_bounds = x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height();
            if in_bounds && self.cells[y as usize][x as usize] == ' ' {
                self.cells[y as usize][x as usize] = ch;
            }
            if (x, y) == (tx, ty) {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += step_x;
            }
            if e2 <= dx {
                err += dx;
                y += step_y;
            }
        }
    }

    fn render(self, header: &str) -> String {
        let mut out = String::with_capacity((self.width() + 1) * (self.height() + 1) + header.len());
        out.push_str(header);
        out.push('\n');
        for row in self.cells {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}
