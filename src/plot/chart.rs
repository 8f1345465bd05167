//! Chart artifact rendered with Plotters' SVG backend.
//!
//! Layout follows the usual population chart: a trend line through every
//! valued year, blue markers for observed years, red markers for
//! interpolated years, a light grid and a legend.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::domain::Series;
use crate::io::export::OutputWriteError;
use crate::plot::{ChartData, chart_title};
use crate::report::group_thousands;

const CHART_SIZE: (u32, u32) = (1200, 800);
const MARKER_RADIUS: i32 = 5;

/// Render the chart for `series` into an SVG file at `path`.
pub fn write_svg_chart(path: &Path, series: &Series, title: &str) -> Result<(), OutputWriteError> {
    let data = ChartData::from_series(series);
    let caption = chart_title(title, series);

    draw_chart(path, &data, &caption).map_err(|e| OutputWriteError::Chart {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::info!(path = %path.display(), "chart written");
    Ok(())
}

fn draw_chart(path: &Path, data: &ChartData, caption: &str) -> Result<(), Box<dyn Error>> {
    let [x0, x1] = data.x_bounds;
    let [y0, y1] = data.y_bounds;

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 28))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 100)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Population")
        .x_label_formatter(&|v| format!("{v:.0}"))
        .y_label_formatter(&|v| group_thousands(v.round() as i64))
        .light_line_style(&BLACK.mix(0.05))
        .bold_line_style(&BLACK.mix(0.2))
        .draw()?;

    let trend_color = BLUE.mix(0.7);
    chart
        .draw_series(LineSeries::new(
            data.trend.iter().copied(),
            trend_color.stroke_width(2),
        ))?
        .label("Population Trend")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], trend_color.stroke_width(2)));

    chart
        .draw_series(
            data.observed
                .iter()
                .map(|&pt| Circle::new(pt, MARKER_RADIUS, BLUE.filled())),
        )?
        .label("Original Data")
        .legend(|(x, y)| Circle::new((x + 10, y), MARKER_RADIUS, BLUE.filled()));

    if !data.interpolated.is_empty() {
        chart
            .draw_series(
                data.interpolated
                    .iter()
                    .map(|&pt| Circle::new(pt, MARKER_RADIUS, RED.filled())),
            )?
            .label("Interpolated Data")
            .legend(|(x, y)| Circle::new((x + 10, y), MARKER_RADIUS, RED.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Observation;

    #[test]
    fn writes_svg_file() {
        let path = std::env::temp_dir().join(format!("popfill-chart-{}.svg", std::process::id()));
        let series = Series::new(vec![
            Observation::observed(1990, 1000.0),
            Observation {
                year: 1991,
                value: Some(1250.0),
                observed: false,
            },
            Observation::observed(1992, 1500.0),
        ]);

        write_svg_chart(&path, &series, "Population Evolution").unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Population Evolution (1990-1992)"));

        std::fs::remove_file(&path).ok();
    }
}
