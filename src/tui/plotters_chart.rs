//! Population chart drawn by Plotters straight into a Ratatui buffer.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::plot::ChartData;

const MIN_WIDTH: u16 = 20;
const MIN_HEIGHT: u16 = 8;

/// Borrowed chart data plus axis label formatters.
pub struct PopulationChart<'a> {
    pub data: &'a ChartData,
    pub fmt_x: fn(f64) -> String,
    pub fmt_y: fn(f64) -> String,
}

impl<'a> Widget for PopulationChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            buf.set_string(
                area.x,
                area.y,
                "Terminal too small for the chart.",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let [x0, x1] = self.data.x_bounds;
        let [y0, y1] = self.data.y_bounds;

        let finite = [x0, x1, y0, y1].iter().all(|v| v.is_finite());
        if !finite || x1 <= x0 || y1 <= y0 {
            return;
        }

        let data = self.data;
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .set_label_area_size(LabelAreaPosition::Left, 10)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc("year")
                .y_desc("population")
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| (self.fmt_x)(*v))
                .y_label_formatter(&|v| (self.fmt_y)(*v))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            let trend_color = RGBColor(0, 255, 255); // cyan
            let observed_color = RGBColor(80, 160, 255); // blue
            let interpolated_color = RGBColor(255, 0, 0); // red

            chart.draw_series(LineSeries::new(data.trend.iter().copied(), &trend_color))?;

            // Pixels rather than `Circle`: the ratatui backend scales circle
            // radii as if they were canvas units.
            chart.draw_series(
                data.observed
                    .iter()
                    .map(|&(x, y)| Pixel::new((x, y), observed_color)),
            )?;
            chart.draw_series(
                data.interpolated
                    .iter()
                    .map(|&(x, y)| Pixel::new((x, y), interpolated_color)),
            )?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
