//! Ratatui-based chart viewer.
//!
//! Shows the completed series as a chart next to a scrollable per-year list.
//! Observed years are white, interpolated years red, unfilled years yellow.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Terminal,
};

use crate::domain::{Observation, Series};
use crate::error::AppError;
use crate::interp::{missing_years, observed_count};
use crate::plot::{ChartData, chart_title};
use crate::report::format_population;

mod plotters_chart;

use plotters_chart::PopulationChart;

/// Open the viewer and block until the user quits.
pub fn show(series: &Series, title: &str) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Could not open the viewer: {e}")))?;

    let mut viewer = Viewer::new(series, title);
    viewer.event_loop(&mut terminal)
}

/// Leaves raw mode and the alternate screen when dropped.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct Viewer<'a> {
    series: &'a Series,
    title: String,
    chart: ChartData,
    selected: usize,
}

impl<'a> Viewer<'a> {
    fn new(series: &'a Series, title: &str) -> Self {
        Self {
            series,
            title: chart_title(title, series),
            chart: ChartData::from_series(series),
            selected: 0,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Viewer draw failed: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the viewer should close.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        let last = self.series.len().saturating_sub(1);
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = last,
            _ => {}
        }
        false
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let missing = missing_years(self.series);
        let unfilled = self
            .series
            .iter()
            .filter(|o| !o.observed && o.value.is_none())
            .count();

        let lines = vec![
            Line::from(Span::styled(
                self.title.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "years: {} | known: {} | interpolated: {} | unfilled: {unfilled}",
                    self.series.len(),
                    observed_count(self.series),
                    missing.len() - unfilled,
                ),
                Style::default().fg(Color::Gray),
            )),
        ];

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(36)])
            .split(area);

        self.draw_chart(frame, chunks[0]);
        self.draw_table(frame, chunks[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Population").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        if self.chart.trend.is_empty() {
            let msg = Paragraph::new("No values to plot.").style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        }

        let widget = PopulationChart {
            data: &self.chart,
            fmt_x: fmt_axis_year,
            fmt_y: fmt_axis_population,
        };
        frame.render_widget(widget, inner);
    }

    fn draw_table(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = self.series.iter().map(table_row).collect();

        let list = List::new(items)
            .block(Block::default().title("Years").borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        if !self.series.is_empty() {
            state.select(Some(self.selected));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ scroll  Home/End jump  q/Esc quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled("o", Style::default().fg(Color::White)),
            Span::raw(" original  "),
            Span::styled("*", Style::default().fg(Color::Red)),
            Span::raw(" interpolated"),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn table_row(obs: &Observation) -> ListItem<'static> {
    let (marker, color) = match (obs.observed, obs.value) {
        (true, _) => ('o', Color::White),
        (false, Some(_)) => ('*', Color::Red),
        (false, None) => ('?', Color::Yellow),
    };
    ListItem::new(format!(
        "{marker} {:<6}{:>14}  {}",
        obs.year,
        format_population(obs.value),
        obs.kind().label()
    ))
    .style(Style::default().fg(color))
}

fn fmt_axis_year(v: f64) -> String {
    format!("{v:.0}")
}

fn fmt_axis_population(v: f64) -> String {
    crate::report::group_thousands(v.round() as i64)
}
