//! Ratatui-based dashboard.
//!
//! Sidebar: the indicator catalog with per-series fetch status. Main pane: the
//! selected indicator's chart. The active fetch round advances one series per
//! idle tick of the event loop, so the screen repaints between requests and
//! per-series failures surface on the status line without halting the round.

use std::io;
use std::time::Duration;

use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use crate::cli::TuiArgs;
use crate::data::FredClient;
use crate::domain::{Indicator, SeriesState, TimeRange};
use crate::error::AppError;
use crate::fetch::{FetchRound, SeriesStore};
use crate::render::{ChartView, build_chart_view};

mod plotters_chart;

use plotters_chart::SeriesChart;

/// Start the TUI.
pub fn run(args: TuiArgs) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(args)?;
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!("Failed to enter alternate screen: {e}")));
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

struct App {
    fred: FredClient,
    store: SeriesStore,
    round: Option<FetchRound>,
    selected: usize,
    range: TimeRange,
    status: String,
}

impl App {
    fn new(args: TuiArgs) -> Result<Self, AppError> {
        let fred = FredClient::from_env()?;
        let selected = Indicator::ALL
            .iter()
            .position(|i| *i == args.indicator)
            .unwrap_or(0);

        let mut app = Self {
            fred,
            store: SeriesStore::new(),
            round: None,
            selected,
            range: args.range,
            status: String::new(),
        };
        app.start_round();
        Ok(app)
    }

    /// Begin a fresh fetch round for the current time range.
    ///
    /// Any round still in flight goes stale: its remaining writes are
    /// discarded by the store's round tagging.
    fn start_round(&mut self) {
        let today = Local::now().date_naive();
        let round = FetchRound::begin(&mut self.store, self.range, today);
        self.status = format!(
            "Fetching {} indicators from {}...",
            Indicator::ALL.len(),
            round.start_date()
        );
        self.round = Some(round);
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))?
            {
                // Idle tick: advance the active round by one series.
                if self.step_round() {
                    needs_redraw = true;
                }
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
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

    /// Fetch one series of the active round. Returns whether state changed.
    fn step_round(&mut self) -> bool {
        let Some(round) = self.round.as_mut() else {
            return false;
        };
        let Some(outcome) = round.step(&self.fred, &mut self.store) else {
            self.round = None;
            return false;
        };
        let complete = round.is_complete();

        // Toast surface: last failure stays visible, progress otherwise.
        if let Some(error) = &outcome.error {
            self.status = format!(
                "Error loading {}: {error}",
                outcome.indicator.display_name()
            );
        } else if complete {
            self.status = "All indicators loaded.".to_string();
        } else {
            self.status = format!("Loaded {}.", outcome.indicator.display_name());
        }

        if complete {
            self.round = None;
        }
        true
    }

    /// Handle one key press; returns true to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            // Indicator selection only changes which state is rendered; it
            // never triggers a fetch.
            KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected + 1 < Indicator::ALL.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char('1') => self.set_range(TimeRange::OneYear),
            KeyCode::Char('5') => self.set_range(TimeRange::FiveYears),
            KeyCode::Char('a') => self.set_range(TimeRange::All),
            KeyCode::Left => self.set_range(prev_range(self.range)),
            KeyCode::Right => self.set_range(next_range(self.range)),
            KeyCode::Char('r') => self.start_round(),
            _ => {}
        }
        false
    }

    /// Switch the time range; a changed range re-fetches every indicator.
    fn set_range(&mut self, range: TimeRange) {
        if self.range == range {
            return;
        }
        self.range = range;
        self.start_round();
    }

    fn selected_indicator(&self) -> Indicator {
        Indicator::ALL[self.selected]
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("econ", Style::default().fg(Color::Cyan)),
            Span::raw(" — macroeconomic dashboard (FRED)"),
        ]));

        let progress = match &self.round {
            Some(round) => format!(
                "{}/{} loaded",
                Indicator::ALL.len() - round.remaining(),
                Indicator::ALL.len()
            ),
            None => "idle".to_string(),
        };
        lines.push(Line::from(Span::styled(
            format!(
                "range: {} | indicator: {} | fetch: {progress}",
                self.range.display_name(),
                self.selected_indicator().display_name(),
            ),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(0)])
            .split(area);

        self.draw_sidebar(frame, chunks[0]);
        self.draw_chart(frame, chunks[1]);
    }

    fn draw_sidebar(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = Indicator::ALL
            .iter()
            .map(|indicator| {
                let state = self.store.get(*indicator);
                let (glyph, style) = status_glyph(state);
                ListItem::new(Line::from(vec![
                    Span::styled(glyph, style),
                    Span::raw(" "),
                    Span::raw(indicator.display_name()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title("Indicators").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let indicator = self.selected_indicator();
        let block = Block::default()
            .title(indicator.display_name())
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(state) = self.store.get(indicator) else {
            let msg = Paragraph::new("Waiting for data...")
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        };

        match build_chart_view(indicator, state) {
            ChartView::Loading => {
                let msg = Paragraph::new("Loading...")
                    .style(Style::default().fg(Color::Yellow));
                frame.render_widget(msg, inner);
            }
            ChartView::Error(error) => {
                let msg = Paragraph::new(error)
                    .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
                frame.render_widget(msg, inner);
            }
            ChartView::Chart(chart) => {
                frame.render_widget(SeriesChart { chart: &chart }, inner);
            }
        }
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ indicator  ←/→ range  1/5/a range  r refresh  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn status_glyph(state: Option<&SeriesState>) -> (&'static str, Style) {
    match state {
        Some(s) if s.is_loading => ("…", Style::default().fg(Color::Yellow)),
        Some(s) if s.error.is_some() => ("✗", Style::default().fg(Color::Red)),
        Some(_) => ("✓", Style::default().fg(Color::Green)),
        None => (" ", Style::default()),
    }
}

fn next_range(cur: TimeRange) -> TimeRange {
    match cur {
        TimeRange::OneYear => TimeRange::FiveYears,
        TimeRange::FiveYears => TimeRange::All,
        TimeRange::All => TimeRange::OneYear,
    }
}

fn prev_range(cur: TimeRange) -> TimeRange {
    match cur {
        TimeRange::OneYear => TimeRange::All,
        TimeRange::FiveYears => TimeRange::OneYear,
        TimeRange::All => TimeRange::FiveYears,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_cycle_is_a_loop() {
        let mut r = TimeRange::OneYear;
        for _ in 0..3 {
            r = next_range(r);
        }
        assert_eq!(r, TimeRange::OneYear);
        assert_eq!(prev_range(next_range(TimeRange::FiveYears)), TimeRange::FiveYears);
    }

    #[test]
    fn status_glyph_tracks_state() {
        let (g, _) = status_glyph(Some(&SeriesState::loading()));
        assert_eq!(g, "…");
        let (g, _) = status_glyph(Some(&SeriesState::failed("x")));
        assert_eq!(g, "✗");
        let d = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let ready = SeriesState::ready(vec![crate::domain::Observation::new(d, "3.5")]);
        let (g, _) = status_glyph(Some(&ready));
        assert_eq!(g, "✓");
        let (g, _) = status_glyph(None);
        assert_eq!(g, " ");
    }
}
