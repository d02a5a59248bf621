//! Ratatui-based terminal UI.
//!
//! One screen: sample fields and model toggles on top, the pasted data on the
//! left, the fitted chart on the right, the result and status lines below.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture, Event,
        KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Terminal,
};

use crate::app::session::Session;
use crate::config::Settings;
use crate::domain::ModelSelection;
use crate::error::AppError;
use crate::plot::{fraction_to_data, ChartData, X_DESC, Y_DESC};
use crate::report::{format_coordinates, plot_title};

mod plotters_chart;

use plotters_chart::RelaxationChart;

/// Start the TUI.
pub fn run(settings: Settings) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(settings);
    app.event_loop(&mut terminal)
}

/// Restores the terminal (raw mode, alternate screen, mouse capture,
/// bracketed paste) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste) {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, DisableMouseCapture, LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Compound,
    Concentration,
    Data,
    T1,
    T2,
}

impl Focus {
    const ORDER: [Focus; 5] = [Focus::Compound, Focus::Concentration, Focus::Data, Focus::T1, Focus::T2];

    fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Info,
    Notice,
    Error,
}

/// Where the plot was last drawn, for mapping mouse cells to data.
#[derive(Debug, Clone, Copy)]
struct PlotArea {
    rect: Rect,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

struct App {
    settings: Settings,
    compound: String,
    concentration: String,
    data: String,
    selection: ModelSelection,
    focus: Focus,
    session: Session,
    status: String,
    status_kind: StatusKind,
    hover: Option<(f64, f64)>,
    plot_area: Option<PlotArea>,
}

impl App {
    fn new(settings: Settings) -> Self {
        Self {
            settings,
            compound: String::new(),
            concentration: String::new(),
            data: String::new(),
            selection: ModelSelection::default(),
            focus: Focus::Data,
            session: Session::new(),
            status: "Paste tab-separated data (time in ms, then readings) and press F5.".to_string(),
            status_kind: StatusKind::Info,
            hover: None,
            plot_area: None,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
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
                    if self.handle_key(key) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Paste(text) => {
                    self.handle_paste(&text);
                    needs_redraw = true;
                }
                Event::Mouse(mouse) => {
                    needs_redraw = self.handle_mouse(mouse);
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('q') if ctrl => return true,
            KeyCode::F(5) => self.solve(),
            KeyCode::Char('r') if ctrl => self.solve(),
            KeyCode::Char('n') if ctrl => self.reset(),
            KeyCode::Char('s') if ctrl => self.save_png(),
            KeyCode::Char('y') if ctrl => self.copy_to_clipboard(),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            _ if ctrl => {}
            code => self.edit_focused(code),
        }
        false
    }

    fn edit_focused(&mut self, code: KeyCode) {
        match self.focus {
            Focus::T1 | Focus::T2 => {
                if matches!(code, KeyCode::Char(' ') | KeyCode::Enter) {
                    if self.focus == Focus::T1 {
                        self.selection.t1 = !self.selection.t1;
                    } else {
                        self.selection.t2 = !self.selection.t2;
                    }
                }
            }
            Focus::Compound | Focus::Concentration => {
                let field = if self.focus == Focus::Compound {
                    &mut self.compound
                } else {
                    &mut self.concentration
                };
                match code {
                    KeyCode::Char(c) => field.push(c),
                    KeyCode::Backspace => {
                        field.pop();
                    }
                    KeyCode::Enter => self.focus = self.focus.next(),
                    _ => {}
                }
            }
            Focus::Data => {
                match code {
                    KeyCode::Char(c) => self.data.push(c),
                    KeyCode::Enter => self.data.push('\n'),
                    KeyCode::Backspace => {
                        self.data.pop();
                    }
                    _ => return,
                }
                self.session.clear_selection();
            }
        }
    }

    fn handle_paste(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        match self.focus {
            Focus::Compound => self.compound.push_str(text.lines().next().unwrap_or("")),
            Focus::Concentration => self.concentration.push_str(text.lines().next().unwrap_or("")),
            Focus::Data | Focus::T1 | Focus::T2 => {
                self.focus = Focus::Data;
                self.data.push_str(&text);
                self.session.clear_selection();
                let rows = text.lines().filter(|l| !l.trim().is_empty()).count();
                self.set_status(StatusKind::Info, format!("Pasted {rows} rows."));
            }
        }
    }

    /// Returns `true` when something visible changed.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        let pos = self.plot_area.and_then(|area| {
            let (fx, fy) = cell_fraction(area.rect, mouse.column, mouse.row)?;
            fraction_to_data(fx, fy, area.x_bounds, area.y_bounds)
        });

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some((x, y)) = pos else {
                    return false;
                };
                if self.session.select_nearest(x, y).is_some() {
                    if let Some(line) = self.session.selected_line() {
                        self.set_status(StatusKind::Info, format!("Selected line {}.", line + 1));
                    }
                }
                true
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let changed = pos != self.hover;
                self.hover = pos;
                changed
            }
            _ => false,
        }
    }

    fn solve(&mut self) {
        match self.session.solve(&self.data, self.selection) {
            Ok(outcome) => {
                let (kind, msg) = match &outcome.notice {
                    Some(notice) => (StatusKind::Notice, notice.clone()),
                    None => (
                        StatusKind::Info,
                        format!("Fitted {} points.", outcome.series.len()),
                    ),
                };
                self.set_status(kind, msg);
            }
            Err(err) => {
                log::warn!("solve failed: {err}");
                self.set_status(StatusKind::Error, err.to_string());
            }
        }
    }

    fn reset(&mut self) {
        self.compound.clear();
        self.concentration.clear();
        self.data.clear();
        self.selection = ModelSelection::default();
        self.focus = Focus::Data;
        self.session.reset();
        self.hover = None;
        self.plot_area = None;
        self.set_status(StatusKind::Info, "New analysis.".to_string());
    }

    fn chart_data(&self) -> Option<ChartData> {
        let outcome = self.session.outcome()?;
        Some(
            ChartData::from_outcome(outcome, self.session.selected())
                .with_title(plot_title(&self.compound, &self.concentration)),
        )
    }

    fn save_png(&mut self) {
        let Some(chart) = self.chart_data() else {
            self.set_status(StatusKind::Error, "Nothing to export yet.".to_string());
            return;
        };
        let Some(model) = self.session.outcome().map(|o| o.fit.model) else {
            return;
        };
        let path = crate::io::export::default_export_path(&self.settings.export_dir, model, chrono::Local::now());
        match crate::io::export::save_png(&path, &chart, self.settings.image_width, self.settings.image_height) {
            Ok(()) => self.set_status(StatusKind::Info, format!("Saved {}", path.display())),
            Err(err) => self.set_status(StatusKind::Error, err.to_string()),
        }
    }

    fn copy_to_clipboard(&mut self) {
        let Some(chart) = self.chart_data() else {
            self.set_status(StatusKind::Error, "Nothing to copy yet.".to_string());
            return;
        };
        match crate::io::export::copy_to_clipboard(&chart, self.settings.image_width, self.settings.image_height) {
            Ok(()) => self.set_status(StatusKind::Info, "Chart copied to clipboard.".to_string()),
            Err(err) => self.set_status(StatusKind::Error, err.to_string()),
        }
    }

    fn set_status(&mut self, kind: StatusKind, msg: String) {
        self.status_kind = kind;
        self.status = msg;
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(4),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_result(frame, chunks[2]);
        self.draw_footer(frame, chunks[3]);
    }

    fn focus_style(&self, focus: Focus) -> Style {
        if self.focus == focus {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default()
        }
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let checkbox = |on: bool| if on { "[x]" } else { "[ ]" };
        let line = Line::from(vec![
            Span::styled("Compound: ", Style::default().fg(Color::Gray)),
            Span::styled(format!("{:<16}", self.compound), self.focus_style(Focus::Compound)),
            Span::raw("  "),
            Span::styled("[c]: ", Style::default().fg(Color::Gray)),
            Span::styled(format!("{:<10}", self.concentration), self.focus_style(Focus::Concentration)),
            Span::raw("  "),
            Span::styled(format!("{} T1", checkbox(self.selection.t1)), self.focus_style(Focus::T1)),
            Span::raw("  "),
            Span::styled(format!("{} T2", checkbox(self.selection.t2)), self.focus_style(Focus::T2)),
        ]);

        let p = Paragraph::new(line).block(
            Block::default()
                .title(Span::styled("t1t2", Style::default().fg(Color::Cyan)))
                .borders(Borders::ALL),
        );
        frame.render_widget(p, area);
    }

    fn draw_body(&mut self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(32), Constraint::Min(0)])
            .split(area);

        self.draw_data(frame, chunks[0]);
        self.draw_chart(frame, chunks[1]);
    }

    fn draw_data(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let border = if self.focus == Focus::Data {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default().title("Data").borders(Borders::ALL).border_style(border);
        let inner = block.inner(area);

        let highlight = self.session.selected_line();
        let lines: Vec<Line> = self
            .data
            .split('\n')
            .enumerate()
            .map(|(i, text)| {
                let display = text.replace('\t', "  ");
                if Some(i) == highlight {
                    Line::from(Span::styled(
                        display,
                        Style::default().fg(Color::Black).bg(Color::Red).add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(display)
                }
            })
            .collect();

        let offset = scroll_offset(lines.len(), inner.height as usize, highlight);
        let p = Paragraph::new(Text::from(lines))
            .block(block)
            .scroll((offset as u16, 0));
        frame.render_widget(p, area);
    }

    fn draw_chart(&mut self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut block = Block::default().title("Relaxation").borders(Borders::ALL);
        let chart = self.chart_data();
        if let Some(chart) = &chart {
            block = block.title_bottom(Line::from(chart.legend.clone()).right_aligned());
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(chart) = chart else {
            self.plot_area = None;
            let msg = Paragraph::new("No fit yet.")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);
        let title = Paragraph::new(chart.title.clone())
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(title, rows[0]);

        let (chart_rect, insets) = chart_layout(rows[1]);
        frame.render_widget(RelaxationChart { chart: &chart }, chart_rect);
        self.plot_area = Some(PlotArea {
            rect: chart_rect,
            x_bounds: chart.x_bounds,
            y_bounds: chart.y_bounds,
        });
        if let Some(insets) = insets {
            draw_axis_ticks(frame, rows[1], chart_rect, insets, chart.x_bounds, chart.y_bounds);
        }
    }

    fn draw_result(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines = Vec::new();
        match self.session.outcome() {
            Some(outcome) => {
                lines.push(Line::from(Span::styled(
                    outcome.result_text.clone(),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(vec![
                    Span::styled(outcome.details.clone(), Style::default().fg(Color::Gray)),
                    Span::raw("  |  "),
                    Span::raw(format_coordinates(self.hover)),
                ]));
            }
            None => {
                lines.push(Line::from("-"));
                lines.push(Line::from(format_coordinates(self.hover)));
            }
        }

        let p = Paragraph::new(Text::from(lines)).block(Block::default().title("Result").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "F5 solve  ^N new  ^S save png  ^Y copy  Tab focus  Space toggle  Esc quit";
        let color = match self.status_kind {
            StatusKind::Info => Color::Gray,
            StatusKind::Notice => Color::Yellow,
            StatusKind::Error => Color::Red,
        };
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(color)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Relative position of a cell's centre inside `rect`, or `None` outside it.
fn cell_fraction(rect: Rect, column: u16, row: u16) -> Option<(f64, f64)> {
    if rect.width == 0 || rect.height == 0 {
        return None;
    }
    if column < rect.x || row < rect.y || column >= rect.x + rect.width || row >= rect.y + rect.height {
        return None;
    }
    let fx = (f64::from(column - rect.x) + 0.5) / f64::from(rect.width);
    let fy = (f64::from(row - rect.y) + 0.5) / f64::from(rect.height);
    Some((fx, fy))
}

/// First visible line of the data pane.
///
/// Keeps the highlighted line in view when there is one, otherwise follows the
/// end of the text.
fn scroll_offset(total: usize, visible: usize, highlight: Option<usize>) -> usize {
    if visible == 0 || total <= visible {
        return 0;
    }
    let max = total - visible;
    match highlight {
        Some(line) => line.saturating_sub(visible / 2).min(max),
        None => max,
    }
}

fn fmt_axis_x(v: f64) -> String {
    format!("{v:.0}")
}

fn fmt_axis_y(v: f64) -> String {
    if v.abs() >= 100.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

#[derive(Debug, Clone, Copy)]
struct AxisInsets {
    left: u16,
    right: u16,
    top: u16,
    bottom: u16,
}

fn chart_layout(inner: Rect) -> (Rect, Option<AxisInsets>) {
    let insets = AxisInsets {
        left: 10,
        right: 2,
        top: 1,
        bottom: 2,
    };

    if inner.width <= insets.left + insets.right + 10
        || inner.height <= insets.top + insets.bottom + 5
    {
        return (inner, None);
    }

    let rect = Rect {
        x: inner.x + insets.left,
        y: inner.y + insets.top,
        width: inner.width - insets.left - insets.right,
        height: inner.height - insets.top - insets.bottom,
    };

    (rect, Some(insets))
}

fn draw_axis_ticks(
    frame: &mut ratatui::Frame<'_>,
    inner: Rect,
    chart: Rect,
    insets: AxisInsets,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
) {
    let ticks = 5usize;
    let style = Style::default().fg(Color::Gray);

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let x_val = x_bounds[0] + u * (x_bounds[1] - x_bounds[0]);
        let x = chart.x + ((chart.width - 1) as f64 * u).round() as u16;
        let label = fmt_axis_x(x_val);
        let label_len = label.len() as u16;
        let start = x.saturating_sub(label_len / 2);
        let y = chart.y + chart.height;
        if y >= inner.y + inner.height - 1 {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let y_val = y_bounds[0] + u * (y_bounds[1] - y_bounds[0]);
        let y = chart.y + (chart.height - 1) - ((chart.height - 1) as f64 * u).round() as u16;
        let label = fmt_axis_y(y_val);
        let label_len = label.len() as u16;
        let x = inner.x + insets.left.saturating_sub(1);
        let start = x.saturating_sub(label_len);
        if start < inner.x {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    let x_label = Paragraph::new(X_DESC)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    let x_rect = Rect {
        x: chart.x,
        y: chart.y + chart.height + 1,
        width: chart.width,
        height: 1,
    };
    if x_rect.y < inner.y + inner.height {
        frame.render_widget(x_label, x_rect);
    }

    let y_label = Paragraph::new(Y_DESC)
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let y_rect = Rect {
        x: inner.x,
        y: inner.y,
        width: insets.left.saturating_sub(1),
        height: 1,
    };
    frame.render_widget(y_label, y_rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_fraction_uses_cell_centres() {
        let rect = Rect::new(10, 5, 4, 2);
        assert_eq!(cell_fraction(rect, 10, 5), Some((0.125, 0.25)));
        assert_eq!(cell_fraction(rect, 13, 6), Some((0.875, 0.75)));
        assert_eq!(cell_fraction(rect, 14, 5), None);
        assert_eq!(cell_fraction(rect, 9, 5), None);
    }

    #[test]
    fn scroll_follows_tail_or_highlight() {
        assert_eq!(scroll_offset(5, 10, None), 0);
        assert_eq!(scroll_offset(30, 10, None), 20);
        assert_eq!(scroll_offset(30, 10, Some(3)), 0);
        assert_eq!(scroll_offset(30, 10, Some(15)), 10);
        assert_eq!(scroll_offset(30, 10, Some(29)), 20);
    }

    #[test]
    fn focus_cycles_both_ways() {
        assert_eq!(Focus::T2.next(), Focus::Compound);
        assert_eq!(Focus::Compound.prev(), Focus::T2);
        assert_eq!(Focus::Data.next(), Focus::T1);
    }

    #[test]
    fn models_start_unticked() {
        let mut app = App::new(Settings::default());
        assert_eq!(app.selection, ModelSelection::default());

        app.focus = Focus::T1;
        app.handle_key(KeyEvent::from(KeyCode::Char(' ')));
        assert!(app.selection.t1);
        app.reset();
        assert_eq!(app.selection, ModelSelection::default());
    }

    #[test]
    fn axes_are_labelled() {
        let mut terminal = Terminal::new(ratatui::backend::TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| {
                let inner = f.area();
                let (chart, insets) = chart_layout(inner);
                draw_axis_ticks(f, inner, chart, insets.unwrap(), [0.0, 1000.0], [0.0, 10.0]);
            })
            .unwrap();

        let buf = terminal.backend().buffer();
        let row = |y: u16| (0..60).map(|x| buf[(x, y)].symbol()).collect::<String>();
        assert!(row(0).starts_with("Magnitude"), "{:?}", row(0));
        assert!(row(19).contains("in ms"), "{:?}", row(19));
    }

    #[test]
    fn toggles_and_typing_follow_focus() {
        let mut app = App::new(Settings::default());
        app.focus = Focus::T2;
        app.handle_key(KeyEvent::from(KeyCode::Char(' ')));
        assert!(app.selection.t2);

        app.focus = Focus::Compound;
        app.handle_key(KeyEvent::from(KeyCode::Char(' ')));
        app.handle_key(KeyEvent::from(KeyCode::Char('x')));
        assert_eq!(app.compound, " x");
        assert!(app.handle_key(KeyEvent::from(KeyCode::Esc)));
    }

    #[test]
    fn failed_solve_reports_on_status_line() {
        let mut app = App::new(Settings::default());
        app.handle_paste("0\t10\r\n100\t8\r\n");
        assert_eq!(app.data, "0\t10\n100\t8\n");

        app.selection = ModelSelection::default();
        app.solve();
        assert_eq!(app.status_kind, StatusKind::Error);
        assert_eq!(app.status, "Please select T1 or T2.");
        assert!(app.session.outcome().is_none());
    }
}
