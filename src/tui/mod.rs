//! Ratatui-based terminal UI.
//!
//! Left: PDFs discovered under the working directory. Right: the four summary
//! panels for the last processed document.

use std::io;
use std::path::PathBuf;
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
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::pipeline::{RunOutput, run_upload};
use crate::cli::picker::{discover_pdf_files, pretty_path};
use crate::config::Settings;
use crate::domain::{Bucket, Summary};
use crate::error::{AppError, EXIT_USAGE};
use crate::report::{EMPTY_BUCKET, NO_PROJECTS};
use crate::upload::ExtractionClient;

const STATUS_PROCESSING: &str = "Processing...";
const STATUS_SUCCESS: &str = "PDF processed successfully!";
const STATUS_FAILURE: &str = "Error processing PDF. Please try again.";
const STATUS_NOT_PDF: &str = "Please upload a PDF file";

/// Start the TUI.
pub fn run(settings: &Settings) -> Result<(), AppError> {
    let client = ExtractionClient::from_settings(settings)?;
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::remote(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(client);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::remote(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::remote(format!("Failed to enter alternate screen: {e}")));
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
    client: ExtractionClient,
    files: Vec<PathBuf>,
    selected: usize,
    /// Set by Enter; the upload runs after the "Processing..." frame is drawn.
    pending_upload: bool,
    status: String,
    status_ok: bool,
    run: Option<RunOutput>,
}

impl App {
    fn new(client: ExtractionClient) -> Self {
        let mut app = Self {
            client,
            files: Vec::new(),
            selected: 0,
            pending_upload: false,
            status: String::new(),
            status_ok: true,
            run: None,
        };
        app.rescan();
        app
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::remote(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if self.pending_upload {
                self.pending_upload = false;
                self.upload_selected();
                needs_redraw = true;
                continue;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::remote(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::remote(format!("Event read error: {e}")))? {
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

    /// Returns `true` when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < self.files.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => {
                if self.files.is_empty() {
                    self.set_status("Please select a PDF file first", false);
                } else {
                    self.pending_upload = true;
                    self.set_status(STATUS_PROCESSING, true);
                }
            }
            KeyCode::Char('r') => self.rescan(),
            KeyCode::Char('e') => self.export(),
            _ => {}
        }
        false
    }

    fn set_status(&mut self, message: impl Into<String>, ok: bool) {
        self.status = message.into();
        self.status_ok = ok;
    }

    fn rescan(&mut self) {
        self.files = discover_pdf_files();
        self.selected = self.selected.min(self.files.len().saturating_sub(1));
        if self.files.is_empty() {
            self.set_status("No .pdf files found under the current directory.", false);
        } else {
            self.set_status(format!("Found {} PDF file(s).", self.files.len()), true);
        }
    }

    fn upload_selected(&mut self) {
        let Some(path) = self.files.get(self.selected).cloned() else {
            return;
        };
        match run_upload(&self.client, &path) {
            Ok(run) => {
                self.run = Some(run);
                self.set_status(STATUS_SUCCESS, true);
            }
            Err(err) => self.set_status(failure_status(&err), false),
        }
    }

    fn export(&mut self) {
        let Some(run) = &self.run else {
            self.set_status("Nothing to export yet.", false);
            return;
        };
        let path = PathBuf::from(format!(
            "autoform_summary_{}.json",
            Local::now().format("%Y%m%d_%H%M%S")
        ));
        match crate::io::write_summary_json(&path, &run.to_summary_file()) {
            Ok(()) => self.set_status(format!("Wrote {}", path.display()), true),
            Err(err) => self.set_status(format!("Export failed: {err}"), false),
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(frame.area());

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let source = self
            .run
            .as_ref()
            .map(|r| r.meta.source.clone())
            .unwrap_or_else(|| "-".to_string());
        let timing = self
            .run
            .as_ref()
            .and_then(|r| r.meta.processing_time)
            .map(|s| format!("{s:.2}s"))
            .unwrap_or_else(|| "-".to_string());

        let lines = vec![
            Line::from(vec![
                Span::styled("autoform", Style::default().fg(Color::Cyan)),
                Span::raw(" - résumé field summary"),
            ]),
            Line::from(Span::styled(
                format!("service: {} | document: {source} | processing: {timing}", self.client.api_url()),
                Style::default().fg(Color::Gray),
            )),
        ];

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(area);

        self.draw_files(frame, cols[0]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(cols[1]);
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        let summary = self.run.as_ref().map(|r| &r.summary);
        let panels = [top[0], top[1], bottom[0], bottom[1]];
        for (bucket, rect) in Bucket::ALL.into_iter().zip(panels) {
            let block = Block::default().title(bucket.display_name()).borders(Borders::ALL);
            let text = match summary {
                Some(summary) => bucket_text(summary, bucket),
                None => Text::from(Span::styled("Waiting for a document...", Style::default().fg(Color::Yellow))),
            };
            let p = Paragraph::new(text).block(block).wrap(Wrap { trim: false });
            frame.render_widget(p, rect);
        }
    }

    fn draw_files(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = self
            .files
            .iter()
            .map(|p| ListItem::new(pretty_path(p)))
            .collect();

        let list = List::new(items)
            .block(Block::default().title("PDF files").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        if !self.files.is_empty() {
            state.select(Some(self.selected));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  Enter process  r rescan  e export  q quit";
        let status_color = if self.status_ok { Color::Green } else { Color::Red };
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(status_color)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Panel text for one bucket, including the empty placeholders.
fn bucket_text(summary: &Summary, bucket: Bucket) -> Text<'static> {
    let label_style = Style::default().add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::Gray);

    if bucket == Bucket::Projects {
        if summary.projects.is_empty() {
            return Text::from(Span::styled(NO_PROJECTS, dim));
        }
        let mut lines = Vec::new();
        for p in &summary.projects {
            lines.push(Line::from(Span::styled(p.title.clone(), label_style)));
            if let Some(desc) = p.description.as_deref().filter(|d| !d.is_empty()) {
                lines.push(Line::from(Span::styled(format!("  {desc}"), dim)));
            }
        }
        return Text::from(lines);
    }

    let items = summary.items(bucket);
    if items.is_empty() {
        return Text::from(Span::styled(EMPTY_BUCKET, dim));
    }
    let lines: Vec<Line> = items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled(format!("{}: ", item.label), label_style),
                Span::raw(item.value.clone()),
            ])
        })
        .collect();
    Text::from(lines)
}

/// Status line for a failed upload. Rejected input gets its own message.
fn failure_status(err: &AppError) -> String {
    if err.exit_code() == EXIT_USAGE {
        format!("{STATUS_NOT_PDF} ({err})")
    } else {
        format!("{STATUS_FAILURE} ({err})")
    }
}
