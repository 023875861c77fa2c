use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};
use serde::Serialize;
use std::io;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};
use unicode_width::UnicodeWidthStr;

use venture_client::EvaluatorClient;
use venture_common::EvaluatorConfig;
use venture_protocol::{EvaluateRequest, Evaluation};

use crate::app_event::{AppEvent, AppEventSender};
use crate::widgets::{
    debug_panel::DebugPanel,
    error_banner::ErrorBanner,
    field::{hscroll, FieldWidget},
    report::AssessmentReport,
    status_bar::StatusBar,
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const HINTS: &str = "Tab switch / Enter evaluate / Esc dismiss / F2 debug / Ctrl+Q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Idea,
    Location,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Idea => Focus::Location,
            Focus::Location => Focus::Idea,
        }
    }
}

/// Transient state of one evaluator session. Nothing here survives the run.
pub struct FormApp {
    running: bool,
    focus: Focus,
    business_idea: String,
    location: String,
    in_flight: bool,
    // Inputs as last submitted, kept so corrections compare against what the
    // server actually saw rather than whatever is in the fields now.
    submitted: Option<EvaluateRequest>,
    submitted_at: Option<DateTime<Local>>,
    result: Option<Evaluation>,
    error: Option<String>,
    show_debug: bool,
    tick: usize,
    endpoint: String,
    app_event_tx: AppEventSender,
}

#[derive(Serialize)]
struct DebugSnapshot<'a> {
    business_idea: &'a str,
    location: &'a str,
    loading: bool,
    has_result: bool,
    error: Option<&'a str>,
    endpoint: &'a str,
}

impl FormApp {
    fn new(endpoint: String, app_event_tx: AppEventSender) -> Self {
        Self {
            running: true,
            focus: Focus::Idea,
            business_idea: String::new(),
            location: String::new(),
            in_flight: false,
            submitted: None,
            submitted_at: None,
            result: None,
            error: None,
            show_debug: false,
            tick: 0,
            endpoint,
            app_event_tx,
        }
    }

    fn events(&self) -> AppEventSender {
        self.app_event_tx.clone()
    }

    fn active_field_mut(&mut self) -> &mut String {
        match self.focus {
            Focus::Idea => &mut self.business_idea,
            Focus::Location => &mut self.location,
        }
    }

    fn active_field(&self) -> &str {
        match self.focus {
            Focus::Idea => &self.business_idea,
            Focus::Location => &self.location,
        }
    }

    /// Validate and start one submission. Returns the request to dispatch, or
    /// `None` when a request is already outstanding or a field is empty.
    fn submit(&mut self) -> Option<EvaluateRequest> {
        if self.in_flight {
            return None;
        }
        if self.business_idea.trim().is_empty() || self.location.trim().is_empty() {
            self.error =
                Some("Enter both a business idea and a location before submitting.".to_string());
            return None;
        }

        self.error = None;
        self.result = None;
        self.in_flight = true;
        self.submitted_at = Some(Local::now());

        let request = EvaluateRequest {
            business_idea: self.business_idea.clone(),
            location: self.location.clone(),
        };
        self.submitted = Some(request.clone());
        Some(request)
    }

    fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Evaluated(outcome) => {
                self.in_flight = false;
                match outcome {
                    Ok(evaluation) => {
                        self.result = Some(evaluation);
                        self.error = None;
                    }
                    Err(err) => {
                        self.error = Some(err.to_string());
                    }
                }
            }
        }
    }

    /// Map one key press onto the app state. Returns a request when the key
    /// triggered a submission.
    fn apply_key(&mut self, key: KeyEvent) -> Option<EvaluateRequest> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.running = false;
                None
            }
            KeyCode::F(2) => {
                self.show_debug = !self.show_debug;
                None
            }
            KeyCode::Esc => {
                if self.show_debug {
                    self.show_debug = false;
                } else {
                    self.dismiss_error();
                }
                None
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.active_field_mut().pop();
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.active_field_mut().push(c);
                None
            }
            _ => None,
        }
    }

    fn mode_label(&self) -> &'static str {
        match self.focus {
            Focus::Idea => "IDEA",
            Focus::Location => "LOCATION",
        }
    }

    fn status_line(&self) -> String {
        if self.in_flight {
            let frame = SPINNER[self.tick % SPINNER.len()];
            match &self.submitted_at {
                Some(at) => format!("{frame} Evaluating... request sent at {}", at.format("%H:%M:%S")),
                None => format!("{frame} Evaluating..."),
            }
        } else if self.error.is_some() {
            "Error".to_string()
        } else if self.result.is_some() {
            "Done".to_string()
        } else {
            "Ready".to_string()
        }
    }

    fn debug_json(&self) -> String {
        let snapshot = DebugSnapshot {
            business_idea: &self.business_idea,
            location: &self.location,
            loading: self.in_flight,
            has_result: self.result.is_some(),
            error: self.error.as_deref(),
            endpoint: &self.endpoint,
        };
        serde_json::to_string_pretty(&snapshot).unwrap_or_default()
    }

    fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
            ])
            .split(frame.area());

        let title = Paragraph::new(Line::from(Span::styled(
            "Business Idea Evaluator",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, chunks[0]);

        frame.render_widget(
            FieldWidget::new(
                "Business idea",
                &self.business_idea,
                "What do you want to build?",
                self.focus == Focus::Idea,
            ),
            chunks[1],
        );
        frame.render_widget(
            FieldWidget::new(
                "Location",
                &self.location,
                "Where would it operate?",
                self.focus == Focus::Location,
            ),
            chunks[2],
        );

        frame.render_widget(
            StatusBar::new(self.mode_label(), &self.status_line(), HINTS),
            chunks[3],
        );

        if let Some(message) = &self.error {
            frame.render_widget(ErrorBanner::new(message), chunks[4]);
        } else if let (Some(evaluation), Some(submitted)) = (&self.result, &self.submitted) {
            frame.render_widget(AssessmentReport::new(evaluation, submitted), chunks[4]);
        } else {
            let hint = Paragraph::new("Fill in both fields and press Enter to evaluate.")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL).title("Assessment"));
            frame.render_widget(hint, chunks[4]);
        }

        if self.show_debug {
            let area = centered_rect(frame.area(), 70, 60);
            frame.render_widget(Clear, area);
            frame.render_widget(DebugPanel::new(&self.debug_json()), area);
        } else {
            let field_area = match self.focus {
                Focus::Idea => chunks[1],
                Focus::Location => chunks[2],
            };
            let value = self.active_field();
            let inner_width = field_area.width.saturating_sub(2);
            let scroll = hscroll(value, inner_width);
            let shown = (UnicodeWidthStr::width(value) as u16).saturating_sub(scroll);
            frame.set_cursor_position((field_area.x + 1 + shown, field_area.y + 1));
        }
    }
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

/// Spawn the evaluation request; the outcome comes back as an app event.
fn dispatch(client: &EvaluatorClient, request: EvaluateRequest, events: AppEventSender) {
    let client = client.clone();
    tokio::spawn(async move {
        let outcome = client.evaluate(&request).await;
        events.send(AppEvent::Evaluated(outcome));
    });
}

pub async fn run_interactive(config: EvaluatorConfig) -> Result<()> {
    let client = EvaluatorClient::new(config.endpoint);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = FormApp::new(client.endpoint().to_string(), AppEventSender::new(tx));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut tick_interval = interval(Duration::from_millis(120));

    while app.running {
        terminal.draw(|f| app.draw(f))?;

        tokio::select! {
            _ = tick_interval.tick() => {
                app.on_tick();
            }
            Some(event) = rx.recv() => {
                app.handle_app_event(event);
            }
            event_result = tokio::task::spawn_blocking(|| event::poll(Duration::from_millis(50))) => {
                if let Ok(Ok(true)) = event_result {
                    if let Ok(Event::Key(key)) = event::read() {
                        if let Some(request) = app.apply_key(key) {
                            dispatch(&client, request, app.events());
                        }
                    }
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
