//! Terminal setup, the event loop and key handling.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mowajih::{NextOutcome, RecommendationService, ResponseKind, Route, Session};
use ratatui::{Terminal, prelude::CrosstermBackend, style::Color};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::debug;

use crate::ui::draw_ui;

/// Error type for the Ratatui frontend.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
    pub disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
            disabled: Color::DarkGray,
        }
    }
}

/// Ratatui-based questionnaire frontend.
///
/// Renders the session's active route inside a layout with a navigation
/// sidebar, and forwards key presses to the session.
#[derive(Debug, Clone)]
pub struct RatatuiWizard {
    /// Title shown at the top of the main pane.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for RatatuiWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiWizard {
    /// Create a new frontend with default settings.
    pub fn new() -> Self {
        Self {
            title: "Mowajih".to_string(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown at the top of the main pane.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Run the UI until the user quits.
    ///
    /// The terminal is restored even when the event loop fails.
    pub async fn run<S: RecommendationService>(
        &self,
        session: &mut Session<S>,
    ) -> Result<(), RatatuiError> {
        let mut terminal = self.setup_terminal()?;
        let result = self.event_loop(&mut terminal, session).await;
        self.restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop<S: RecommendationService>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        session: &mut Session<S>,
    ) -> Result<(), RatatuiError> {
        let mut ui = UiState::default();
        loop {
            terminal.draw(|frame| draw_ui(frame, &ui, session, &self.theme, &self.title))?;

            // Blocks the runtime thread; this loop is the only task running.
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match ui.handle_key(session, key.code) {
                KeyAction::Continue => {}
                KeyAction::Quit => return Ok(()),
                KeyAction::Next => {
                    ui.busy = true;
                    terminal.draw(|frame| draw_ui(frame, &ui, session, &self.theme, &self.title))?;
                    let outcome = session.next().await;
                    ui.busy = false;
                    ui.after_next(&outcome);
                }
            }
        }
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Keep reading keys.
    Continue,
    /// Run the submit/next step.
    Next,
    /// Leave the UI.
    Quit,
}

/// Widget state that is not part of the session.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Text being typed into a text or number field, as shown.
    pub(crate) draft: String,
    /// Cursor position in the draft, in chars.
    pub(crate) cursor_pos: usize,
    /// Dropdown selection. 0 is the "Select an option" placeholder.
    pub(crate) selected_option: usize,
    /// Summary scroll offset, in lines.
    pub(crate) scroll: u16,
    /// Whether a submission is in flight.
    pub(crate) busy: bool,
}

impl UiState {
    /// Apply a key press to the session.
    pub fn handle_key<S: RecommendationService>(
        &mut self,
        session: &mut Session<S>,
        key: KeyCode,
    ) -> KeyAction {
        match key {
            KeyCode::Esc => return KeyAction::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                session.navigate(session.route().toggled());
                return KeyAction::Continue;
            }
            _ => {}
        }

        match session.route() {
            Route::Summary => self.handle_summary_key(session, key),
            Route::Questionnaire => self.handle_question_key(session, key),
        }
    }

    fn handle_summary_key<S: RecommendationService>(
        &mut self,
        session: &mut Session<S>,
        key: KeyCode,
    ) -> KeyAction {
        match key {
            KeyCode::Char('r') => {
                debug!("restart requested");
                session.restart();
                self.reset_input();
            }
            KeyCode::Char('q') => return KeyAction::Quit,
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            _ => {}
        }
        KeyAction::Continue
    }

    fn handle_question_key<S: RecommendationService>(
        &mut self,
        session: &mut Session<S>,
        key: KeyCode,
    ) -> KeyAction {
        let Some(question) = session.store().current_question() else {
            return KeyAction::Continue;
        };
        if key == KeyCode::Enter {
            return KeyAction::Next;
        }

        match question.kind() {
            ResponseKind::Dropdown => {
                let count = question.options().len();
                let selected = match key {
                    KeyCode::Up => self.selected_option.saturating_sub(1),
                    KeyCode::Down => (self.selected_option + 1).min(count),
                    _ => return KeyAction::Continue,
                };
                let value = match selected {
                    0 => String::new(),
                    i => question.options()[i - 1].clone(),
                };
                self.selected_option = selected;
                session.set_response(value);
            }
            kind => {
                let mut draft = std::mem::take(&mut self.draft);
                let changed = self.edit(&mut draft, kind, key);
                // Number fields report nothing until the draft parses.
                let value = if kind == ResponseKind::Number && !question.accepts(&draft) {
                    String::new()
                } else {
                    draft.clone()
                };
                self.draft = draft;
                if changed {
                    session.set_response(value);
                }
            }
        }
        KeyAction::Continue
    }

    /// Edit a text buffer. Returns whether the buffer changed.
    fn edit(&mut self, input: &mut String, kind: ResponseKind, key: KeyCode) -> bool {
        let len = input.chars().count();
        self.cursor_pos = self.cursor_pos.min(len);
        match key {
            KeyCode::Char(c) => {
                if kind == ResponseKind::Number && !is_number_char(c) {
                    return false;
                }
                input.insert(byte_offset(input, self.cursor_pos), c);
                self.cursor_pos += 1;
                true
            }
            KeyCode::Backspace if self.cursor_pos > 0 => {
                self.cursor_pos -= 1;
                input.remove(byte_offset(input, self.cursor_pos));
                true
            }
            KeyCode::Delete if self.cursor_pos < len => {
                input.remove(byte_offset(input, self.cursor_pos));
                true
            }
            KeyCode::Left => {
                self.cursor_pos = self.cursor_pos.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor_pos = (self.cursor_pos + 1).min(len);
                false
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                false
            }
            KeyCode::End => {
                self.cursor_pos = len;
                false
            }
            _ => false,
        }
    }

    /// Resynchronise after a submit/next step.
    pub fn after_next(&mut self, outcome: &NextOutcome) {
        if *outcome != NextOutcome::Ignored {
            self.reset_input();
        }
    }

    fn reset_input(&mut self) {
        self.draft.clear();
        self.cursor_pos = 0;
        self.selected_option = 0;
        self.scroll = 0;
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(offset, _)| offset)
}
