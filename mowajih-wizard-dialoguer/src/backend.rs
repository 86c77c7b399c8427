//! Dialoguer prompts driving a questionnaire session.

use dialoguer::{
    Confirm, FuzzySelect, Input, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use mowajih::{
    NextOutcome, Question, QuestionnaireView, RecommendationService, ResponseKind, Route, Session,
};
use thiserror::Error;
use tracing::debug;

/// Dropdowns with more options than this get a fuzzy search prompt.
const FUZZY_THRESHOLD: usize = 8;

/// Error type for the Dialoguer frontend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the questionnaire (e.g., pressed Ctrl+C).
    #[error("Questionnaire cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// There is nothing to ask.
    #[error("No questions loaded")]
    NoQuestions,
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn prompt_error(err: dialoguer::Error) -> DialoguerError {
    if is_cancelled(&err) {
        DialoguerError::Cancelled
    } else {
        DialoguerError::Dialoguer(err)
    }
}

/// Dialoguer frontend for interactive CLI prompts.
#[derive(Debug, Default, Clone)]
pub struct DialoguerWizard {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerWizard {
    /// Create a new frontend with the colorful theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a frontend with the plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    /// Walk the session until the user declines to restart.
    pub async fn run<S: RecommendationService>(
        &self,
        session: &mut Session<S>,
    ) -> Result<(), DialoguerError> {
        loop {
            match session.route() {
                Route::Questionnaire => {
                    let QuestionnaireView::Prompt {
                        progress: (current, total),
                        ..
                    } = session.questionnaire_view()
                    else {
                        println!("Loading...");
                        return Err(DialoguerError::NoQuestions);
                    };

                    if session.store().is_complete() {
                        if !self.confirm("Retry submitting your answers?", true)? {
                            return Ok(());
                        }
                    } else if let Some(question) = session.store().current_question().cloned() {
                        let value = self.ask(&question, current, total)?;
                        session.set_response(value);
                    }

                    let outcome = session.next().await;
                    debug!(?outcome, "step finished");
                    if outcome == NextOutcome::NotRecommended
                        && let Some(notice) = session.notice()
                    {
                        println!("{notice}");
                    }
                }
                Route::Summary => {
                    println!();
                    print!("{}", session.summary_view().render_text());
                    println!();
                    if !self.confirm("Restart the questionnaire?", false)? {
                        return Ok(());
                    }
                    session.restart();
                }
            }
        }
    }

    /// Ask one question and return the raw response.
    fn ask(
        &self,
        question: &Question,
        current: usize,
        total: usize,
    ) -> Result<String, DialoguerError> {
        let theme = self.theme();
        let prompt = format!("[{current}/{total}] {}", question.prompt());

        match question.kind() {
            ResponseKind::Text | ResponseKind::Number => {
                let error = if question.kind() == ResponseKind::Number {
                    "Please enter a number"
                } else {
                    "Please enter a response"
                };
                Input::<String>::with_theme(&*theme)
                    .with_prompt(prompt)
                    .validate_with(|input: &String| -> Result<(), &'static str> {
                        if question.accepts(input) {
                            Ok(())
                        } else {
                            Err(error)
                        }
                    })
                    .interact_text()
                    .map_err(prompt_error)
            }
            ResponseKind::Dropdown => {
                let options = question.options();
                let selection = if options.len() > FUZZY_THRESHOLD {
                    FuzzySelect::with_theme(&*theme)
                        .with_prompt(prompt)
                        .items(options)
                        .default(0)
                        .interact()
                } else {
                    Select::with_theme(&*theme)
                        .with_prompt(prompt)
                        .items(options)
                        .default(0)
                        .interact()
                };
                let idx = selection.map_err(prompt_error)?;
                Ok(options[idx].clone())
            }
        }
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, DialoguerError> {
        Confirm::with_theme(&*self.theme())
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }
}
