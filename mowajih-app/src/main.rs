use std::path::Path;

use anyhow::Context;
use clap::Parser;
use mowajih::{HttpRecommendationService, QuestionBank, Session};
use mowajih_wizard_dialoguer::{DialoguerError, DialoguerWizard};
use mowajih_wizard_ratatui::RatatuiWizard;
use tracing::info;

mod cli;
mod config;
mod logging;

use cli::Cli;
use config::{Frontend, Settings};

/// Question bank used when no `--questions` file is given.
const DEFAULT_QUESTIONS: &str = include_str!("../data/questions.json");

fn load_bank(path: Option<&Path>) -> anyhow::Result<QuestionBank> {
    match path {
        Some(path) => QuestionBank::from_path(path)
            .with_context(|| format!("failed to load questions from '{}'", path.display())),
        None => QuestionBank::from_json(DEFAULT_QUESTIONS).context("built-in question bank"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli)?;
    let _log_guard = logging::init(&settings)?;

    let bank = load_bank(settings.questions.as_deref())?;
    info!(
        endpoint = %settings.endpoint,
        frontend = ?settings.frontend,
        questions = bank.len(),
        "starting mowajih"
    );

    let service = HttpRecommendationService::new(&settings.endpoint);
    let mut session = Session::new(service).starting_at(settings.start_route());
    session.load_questions(bank.into_questions());

    match settings.frontend {
        Frontend::Tui => RatatuiWizard::new()
            .run(&mut session)
            .await
            .context("terminal UI failed")?,
        Frontend::Cli => match DialoguerWizard::new().run(&mut session).await {
            Err(DialoguerError::Cancelled) => info!("questionnaire cancelled"),
            result => result.context("prompt failed")?,
        },
    }

    info!(answers = session.store().answers().len(), "bye");
    Ok(())
}
