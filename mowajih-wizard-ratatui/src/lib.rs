//! # mowajih-wizard-ratatui
//!
//! Ratatui frontend for mowajih.
//!
//! A full-screen terminal UI with a persistent layout: a navigation sidebar
//! linking the two routes, and a main pane showing either the current
//! question or the summary of answers and recommended programs.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mowajih::{HttpRecommendationService, QuestionBank, Session};
//! use mowajih_wizard_ratatui::RatatuiWizard;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut session = Session::new(HttpRecommendationService::default());
//!     session.load_questions(QuestionBank::from_path("questions.json")?.into_questions());
//!     RatatuiWizard::new().run(&mut session).await?;
//!     Ok(())
//! }
//! ```

mod backend;
mod ui;

pub use backend::{KeyAction, RatatuiError, RatatuiWizard, Theme, UiState};
