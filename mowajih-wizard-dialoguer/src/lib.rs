//! # mowajih-wizard-dialoguer
//!
//! Dialoguer frontend for mowajih.
//!
//! Questions are asked one per prompt in a classic CLI wizard style. After
//! the last answer the recommendations are printed as a plain-text summary,
//! and the user can restart.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mowajih::{HttpRecommendationService, QuestionBank, Session};
//! use mowajih_wizard_dialoguer::DialoguerWizard;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut session = Session::new(HttpRecommendationService::default());
//!     session.load_questions(QuestionBank::from_path("questions.json")?.into_questions());
//!     DialoguerWizard::new().run(&mut session).await?;
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerError, DialoguerWizard};
