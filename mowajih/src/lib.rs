//! # mowajih
//!
//! The questionnaire behind the mowajih orientation wizard. Frontend-agnostic.
//!
//! A [`Session`] walks a list of questions one at a time, collects a text
//! answer for each, and on the last one submits every answer to a
//! [`RecommendationService`]. The returned programs are stored and the
//! session switches to the summary route.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mowajih::{HttpRecommendationService, QuestionBank, Session};
//!
//! let bank = QuestionBank::from_path("questions.json")?;
//! let mut session = Session::new(HttpRecommendationService::default());
//! session.load_questions(bank.into_questions());
//!
//! session.set_response("Ada");
//! session.next().await;
//! ```
//!
//! ## Frontends
//!
//! Frontends are separate crates that render [`QuestionnaireView`] and
//! [`SummaryView`] and forward input to the session:
//! - `mowajih-wizard-ratatui` - full-screen TUI with a navigation sidebar
//! - `mowajih-wizard-dialoguer` - line-oriented CLI prompts

// Re-export all types from mowajih-types
pub use mowajih_types::*;

mod store;
pub use store::{Action, QuestionnaireStore};

mod controller;
pub use controller::{Controller, Step};

mod service;
pub use service::{
    DEFAULT_ENDPOINT, HttpRecommendationService, RecommendRequest, RecommendResponse,
    RecommendationService, SubmissionError,
};

mod navigation;
pub use navigation::{NAV_LINKS, NavLink, Navigator, Route};

mod view;
pub use view::{
    InputAffordance, NO_ANSWERS, NO_RECOMMENDATIONS, NO_SCORE, NOT_SPECIFIED, QuestionnaireView,
    RecommendationCard, SummaryView,
};

mod session;
pub use session::{NextOutcome, Session, SubmissionNotice};

// Test service for running sessions without a recommendation server
mod test_service;
pub use test_service::TestService;
