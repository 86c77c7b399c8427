//! Core types for the mowajih questionnaire.
//!
//! This crate provides the presentation-agnostic data model:
//! - `Question` and `ResponseKind` - Individual questions and their input modality
//! - `Answer` - One collected response, echoed with its prompt
//! - `Recommendation` - A scored program returned by the recommendation service
//! - `QuestionBank` - A validated, ordered list of questions loaded from JSON

mod question;
pub use question::{Question, QuestionId, ResponseKind};

mod answer;
pub use answer::Answer;

mod recommendation;
pub use recommendation::Recommendation;

mod bank;
pub use bank::QuestionBank;

mod error;
pub use error::QuestionBankError;
