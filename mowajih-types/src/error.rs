use std::path::PathBuf;

use crate::QuestionId;

/// Error type for loading and validating a question bank.
#[derive(Debug, thiserror::Error)]
pub enum QuestionBankError {
    /// The bank file could not be read.
    #[error("Failed to read question bank {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bank is not a JSON array of question records.
    #[error("Malformed question bank: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two questions share an identifier.
    #[error("Duplicate question id {0}")]
    DuplicateId(QuestionId),

    /// A dropdown question has no options to choose from.
    #[error("Dropdown question {0} has no options")]
    MissingOptions(QuestionId),

    /// A question has an empty or whitespace-only prompt.
    #[error("Question {0} has a blank prompt")]
    BlankPrompt(QuestionId),
}

impl QuestionBankError {
    /// Identifier of the offending question, for validation failures.
    pub fn question_id(&self) -> Option<QuestionId> {
        match self {
            Self::DuplicateId(id) | Self::MissingOptions(id) | Self::BlankPrompt(id) => Some(*id),
            Self::Io { .. } | Self::Parse(_) => None,
        }
    }
}
