use serde::{Deserialize, Serialize};

use crate::{Question, QuestionId};

/// A response collected for one question.
///
/// The value is kept as text whatever the question's kind. Serialized as
/// `{"id", "question", "answer"}`, the record format the recommendation
/// service expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Identifier of the answered question.
    pub id: QuestionId,

    /// The question's prompt text, echoed for the service.
    #[serde(rename = "question")]
    pub prompt: String,

    /// The response value.
    #[serde(rename = "answer")]
    pub value: String,
}

impl Answer {
    /// Create a new answer.
    pub fn new(id: QuestionId, prompt: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            value: value.into(),
        }
    }

    /// Create the answer to `question` carrying `value`.
    pub fn for_question(question: &Question, value: impl Into<String>) -> Self {
        Self::new(question.id(), question.prompt(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_names() {
        let answer = Answer::for_question(&Question::text(1, "What is your name?"), "Ada");
        let json = serde_json::to_value(&answer).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": 1, "question": "What is your name?", "answer": "Ada"})
        );
    }
}
