use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a question, unique within a question bank.
pub type QuestionId = i64;

/// A single question in the questionnaire.
///
/// Serialized as `{"id", "question", "type", "options"}`, the record format
/// of the question bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier, echoed back in the matching `Answer`.
    id: QuestionId,

    /// The prompt text shown to the user.
    #[serde(rename = "question")]
    prompt: String,

    /// The kind of response (determines the input affordance).
    #[serde(rename = "type")]
    kind: ResponseKind,

    /// Choice labels, in display order. Only meaningful for dropdowns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<String>,
}

impl Question {
    /// Create a new question without options.
    pub fn new(id: QuestionId, prompt: impl Into<String>, kind: ResponseKind) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            kind,
            options: Vec::new(),
        }
    }

    /// Create a free-text question.
    pub fn text(id: QuestionId, prompt: impl Into<String>) -> Self {
        Self::new(id, prompt, ResponseKind::Text)
    }

    /// Create a numeric question.
    pub fn number(id: QuestionId, prompt: impl Into<String>) -> Self {
        Self::new(id, prompt, ResponseKind::Number)
    }

    /// Create a single-choice question with the given options.
    pub fn dropdown<I, S>(id: QuestionId, prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            ..Self::new(id, prompt, ResponseKind::Dropdown)
        }
    }

    /// Get the question identifier.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the response kind.
    pub fn kind(&self) -> ResponseKind {
        self.kind
    }

    /// Get the choice labels (empty unless this is a dropdown).
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Check whether a raw input value is an acceptable response.
    ///
    /// Blank values are never accepted. Numbers must parse as a finite float,
    /// dropdown values must be one of the options.
    pub fn accepts(&self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        match self.kind {
            ResponseKind::Text => true,
            ResponseKind::Number => value.parse::<f64>().is_ok_and(f64::is_finite),
            ResponseKind::Dropdown => self.options.iter().any(|option| option == value),
        }
    }
}

/// The input modality of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    /// Single-line free text.
    Text,

    /// Numeric input. The answer is still stored as text.
    Number,

    /// Pick one of the question's options.
    Dropdown,
}

impl ResponseKind {
    /// The wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Dropdown => "dropdown",
        }
    }

    /// Check whether this kind picks from a list of options.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Dropdown)
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_record() {
        let question: Question = serde_json::from_str(
            r#"{"id": 2, "question": "Pick one", "type": "dropdown", "options": ["A", "B"]}"#,
        )
        .unwrap();

        assert_eq!(question.id(), 2);
        assert_eq!(question.prompt(), "Pick one");
        assert_eq!(question.kind(), ResponseKind::Dropdown);
        assert_eq!(question.options(), ["A", "B"]);
    }

    #[test]
    fn options_default_to_empty() {
        let question: Question =
            serde_json::from_str(r#"{"id": 1, "question": "Name?", "type": "text"}"#).unwrap();
        assert!(question.options().is_empty());

        let json = serde_json::to_value(&question).unwrap();
        assert!(json.get("options").is_none());
        assert_eq!(json["type"], "text");
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let result = serde_json::from_str::<Question>(
            r#"{"id": 1, "question": "Name?", "type": "checkbox"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn accepts_by_kind() {
        assert!(Question::text(1, "Name?").accepts("Ada"));
        assert!(!Question::text(1, "Name?").accepts("   "));

        let age = Question::number(2, "Age?");
        assert!(age.accepts("42"));
        assert!(age.accepts("17.5"));
        assert!(!age.accepts("forty"));
        assert!(!age.accepts("inf"));

        let pick = Question::dropdown(3, "Pick one", ["A", "B"]);
        assert!(pick.accepts("B"));
        assert!(!pick.accepts("C"));
    }
}
