use std::{collections::HashSet, fs::File, io::Read, path::Path};

use crate::{Question, QuestionBankError};

/// An ordered, validated list of questions.
///
/// The bank is the only place questions are validated; the store accepts
/// whatever list it is given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Validate and wrap a list of questions.
    ///
    /// Rejects duplicate identifiers, blank prompts and dropdowns without
    /// options. An empty list is valid.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(QuestionBankError::DuplicateId(question.id()));
            }
            if question.prompt().trim().is_empty() {
                return Err(QuestionBankError::BlankPrompt(question.id()));
            }
            if question.kind().is_choice() && question.options().is_empty() {
                return Err(QuestionBankError::MissingOptions(question.id()));
            }
        }
        Ok(Self { questions })
    }

    /// Parse a bank from a JSON array of question records.
    pub fn from_json(json: &str) -> Result<Self, QuestionBankError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Parse a bank from a reader yielding a JSON array.
    pub fn from_reader(reader: impl Read) -> Result<Self, QuestionBankError> {
        Self::new(serde_json::from_reader(reader)?)
    }

    /// Read and parse a bank file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, QuestionBankError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| QuestionBankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Consume the bank, yielding its questions in order.
    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }

    /// Check if the bank has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::ResponseKind;

    const BANK: &str = r#"[
        {"id": 1, "question": "What is your name?", "type": "text"},
        {"id": 2, "question": "How old are you?", "type": "number"},
        {"id": 3, "question": "Pick one", "type": "dropdown", "options": ["A", "B"]}
    ]"#;

    #[test]
    fn parses_in_order() {
        let bank = QuestionBank::from_json(BANK).unwrap();

        assert_eq!(bank.len(), 3);
        let kinds: Vec<_> = bank.questions().iter().map(Question::kind).collect();
        assert_eq!(
            kinds,
            [
                ResponseKind::Text,
                ResponseKind::Number,
                ResponseKind::Dropdown
            ]
        );
    }

    #[test]
    fn empty_bank_is_valid() {
        let bank = QuestionBank::from_json("[]").unwrap();
        assert!(bank.is_empty());
    }

    #[test]
    fn duplicate_id_rejected() {
        let result = QuestionBank::new(vec![Question::text(1, "a"), Question::number(1, "b")]);
        assert!(matches!(result, Err(QuestionBankError::DuplicateId(1))));
    }

    #[test]
    fn dropdown_without_options_rejected() {
        let result =
            QuestionBank::from_json(r#"[{"id": 7, "question": "Pick", "type": "dropdown"}]"#);
        let err = result.unwrap_err();
        assert!(matches!(err, QuestionBankError::MissingOptions(7)));
        assert_eq!(err.question_id(), Some(7));
    }

    #[test]
    fn blank_prompt_rejected() {
        let result = QuestionBank::new(vec![Question::text(4, "  ")]);
        assert!(matches!(result, Err(QuestionBankError::BlankPrompt(4))));
    }

    #[test]
    fn malformed_json_rejected() {
        let result = QuestionBank::from_json(r#"{"id": 1}"#);
        assert!(matches!(result, Err(QuestionBankError::Parse(_))));
    }

    #[test]
    fn from_path_reads_file() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("mowajih-bank-{}.json", std::process::id()));
        File::create(&path)?.write_all(BANK.as_bytes())?;

        let bank = QuestionBank::from_path(&path)?;
        std::fs::remove_file(&path)?;

        assert_eq!(bank.questions()[2].options(), ["A", "B"]);
        Ok(())
    }

    #[test]
    fn from_path_reports_missing_file() {
        let err = QuestionBank::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, QuestionBankError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
