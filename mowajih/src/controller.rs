//! The questionnaire controller: input buffer and the submit step.

use mowajih_types::Answer;
use tracing::debug;

use crate::QuestionnaireStore;

/// What a call to [`Controller::submit_step`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Nothing happened (blank response or no current question).
    Ignored,

    /// The answer was recorded and the store moved to the next question.
    Advanced,

    /// Every question is answered; these answers must now be submitted.
    Submit(Vec<Answer>),
}

/// Mediates between the in-progress response and the store.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    buffer: String,
}

impl Controller {
    /// Create a controller with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the in-progress response with a raw input value.
    pub fn set_response(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
    }

    /// Get the in-progress response.
    pub fn response(&self) -> &str {
        &self.buffer
    }

    /// Discard the in-progress response.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    fn has_response(&self) -> bool {
        !self.buffer.trim().is_empty()
    }

    /// Whether the submit/next action is currently available.
    pub fn can_submit(&self, store: &QuestionnaireStore) -> bool {
        store.is_complete() || (store.current_question().is_some() && self.has_response())
    }

    /// Label for the submit/next action.
    pub fn submit_label(&self, store: &QuestionnaireStore) -> &'static str {
        if store.is_complete() {
            "Retry"
        } else if store.is_last_question() {
            "Submit"
        } else {
            "Next"
        }
    }

    /// Record the in-progress response for the current question, then either
    /// advance or hand back the full answer list for submission.
    ///
    /// Once every question is answered nothing more is recorded: the existing
    /// answers are handed back again so a failed submission can be retried.
    pub fn submit_step(&mut self, store: &mut QuestionnaireStore) -> Step {
        if store.is_complete() {
            self.clear();
            return Step::Submit(store.answers().to_vec());
        }

        if !self.has_response() {
            return Step::Ignored;
        }
        let Some(question) = store.current_question() else {
            return Step::Ignored;
        };

        let (id, prompt) = (question.id(), question.prompt().to_string());
        let value = std::mem::take(&mut self.buffer);
        debug!(id, "submitting response");
        store.record_answer(id, prompt, value);

        if store.is_last_question() {
            Step::Submit(store.answers().to_vec())
        } else {
            store.advance();
            Step::Advanced
        }
    }
}

#[cfg(test)]
mod tests {
    use mowajih_types::Question;

    use super::*;

    fn store() -> QuestionnaireStore {
        let mut store = QuestionnaireStore::new();
        store.load_questions(vec![
            Question::text(1, "What is your name?"),
            Question::dropdown(2, "Pick one", ["A", "B"]),
        ]);
        store
    }

    #[test]
    fn blank_response_is_ignored() {
        let mut store = store();
        let mut controller = Controller::new();
        let before = store.clone();

        assert_eq!(controller.submit_step(&mut store), Step::Ignored);
        controller.set_response("   ");
        assert!(!controller.can_submit(&store));
        assert_eq!(controller.submit_step(&mut store), Step::Ignored);

        assert_eq!(store, before);
        assert_eq!(controller.response(), "   ");
    }

    #[test]
    fn not_ready_is_ignored() {
        let mut store = QuestionnaireStore::new();
        let mut controller = Controller::new();
        controller.set_response("Ada");

        assert!(!controller.can_submit(&store));
        assert_eq!(controller.submit_step(&mut store), Step::Ignored);
        assert!(store.answers().is_empty());
    }

    #[test]
    fn advances_before_last_question() {
        let mut store = store();
        let mut controller = Controller::new();
        assert_eq!(controller.submit_label(&store), "Next");

        controller.set_response("Ada");
        assert_eq!(controller.submit_step(&mut store), Step::Advanced);

        assert_eq!(store.current_index(), 1);
        assert_eq!(store.answers(), [Answer::new(1, "What is your name?", "Ada")]);
        assert_eq!(controller.response(), "");
    }

    #[test]
    fn last_question_hands_back_answers() {
        let mut store = store();
        let mut controller = Controller::new();
        controller.set_response("Ada");
        controller.submit_step(&mut store);
        assert_eq!(controller.submit_label(&store), "Submit");

        controller.set_response("B");
        let step = controller.submit_step(&mut store);

        let expected = vec![
            Answer::new(1, "What is your name?", "Ada"),
            Answer::new(2, "Pick one", "B"),
        ];
        assert_eq!(step, Step::Submit(expected));
        assert_eq!(store.current_index(), 1);
        assert_eq!(store.answers().len(), 2);
    }

    #[test]
    fn retry_does_not_duplicate_answers() {
        let mut store = store();
        let mut controller = Controller::new();
        for value in ["Ada", "B"] {
            controller.set_response(value);
            controller.submit_step(&mut store);
        }
        assert!(controller.can_submit(&store));
        assert_eq!(controller.submit_label(&store), "Retry");

        controller.set_response("A");
        assert!(matches!(
            controller.submit_step(&mut store),
            Step::Submit(answers) if answers.len() == 2
        ));
        assert_eq!(store.answers().len(), 2);
        assert_eq!(controller.response(), "");
    }

    #[test]
    fn each_step_keeps_answers_in_line_with_position() {
        let mut store = QuestionnaireStore::new();
        store.load_questions((1..=5).map(|id| Question::text(id, format!("Q{id}"))).collect());
        let mut controller = Controller::new();

        for p in 0..4 {
            controller.set_response(format!("answer {p}"));
            assert_eq!(controller.submit_step(&mut store), Step::Advanced);
            assert_eq!(store.answers().len(), p + 1);
            assert_eq!(store.current_index(), p + 1);
        }
    }
}
