//! The questionnaire state store.

use mowajih_types::{Answer, Question, QuestionId, Recommendation};
use tracing::debug;

/// A mutation of the questionnaire state.
///
/// Every change to a [`QuestionnaireStore`] can be expressed as one of these
/// and applied with [`QuestionnaireStore::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the question list.
    LoadQuestions(Vec<Question>),

    /// Append an answer.
    RecordAnswer(Answer),

    /// Move to the next question, if there is one.
    Advance,

    /// Clear position, answers and recommendations.
    Reset,

    /// Replace the recommendations.
    SetRecommendations(Vec<Recommendation>),
}

/// Single source of truth for a questionnaire session.
///
/// Consumers read through the accessors; the only way to change the state is
/// through the mutation methods (or the equivalent [`Action`]s).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionnaireStore {
    questions: Vec<Question>,
    current_index: usize,
    answers: Vec<Answer>,
    recommendations: Vec<Recommendation>,
}

impl QuestionnaireStore {
    /// Create an empty, not-ready store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::LoadQuestions(questions) => self.load_questions(questions),
            Action::RecordAnswer(answer) => {
                self.answers.push(answer);
                debug!(answers = self.answers.len(), "recorded answer");
            }
            Action::Advance => self.advance(),
            Action::Reset => self.reset(),
            Action::SetRecommendations(recommendations) => {
                self.set_recommendations(recommendations)
            }
        }
    }

    /// Replace the question list.
    ///
    /// Position, answers and recommendations are left as they are, so loading
    /// mid-session keeps the progress made against the previous list.
    pub fn load_questions(&mut self, questions: Vec<Question>) {
        debug!(count = questions.len(), "loading questions");
        self.questions = questions;
    }

    /// Append an answer. No duplicate or bounds checks are made.
    pub fn record_answer(
        &mut self,
        id: QuestionId,
        prompt: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.dispatch(Action::RecordAnswer(Answer::new(id, prompt, value)));
    }

    /// Move to the next question. A no-op on the last question.
    pub fn advance(&mut self) {
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            debug!(index = self.current_index, "advanced");
        }
    }

    /// Return to the first question, dropping answers and recommendations.
    ///
    /// The question list is kept.
    pub fn reset(&mut self) {
        debug!("resetting questionnaire");
        self.current_index = 0;
        self.answers.clear();
        self.recommendations.clear();
    }

    /// Replace the recommendations.
    pub fn set_recommendations(&mut self, recommendations: Vec<Recommendation>) {
        debug!(count = recommendations.len(), "setting recommendations");
        self.recommendations = recommendations;
    }

    /// Get the loaded questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the current position.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Get the answers collected so far, in question order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Get the recommendations (empty until a submission succeeds).
    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// Get the question at the current position.
    ///
    /// `None` when the session is not ready or the position is out of bounds.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Check if questions are loaded.
    pub fn is_ready(&self) -> bool {
        !self.questions.is_empty()
    }

    /// Check if the current position is the last question.
    pub fn is_last_question(&self) -> bool {
        self.is_ready() && self.current_index + 1 == self.questions.len()
    }

    /// Check if every question has been answered.
    pub fn is_complete(&self) -> bool {
        self.is_ready() && self.answers.len() >= self.questions.len()
    }

    /// Get `(current, total)` for progress display, one-based.
    pub fn progress(&self) -> (usize, usize) {
        (self.current_index + 1, self.questions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<Question> {
        vec![
            Question::text(1, "What is your name?"),
            Question::number(2, "How old are you?"),
            Question::dropdown(3, "Pick one", ["A", "B"]),
        ]
    }

    #[test]
    fn new_store_is_not_ready() {
        let store = QuestionnaireStore::new();
        assert!(!store.is_ready());
        assert!(store.current_question().is_none());
        assert!(!store.is_last_question());
        assert!(!store.is_complete());
    }

    #[test]
    fn load_questions_on_fresh_store() {
        let mut store = QuestionnaireStore::new();
        store.load_questions(questions());

        assert!(store.is_ready());
        assert_eq!(store.current_index(), 0);
        assert!(store.answers().is_empty());
        assert!(store.recommendations().is_empty());
        assert_eq!(store.current_question().map(Question::id), Some(1));
    }

    #[test]
    fn empty_load_is_not_ready() {
        let mut store = QuestionnaireStore::new();
        store.load_questions(Vec::new());
        assert!(!store.is_ready());
    }

    #[test]
    fn reload_mid_session_keeps_progress() {
        let mut store = QuestionnaireStore::new();
        store.load_questions(questions());
        store.record_answer(1, "What is your name?", "Ada");
        store.advance();

        store.load_questions(questions());

        assert_eq!(store.current_index(), 1);
        assert_eq!(store.answers().len(), 1);
    }

    #[test]
    fn advance_stops_at_last_question() {
        let mut store = QuestionnaireStore::new();
        store.load_questions(questions());

        store.advance();
        store.advance();
        assert!(store.is_last_question());
        store.advance();

        assert_eq!(store.current_index(), 2);
    }

    #[test]
    fn advance_without_questions_is_noop() {
        let mut store = QuestionnaireStore::new();
        store.advance();
        assert_eq!(store.current_index(), 0);
    }

    #[test]
    fn reset_clears_mutable_state_only() {
        let mut store = QuestionnaireStore::new();
        store.load_questions(questions());
        store.record_answer(1, "What is your name?", "Ada");
        store.advance();
        store.set_recommendations(vec![Recommendation::titled("Prog1")]);

        store.reset();

        assert_eq!(store.current_index(), 0);
        assert!(store.answers().is_empty());
        assert!(store.recommendations().is_empty());
        assert_eq!(store.questions(), questions().as_slice());
    }

    #[test]
    fn dispatch_matches_methods() {
        let mut by_action = QuestionnaireStore::new();
        by_action.dispatch(Action::LoadQuestions(questions()));
        by_action.dispatch(Action::RecordAnswer(Answer::new(
            1,
            "What is your name?",
            "Ada",
        )));
        by_action.dispatch(Action::Advance);
        by_action.dispatch(Action::SetRecommendations(vec![Recommendation::titled("P")]));

        let mut by_method = QuestionnaireStore::new();
        by_method.load_questions(questions());
        by_method.record_answer(1, "What is your name?", "Ada");
        by_method.advance();
        by_method.set_recommendations(vec![Recommendation::titled("P")]);

        assert_eq!(by_action, by_method);

        by_action.dispatch(Action::Reset);
        assert!(by_action.answers().is_empty());
    }

    #[test]
    fn complete_once_every_question_answered() {
        let mut store = QuestionnaireStore::new();
        store.load_questions(vec![Question::text(1, "Only")]);
        assert!(!store.is_complete());
        store.record_answer(1, "Only", "yes");
        assert!(store.is_complete());
        assert_eq!(store.progress(), (1, 1));
    }
}
