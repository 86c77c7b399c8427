//! A questionnaire session: store, controller, navigation and the service
//! wired together.

use std::fmt;

use mowajih_types::{Answer, Question};
use tracing::{error, info};

use crate::{
    Controller, Navigator, QuestionnaireStore, QuestionnaireView, RecommendationService, Route,
    Step, SummaryView,
};

/// Why the last submission did not lead to the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionNotice {
    /// The service answered without any recommendations.
    NoRecommendations,

    /// The request failed.
    Failed(String),
}

impl fmt::Display for SubmissionNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRecommendations => f.write_str("No recommendations were returned."),
            Self::Failed(message) => write!(f, "Could not submit your answers: {message}"),
        }
    }
}

/// What [`Session::next`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextOutcome {
    /// Blank response or nothing to answer.
    Ignored,

    /// Moved on to the next question.
    Advanced,

    /// Answers submitted, recommendations stored, summary shown.
    Recommended,

    /// Answers submitted but nothing to show; see [`Session::notice`].
    NotRecommended,
}

/// One run of the questionnaire.
pub struct Session<S> {
    store: QuestionnaireStore,
    controller: Controller,
    navigator: Navigator,
    notice: Option<SubmissionNotice>,
    service: S,
}

impl<S: RecommendationService> Session<S> {
    /// Start a session on the questionnaire route with no questions loaded.
    pub fn new(service: S) -> Self {
        Self {
            store: QuestionnaireStore::new(),
            controller: Controller::new(),
            navigator: Navigator::default(),
            notice: None,
            service,
        }
    }

    /// Start on a different route.
    pub fn starting_at(mut self, route: Route) -> Self {
        self.navigator = Navigator::new(route);
        self
    }

    /// Load the questions. See [`QuestionnaireStore::load_questions`].
    pub fn load_questions(&mut self, questions: Vec<Question>) {
        self.store.load_questions(questions);
    }

    /// Forward a raw input value to the response buffer.
    pub fn set_response(&mut self, value: impl Into<String>) {
        self.notice = None;
        self.controller.set_response(value);
    }

    /// Record the current response and advance, or submit on the last
    /// question.
    ///
    /// The submission is the only suspension point. Failures are logged and
    /// kept as a [`SubmissionNotice`]; they never change the store.
    pub async fn next(&mut self) -> NextOutcome {
        match self.controller.submit_step(&mut self.store) {
            Step::Ignored => NextOutcome::Ignored,
            Step::Advanced => NextOutcome::Advanced,
            Step::Submit(answers) => self.submit(&answers).await,
        }
    }

    async fn submit(&mut self, answers: &[Answer]) -> NextOutcome {
        info!(answers = answers.len(), "submitting answers");
        match self.service.recommend(answers).await {
            Ok(response) => match response.into_recommendations() {
                Some(recommendations) => {
                    info!(count = recommendations.len(), "received recommendations");
                    self.notice = None;
                    self.store.set_recommendations(recommendations);
                    self.navigator.navigate(Route::Summary);
                    NextOutcome::Recommended
                }
                None => {
                    error!("no recommendations returned from the service");
                    self.notice = Some(SubmissionNotice::NoRecommendations);
                    NextOutcome::NotRecommended
                }
            },
            Err(err) => {
                error!(error = %err, "error submitting answers");
                self.notice = Some(SubmissionNotice::Failed(err.to_string()));
                NextOutcome::NotRecommended
            }
        }
    }

    /// Reset the questionnaire and go back to the first question.
    pub fn restart(&mut self) {
        self.store.reset();
        self.controller.clear();
        self.notice = None;
        self.navigator.navigate(Route::Questionnaire);
    }

    pub fn navigate(&mut self, route: Route) {
        self.navigator.navigate(route);
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn store(&self) -> &QuestionnaireStore {
        &self.store
    }

    pub fn response(&self) -> &str {
        self.controller.response()
    }

    /// Feedback on the last failed submission, if any.
    pub fn notice(&self) -> Option<&SubmissionNotice> {
        self.notice.as_ref()
    }

    pub fn questionnaire_view(&self) -> QuestionnaireView {
        QuestionnaireView::build(&self.store, &self.controller)
    }

    pub fn summary_view(&self) -> SummaryView {
        SummaryView::build(&self.store)
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}
