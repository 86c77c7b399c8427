//! Test service for running questionnaires without a recommendation server.
//!
//! `TestService` answers every submission with a pre-configured response
//! and remembers what it was sent.
//!
//! # Example
//!
//! ```rust,ignore
//! use mowajih::{Recommendation, Session, TestService};
//!
//! let service = TestService::new().with_recommendations(vec![Recommendation::titled("Prog1")]);
//! let mut session = Session::new(service.clone());
//! // ... answer every question, then:
//! assert_eq!(service.calls().len(), 1);
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mowajih_types::{Answer, Recommendation};

use crate::{RecommendResponse, RecommendationService, SubmissionError};

#[derive(Debug, Clone)]
enum Reply {
    Respond(RecommendResponse),
    Fail(String),
}

/// A recommendation service that returns a canned reply.
///
/// Clones share the call log, so a clone handed to a `Session` can be
/// inspected through the original.
#[derive(Debug, Clone)]
pub struct TestService {
    reply: Reply,
    calls: Arc<Mutex<Vec<Vec<Answer>>>>,
}

impl Default for TestService {
    fn default() -> Self {
        Self::new()
    }
}

impl TestService {
    /// A service that replies with an empty recommendations list.
    pub fn new() -> Self {
        Self {
            reply: Reply::Respond(RecommendResponse::with(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Reply with the given recommendations.
    pub fn with_recommendations(self, recommendations: Vec<Recommendation>) -> Self {
        self.with_response(RecommendResponse::with(recommendations))
    }

    /// Reply with the given raw response.
    pub fn with_response(mut self, response: RecommendResponse) -> Self {
        self.reply = Reply::Respond(response);
        self
    }

    /// Reply with a response that has no `recommendations` field at all.
    pub fn without_recommendations(self) -> Self {
        self.with_response(RecommendResponse::default())
    }

    /// Fail every submission with the given message.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.reply = Reply::Fail(message.into());
        self
    }

    /// Every answer set submitted so far, oldest first.
    pub fn calls(&self) -> Vec<Vec<Answer>> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RecommendationService for TestService {
    async fn recommend(&self, answers: &[Answer]) -> Result<RecommendResponse, SubmissionError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(answers.to_vec());
        }
        match &self.reply {
            Reply::Respond(response) => Ok(response.clone()),
            Reply::Fail(message) => Err(SubmissionError::Service(message.clone())),
        }
    }
}
