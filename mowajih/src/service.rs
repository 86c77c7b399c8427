//! The submission protocol: answers out, recommendations back.

use async_trait::async_trait;
use mowajih_types::{Answer, Recommendation};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Where the recommendation service listens unless configured otherwise.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/recommend";

/// Error type for a submission attempt.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The request could not be sent or the response body not decoded.
    #[error("Recommendation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Recommendation service returned {status}")]
    Status { status: reqwest::StatusCode },

    /// Failure reported by a non-HTTP service.
    #[error("Recommendation service error: {0}")]
    Service(String),
}

/// Request body sent to the service.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendRequest<'a> {
    pub answers: &'a [Answer],
}

/// Response body returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub recommendations: Option<Vec<Recommendation>>,
}

impl RecommendResponse {
    /// A response carrying the given recommendations.
    pub fn with(recommendations: Vec<Recommendation>) -> Self {
        Self {
            recommendations: Some(recommendations),
        }
    }

    /// The recommendations, if the response carried a non-empty list.
    pub fn into_recommendations(self) -> Option<Vec<Recommendation>> {
        self.recommendations.filter(|recs| !recs.is_empty())
    }
}

/// Something that scores a complete answer set.
///
/// One call per submission; implementations must not retry.
#[async_trait]
pub trait RecommendationService: Send + Sync {
    async fn recommend(&self, answers: &[Answer]) -> Result<RecommendResponse, SubmissionError>;
}

/// The remote recommendation service, reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRecommendationService {
    http: Client,
    endpoint: String,
}

impl Default for HttpRecommendationService {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl HttpRecommendationService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RecommendationService for HttpRecommendationService {
    async fn recommend(&self, answers: &[Answer]) -> Result<RecommendResponse, SubmissionError> {
        info!(endpoint = %self.endpoint, answers = answers.len(), "requesting recommendations");
        let res = self
            .http
            .post(&self.endpoint)
            .json(&RecommendRequest { answers })
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(SubmissionError::Status {
                status: res.status(),
            });
        }
        Ok(res.json().await?)
    }
}
