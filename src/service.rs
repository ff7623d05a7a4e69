//! Answer service abstraction
//!
//! Defines the AnswerService enum, AnswerError types, the request/response
//! messages exchanged with the worker thread, and the factory for creating a
//! service from configuration. Calls are async and cancellable through a
//! CancellationToken; every response carries the id of the request it
//! answers so the controller can drop stale ones.

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::config::ServiceConfig;

mod http_client;
mod mock_client;
pub mod worker;

pub use http_client::HttpAnswerClient;
pub use mock_client::MockAnswerClient;

/// Errors that can occur while fetching an answer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AnswerError {
    /// Service could not be built from config
    #[error("Answer service not configured: {0}")]
    NotConfigured(String),

    /// Connection or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// No response within the configured timeout
    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    /// Service answered with a non-success status
    #[error("Service error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Response body was not a recognised answer payload
    #[error("Malformed response: {0}")]
    Parse(String),

    /// Service processed the query but reported a failure
    #[error("Service reported an error: {0}")]
    Service(String),

    /// Worker thread is gone
    #[error("Answer worker disconnected")]
    Disconnected,

    /// Request was cancelled
    #[error("Request cancelled")]
    Cancelled,
}

/// Request sent from the controller to the worker thread
#[derive(Debug)]
pub enum AnswerRequest {
    Query {
        query: String,
        request_id: u64,
        cancel_token: CancellationToken,
    },
}

/// Terminal response for one request; exactly one is sent per request
#[derive(Debug)]
pub enum AnswerResponse {
    Answer { request_id: u64, text: String },
    Failed { request_id: u64, error: AnswerError },
    Cancelled { request_id: u64 },
}

impl AnswerResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            AnswerResponse::Answer { request_id, .. }
            | AnswerResponse::Failed { request_id, .. }
            | AnswerResponse::Cancelled { request_id } => *request_id,
        }
    }
}

/// Answer service backends
#[derive(Debug, Clone)]
pub enum AnswerService {
    /// Remote `POST /query` endpoint
    Http(HttpAnswerClient),
    /// Offline stand-in with simulated latency
    Mock(MockAnswerClient),
}

impl AnswerService {
    pub fn name(&self) -> &'static str {
        match self {
            AnswerService::Http(_) => "http",
            AnswerService::Mock(_) => "mock",
        }
    }

    /// Create a service from configuration
    ///
    /// Returns an error if the endpoint URL is unusable.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, AnswerError> {
        if config.offline {
            return Ok(AnswerService::Mock(MockAnswerClient::new(config.mock_delay())));
        }

        let client = HttpAnswerClient::new(&config.url, config.timeout())?;
        Ok(AnswerService::Http(client))
    }

    /// Fetch the answer text for `query`.
    pub async fn ask(&self, query: &str) -> Result<String, AnswerError> {
        match self {
            AnswerService::Http(client) => client.ask(query).await,
            AnswerService::Mock(client) => client.ask(query).await,
        }
    }
}
