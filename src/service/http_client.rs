//! HTTP client for the answer service
//!
//! Posts `{"query": "..."}` to `{base_url}/query` and extracts the answer
//! text from the `{"response": ...}` envelope.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AnswerError;

#[derive(Debug, Serialize)]
struct QueryPayload<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct QueryEnvelope {
    response: Value,
}

#[derive(Debug, Clone)]
pub struct HttpAnswerClient {
    client: Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpAnswerClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AnswerError> {
        let endpoint = query_endpoint(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AnswerError::NotConfigured(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn ask(&self, query: &str) -> Result<String, AnswerError> {
        log::debug!("POST {} ({} chars)", self.endpoint, query.len());

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&QueryPayload { query })
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AnswerError::Api {
                code,
                message: api_error_message(&message),
            });
        }

        let envelope = response
            .json::<QueryEnvelope>()
            .await
            .map_err(|e| self.transport_error(e))?;

        extract_answer(&envelope.response)
    }

    fn transport_error(&self, e: reqwest::Error) -> AnswerError {
        if e.is_timeout() {
            AnswerError::Timeout(self.timeout.as_millis() as u64)
        } else if e.is_decode() {
            AnswerError::Parse(e.to_string())
        } else {
            AnswerError::Network(e.to_string())
        }
    }
}

/// Build `{base_url}/query`, tolerating a trailing slash on the base.
fn query_endpoint(base_url: &str) -> Result<Url, AnswerError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    Url::parse(&format!("{}/query", trimmed))
        .map_err(|e| AnswerError::NotConfigured(format!("invalid URL '{}': {}", base_url, e)))
}

/// Pull the answer text out of the `response` field.
///
/// The service wraps its answer either directly as a string or in an object
/// carrying `response` (success) or `error` (the service failed the query).
fn extract_answer(value: &Value) -> Result<String, AnswerError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Object(map) => {
            if let Some(Value::String(text)) = map.get("response") {
                Ok(text.clone())
            } else if let Some(Value::String(error)) = map.get("error") {
                Err(AnswerError::Service(error.clone()))
            } else {
                Err(AnswerError::Parse(
                    "response object has neither 'response' nor 'error' text".to_string(),
                ))
            }
        }
        other => Err(AnswerError::Parse(format!(
            "unexpected response type: {}",
            json_type_name(other)
        ))),
    }
}

/// FastAPI style errors carry a `detail` field; fall back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "http_client_tests.rs"]
mod http_client_tests;
