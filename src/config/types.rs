// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::reveal::{RevealSettings, RevealUnit};

/// Default answer service base URL (the backend's local development address)
fn default_service_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

/// Default request timeout in milliseconds
fn default_timeout_ms() -> u64 {
    30_000
}

/// Default latency of the offline mock service in milliseconds
fn default_mock_delay_ms() -> u64 {
    3_000
}

fn default_status_messages() -> Vec<String> {
    vec![
        "Analyzing your query...".to_string(),
        "Fetching the most appropriate response...".to_string(),
        "Almost there...".to_string(),
    ]
}

fn default_status_interval_ms() -> u64 {
    2_000
}

fn default_chunk_size() -> usize {
    10
}

fn default_reveal_interval_ms() -> u64 {
    30
}

fn default_transition_ms() -> u64 {
    300
}

/// Answer service configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Base URL; queries are posted to `{url}/query`
    #[serde(default = "default_service_url")]
    pub url: String,
    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Use the built-in mock service instead of HTTP
    #[serde(default)]
    pub offline: bool,
    /// Simulated latency of the mock service
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            url: default_service_url(),
            timeout_ms: default_timeout_ms(),
            offline: false,
            mock_delay_ms: default_mock_delay_ms(),
        }
    }
}

impl ServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_delay_ms)
    }
}

/// Status message rotation while a request is outstanding
#[derive(Debug, Clone, Deserialize)]
pub struct StatusConfig {
    #[serde(default = "default_status_messages")]
    pub messages: Vec<String>,
    #[serde(default = "default_status_interval_ms")]
    pub interval_ms: u64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        StatusConfig {
            messages: default_status_messages(),
            interval_ms: default_status_interval_ms(),
        }
    }
}

impl StatusConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Typewriter reveal of answers
#[derive(Debug, Clone, Deserialize)]
pub struct RevealConfig {
    #[serde(default)]
    pub unit: RevealUnit,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_reveal_interval_ms")]
    pub interval_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            unit: RevealUnit::default(),
            chunk_size: default_chunk_size(),
            interval_ms: default_reveal_interval_ms(),
        }
    }
}

impl RevealConfig {
    pub fn settings(&self) -> RevealSettings {
        RevealSettings {
            unit: self.unit,
            chunk_size: self.chunk_size,
            interval: Duration::from_millis(self.interval_ms),
        }
    }
}

/// Durations of the results card enter/exit transitions
#[derive(Debug, Clone, Deserialize)]
pub struct TransitionConfig {
    #[serde(default = "default_transition_ms")]
    pub closing_ms: u64,
    #[serde(default = "default_transition_ms")]
    pub entering_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        TransitionConfig {
            closing_ms: default_transition_ms(),
            entering_ms: default_transition_ms(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub transition: TransitionConfig,
}

impl Config {
    /// Replace semantically invalid sections with their defaults.
    ///
    /// TOML can express values the controller cannot run with (an empty
    /// message list, a zero chunk size). Each offending section is reset and
    /// described in the returned warning.
    pub fn validate(&mut self) -> Option<String> {
        let mut problems = Vec::new();

        if self.status.messages.iter().all(|m| m.trim().is_empty()) {
            problems.push("status.messages must contain at least one message");
            self.status.messages = default_status_messages();
        }
        if self.status.interval_ms == 0 {
            problems.push("status.interval_ms must be greater than 0");
            self.status.interval_ms = default_status_interval_ms();
        }
        if let Err(e) = self.reveal.settings().validate() {
            log::debug!("Invalid reveal settings: {}", e);
            problems.push("reveal.chunk_size and reveal.interval_ms must be greater than 0");
            self.reveal = RevealConfig {
                unit: self.reveal.unit,
                ..RevealConfig::default()
            };
        }
        if self.service.timeout_ms == 0 {
            problems.push("service.timeout_ms must be greater than 0");
            self.service.timeout_ms = default_timeout_ms();
        }

        if problems.is_empty() {
            None
        } else {
            Some(format!("Invalid config, using defaults: {}", problems.join("; ")))
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
