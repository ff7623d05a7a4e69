use thiserror::Error;

#[derive(Debug, Error)]
pub enum TapqError {
    #[error("Invalid endpoint URL '{url}': {message}")]
    InvalidEndpoint { url: String, message: String },
}
