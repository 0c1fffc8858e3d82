//! Error types for weather API operations

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for weather API operations
pub type WeatherResult<T> = Result<T, WeatherError>;

/// Errors that can occur while fetching current conditions
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Transport-level failure talking to the weather API
    #[error("weather API request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status from the weather API
    #[error("weather API returned status {status}: {body}")]
    UpstreamStatus {
        /// HTTP status code of the response
        status: StatusCode,
        /// Response body text, kept for diagnostics
        body: String,
    },

    /// Response body was not valid JSON
    #[error("malformed weather payload: {0}")]
    Payload(#[from] serde_json::Error),
}
