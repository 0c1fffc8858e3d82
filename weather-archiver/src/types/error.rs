//! Invocation-level error taxonomy

use thiserror::Error;

use crate::bucket::BucketError;
use crate::weather::WeatherError;

/// Errors that can occur while loading the worker configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),

    /// A required environment variable is set but empty
    #[error("environment variable {0} is set but empty")]
    EmptyVar(&'static str),
}

/// Errors terminating one invocation of the fetch-and-archive task
///
/// Each variant names the phase that failed so callers can branch on
/// failure kind instead of inspecting a generic fault.
#[derive(Debug, Error)]
pub enum WorkerError {
    /// Configuration was incomplete; no I/O was attempted
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The upstream weather fetch failed; nothing was written
    #[error("weather fetch failed: {0}")]
    Fetch(#[from] WeatherError),

    /// The snapshot upload failed after a successful fetch
    #[error("snapshot upload failed: {0}")]
    Store(#[from] BucketError),
}
