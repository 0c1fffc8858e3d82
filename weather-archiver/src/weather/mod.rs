//! Upstream weather API access

mod client;
mod error;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use client::WeatherApiClient;
pub use error::{WeatherError, WeatherResult};

/// Opaque weather document returned by the upstream API
///
/// No field of the document is inspected or validated; it is archived
/// verbatim as the snapshot body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherObservation(serde_json::Value);

impl WeatherObservation {
    /// Wraps a raw JSON document
    #[must_use]
    pub const fn new(document: serde_json::Value) -> Self {
        Self(document)
    }

    /// Compact JSON serialization used as the archived object body
    ///
    /// # Errors
    ///
    /// Returns `WeatherError::Payload` if the document cannot be serialized
    pub fn to_json_bytes(&self) -> WeatherResult<Vec<u8>> {
        serde_json::to_vec(&self.0).map_err(WeatherError::from)
    }
}

/// Source of current weather conditions for a location
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetches the current conditions document for `location`
    ///
    /// # Errors
    ///
    /// Returns `WeatherError` if the upstream call or payload decoding fails
    async fn fetch_current(&self, location: &str) -> WeatherResult<WeatherObservation>;
}
