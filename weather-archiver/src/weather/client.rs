//! HTTP client for the weatherapi.com current-conditions endpoint

use async_trait::async_trait;
use tracing::{debug, error};

use super::{WeatherError, WeatherObservation, WeatherResult, WeatherSource};

/// Client for the weatherapi.com `current.json` endpoint
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl WeatherApiClient {
    /// Creates a new weather API client
    ///
    /// # Arguments
    ///
    /// * `api_key` - weatherapi.com API credential
    /// * `base_url` - API base URL, e.g. `https://api.weatherapi.com/v1`
    #[must_use]
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url,
        }
    }

    fn current_conditions_url(&self) -> String {
        format!("{}/current.json", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl WeatherSource for WeatherApiClient {
    async fn fetch_current(&self, location: &str) -> WeatherResult<WeatherObservation> {
        debug!("Fetching current conditions for location: {}", location);

        let response = self
            .http
            .get(self.current_conditions_url())
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", location),
                ("aqi", "no"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            error!(
                "Weather API returned status {} for location {}",
                status, location
            );
            return Err(WeatherError::UpstreamStatus { status, body });
        }

        let body = response.text().await?;
        let document: serde_json::Value = serde_json::from_str(&body)?;

        debug!("Fetched current conditions for location: {}", location);
        Ok(WeatherObservation::new(document))
    }
}
