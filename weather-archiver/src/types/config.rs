//! Worker configuration sourced from the process environment

use std::env;

use super::error::ConfigError;

/// Configuration triple required by the fetch-and-archive task
///
/// Read once at startup and passed explicitly; no environment lookups
/// happen after construction.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// API credential for the upstream weather API
    pub weather_api_key: String,
    /// Location query string, e.g. `Paris` or `90210`
    pub location: String,
    /// Destination S3 bucket name
    pub bucket_name: String,
}

impl WorkerConfig {
    /// Reads the configuration triple from the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `WEATHER_API_KEY`, `LOCATION` or
    /// `BUCKET_NAME` is unset or empty
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            weather_api_key: required_var("WEATHER_API_KEY")?,
            location: required_var("LOCATION")?,
            bucket_name: required_var("BUCKET_NAME")?,
        })
    }
}

/// Reads a required environment variable, rejecting empty values
fn required_var(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyVar(name)),
        Ok(value) => Ok(value),
        Err(_) => Err(ConfigError::MissingVar(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_full_config() {
        env::set_var("WEATHER_API_KEY", "test-key");
        env::set_var("LOCATION", "Paris");
        env::set_var("BUCKET_NAME", "weather-archive-test");
    }

    fn clear_config() {
        env::remove_var("WEATHER_API_KEY");
        env::remove_var("LOCATION");
        env::remove_var("BUCKET_NAME");
    }

    #[test]
    #[serial]
    fn test_from_env_with_full_config() {
        set_full_config();

        let config = WorkerConfig::from_env().expect("config should load");
        assert_eq!(config.weather_api_key, "test-key");
        assert_eq!(config.location, "Paris");
        assert_eq!(config.bucket_name, "weather-archive-test");

        clear_config();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_api_key() {
        set_full_config();
        env::remove_var("WEATHER_API_KEY");

        let err = WorkerConfig::from_env().expect_err("missing key must fail");
        assert!(matches!(err, ConfigError::MissingVar("WEATHER_API_KEY")));

        clear_config();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_location() {
        set_full_config();
        env::remove_var("LOCATION");

        let err = WorkerConfig::from_env().expect_err("missing location must fail");
        assert!(matches!(err, ConfigError::MissingVar("LOCATION")));

        clear_config();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_bucket() {
        set_full_config();
        env::remove_var("BUCKET_NAME");

        let err = WorkerConfig::from_env().expect_err("missing bucket must fail");
        assert!(matches!(err, ConfigError::MissingVar("BUCKET_NAME")));

        clear_config();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_empty_value() {
        set_full_config();
        env::set_var("LOCATION", "   ");

        let err = WorkerConfig::from_env().expect_err("empty location must fail");
        assert!(matches!(err, ConfigError::EmptyVar("LOCATION")));

        clear_config();
    }
}
