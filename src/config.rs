use std::time::Duration;
use serde::Deserialize;
use crate::utils::error::ProbeError;

/// Configuration settings for the WebSocket probe.
#[derive(Debug, Deserialize, Clone)]
pub struct ProbeConfig {
    /// The WebSocket endpoint the probe connects to.
    #[serde(default = "default_url")]
    pub url: String,
    /// The text payload sent once the connection is established.
    #[serde(default = "default_message")]
    pub message: String,
    /// Bound on the connection attempt, in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Bound on the wait for the response, in seconds.
    #[serde(default = "default_receive_timeout_secs")]
    pub receive_timeout_secs: u64,
}

fn default_url() -> String {
    "ws://localhost:8001/service1".to_string()
}

fn default_message() -> String {
    "Hello from Python WebSocket!".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_receive_timeout_secs() -> u64 {
    30
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            message: default_message(),
            connect_timeout_secs: default_connect_timeout_secs(),
            receive_timeout_secs: default_receive_timeout_secs(),
        }
    }
}

impl ProbeConfig {
    /// Loads the probe configuration from environment variables.
    ///
    /// Environment variables should be prefixed with `PROBE_`; any variable
    /// not set falls back to its default.
    ///
    /// # Errors
    /// Returns a `ProbeError::ConfigurationError` if the configuration cannot be loaded.
    pub fn from_env() -> Result<Self, ProbeError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("PROBE"))
            .build()
            .map_err(|e| ProbeError::ConfigurationError(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ProbeError::ConfigurationError(e.to_string()))
    }

    /// Validates the configuration settings.
    ///
    /// Ensures that the payload is non-empty and that both timeout bounds
    /// are greater than zero; the URL itself is validated when the endpoint
    /// is constructed.
    ///
    /// # Errors
    /// Returns a `ProbeError::ConfigurationError` if validation fails.
    pub fn validate(&self) -> Result<(), ProbeError> {
        if self.message.is_empty() {
            return Err(ProbeError::ConfigurationError(
                "message must not be empty".into()
            ));
        }

        if self.connect_timeout_secs == 0 {
            return Err(ProbeError::ConfigurationError(
                "connect_timeout_secs must be greater than 0".into()
            ));
        }

        if self.receive_timeout_secs == 0 {
            return Err(ProbeError::ConfigurationError(
                "receive_timeout_secs must be greater than 0".into()
            ));
        }

        Ok(())
    }

    /// Bound on the connection attempt.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Bound on the wait for the response.
    pub fn receive_timeout(&self) -> Duration {
        Duration::from_secs(self.receive_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_surface() {
        let config = ProbeConfig::default();
        assert_eq!(config.url, "ws://localhost:8001/service1");
        assert_eq!(config.message, "Hello from Python WebSocket!");
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert_eq!(config.receive_timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_message_is_rejected() {
        let config = ProbeConfig {
            message: String::new(),
            ..ProbeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ProbeError::ConfigurationError(_))
        ));
    }

    #[test]
    fn zero_timeouts_are_rejected() {
        let config = ProbeConfig {
            connect_timeout_secs: 0,
            ..ProbeConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ProbeConfig {
            receive_timeout_secs: 0,
            ..ProbeConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
