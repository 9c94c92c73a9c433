//! Configuration module
//!
//! Handles CLI configuration including the service base URL and the status
//! poll interval.

use std::time::Duration;

/// How often the watch loop fetches session status. The service coalesces
/// updates at roughly this rate, so there is nothing to gain from polling
/// faster.
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// CLI configuration
///
/// The base URL is injected once at startup (flag or environment); nothing
/// else in the codebase carries a service address.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the agentd service
    pub base_url: String,

    /// Fixed period of the status poll loop
    pub poll_interval: Duration,
}

impl Config {
    /// Creates a new configuration for the given base URL
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            poll_interval: POLL_INTERVAL,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("base_url cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_poll_interval() {
        let config = Config::new("http://localhost:5000".to_string());
        assert_eq!(config.poll_interval, Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::new("http://localhost:5000".to_string());
        assert!(config.validate().is_ok());

        config.base_url = String::new();
        assert!(config.validate().is_err());

        config.base_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://agentd.example.com".to_string();
        assert!(config.validate().is_ok());
    }
}
