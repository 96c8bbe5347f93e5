//! Pricing feed configuration

use serde::Deserialize;
use std::time::Duration;

use crate::domain::pricing::SUPPORTED_CITIES;

use super::error::ValidationError;

/// Live price feed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Listing site base URL for live prices
    #[serde(default = "default_feed_base_url")]
    pub feed_base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_feed_timeout")]
    pub feed_timeout_secs: u64,

    /// City assumed when a caller names none
    #[serde(default = "default_city")]
    pub default_city: String,
}

impl PricingConfig {
    /// Get the feed timeout as Duration
    pub fn feed_timeout(&self) -> Duration {
        Duration::from_secs(self.feed_timeout_secs)
    }

    /// Validate pricing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.feed_base_url.starts_with("http://")
            && !self.feed_base_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidFeedUrl);
        }
        if !SUPPORTED_CITIES.contains(&self.default_city.as_str()) {
            return Err(ValidationError::UnknownDefaultCity);
        }
        Ok(())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            feed_base_url: default_feed_base_url(),
            feed_timeout_secs: default_feed_timeout(),
            default_city: default_city(),
        }
    }
}

fn default_feed_base_url() -> String {
    "https://www.carwale.com".to_string()
}

fn default_feed_timeout() -> u64 {
    6
}

fn default_city() -> String {
    "New Delhi".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(PricingConfig::default().validate().is_ok());
    }

    #[test]
    fn non_http_feed_url_is_rejected() {
        let config = PricingConfig {
            feed_base_url: "ftp://prices.example".to_string(),
            ..PricingConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidFeedUrl)
        ));
    }

    #[test]
    fn unsupported_default_city_is_rejected() {
        let config = PricingConfig {
            default_city: "Atlantis".to_string(),
            ..PricingConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::UnknownDefaultCity)
        ));
    }
}
