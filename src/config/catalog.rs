//! Catalog cache configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Catalog cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Snapshot time-to-live in seconds
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl CatalogConfig {
    /// Get the TTL as Duration
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ttl_secs == 0 {
            return Err(ValidationError::InvalidCatalogTtl);
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

fn default_ttl_secs() -> u64 {
    600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ttl_is_ten_minutes() {
        assert_eq!(CatalogConfig::default().ttl(), Duration::from_secs(600));
    }

    #[test]
    fn zero_ttl_fails_validation() {
        let config = CatalogConfig { ttl_secs: 0 };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCatalogTtl)
        ));
    }
}
