//! Fixed probe configuration.
//!
//! The defaults are the only configuration the binary uses. Nothing is read
//! from the environment; tests build their own values to point at a random
//! port or shorten timeouts.

use std::time::Duration;

pub const DEFAULT_ORIGIN: &str = "http://localhost:8080";
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);
pub const METADATA_TIMEOUT: Duration = Duration::from_secs(20);
pub const METADATA_TARGET_URL: &str = "https://www.youtube.com/watch?v=q7HnfHFJCEc";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Scheme, host and port shared by every probe.
    pub origin: String,
    pub health_timeout: Duration,
    pub metadata_timeout: Duration,
    /// Value of the `url` key posted to `/api/metadata`.
    pub metadata_url: String,
}

impl ProbeConfig {
    /// Default timeouts and payload against another origin.
    pub fn with_origin(origin: &str) -> Self {
        Self {
            origin: origin.to_string(),
            ..Self::default()
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            health_timeout: HEALTH_TIMEOUT,
            metadata_timeout: METADATA_TIMEOUT,
            metadata_url: METADATA_TARGET_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = ProbeConfig::default();
        assert_eq!(config.origin, "http://localhost:8080");
        assert_eq!(config.health_timeout, Duration::from_secs(5));
        assert_eq!(config.metadata_timeout, Duration::from_secs(20));
        assert_eq!(
            config.metadata_url,
            "https://www.youtube.com/watch?v=q7HnfHFJCEc"
        );
    }

    #[test]
    fn with_origin_keeps_default_timeouts() {
        let config = ProbeConfig::with_origin("http://127.0.0.1:9999");
        assert_eq!(config.origin, "http://127.0.0.1:9999");
        assert_eq!(config.health_timeout, HEALTH_TIMEOUT);
        assert_eq!(config.metadata_timeout, METADATA_TIMEOUT);
    }
}
