//! Session configuration.

use std::time::Duration;

use crate::arrival::DEFAULT_COMPLETION_RADIUS_M;

/// Default nearby search radius in kilometres.
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// Default maximum number of nearby results.
pub const DEFAULT_LIMIT: u32 = 20;

/// Default number of extra search attempts after a network failure.
pub const DEFAULT_SEARCH_RETRIES: u32 = 1;

/// Default delay between search attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Configuration for an exploration session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Nearby search radius in kilometres.
    pub radius_km: f64,
    /// Maximum number of nearby results.
    pub limit: u32,
    /// Arrival completion radius in metres.
    pub completion_radius_m: f64,
    /// Extra search attempts after a network failure. Only network
    /// failures are retried; validation and decode failures are
    /// deterministic.
    pub search_retries: u32,
    /// Fixed delay between search attempts.
    pub retry_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            radius_km: DEFAULT_RADIUS_KM,
            limit: DEFAULT_LIMIT,
            completion_radius_m: DEFAULT_COMPLETION_RADIUS_M,
            search_retries: DEFAULT_SEARCH_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert!((config.radius_km - 5.0).abs() < f64::EPSILON);
        assert_eq!(config.limit, 20);
        assert!((config.completion_radius_m - 50.0).abs() < f64::EPSILON);
        assert_eq!(config.search_retries, 1);
        assert_eq!(config.retry_delay, Duration::from_millis(500));
    }
}
