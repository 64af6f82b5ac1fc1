//! Dashboard cache configuration.
//!
//! This module provides tuning knobs for the dashboard snapshot cache
//! loaded from environment variables.

use std::env;
use std::time::Duration;

/// Dashboard cache tuning loaded from environment variables.
///
/// # Environment Variables
///
/// - `DASHBOARD_CACHE_TTL_SECONDS`: snapshot lifetime (default: `300`)
/// - `DASHBOARD_FETCH_TIMEOUT_SECONDS`: per-attempt deadline (default: `10`)
/// - `DASHBOARD_FETCH_RETRIES`: retries after the initial attempt (default: `2`)
/// - `DASHBOARD_RETRY_BACKOFF_MS`: backoff before the first retry (default: `300`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    /// How long a fetched snapshot stays warm.
    pub ttl: Duration,

    /// Deadline for each individual fetch attempt.
    pub fetch_timeout: Duration,

    /// Retries allowed after the initial attempt, on retryable failures only.
    pub retries: u32,

    /// Backoff before the first retry; doubles on each subsequent one.
    pub retry_backoff: Duration,
}

impl CacheConfig {
    /// Load configuration from environment variables.
    ///
    /// Falls back to default values if a variable is not set or cannot
    /// be parsed.
    ///
    /// # Defaults
    ///
    /// - `DASHBOARD_CACHE_TTL_SECONDS`: `300` (5 minutes)
    /// - `DASHBOARD_FETCH_TIMEOUT_SECONDS`: `10`
    /// - `DASHBOARD_FETCH_RETRIES`: `2`
    /// - `DASHBOARD_RETRY_BACKOFF_MS`: `300`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            ttl: Duration::from_secs(env_u64("DASHBOARD_CACHE_TTL_SECONDS", 300)),
            fetch_timeout: Duration::from_secs(env_u64("DASHBOARD_FETCH_TIMEOUT_SECONDS", 10)),
            retries: env_u64("DASHBOARD_FETCH_RETRIES", 2) as u32,
            retry_backoff: Duration::from_millis(env_u64("DASHBOARD_RETRY_BACKOFF_MS", 300)),
        }
    }

    /// Backoff before the given zero-based retry, doubling each time.
    pub(crate) fn backoff_for(&self, retry: u32) -> Duration {
        self.retry_backoff.saturating_mul(2u32.saturating_pow(retry))
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            fetch_timeout: Duration::from_secs(10),
            retries: 2,
            retry_backoff: Duration::from_millis(300),
        }
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert_eq!(config.retries, 2);
        assert_eq!(config.retry_backoff, Duration::from_millis(300));
    }

    #[test]
    fn test_backoff_doubles_per_retry() {
        let config = CacheConfig::default();
        assert_eq!(config.backoff_for(0), Duration::from_millis(300));
        assert_eq!(config.backoff_for(1), Duration::from_millis(600));
        assert_eq!(config.backoff_for(2), Duration::from_millis(1200));
    }
}
