//! Billing API connection configuration.
//!
//! This module provides configuration for the remote billing API
//! loaded from environment variables.

use std::env;

/// Billing API configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `COBRO_API_URL`: Base URL of the billing API (default: `http://localhost:8000/api`)
/// - `COBRO_API_TOKEN`: Bearer token sent with every request (default: none)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the billing API, without a trailing slash.
    pub base_url: String,

    /// Bearer token for authenticated requests, if the deployment requires one.
    pub token: Option<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// A trailing slash on `COBRO_API_URL` is stripped so request paths
    /// can always be joined with a leading slash. A blank `COBRO_API_TOKEN`
    /// is treated as absent.
    ///
    /// # Defaults
    ///
    /// - `COBRO_API_URL`: `http://localhost:8000/api`
    /// - `COBRO_API_TOKEN`: none
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("COBRO_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000/api".into())
            .trim_end_matches('/')
            .to_string();

        let token = env::var("COBRO_API_TOKEN")
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Self { base_url, token }
    }

    /// Build the config directly from a base URL, for tests and local tools.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".into(),
            token: None,
        }
    }
}
