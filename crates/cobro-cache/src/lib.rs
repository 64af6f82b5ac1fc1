//! # Cobro Cache
//!
//! In-process cache for the dashboard aggregate snapshot.
//!
//! The remote billing API recomputes the dashboard metrics on every request,
//! so the console keeps the last snapshot warm for a few minutes instead of
//! refetching on every navigation. The cache is constructor-injected, holds
//! its state behind a single-flight machine so concurrent cold reads share
//! one network request, and bounds every fetch attempt with a timeout and
//! bounded retries.
//!
//! # Modules
//!
//! - [`config`]: TTL/timeout/retry tuning loaded from the environment
//! - [`dashboard`]: the [`DashboardCache`] state machine
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use cobro_cache::{CacheConfig, DashboardCache};
//! use cobro_client::{ApiClient, HttpDashboardRepository};
//!
//! let repo = Arc::new(HttpDashboardRepository::new(client));
//! let cache = DashboardCache::new(repo, CacheConfig::from_env());
//!
//! let resumen = cache.get().await?;      // fetches (cold)
//! let cached = cache.get().await?;       // served from memory (warm)
//! let fresh = cache.refresh().await?;    // always fetches
//! ```

pub mod config;
pub mod dashboard;

// Re-export commonly used types at crate root
pub use config::CacheConfig;
pub use dashboard::{CacheError, DashboardCache};
