//! # Cobro Config
//!
//! Configuration types for the Cobro console.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`api`]: billing API connection configuration
//!
//! # Example
//!
//! ```ignore
//! use cobro_config::ApiConfig;
//!
//! // Load from environment
//! let api_config = ApiConfig::from_env();
//! ```

pub mod api;

// Re-export commonly used types at crate root
pub use api::ApiConfig;
