//! # Cobro CLI
//!
//! API seeding utilities for Cobro development and demo environments.
//!
//! This library crate provides the seeding functionality behind the
//! console's `seed` subcommand.
//!
//! ## Usage
//!
//! ```ignore
//! use cobro_cli::seeder::{SeedConfig, seed_api};
//!
//! let config = SeedConfig::new(40); // 40 students with defaults
//! seed_api(&client, &config).await?;
//! ```

pub mod seeder;
