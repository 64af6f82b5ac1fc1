//! # Cobro Console
//!
//! Administrative console for a school billing API: students, enrollment
//! groups, fee concepts, debts, payments, and the financial dashboard of a
//! Mexican private school, operated from the terminal.
//!
//! ## Overview
//!
//! The console is a thin, typed front over the remote billing API:
//!
//! - **Typed domain**: classifier codes (`estado`, `nivel`, `modalidad`,
//!   `periodo`) become closed enums at the edge; money is `rust_decimal`,
//!   dates are `chrono::NaiveDate`
//! - **Repositories**: one trait per entity over the HTTP client, so every
//!   service can be exercised against a fake
//! - **Stores**: each entity keeps its latest list in a subscribable
//!   [`store::ListStore`] slot
//! - **Dashboard cache**: one TTL cache with single-flight fetching keeps
//!   repeated dashboard reads off the API
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── modules/           # Feature modules
//! │   ├── estudiantes/  # Students (list, get, create, update, delete)
//! │   ├── adeudos/      # Debts (list, get, bulk generation)
//! │   ├── conceptos/    # Fee concepts
//! │   ├── pagos/        # Payments
//! │   ├── grupos/       # Enrollment groups
//! │   ├── ciclos_escolares/ # Academic cycles
//! │   ├── usuarios/     # Console accounts
//! │   └── catalogos/    # Level / mode catalogs
//! ├── error.rs           # Service-level error type
//! ├── logging.rs         # Tracing setup
//! ├── state.rs           # AppState wiring
//! └── store.rs           # Reactive list state
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: module exports
//! - `service.rs`: operations plus local validation
//! - `store.rs`: the subscribable list slot
//!
//! ## Quick Start
//!
//! ```bash
//! COBRO_API_URL=https://billing.example.mx/api
//! COBRO_API_TOKEN=secret-bearer-token
//! DASHBOARD_CACHE_TTL_SECONDS=300
//! ```
//!
//! ```bash
//! cobro estudiantes --nivel primaria --activos
//! cobro dashboard --refresh
//! cobro generar-adeudos --ciclo 2 --nivel secundaria --modalidad presencial
//! ```
//!
//! ## Modules
//!
//! - [`error`]: the service-level error type
//! - [`logging`]: tracing subscriber setup
//! - [`modules`]: feature modules (estudiantes, adeudos, pagos, ...)
//! - [`state`]: shared application state
//! - [`store`]: reactive list state primitives

pub mod error;
pub mod logging;
pub mod modules;
pub mod state;
pub mod store;

pub use error::ServiceError;
pub use state::AppState;
pub use store::{ListState, ListStore};

// Re-export workspace crates for convenience
pub use cobro_cache;
pub use cobro_client;
pub use cobro_config;
pub use cobro_core;
pub use cobro_models;
