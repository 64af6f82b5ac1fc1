//! # Cobro Core
//!
//! Core types, errors, and parsing utilities for the Cobro console.
//!
//! This crate provides the foundational pieces shared by every layer of the
//! application:
//!
//! - [`errors`]: the error taxonomy for API access, wire-to-domain mapping,
//!   and closed-enumeration validation
//! - [`envelope`]: the `{ success, data }` response envelope the remote API
//!   wraps every payload in
//! - [`parse`]: boundary parsers for decimal-string amounts and date-only
//!   ISO-8601 values
//!
//! # Example
//!
//! ```ignore
//! use cobro_core::errors::MapError;
//! use cobro_core::parse::{parse_decimal, parse_fecha};
//!
//! let monto = parse_decimal("pendiente", "100.50")?;
//! let fecha = parse_fecha("fecha_inicio", "2024-01-15T00:00:00Z")?;
//! ```

pub mod envelope;
pub mod errors;
pub mod parse;

// Re-export commonly used types at crate root
pub use envelope::ApiEnvelope;
pub use errors::{ApiError, InvalidEnumValue, MapError};
pub use parse::{parse_decimal, parse_fecha};
