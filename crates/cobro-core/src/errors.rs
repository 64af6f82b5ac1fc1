//! Error taxonomy for the Cobro console.
//!
//! Three layers of failure exist between the remote API and the domain:
//!
//! - [`InvalidEnumValue`]: a raw code does not belong to its closed
//!   enumeration (strict value-object construction).
//! - [`MapError`]: a wire-format record could not be converted into a domain
//!   entity (unparsable amount or date, or a strict enumeration failure).
//! - [`ApiError`]: the HTTP repository layer failed (transport, timeout,
//!   non-2xx status, rejected envelope, undecodable body, or a mapping
//!   failure while converting the payload).

use std::time::Duration;

/// Raised when a raw code is not a member of its closed enumeration.
///
/// Produced by the strict construction path of the value objects; the
/// lenient path substitutes the type's default instead of surfacing this.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} code: {value:?}")]
pub struct InvalidEnumValue {
    /// Which enumeration was consulted (`"estado"`, `"nivel"`, ...).
    pub kind: &'static str,
    /// The offending raw input, as received.
    pub value: String,
}

impl InvalidEnumValue {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Failure while converting a wire-format record into a domain entity.
///
/// Every variant names the wire field that failed so list-view errors can be
/// traced back to the offending record without re-fetching it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MapError {
    /// A monetary field did not hold a parsable decimal string.
    #[error("field `{field}` is not a decimal amount: {value:?}")]
    Monto {
        field: &'static str,
        value: String,
    },

    /// A date field did not start with a `YYYY-MM-DD` calendar date.
    #[error("field `{field}` is not an ISO-8601 date: {value:?}")]
    Fecha {
        field: &'static str,
        value: String,
    },

    /// A strictly-validated enumeration field held an unknown code.
    #[error(transparent)]
    Enum(#[from] InvalidEnumValue),
}

/// Errors surfaced by the HTTP repository layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, TLS, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A client-side deadline elapsed before the response arrived. Only the
    /// dashboard fetch arms one; other calls ride the transport default.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The server answered outside the 2xx range.
    #[error("API returned HTTP {status} for {path}")]
    Status { status: u16, path: String },

    /// The envelope arrived with `success: false`.
    #[error("API rejected the request: {message}")]
    Rejected { message: String },

    /// The body was not valid JSON for the expected shape.
    #[error("malformed API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The envelope reported success but carried no `data` payload.
    #[error("API response carried no data payload")]
    MissingData,

    /// The payload decoded but could not be mapped into the domain.
    #[error(transparent)]
    Map(#[from] MapError),
}

impl ApiError {
    /// Whether retrying the same request could plausibly succeed.
    ///
    /// Transport faults, timeouts, and 5xx answers are transient; everything
    /// else reflects the request or the payload itself and will fail again.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Transport(err) => !err.is_builder(),
            ApiError::Timeout(_) => true,
            ApiError::Status { status, .. } => *status >= 500,
            ApiError::Rejected { .. }
            | ApiError::Decode(_)
            | ApiError::MissingData
            | ApiError::Map(_) => false,
        }
    }
}
