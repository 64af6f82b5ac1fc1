//! Response envelope used by every endpoint of the remote API.
//!
//! All payloads arrive wrapped as `{ "success": bool, "data": T }`, with an
//! optional human-readable `message` (always present on rejections and on
//! the bulk debt-generation confirmation, which carries no `data` at all).

use serde::Deserialize;

use crate::errors::ApiError;

/// The `{ success, message, data }` wrapper around every API payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwraps the payload, turning `success: false` into
    /// [`ApiError::Rejected`] and a missing payload into
    /// [`ApiError::MissingData`].
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected {
                message: self
                    .message
                    .unwrap_or_else(|| "unspecified rejection".to_string()),
            });
        }
        self.data.ok_or(ApiError::MissingData)
    }

    /// Unwraps confirmation-style responses that carry only a message
    /// (the bulk `generar` operation answers this way).
    pub fn into_message(self) -> Result<String, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected {
                message: self
                    .message
                    .unwrap_or_else(|| "unspecified rejection".to_string()),
            });
        }
        Ok(self.message.unwrap_or_default())
    }
}
