//! Errors surfaced by the service layer.

use cobro_core::errors::ApiError;
use cobro_models::Nivel;

/// Failure of a console-level operation.
///
/// Local validation failures never reach the wire; everything else wraps
/// the client error unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request body failed local validation.
    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// The grade is not offered within the chosen level.
    #[error("grado {grado:?} is not valid for nivel {nivel}")]
    GradoInvalido { nivel: Nivel, grado: String },

    #[error(transparent)]
    Api(#[from] ApiError),
}
