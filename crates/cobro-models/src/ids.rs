//! Strongly-typed ID newtypes for domain entities.
//!
//! The billing API identifies every record with an integer. Each entity gets
//! its own newtype wrapper so ids cannot be crossed (passing an
//! `EstudianteId` where an `AdeudoId` is expected is a compile error).
//!
//! # Example
//!
//! ```ignore
//! use cobro_models::ids::{AdeudoId, EstudianteId};
//!
//! fn get_adeudo(id: AdeudoId) { /* ... */ }
//!
//! let adeudo_id = AdeudoId::new(42);
//! get_adeudo(adeudo_id);                 // OK
//! // get_adeudo(EstudianteId::new(42));  // Compile error! Type mismatch.
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a strongly-typed ID newtype around the API's integer ids.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Wraps a raw id.
            #[inline]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// The raw integer value.
            #[inline]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of a debt record.
    AdeudoId
);

define_id!(
    /// Identifier of a fee concept.
    ConceptoId
);

define_id!(
    /// Identifier of a student.
    EstudianteId
);

define_id!(
    /// Identifier of a payment.
    PagoId
);

define_id!(
    /// Identifier of a console user.
    UsuarioId
);

define_id!(
    /// Identifier of an enrollment group.
    GrupoId
);

define_id!(
    /// Identifier of an academic cycle.
    CicloEscolarId
);

define_id!(
    /// Identifier of an education-level catalog row.
    NivelId
);

define_id!(
    /// Identifier of an instruction-mode catalog row.
    ModalidadId
);
