//! Fee concepts ("conceptos") and their wire mapping.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use cobro_core::errors::{InvalidEnumValue, MapError};
use cobro_core::parse::parse_decimal;

use crate::ids::ConceptoId;
use crate::value_types::{ClosedEnum, LenientEnum, Modalidad, Nivel, Periodo};

/// Whether a concept generates debts on a schedule (`adeudo`) or is a
/// required one-off charge (`requerido`).
///
/// Strict-only, like [`Periodo`]: a fee definition with an unknown type must
/// never be silently reclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoConcepto {
    Adeudo,
    Requerido,
}

impl ClosedEnum for TipoConcepto {
    const KIND: &'static str = "tipo";
    const ALL: &'static [TipoConcepto] = &[TipoConcepto::Adeudo, TipoConcepto::Requerido];

    fn as_str(&self) -> &'static str {
        match self {
            TipoConcepto::Adeudo => "adeudo",
            TipoConcepto::Requerido => "requerido",
        }
    }

    fn display_value(&self) -> &'static str {
        match self {
            TipoConcepto::Adeudo => "Adeudo",
            TipoConcepto::Requerido => "Requerido",
        }
    }
}

impl fmt::Display for TipoConcepto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_value())
    }
}

impl FromStr for TipoConcepto {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A fee definition: what is billed, how often, and for whom.
///
/// `nivel`/`modalidad` are `None` when the concept applies school-wide.
#[derive(Debug, Clone, PartialEq)]
pub struct Concepto {
    pub id: ConceptoId,
    pub nombre: String,
    pub tipo: TipoConcepto,
    pub periodo: Periodo,
    pub nivel: Option<Nivel>,
    pub modalidad: Option<Modalidad>,
    pub costo: Decimal,
}

/// Wire shape of a fee concept.
#[derive(Debug, Clone, Deserialize)]
pub struct ConceptoResponse {
    pub id: i64,
    pub nombre: String,
    pub tipo: String,
    pub periodo: String,
    #[serde(default)]
    pub nivel: Option<String>,
    #[serde(default)]
    pub modalidad: Option<String>,
    pub costo: String,
}

impl TryFrom<ConceptoResponse> for Concepto {
    type Error = MapError;

    fn try_from(raw: ConceptoResponse) -> Result<Self, Self::Error> {
        Ok(Concepto {
            id: ConceptoId::new(raw.id),
            nombre: raw.nombre,
            tipo: TipoConcepto::parse(&raw.tipo)?,
            periodo: Periodo::parse(&raw.periodo)?,
            nivel: opcional_leniente::<Nivel>(raw.nivel.as_deref()),
            modalidad: opcional_leniente::<Modalidad>(raw.modalidad.as_deref()),
            costo: parse_decimal("costo", &raw.costo)?,
        })
    }
}

/// Lenient mapping for an optional scoping code: absent or blank means
/// school-wide (`None`); anything else goes through the lenient path.
fn opcional_leniente<T: LenientEnum>(raw: Option<&str>) -> Option<T> {
    match raw {
        None => None,
        Some(code) if code.trim().is_empty() => None,
        Some(code) => Some(T::from_raw(code)),
    }
}

/// `validator` rule shared by every DTO carrying a monetary amount.
pub fn validar_monto_positivo(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_positive() && !value.is_zero() {
        Ok(())
    } else {
        Err(ValidationError::new("monto_positivo").with_message("El monto debe ser mayor a cero".into()))
    }
}

/// Request body for creating a fee concept.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateConceptoDto {
    #[validate(length(min = 1, max = 150))]
    pub nombre: String,
    pub tipo: TipoConcepto,
    pub periodo: Periodo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nivel: Option<Nivel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modalidad: Option<Modalidad>,
    #[validate(custom(function = validar_monto_positivo))]
    pub costo: Decimal,
}
