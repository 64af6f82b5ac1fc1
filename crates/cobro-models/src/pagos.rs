//! Payment records and their wire mapping.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use cobro_core::errors::{InvalidEnumValue, MapError};
use cobro_core::parse::{parse_decimal, parse_fecha};

use crate::conceptos::validar_monto_positivo;
use crate::ids::{AdeudoId, EstudianteId, PagoId};
use crate::value_types::ClosedEnum;

/// How a payment was received.
///
/// Strict-only: silently reclassifying a transfer as cash would misreport
/// money handling, so an unknown method is always an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetodoPago {
    Efectivo,
    Transferencia,
}

impl ClosedEnum for MetodoPago {
    const KIND: &'static str = "metodo";
    const ALL: &'static [MetodoPago] = &[MetodoPago::Efectivo, MetodoPago::Transferencia];

    fn as_str(&self) -> &'static str {
        match self {
            MetodoPago::Efectivo => "efectivo",
            MetodoPago::Transferencia => "transferencia",
        }
    }

    fn display_value(&self) -> &'static str {
        match self {
            MetodoPago::Efectivo => "Efectivo",
            MetodoPago::Transferencia => "Transferencia",
        }
    }
}

impl fmt::Display for MetodoPago {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_value())
    }
}

impl FromStr for MetodoPago {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A received payment, identified by its human-readable folio.
#[derive(Debug, Clone, PartialEq)]
pub struct Pago {
    pub id: PagoId,
    pub estudiante_id: EstudianteId,
    pub folio: String,
    pub metodo: MetodoPago,
    pub monto: Decimal,
    pub fecha: NaiveDate,
}

/// Wire shape of a payment record.
#[derive(Debug, Clone, Deserialize)]
pub struct PagoResponse {
    pub id: i64,
    pub estudiante_id: i64,
    pub folio: String,
    pub metodo: String,
    pub monto: String,
    pub fecha: String,
}

impl TryFrom<PagoResponse> for Pago {
    type Error = MapError;

    fn try_from(raw: PagoResponse) -> Result<Self, Self::Error> {
        Ok(Pago {
            id: PagoId::new(raw.id),
            estudiante_id: EstudianteId::new(raw.estudiante_id),
            folio: raw.folio,
            metodo: MetodoPago::parse(&raw.metodo)?,
            monto: parse_decimal("monto", &raw.monto)?,
            fecha: parse_fecha("fecha", &raw.fecha)?,
        })
    }
}

/// Filters for payment listings.
#[derive(Debug, Clone, Default)]
pub struct PagoFiltro {
    pub estudiante_id: Option<EstudianteId>,
}

impl PagoFiltro {
    pub fn query(&self) -> Vec<(&'static str, String)> {
        self.estudiante_id
            .map(|id| ("estudiante_id", id.to_string()))
            .into_iter()
            .collect()
    }
}

/// Request body for registering a payment.
///
/// `adeudo_ids` lists the debts the payment settles; the server applies the
/// amount across them.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreatePagoDto {
    pub estudiante_id: EstudianteId,
    #[validate(length(min = 1, max = 50))]
    pub folio: String,
    pub metodo: MetodoPago,
    #[validate(custom(function = validar_monto_positivo))]
    pub monto: Decimal,
    pub fecha: NaiveDate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub adeudo_ids: Vec<AdeudoId>,
}
