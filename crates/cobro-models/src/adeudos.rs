//! Debt records ("adeudos") and their wire mapping.
//!
//! The debt is the richest wire shape the API returns: it embeds its fee
//! concept, its student, and optionally the payments applied to it. Each
//! nested record goes through its own mapper; classifier codes inside them
//! follow the lenient path so one malformed denormalized code cannot take a
//! whole list view down, while periodo/tipo/metodo stay strict.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cobro_core::errors::MapError;
use cobro_core::parse::{parse_decimal, parse_fecha};

use crate::conceptos::{Concepto, ConceptoResponse};
use crate::estudiantes::{Estudiante, EstudianteResponse};
use crate::ids::{AdeudoId, CicloEscolarId, EstudianteId, ModalidadId, NivelId};
use crate::pagos::{Pago, PagoResponse};
use crate::value_types::{Estado, LenientEnum};

/// A debt linking one student to one fee concept.
///
/// `monto_pendiente + monto_pagado` is expected to equal `monto_total`; that
/// invariant is owned by the server and not re-checked here.
#[derive(Debug, Clone, PartialEq)]
pub struct Adeudo {
    pub id: AdeudoId,
    pub concepto: Concepto,
    pub estudiante: Estudiante,
    pub estado: Estado,
    pub monto_pendiente: Decimal,
    pub monto_pagado: Decimal,
    pub monto_total: Decimal,
    pub fecha_inicio: NaiveDate,
    pub fecha_vencimiento: NaiveDate,
    /// Payments applied to this debt; empty when the API omits them.
    pub pagos: Vec<Pago>,
}

/// Wire shape of a debt record.
#[derive(Debug, Clone, Deserialize)]
pub struct AdeudoResponse {
    pub id: i64,
    pub concepto: ConceptoResponse,
    pub estudiante: EstudianteResponse,
    pub estado: String,
    pub pendiente: String,
    pub pagado: String,
    pub total: String,
    pub fecha_inicio: String,
    pub fecha_vencimiento: String,
    #[serde(default)]
    pub pagos: Option<Vec<PagoResponse>>,
}

impl TryFrom<AdeudoResponse> for Adeudo {
    type Error = MapError;

    fn try_from(raw: AdeudoResponse) -> Result<Self, Self::Error> {
        let pagos = raw
            .pagos
            .unwrap_or_default()
            .into_iter()
            .map(Pago::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Adeudo {
            id: AdeudoId::new(raw.id),
            concepto: Concepto::try_from(raw.concepto)?,
            estudiante: Estudiante::from(raw.estudiante),
            estado: Estado::from_raw(&raw.estado),
            monto_pendiente: parse_decimal("pendiente", &raw.pendiente)?,
            monto_pagado: parse_decimal("pagado", &raw.pagado)?,
            monto_total: parse_decimal("total", &raw.total)?,
            fecha_inicio: parse_fecha("fecha_inicio", &raw.fecha_inicio)?,
            fecha_vencimiento: parse_fecha("fecha_vencimiento", &raw.fecha_vencimiento)?,
            pagos,
        })
    }
}

/// Filters for debt listings.
#[derive(Debug, Clone, Default)]
pub struct AdeudoFiltro {
    pub estudiante_id: Option<EstudianteId>,
    pub estado: Option<Estado>,
}

impl AdeudoFiltro {
    pub fn query(&self) -> Vec<(&'static str, String)> {
        use crate::value_types::ClosedEnum;

        let mut params = Vec::new();
        if let Some(estudiante_id) = self.estudiante_id {
            params.push(("estudiante_id", estudiante_id.to_string()));
        }
        if let Some(estado) = self.estado {
            params.push(("estado", estado.as_str().to_string()));
        }
        params
    }
}

/// Parameters for the bulk debt-generation operation: every active student
/// of the given level and mode in the given cycle receives the debts its
/// applicable concepts define.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenerarAdeudosRequest {
    pub ciclo_escolar_id: CicloEscolarId,
    pub modalidad_id: ModalidadId,
    pub nivel_id: NivelId,
}
