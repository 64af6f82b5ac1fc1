//! Academic cycles ("ciclos escolares") and their wire mapping.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use cobro_core::errors::MapError;
use cobro_core::parse::parse_fecha;

use crate::ids::CicloEscolarId;

/// An academic cycle, e.g. `2024-2025`. Debt generation always targets one
/// cycle; at most one is active at a time (server-enforced).
#[derive(Debug, Clone, PartialEq)]
pub struct CicloEscolar {
    pub id: CicloEscolarId,
    pub nombre: String,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    pub activo: bool,
}

/// Wire shape of an academic cycle.
#[derive(Debug, Clone, Deserialize)]
pub struct CicloEscolarResponse {
    pub id: i64,
    pub nombre: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub activo: bool,
}

impl TryFrom<CicloEscolarResponse> for CicloEscolar {
    type Error = MapError;

    fn try_from(raw: CicloEscolarResponse) -> Result<Self, Self::Error> {
        Ok(CicloEscolar {
            id: CicloEscolarId::new(raw.id),
            nombre: raw.nombre,
            fecha_inicio: parse_fecha("fecha_inicio", &raw.fecha_inicio)?,
            fecha_fin: parse_fecha("fecha_fin", &raw.fecha_fin)?,
            activo: raw.activo,
        })
    }
}

/// Request body for creating an academic cycle.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateCicloEscolarDto {
    #[validate(length(min = 1, max = 50))]
    pub nombre: String,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
}
