//! Enrollment groups and their wire mapping.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::{CicloEscolarId, GrupoId};
use crate::value_types::{LenientEnum, Modalidad, Nivel};

/// An enrollment group: a named set of students within one level, grade,
/// and instruction mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Grupo {
    pub id: GrupoId,
    pub nombre: String,
    pub nivel: Nivel,
    pub modalidad: Modalidad,
    pub grado: String,
    pub ciclo_escolar_id: Option<CicloEscolarId>,
}

/// Abbreviated group reference embedded inside student records.
#[derive(Debug, Clone, PartialEq)]
pub struct GrupoResumen {
    pub id: GrupoId,
    pub nombre: String,
}

/// Wire shape of a group record.
#[derive(Debug, Clone, Deserialize)]
pub struct GrupoResponse {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub nivel: Option<String>,
    #[serde(default)]
    pub modalidad: Option<String>,
    pub grado: String,
    #[serde(default)]
    pub ciclo_escolar_id: Option<i64>,
}

/// Wire shape of the group reference nested in student records.
#[derive(Debug, Clone, Deserialize)]
pub struct GrupoResumenResponse {
    pub id: i64,
    pub nombre: String,
}

impl From<GrupoResponse> for Grupo {
    fn from(raw: GrupoResponse) -> Self {
        Grupo {
            id: GrupoId::new(raw.id),
            nombre: raw.nombre,
            nivel: Nivel::from_raw_opt(raw.nivel.as_deref()),
            modalidad: Modalidad::from_raw_opt(raw.modalidad.as_deref()),
            grado: raw.grado,
            ciclo_escolar_id: raw.ciclo_escolar_id.map(CicloEscolarId::new),
        }
    }
}

impl From<GrupoResumenResponse> for GrupoResumen {
    fn from(raw: GrupoResumenResponse) -> Self {
        GrupoResumen {
            id: GrupoId::new(raw.id),
            nombre: raw.nombre,
        }
    }
}

/// Request body for creating a group.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateGrupoDto {
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
    pub nivel: Nivel,
    pub modalidad: Modalidad,
    pub grado: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciclo_escolar_id: Option<CicloEscolarId>,
}
