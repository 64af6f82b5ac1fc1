//! Student records and their wire mapping.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::curp::{Curp, validar_curp};
use crate::grupos::{GrupoResumen, GrupoResumenResponse};
use crate::ids::{EstudianteId, GrupoId};
use crate::value_types::{ClosedEnum, LenientEnum, Modalidad, Nivel, NivelFiltro};

/// A student record.
///
/// The CURP arrives unchecked from the API (legacy rows predate validation);
/// new records are validated at the DTO boundary instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Estudiante {
    pub id: EstudianteId,
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub curp: Curp,
    pub nivel: Nivel,
    pub modalidad: Modalidad,
    pub grado: String,
    pub activo: bool,
    pub grupo: Option<GrupoResumen>,
}

impl Estudiante {
    /// Full display name, paternal surname first.
    pub fn nombre_completo(&self) -> String {
        format!(
            "{} {} {}",
            self.apellido_paterno, self.apellido_materno, self.nombre
        )
    }
}

/// Wire shape of a student record.
#[derive(Debug, Clone, Deserialize)]
pub struct EstudianteResponse {
    pub id: i64,
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub curp: String,
    #[serde(default)]
    pub nivel: Option<String>,
    #[serde(default)]
    pub modalidad: Option<String>,
    pub grado: String,
    pub activo: bool,
    #[serde(default)]
    pub grupo: Option<GrupoResumenResponse>,
}

impl From<EstudianteResponse> for Estudiante {
    fn from(raw: EstudianteResponse) -> Self {
        Estudiante {
            id: EstudianteId::new(raw.id),
            nombre: raw.nombre,
            apellido_paterno: raw.apellido_paterno,
            apellido_materno: raw.apellido_materno,
            curp: Curp::new_unchecked(raw.curp),
            nivel: Nivel::from_raw_opt(raw.nivel.as_deref()),
            modalidad: Modalidad::from_raw_opt(raw.modalidad.as_deref()),
            grado: raw.grado,
            activo: raw.activo,
            grupo: raw.grupo.map(GrupoResumen::from),
        }
    }
}

/// Filters for student listings.
#[derive(Debug, Clone, Default)]
pub struct EstudianteFiltro {
    pub nivel: NivelFiltro,
    pub modalidad: Option<Modalidad>,
    pub activo: Option<bool>,
    pub grupo_id: Option<GrupoId>,
}

impl EstudianteFiltro {
    /// Query parameters for the list endpoint. `General` adds no nivel
    /// constraint.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(nivel) = self.nivel.as_query() {
            params.push(("nivel", nivel.to_string()));
        }
        if let Some(modalidad) = self.modalidad {
            params.push(("modalidad", modalidad.as_str().to_string()));
        }
        if let Some(activo) = self.activo {
            params.push(("activo", activo.to_string()));
        }
        if let Some(grupo_id) = self.grupo_id {
            params.push(("grupo_id", grupo_id.to_string()));
        }
        params
    }
}

/// Request body for registering a student.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateEstudianteDto {
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
    #[validate(length(min = 1, max = 100))]
    pub apellido_paterno: String,
    #[validate(length(min = 1, max = 100))]
    pub apellido_materno: String,
    #[validate(custom(function = validar_curp))]
    pub curp: String,
    pub nivel: Nivel,
    pub modalidad: Modalidad,
    pub grado: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grupo_id: Option<GrupoId>,
}

/// Request body for updating a student. Absent fields stay untouched.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateEstudianteDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100))]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100))]
    pub apellido_paterno: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100))]
    pub apellido_materno: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grupo_id: Option<GrupoId>,
}
