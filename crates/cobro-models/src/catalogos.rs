//! Server-side classifier catalogs.
//!
//! The API exposes levels and instruction modes as catalog rows with their
//! own integer ids; the bulk debt-generation operation addresses cohorts by
//! those ids, not by code. Catalog rows are mapped strictly: silently
//! remapping a malformed row to a default level would target the wrong
//! cohort.

use serde::Deserialize;

use cobro_core::errors::MapError;

use crate::ids::{ModalidadId, NivelId};
use crate::value_types::{ClosedEnum, Modalidad, Nivel};

/// A level catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NivelCatalogo {
    pub id: NivelId,
    pub nivel: Nivel,
}

/// An instruction-mode catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalidadCatalogo {
    pub id: ModalidadId,
    pub modalidad: Modalidad,
}

/// Wire shape of a catalog row: id plus raw code.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogoResponse {
    pub id: i64,
    pub nombre: String,
}

impl TryFrom<CatalogoResponse> for NivelCatalogo {
    type Error = MapError;

    fn try_from(raw: CatalogoResponse) -> Result<Self, Self::Error> {
        Ok(NivelCatalogo {
            id: NivelId::new(raw.id),
            nivel: Nivel::parse(&raw.nombre)?,
        })
    }
}

impl TryFrom<CatalogoResponse> for ModalidadCatalogo {
    type Error = MapError;

    fn try_from(raw: CatalogoResponse) -> Result<Self, Self::Error> {
        Ok(ModalidadCatalogo {
            id: ModalidadId::new(raw.id),
            modalidad: Modalidad::parse(&raw.nombre)?,
        })
    }
}

/// Finds the catalog id for a level code.
pub fn nivel_id_por_codigo(catalogo: &[NivelCatalogo], nivel: Nivel) -> Option<NivelId> {
    catalogo
        .iter()
        .find(|fila| fila.nivel == nivel)
        .map(|fila| fila.id)
}

/// Finds the catalog id for an instruction-mode code.
pub fn modalidad_id_por_codigo(
    catalogo: &[ModalidadCatalogo],
    modalidad: Modalidad,
) -> Option<ModalidadId> {
    catalogo
        .iter()
        .find(|fila| fila.modalidad == modalidad)
        .map(|fila| fila.id)
}
