use std::sync::Arc;

use tracing::instrument;

use cobro_client::{ModalidadRepository, NivelRepository};
use cobro_models::{ModalidadCatalogo, NivelCatalogo};

use crate::error::ServiceError;

/// Read access to the server-side level and mode catalogs.
///
/// The catalogs map classifier codes to the numeric ids the bulk
/// debt-generation endpoint expects; see
/// [`nivel_id_por_codigo`](cobro_models::nivel_id_por_codigo) and
/// [`modalidad_id_por_codigo`](cobro_models::modalidad_id_por_codigo).
#[derive(Clone)]
pub struct CatalogoService {
    niveles: Arc<dyn NivelRepository>,
    modalidades: Arc<dyn ModalidadRepository>,
}

impl CatalogoService {
    pub fn new(niveles: Arc<dyn NivelRepository>, modalidades: Arc<dyn ModalidadRepository>) -> Self {
        Self {
            niveles,
            modalidades,
        }
    }

    #[instrument(skip(self))]
    pub async fn niveles(&self) -> Result<Vec<NivelCatalogo>, ServiceError> {
        Ok(self.niveles.listar().await?)
    }

    #[instrument(skip(self))]
    pub async fn modalidades(&self) -> Result<Vec<ModalidadCatalogo>, ServiceError> {
        Ok(self.modalidades.listar().await?)
    }
}
