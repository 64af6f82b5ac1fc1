use std::sync::Arc;

use tracing::instrument;
use validator::Validate;

use cobro_client::CicloEscolarRepository;
use cobro_models::{CicloEscolar, CreateCicloEscolarDto};

use crate::error::ServiceError;

/// Academic-cycle operations over the injected repository.
#[derive(Clone)]
pub struct CicloEscolarService {
    repo: Arc<dyn CicloEscolarRepository>,
}

impl CicloEscolarService {
    pub fn new(repo: Arc<dyn CicloEscolarRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn listar(&self) -> Result<Vec<CicloEscolar>, ServiceError> {
        Ok(self.repo.listar().await?)
    }

    #[instrument(skip(self, dto))]
    pub async fn crear(&self, dto: &CreateCicloEscolarDto) -> Result<CicloEscolar, ServiceError> {
        dto.validate()?;
        Ok(self.repo.crear(dto).await?)
    }
}
