use std::sync::Arc;

use tracing::instrument;
use validator::Validate;

use cobro_client::ConceptoRepository;
use cobro_models::{Concepto, CreateConceptoDto};

use crate::error::ServiceError;

/// Fee-concept operations over the injected repository.
#[derive(Clone)]
pub struct ConceptoService {
    repo: Arc<dyn ConceptoRepository>,
}

impl ConceptoService {
    pub fn new(repo: Arc<dyn ConceptoRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn listar(&self) -> Result<Vec<Concepto>, ServiceError> {
        Ok(self.repo.listar().await?)
    }

    /// Validates and registers a fee concept. The amount must be strictly
    /// positive.
    #[instrument(skip(self, dto))]
    pub async fn crear(&self, dto: &CreateConceptoDto) -> Result<Concepto, ServiceError> {
        dto.validate()?;
        Ok(self.repo.crear(dto).await?)
    }
}
