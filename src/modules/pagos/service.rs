use std::sync::Arc;

use tracing::instrument;
use validator::Validate;

use cobro_client::PagoRepository;
use cobro_models::{CreatePagoDto, Pago, PagoFiltro};

use crate::error::ServiceError;

/// Payment operations over the injected repository.
#[derive(Clone)]
pub struct PagoService {
    repo: Arc<dyn PagoRepository>,
}

impl PagoService {
    pub fn new(repo: Arc<dyn PagoRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn listar(&self, filtro: &PagoFiltro) -> Result<Vec<Pago>, ServiceError> {
        Ok(self.repo.listar(filtro).await?)
    }

    /// Validates and registers a payment against the listed debts.
    #[instrument(skip(self, dto))]
    pub async fn crear(&self, dto: &CreatePagoDto) -> Result<Pago, ServiceError> {
        dto.validate()?;
        Ok(self.repo.crear(dto).await?)
    }
}
