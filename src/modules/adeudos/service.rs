use std::sync::Arc;

use tracing::instrument;

use cobro_client::AdeudoRepository;
use cobro_models::{Adeudo, AdeudoFiltro, AdeudoId, GenerarAdeudosRequest};

use crate::error::ServiceError;

/// Debt operations over the injected repository.
#[derive(Clone)]
pub struct AdeudoService {
    repo: Arc<dyn AdeudoRepository>,
}

impl AdeudoService {
    pub fn new(repo: Arc<dyn AdeudoRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn listar(&self, filtro: &AdeudoFiltro) -> Result<Vec<Adeudo>, ServiceError> {
        Ok(self.repo.listar(filtro).await?)
    }

    #[instrument(skip(self))]
    pub async fn obtener(&self, id: AdeudoId) -> Result<Adeudo, ServiceError> {
        Ok(self.repo.obtener(id).await?)
    }

    /// Asks the server to generate debts for every active student of the
    /// requested cycle, level and mode. Answers with the server's
    /// confirmation message.
    #[instrument(skip(self))]
    pub async fn generar(&self, request: &GenerarAdeudosRequest) -> Result<String, ServiceError> {
        Ok(self.repo.generar(request).await?)
    }
}
