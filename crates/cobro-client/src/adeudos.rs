//! Debt repository, including the bulk generation operation.

use async_trait::async_trait;
use cobro_core::ApiError;
use cobro_models::{Adeudo, AdeudoFiltro, AdeudoId, AdeudoResponse, GenerarAdeudosRequest};

use crate::http::ApiClient;

/// Read access to debt records plus the bulk `generar` operation.
#[async_trait]
pub trait AdeudoRepository: Send + Sync {
    /// Lists debts matching the filter.
    async fn listar(&self, filtro: &AdeudoFiltro) -> Result<Vec<Adeudo>, ApiError>;

    /// Fetches one debt by id, with its nested payments.
    async fn obtener(&self, id: AdeudoId) -> Result<Adeudo, ApiError>;

    /// Asks the server to generate debts for every student in the given
    /// cycle, level and mode. Answers with the server's confirmation
    /// message; no generated records come back.
    async fn generar(&self, request: &GenerarAdeudosRequest) -> Result<String, ApiError>;
}

/// [`AdeudoRepository`] backed by the remote billing API.
#[derive(Clone)]
pub struct HttpAdeudoRepository {
    client: ApiClient,
}

impl HttpAdeudoRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AdeudoRepository for HttpAdeudoRepository {
    async fn listar(&self, filtro: &AdeudoFiltro) -> Result<Vec<Adeudo>, ApiError> {
        let rows: Vec<AdeudoResponse> = self
            .client
            .get_with_query("/adeudos", &filtro.query())
            .await?;
        rows.into_iter()
            .map(|row| Adeudo::try_from(row).map_err(ApiError::from))
            .collect()
    }

    async fn obtener(&self, id: AdeudoId) -> Result<Adeudo, ApiError> {
        let row: AdeudoResponse = self.client.get(&format!("/adeudos/{id}")).await?;
        Ok(Adeudo::try_from(row)?)
    }

    async fn generar(&self, request: &GenerarAdeudosRequest) -> Result<String, ApiError> {
        self.client.post_for_message("/adeudos/generar", request).await
    }
}
