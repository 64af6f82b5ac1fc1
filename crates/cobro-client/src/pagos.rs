//! Payment repository.

use async_trait::async_trait;
use cobro_core::ApiError;
use cobro_models::{CreatePagoDto, Pago, PagoFiltro, PagoResponse};

use crate::http::ApiClient;

/// Access to payment records.
#[async_trait]
pub trait PagoRepository: Send + Sync {
    /// Lists payments matching the filter.
    async fn listar(&self, filtro: &PagoFiltro) -> Result<Vec<Pago>, ApiError>;

    /// Registers a payment, optionally settling the referenced debts.
    async fn crear(&self, dto: &CreatePagoDto) -> Result<Pago, ApiError>;
}

/// [`PagoRepository`] backed by the remote billing API.
#[derive(Clone)]
pub struct HttpPagoRepository {
    client: ApiClient,
}

impl HttpPagoRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PagoRepository for HttpPagoRepository {
    async fn listar(&self, filtro: &PagoFiltro) -> Result<Vec<Pago>, ApiError> {
        let rows: Vec<PagoResponse> = self
            .client
            .get_with_query("/pagos", &filtro.query())
            .await?;
        rows.into_iter()
            .map(|row| Pago::try_from(row).map_err(ApiError::from))
            .collect()
    }

    async fn crear(&self, dto: &CreatePagoDto) -> Result<Pago, ApiError> {
        let row: PagoResponse = self.client.post("/pagos", dto).await?;
        Ok(Pago::try_from(row)?)
    }
}
