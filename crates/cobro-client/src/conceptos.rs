//! Fee-concept repository.

use async_trait::async_trait;
use cobro_core::ApiError;
use cobro_models::{Concepto, ConceptoResponse, CreateConceptoDto};

use crate::http::ApiClient;

/// Access to fee-concept definitions.
#[async_trait]
pub trait ConceptoRepository: Send + Sync {
    /// Lists every fee concept.
    async fn listar(&self) -> Result<Vec<Concepto>, ApiError>;

    /// Registers a new fee concept.
    async fn crear(&self, dto: &CreateConceptoDto) -> Result<Concepto, ApiError>;
}

/// [`ConceptoRepository`] backed by the remote billing API.
#[derive(Clone)]
pub struct HttpConceptoRepository {
    client: ApiClient,
}

impl HttpConceptoRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ConceptoRepository for HttpConceptoRepository {
    async fn listar(&self) -> Result<Vec<Concepto>, ApiError> {
        let rows: Vec<ConceptoResponse> = self.client.get("/conceptos").await?;
        rows.into_iter()
            .map(|row| Concepto::try_from(row).map_err(ApiError::from))
            .collect()
    }

    async fn crear(&self, dto: &CreateConceptoDto) -> Result<Concepto, ApiError> {
        let row: ConceptoResponse = self.client.post("/conceptos", dto).await?;
        Ok(Concepto::try_from(row)?)
    }
}
