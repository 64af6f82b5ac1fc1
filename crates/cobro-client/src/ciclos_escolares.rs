//! Academic-cycle repository.

use async_trait::async_trait;
use cobro_core::ApiError;
use cobro_models::{CicloEscolar, CicloEscolarResponse, CreateCicloEscolarDto};

use crate::http::ApiClient;

/// Access to academic cycles.
#[async_trait]
pub trait CicloEscolarRepository: Send + Sync {
    /// Lists every academic cycle.
    async fn listar(&self) -> Result<Vec<CicloEscolar>, ApiError>;

    /// Registers a new academic cycle.
    async fn crear(&self, dto: &CreateCicloEscolarDto) -> Result<CicloEscolar, ApiError>;
}

/// [`CicloEscolarRepository`] backed by the remote billing API.
#[derive(Clone)]
pub struct HttpCicloEscolarRepository {
    client: ApiClient,
}

impl HttpCicloEscolarRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CicloEscolarRepository for HttpCicloEscolarRepository {
    async fn listar(&self) -> Result<Vec<CicloEscolar>, ApiError> {
        let rows: Vec<CicloEscolarResponse> = self.client.get("/ciclos-escolares").await?;
        rows.into_iter()
            .map(|row| CicloEscolar::try_from(row).map_err(ApiError::from))
            .collect()
    }

    async fn crear(&self, dto: &CreateCicloEscolarDto) -> Result<CicloEscolar, ApiError> {
        let row: CicloEscolarResponse = self.client.post("/ciclos-escolares", dto).await?;
        Ok(CicloEscolar::try_from(row)?)
    }
}
