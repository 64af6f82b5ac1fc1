//! Enrollment-group repository.

use async_trait::async_trait;
use cobro_core::ApiError;
use cobro_models::{CreateGrupoDto, Grupo, GrupoId, GrupoResponse};

use crate::http::ApiClient;

/// Access to enrollment groups.
#[async_trait]
pub trait GrupoRepository: Send + Sync {
    /// Lists every group.
    async fn listar(&self) -> Result<Vec<Grupo>, ApiError>;

    /// Fetches one group by id.
    async fn obtener(&self, id: GrupoId) -> Result<Grupo, ApiError>;

    /// Registers a new group.
    async fn crear(&self, dto: &CreateGrupoDto) -> Result<Grupo, ApiError>;
}

/// [`GrupoRepository`] backed by the remote billing API.
#[derive(Clone)]
pub struct HttpGrupoRepository {
    client: ApiClient,
}

impl HttpGrupoRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GrupoRepository for HttpGrupoRepository {
    async fn listar(&self) -> Result<Vec<Grupo>, ApiError> {
        let rows: Vec<GrupoResponse> = self.client.get("/grupos").await?;
        Ok(rows.into_iter().map(Grupo::from).collect())
    }

    async fn obtener(&self, id: GrupoId) -> Result<Grupo, ApiError> {
        let row: GrupoResponse = self.client.get(&format!("/grupos/{id}")).await?;
        Ok(Grupo::from(row))
    }

    async fn crear(&self, dto: &CreateGrupoDto) -> Result<Grupo, ApiError> {
        let row: GrupoResponse = self.client.post("/grupos", dto).await?;
        Ok(Grupo::from(row))
    }
}
