//! Console-user repository.

use async_trait::async_trait;
use cobro_core::ApiError;
use cobro_models::{CreateUsuarioDto, Usuario, UsuarioResponse};

use crate::http::ApiClient;

/// Access to console user accounts.
#[async_trait]
pub trait UsuarioRepository: Send + Sync {
    /// Lists every user account.
    async fn listar(&self) -> Result<Vec<Usuario>, ApiError>;

    /// Registers a new user account.
    async fn crear(&self, dto: &CreateUsuarioDto) -> Result<Usuario, ApiError>;
}

/// [`UsuarioRepository`] backed by the remote billing API.
#[derive(Clone)]
pub struct HttpUsuarioRepository {
    client: ApiClient,
}

impl HttpUsuarioRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UsuarioRepository for HttpUsuarioRepository {
    async fn listar(&self) -> Result<Vec<Usuario>, ApiError> {
        let rows: Vec<UsuarioResponse> = self.client.get("/usuarios").await?;
        Ok(rows.into_iter().map(Usuario::from).collect())
    }

    async fn crear(&self, dto: &CreateUsuarioDto) -> Result<Usuario, ApiError> {
        let row: UsuarioResponse = self.client.post("/usuarios", dto).await?;
        Ok(Usuario::from(row))
    }
}
