use std::sync::Arc;

use tracing::instrument;
use validator::Validate;

use cobro_client::UsuarioRepository;
use cobro_models::{CreateUsuarioDto, Usuario};

use crate::error::ServiceError;

/// Console-account operations over the injected repository.
#[derive(Clone)]
pub struct UsuarioService {
    repo: Arc<dyn UsuarioRepository>,
}

impl UsuarioService {
    pub fn new(repo: Arc<dyn UsuarioRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn listar(&self) -> Result<Vec<Usuario>, ServiceError> {
        Ok(self.repo.listar().await?)
    }

    #[instrument(skip(self, dto))]
    pub async fn crear(&self, dto: &CreateUsuarioDto) -> Result<Usuario, ServiceError> {
        dto.validate()?;
        Ok(self.repo.crear(dto).await?)
    }
}
