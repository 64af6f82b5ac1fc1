use std::sync::Arc;

use tracing::instrument;
use validator::Validate;

use cobro_client::GrupoRepository;
use cobro_models::{CreateGrupoDto, Grupo, GrupoId, grado_valido};

use crate::error::ServiceError;

/// Group operations over the injected repository.
#[derive(Clone)]
pub struct GrupoService {
    repo: Arc<dyn GrupoRepository>,
}

impl GrupoService {
    pub fn new(repo: Arc<dyn GrupoRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn listar(&self) -> Result<Vec<Grupo>, ServiceError> {
        Ok(self.repo.listar().await?)
    }

    #[instrument(skip(self))]
    pub async fn obtener(&self, id: GrupoId) -> Result<Grupo, ServiceError> {
        Ok(self.repo.obtener(id).await?)
    }

    /// Validates and registers a group. As with students, the grade must
    /// exist within the chosen level.
    #[instrument(skip(self, dto))]
    pub async fn crear(&self, dto: &CreateGrupoDto) -> Result<Grupo, ServiceError> {
        dto.validate()?;
        if !grado_valido(dto.nivel, &dto.grado) {
            return Err(ServiceError::GradoInvalido {
                nivel: dto.nivel,
                grado: dto.grado.clone(),
            });
        }
        Ok(self.repo.crear(dto).await?)
    }
}
