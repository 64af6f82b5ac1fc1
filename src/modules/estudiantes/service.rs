use std::sync::Arc;

use tracing::instrument;
use validator::Validate;

use cobro_client::EstudianteRepository;
use cobro_models::{
    CreateEstudianteDto, Estudiante, EstudianteFiltro, EstudianteId, UpdateEstudianteDto,
    grado_valido,
};

use crate::error::ServiceError;

/// Student operations over the injected repository.
#[derive(Clone)]
pub struct EstudianteService {
    repo: Arc<dyn EstudianteRepository>,
}

impl EstudianteService {
    pub fn new(repo: Arc<dyn EstudianteRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn listar(&self, filtro: &EstudianteFiltro) -> Result<Vec<Estudiante>, ServiceError> {
        Ok(self.repo.listar(filtro).await?)
    }

    #[instrument(skip(self))]
    pub async fn obtener(&self, id: EstudianteId) -> Result<Estudiante, ServiceError> {
        Ok(self.repo.obtener(id).await?)
    }

    /// Validates and registers a student.
    ///
    /// Besides the field rules on the DTO, the grade must exist within the
    /// chosen level; the server enforces the same rule, but failing locally
    /// keeps a doomed request off the wire.
    #[instrument(skip(self, dto))]
    pub async fn crear(&self, dto: &CreateEstudianteDto) -> Result<Estudiante, ServiceError> {
        dto.validate()?;
        if !grado_valido(dto.nivel, &dto.grado) {
            return Err(ServiceError::GradoInvalido {
                nivel: dto.nivel,
                grado: dto.grado.clone(),
            });
        }
        Ok(self.repo.crear(dto).await?)
    }

    #[instrument(skip(self, dto))]
    pub async fn actualizar(
        &self,
        id: EstudianteId,
        dto: &UpdateEstudianteDto,
    ) -> Result<Estudiante, ServiceError> {
        dto.validate()?;
        Ok(self.repo.actualizar(id, dto).await?)
    }

    #[instrument(skip(self))]
    pub async fn eliminar(&self, id: EstudianteId) -> Result<(), ServiceError> {
        Ok(self.repo.eliminar(id).await?)
    }
}
