//! Student repository.

use async_trait::async_trait;
use cobro_core::ApiError;
use cobro_models::{
    CreateEstudianteDto, Estudiante, EstudianteFiltro, EstudianteId, EstudianteResponse,
    UpdateEstudianteDto,
};

use crate::http::ApiClient;

/// Read/write access to student records.
#[async_trait]
pub trait EstudianteRepository: Send + Sync {
    /// Lists students matching the filter.
    async fn listar(&self, filtro: &EstudianteFiltro) -> Result<Vec<Estudiante>, ApiError>;

    /// Fetches one student by id.
    async fn obtener(&self, id: EstudianteId) -> Result<Estudiante, ApiError>;

    /// Registers a new student.
    async fn crear(&self, dto: &CreateEstudianteDto) -> Result<Estudiante, ApiError>;

    /// Applies a partial update to an existing student.
    async fn actualizar(
        &self,
        id: EstudianteId,
        dto: &UpdateEstudianteDto,
    ) -> Result<Estudiante, ApiError>;

    /// Removes a student.
    async fn eliminar(&self, id: EstudianteId) -> Result<(), ApiError>;
}

/// [`EstudianteRepository`] backed by the remote billing API.
#[derive(Clone)]
pub struct HttpEstudianteRepository {
    client: ApiClient,
}

impl HttpEstudianteRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EstudianteRepository for HttpEstudianteRepository {
    async fn listar(&self, filtro: &EstudianteFiltro) -> Result<Vec<Estudiante>, ApiError> {
        let rows: Vec<EstudianteResponse> = self
            .client
            .get_with_query("/estudiantes", &filtro.query())
            .await?;
        Ok(rows.into_iter().map(Estudiante::from).collect())
    }

    async fn obtener(&self, id: EstudianteId) -> Result<Estudiante, ApiError> {
        let row: EstudianteResponse = self.client.get(&format!("/estudiantes/{id}")).await?;
        Ok(Estudiante::from(row))
    }

    async fn crear(&self, dto: &CreateEstudianteDto) -> Result<Estudiante, ApiError> {
        let row: EstudianteResponse = self.client.post("/estudiantes", dto).await?;
        Ok(Estudiante::from(row))
    }

    async fn actualizar(
        &self,
        id: EstudianteId,
        dto: &UpdateEstudianteDto,
    ) -> Result<Estudiante, ApiError> {
        let row: EstudianteResponse = self
            .client
            .put(&format!("/estudiantes/{id}"), dto)
            .await?;
        Ok(Estudiante::from(row))
    }

    async fn eliminar(&self, id: EstudianteId) -> Result<(), ApiError> {
        self.client.delete(&format!("/estudiantes/{id}")).await
    }
}
