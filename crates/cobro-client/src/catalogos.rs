//! Server-side classifier catalogs.
//!
//! The bulk `generar` operation addresses levels and modes by their server
//! row ids, not by code. These two read-only repositories fetch the catalog
//! rows so callers can resolve a [`cobro_models::Nivel`] or
//! [`cobro_models::Modalidad`] into the id the server expects.

use async_trait::async_trait;
use cobro_core::ApiError;
use cobro_models::{CatalogoResponse, ModalidadCatalogo, NivelCatalogo};

use crate::http::ApiClient;

/// Read access to the education-level catalog.
#[async_trait]
pub trait NivelRepository: Send + Sync {
    /// Lists the level catalog rows.
    async fn listar(&self) -> Result<Vec<NivelCatalogo>, ApiError>;
}

/// Read access to the instruction-mode catalog.
#[async_trait]
pub trait ModalidadRepository: Send + Sync {
    /// Lists the mode catalog rows.
    async fn listar(&self) -> Result<Vec<ModalidadCatalogo>, ApiError>;
}

/// [`NivelRepository`] backed by the remote billing API.
#[derive(Clone)]
pub struct HttpNivelRepository {
    client: ApiClient,
}

impl HttpNivelRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NivelRepository for HttpNivelRepository {
    async fn listar(&self) -> Result<Vec<NivelCatalogo>, ApiError> {
        let rows: Vec<CatalogoResponse> = self.client.get("/niveles").await?;
        rows.into_iter()
            .map(|row| NivelCatalogo::try_from(row).map_err(ApiError::from))
            .collect()
    }
}

/// [`ModalidadRepository`] backed by the remote billing API.
#[derive(Clone)]
pub struct HttpModalidadRepository {
    client: ApiClient,
}

impl HttpModalidadRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ModalidadRepository for HttpModalidadRepository {
    async fn listar(&self) -> Result<Vec<ModalidadCatalogo>, ApiError> {
        let rows: Vec<CatalogoResponse> = self.client.get("/modalidades").await?;
        rows.into_iter()
            .map(|row| ModalidadCatalogo::try_from(row).map_err(ApiError::from))
            .collect()
    }
}
