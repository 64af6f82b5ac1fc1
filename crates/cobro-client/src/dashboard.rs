//! Dashboard metrics repository.

use async_trait::async_trait;
use cobro_core::ApiError;
use cobro_models::{DashboardResumen, DashboardResumenResponse};

use crate::http::ApiClient;

/// Source of the aggregate dashboard snapshot.
///
/// The dashboard cache wraps an implementation of this trait; tests inject
/// counting fakes through it.
#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Fetches the current aggregate metrics snapshot.
    async fn resumen(&self) -> Result<DashboardResumen, ApiError>;
}

/// [`DashboardRepository`] backed by the remote billing API.
#[derive(Clone)]
pub struct HttpDashboardRepository {
    client: ApiClient,
}

impl HttpDashboardRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DashboardRepository for HttpDashboardRepository {
    async fn resumen(&self) -> Result<DashboardResumen, ApiError> {
        let row: DashboardResumenResponse = self.client.get("/dashboard/resumen").await?;
        Ok(DashboardResumen::try_from(row)?)
    }
}
