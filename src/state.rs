//! Process-wide wiring of the HTTP client, services, stores, and cache.

use std::sync::Arc;

use cobro_cache::{CacheConfig, DashboardCache};
use cobro_client::{
    ApiClient, HttpAdeudoRepository, HttpCicloEscolarRepository, HttpConceptoRepository,
    HttpDashboardRepository, HttpEstudianteRepository, HttpGrupoRepository,
    HttpModalidadRepository, HttpNivelRepository, HttpPagoRepository, HttpUsuarioRepository,
};
use cobro_config::ApiConfig;

use crate::modules::adeudos::{AdeudoService, AdeudoStore};
use crate::modules::catalogos::CatalogoService;
use crate::modules::ciclos_escolares::{CicloEscolarService, CicloEscolarStore};
use crate::modules::conceptos::{ConceptoService, ConceptoStore};
use crate::modules::estudiantes::{EstudianteService, EstudianteStore};
use crate::modules::grupos::{GrupoService, GrupoStore};
use crate::modules::pagos::{PagoService, PagoStore};
use crate::modules::usuarios::{UsuarioService, UsuarioStore};

/// Everything a console command needs, built once per process.
///
/// Cloning shares the underlying client, stores, and cache.
#[derive(Clone)]
pub struct AppState {
    pub client: ApiClient,
    pub estudiantes: EstudianteStore,
    pub adeudos: AdeudoStore,
    pub conceptos: ConceptoStore,
    pub pagos: PagoStore,
    pub usuarios: UsuarioStore,
    pub grupos: GrupoStore,
    pub ciclos_escolares: CicloEscolarStore,
    pub catalogos: CatalogoService,
    pub dashboard: Arc<DashboardCache>,
}

impl AppState {
    /// Wires every service against one shared HTTP client.
    ///
    /// The dashboard cache is constructed here and nowhere else, so all
    /// clones of the state observe the same snapshot and share one fetch.
    pub fn init(config: ApiConfig) -> Self {
        let client = ApiClient::new(config);

        let estudiantes = EstudianteStore::new(EstudianteService::new(Arc::new(
            HttpEstudianteRepository::new(client.clone()),
        )));
        let adeudos = AdeudoStore::new(AdeudoService::new(Arc::new(HttpAdeudoRepository::new(
            client.clone(),
        ))));
        let conceptos = ConceptoStore::new(ConceptoService::new(Arc::new(
            HttpConceptoRepository::new(client.clone()),
        )));
        let pagos = PagoStore::new(PagoService::new(Arc::new(HttpPagoRepository::new(
            client.clone(),
        ))));
        let usuarios = UsuarioStore::new(UsuarioService::new(Arc::new(HttpUsuarioRepository::new(
            client.clone(),
        ))));
        let grupos = GrupoStore::new(GrupoService::new(Arc::new(HttpGrupoRepository::new(
            client.clone(),
        ))));
        let ciclos_escolares = CicloEscolarStore::new(CicloEscolarService::new(Arc::new(
            HttpCicloEscolarRepository::new(client.clone()),
        )));
        let catalogos = CatalogoService::new(
            Arc::new(HttpNivelRepository::new(client.clone())),
            Arc::new(HttpModalidadRepository::new(client.clone())),
        );
        let dashboard = Arc::new(DashboardCache::new(
            Arc::new(HttpDashboardRepository::new(client.clone())),
            CacheConfig::from_env(),
        ));

        Self {
            client,
            estudiantes,
            adeudos,
            conceptos,
            pagos,
            usuarios,
            grupos,
            ciclos_escolares,
            catalogos,
            dashboard,
        }
    }
}
