//! # Cobro Client
//!
//! Repository contracts and their HTTP implementations for the Cobro
//! console.
//!
//! Each entity gets an `async-trait` contract (`EstudianteRepository`,
//! `AdeudoRepository`, ...) plus an `Http*` implementation that talks to
//! the remote billing API through the shared [`ApiClient`]. The traits are
//! the seams the rest of the workspace depends on: services and the
//! dashboard cache take `Arc<dyn ...Repository>`, so tests can swap in
//! in-memory fakes without touching the network.
//!
//! # Modules
//!
//! - [`http`]: shared envelope-aware `reqwest` wrapper
//! - [`estudiantes`], [`adeudos`], [`conceptos`], [`pagos`], [`usuarios`],
//!   [`grupos`], [`ciclos_escolares`]: per-entity repositories
//! - [`catalogos`]: read-only level/mode catalog repositories
//! - [`dashboard`]: aggregate-metrics repository
//!
//! # Example
//!
//! ```ignore
//! use cobro_client::{ApiClient, EstudianteRepository, HttpEstudianteRepository};
//! use cobro_config::ApiConfig;
//! use cobro_models::EstudianteFiltro;
//!
//! let client = ApiClient::new(ApiConfig::from_env());
//! let repo = HttpEstudianteRepository::new(client);
//! let estudiantes = repo.listar(&EstudianteFiltro::default()).await?;
//! ```

pub mod adeudos;
pub mod catalogos;
pub mod ciclos_escolares;
pub mod conceptos;
pub mod dashboard;
pub mod estudiantes;
pub mod grupos;
pub mod http;
pub mod pagos;
pub mod usuarios;

// Re-export commonly used types at crate root for convenience
pub use http::ApiClient;

pub use adeudos::{AdeudoRepository, HttpAdeudoRepository};
pub use catalogos::{
    HttpModalidadRepository, HttpNivelRepository, ModalidadRepository, NivelRepository,
};
pub use ciclos_escolares::{CicloEscolarRepository, HttpCicloEscolarRepository};
pub use conceptos::{ConceptoRepository, HttpConceptoRepository};
pub use dashboard::{DashboardRepository, HttpDashboardRepository};
pub use estudiantes::{EstudianteRepository, HttpEstudianteRepository};
pub use grupos::{GrupoRepository, HttpGrupoRepository};
pub use pagos::{PagoRepository, HttpPagoRepository};
pub use usuarios::{HttpUsuarioRepository, UsuarioRepository};
