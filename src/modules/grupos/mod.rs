pub mod service;
pub mod store;

pub use service::GrupoService;
pub use store::GrupoStore;
