pub mod service;
pub mod store;

pub use service::UsuarioService;
pub use store::UsuarioStore;
