pub mod service;
pub mod store;

pub use service::EstudianteService;
pub use store::EstudianteStore;
