pub mod service;

pub use service::CatalogoService;
