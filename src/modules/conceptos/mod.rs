pub mod service;
pub mod store;

pub use service::ConceptoService;
pub use store::ConceptoStore;
