pub mod service;
pub mod store;

pub use service::CicloEscolarService;
pub use store::CicloEscolarStore;
