pub mod service;
pub mod store;

pub use service::AdeudoService;
pub use store::AdeudoStore;
