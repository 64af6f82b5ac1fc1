pub mod service;
pub mod store;

pub use service::PagoService;
pub use store::PagoStore;
