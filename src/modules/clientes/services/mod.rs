pub mod cliente_service;

pub use cliente_service::ClienteService;
