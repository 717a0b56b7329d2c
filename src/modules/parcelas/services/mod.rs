pub mod parcela_service;

pub use parcela_service::ParcelaService;
