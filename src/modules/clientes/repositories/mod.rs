pub mod cliente_repository;

pub use cliente_repository::ClienteRepository;
