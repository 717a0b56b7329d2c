pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Cliente, ClientePatch};
pub use repositories::ClienteRepository;
pub use services::ClienteService;
