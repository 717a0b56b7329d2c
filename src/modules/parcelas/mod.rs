pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Parcela, ParcelaPatch, StatusParcela};
pub use repositories::ParcelaRepository;
pub use services::ParcelaService;
