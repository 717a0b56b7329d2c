pub mod parcela_controller;

pub use parcela_controller::configure;
