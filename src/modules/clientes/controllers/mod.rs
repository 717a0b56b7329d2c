pub mod cliente_controller;

pub use cliente_controller::configure;
