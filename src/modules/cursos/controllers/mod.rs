pub mod curso_controller;

pub use curso_controller::configure;
