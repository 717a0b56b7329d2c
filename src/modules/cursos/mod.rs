pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Curso, CursoPatch};
pub use repositories::CursoRepository;
pub use services::CursoService;
