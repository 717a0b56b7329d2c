pub mod curso_service;

pub use curso_service::CursoService;
