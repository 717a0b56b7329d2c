pub mod curso_repository;

pub use curso_repository::CursoRepository;
