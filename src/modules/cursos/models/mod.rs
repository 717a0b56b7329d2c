pub mod curso;

pub use curso::{Curso, CursoPatch};
