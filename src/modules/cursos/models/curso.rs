use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A course/plan. Clientes reference it through `curso_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Curso {
    pub id: Option<i64>,
    pub nome: Option<String>,
}

/// Partial-update payload for a curso.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CursoPatch {
    pub id: Option<i64>,
    pub nome: Option<String>,
}

impl Curso {
    pub fn apply_patch(&mut self, patch: &CursoPatch) {
        if let Some(ref nome) = patch.nome {
            self.nome = Some(nome.clone());
        }
    }
}

// Identity is the persistent id alone; transient cursos are never equal.
impl PartialEq for Curso {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
