use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A customer.
///
/// `curso_id` and `parcela_id` are the many-to-one references to the course
/// and the installment the customer is attached to; the reverse one-to-many
/// sides exist only as queries.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id: Option<i64>,
    pub nome: Option<String>,
    pub cpf: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub curso_id: Option<i64>,
    pub parcela_id: Option<i64>,
}

/// Partial-update payload for a cliente; scalar fields only.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientePatch {
    pub id: Option<i64>,
    pub nome: Option<String>,
    pub cpf: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
}

impl Cliente {
    /// Apply a merge patch; absent fields keep the stored value.
    pub fn apply_patch(&mut self, patch: &ClientePatch) {
        if let Some(ref nome) = patch.nome {
            self.nome = Some(nome.clone());
        }
        if let Some(ref cpf) = patch.cpf {
            self.cpf = Some(cpf.clone());
        }
        if let Some(ref email) = patch.email {
            self.email = Some(email.clone());
        }
        if let Some(ref telefone) = patch.telefone {
            self.telefone = Some(telefone.clone());
        }
    }
}

// Identity is the persistent id alone; transient clientes are never equal.
impl PartialEq for Cliente {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
