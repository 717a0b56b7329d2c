use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A payment installment.
///
/// Every column is nullable in the schema, so every non-id field is optional.
/// `valor` round-trips as an exact decimal literal, never a binary float.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parcela {
    pub id: Option<i64>,
    pub documento: Option<i64>,
    pub id_transacao: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub valor: Option<Decimal>,
    pub numero: Option<i32>,
    pub total: Option<i32>,
    pub status: Option<StatusParcela>,
}

/// Installment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusParcela {
    Pendente,
    Pago,
}

impl StatusParcela {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendente => "PENDENTE",
            Self::Pago => "PAGO",
        }
    }
}

impl std::fmt::Display for StatusParcela {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for StatusParcela {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.as_str() {
            "PENDENTE" => Ok(Self::Pendente),
            "PAGO" => Ok(Self::Pago),
            _ => Err(format!("Invalid parcela status: {}", value)),
        }
    }
}

/// Partial-update payload for a parcela.
///
/// A field left absent (or null) keeps the stored value; a present field
/// overwrites it. Association fields are not patchable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelaPatch {
    pub id: Option<i64>,
    pub documento: Option<i64>,
    pub id_transacao: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub valor: Option<Decimal>,
    pub numero: Option<i32>,
    pub total: Option<i32>,
    pub status: Option<StatusParcela>,
}

impl Parcela {
    /// Apply a merge patch field by field; absent fields leave the stored
    /// value unchanged.
    pub fn apply_patch(&mut self, patch: &ParcelaPatch) {
        if let Some(documento) = patch.documento {
            self.documento = Some(documento);
        }
        if let Some(ref id_transacao) = patch.id_transacao {
            self.id_transacao = Some(id_transacao.clone());
        }
        if let Some(valor) = patch.valor {
            self.valor = Some(valor);
        }
        if let Some(numero) = patch.numero {
            self.numero = Some(numero);
        }
        if let Some(total) = patch.total {
            self.total = Some(total);
        }
        if let Some(status) = patch.status {
            self.status = Some(status);
        }
    }
}

// Identity is the persistent id alone; two transient parcelas are never
// equal, so Eq (which requires reflexivity) is deliberately not implemented.
impl PartialEq for Parcela {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
