pub mod parcela;

pub use parcela::{Parcela, ParcelaPatch, StatusParcela};
