pub mod cliente;

pub use cliente::{Cliente, ClientePatch};
