//! Data models
//!
//! Shared between the calculation core and the REST client. Wire types
//! keep the remote API's camelCase Spanish field names; monetary fields
//! are plain `f64` on the wire and go through `Decimal` inside the
//! calculators.

pub mod cuadre;
pub mod cuenta;
pub mod gasto;
pub mod lista;
pub mod money;
pub mod orden;
pub mod pago;
pub mod sesion;

// Re-exports
pub use cuadre::*;
pub use cuenta::*;
pub use gasto::*;
pub use lista::*;
pub use money::*;
pub use orden::*;
pub use pago::*;
pub use sesion::*;
