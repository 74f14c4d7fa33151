//! Calculation core and local store gateway for the pharmacy back-office
//!
//! Everything in `money`, `cuadres`, `pagos` and `orden` is a pure,
//! synchronous function over plain data: explicit inputs in, derived
//! values out, no network and no UI. `stores` mediates the locally
//! persisted state (session identity, purchase-order cart,
//! payment-edit overlays) behind typed gateways with a swappable
//! backend.

pub mod cuadres;
pub mod money;
pub mod orden;
pub mod pagos;
pub mod stores;
pub mod utils;
