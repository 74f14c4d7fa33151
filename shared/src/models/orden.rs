//! Purchase-order line item
//!
//! Lines live in the locally-persisted cart; `(lista_id, farmacia)` is
//! the unique key: adding the same product for the same pharmacy
//! increments quantity instead of duplicating.

use serde::{Deserialize, Serialize};

/// One line of a purchase order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOrden {
    /// Price-list row this line was taken from
    pub lista_id: String,
    /// Pharmacy the product is ordered for
    pub farmacia: String,
    pub codigo: String,
    pub descripcion: String,
    pub precio_neto: f64,
    pub cantidad: u32,
    pub proveedor_id: String,
}

impl ItemOrden {
    /// Unique cart key
    pub fn clave(&self) -> (&str, &str) {
        (&self.lista_id, &self.farmacia)
    }

    /// Line total
    pub fn total(&self) -> f64 {
        self.precio_neto * self.cantidad as f64
    }
}
