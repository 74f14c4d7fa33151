//! Lista comparativa model (comparative supplier price list)

use serde::{Deserialize, Serialize};

/// One row of a supplier price list, parsed client-side from a
/// spreadsheet before upload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListaComparativa {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Product code as printed by the supplier
    pub codigo: String,
    pub descripcion: String,
    /// Net unit price offered
    pub precio_neto: f64,
    /// Supplier offering this price
    pub proveedor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proveedor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laboratorio: Option<String>,
}
