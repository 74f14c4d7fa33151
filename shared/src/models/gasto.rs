//! Gasto model (pharmacy expense)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Currency;

/// Expense recorded against a pharmacy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gasto {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub farmacia: String,
    pub concepto: String,
    pub monto: f64,
    pub divisa: Currency,
    /// Rate at expense time, Bs per USD
    pub tasa: f64,
    pub fecha: NaiveDate,
    /// Object name of the uploaded voucher image, when attached
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comprobante: Option<String>,
}
