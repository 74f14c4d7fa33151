//! Pago model (payment against an invoice) and the payment-edit overlay
//!
//! The overlay is an ephemeral, locally-held edit state joined to a
//! cuenta by id. It is a distinct type, never merged onto the invoice,
//! so a stale overlay can't shadow invoice fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Currency;

/// How a discount value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoDescuento {
    /// Flat amount, subtracted directly
    #[default]
    Monto,
    /// Percentage of the running remainder
    Porcentaje,
}

/// Payment recorded against a cuenta por pagar
///
/// Carries its own rate and currency, independent of the invoice's
/// originals. Multiple pagos accumulate; the invoice is never marked
/// paid automatically when the sum matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pago {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Invoice this payment applies to
    pub cuenta_id: String,

    /// Payment currency
    pub moneda: Currency,
    /// Amount paid, in `moneda`
    pub monto: f64,
    /// Rate used at payment time, Bs per USD
    pub tasa: f64,
    /// Withholding applied with this payment
    #[serde(default)]
    pub retencion: f64,

    pub referencia: String,
    pub banco_emisor: String,
    pub banco_receptor: String,
    pub fecha: NaiveDate,
}

/// Payment-preview overlay ("cuenta en edición")
///
/// Held in the local overlay store keyed by invoice id for the duration
/// of the pending batch-payment workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdicionPago {
    /// Rate for this payment, independent of the invoice's original
    pub tasa_pago: f64,
    /// Payment currency, independently selectable
    pub moneda: Currency,

    #[serde(default)]
    pub descuento1: f64,
    #[serde(default)]
    pub tipo_descuento1: TipoDescuento,
    #[serde(default)]
    pub descuento2: f64,
    #[serde(default)]
    pub tipo_descuento2: TipoDescuento,

    /// Withholding subtracted last
    #[serde(default)]
    pub retencion: f64,
    /// Prior partial payments subtracted from the payable
    #[serde(default)]
    pub abono: f64,

    /// Partial-payment flag: the user overrides the payable directly
    #[serde(default)]
    pub es_abono: bool,
    /// Final payable amount; computed unless `es_abono`
    #[serde(default)]
    pub monto_editado: f64,
}

impl EdicionPago {
    /// Fresh overlay for an invoice, before any user edits
    pub fn nueva(tasa_pago: f64, moneda: Currency) -> Self {
        Self {
            tasa_pago,
            moneda,
            descuento1: 0.0,
            tipo_descuento1: TipoDescuento::Monto,
            descuento2: 0.0,
            tipo_descuento2: TipoDescuento::Monto,
            retencion: 0.0,
            abono: 0.0,
            es_abono: false,
            monto_editado: 0.0,
        }
    }
}
