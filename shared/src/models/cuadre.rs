//! Cuadre model (cash-register reconciliation)
//!
//! One cuadre covers one cashier/shift/day/till combination. Monetary
//! inputs are entered by the cashier; totals are derived by the
//! aggregator and never user-entered. The record is created client-side
//! in `wait` state and only the remote API moves it to `verified` or
//! `denied`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Review state of a cuadre (server-authoritative after creation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstadoCuadre {
    Wait,
    Verified,
    Denied,
}

impl Default for EstadoCuadre {
    fn default() -> Self {
        Self::Wait
    }
}

/// Card terminal totals for one bank ("punto de venta")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuntoVenta {
    /// Bank the terminal settles against
    pub banco: String,
    /// Debit card total (Bs)
    pub punto_debito: f64,
    /// Credit card total (Bs)
    pub punto_credito: f64,
}

/// Receipt image attached to a cuadre (1 to 4 required)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReciboCuadre {
    /// Object name in the remote store
    pub object_name: String,
    /// Presigned read URL, when already issued
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Derived totals of a cuadre
///
/// Computed by the aggregator from the entered amounts, then embedded in
/// the submitted record. USD-side fields are rounded to 4 decimals
/// before persisting; exactly one of `sobrante_usd`/`faltante_usd` is
/// non-zero at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CuadreTotales {
    /// Bs entered across cash, mobile payment and card terminals
    pub total_bs: f64,
    /// `total_bs` expressed in USD (0 when the rate is unusable)
    pub total_bs_en_usd: f64,
    /// System-reported total minus USD vouchers (in Bs)
    pub total_caja_sistema_menos_vales: f64,
    /// Everything counted, in USD
    pub total_general_usd: f64,
    /// Counted minus system, in USD, 4-decimal rounded
    pub diferencia_usd: f64,
    /// Surplus (positive difference), else 0
    pub sobrante_usd: f64,
    /// Shortfall (absolute negative difference), else 0
    pub faltante_usd: f64,
}

/// Cash-register reconciliation record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cuadre {
    /// Pharmacy the till belongs to
    pub farmacia: String,
    /// Business day
    pub dia: NaiveDate,
    /// Till number (1-based)
    pub caja_numero: u32,
    /// Shift name ("mañana", "tarde", ...)
    pub turno: String,
    /// Cashier display name
    pub cajero: String,

    /// Exchange rate of the session, Bs per USD
    pub tasa: f64,

    /// System-reported till total (Bs)
    pub total_caja_sistema_bs: f64,
    /// Counted cash (Bs)
    pub efectivo_bs: f64,
    /// Mobile payment total (Bs)
    pub pagomovil_bs: f64,
    /// Card terminals, one entry per bank
    #[serde(default)]
    pub puntos_venta: Vec<PuntoVenta>,
    /// Counted cash (USD)
    pub efectivo_usd: f64,
    /// Zelle transfers (USD)
    pub zelle_usd: f64,
    /// Voucher credits (USD), subtracted from the system total
    pub vales_usd: f64,
    /// Inventory cost for the day (Bs)
    pub costo_inventario: f64,

    /// Refunds issued (Bs); informational, never enters any total
    #[serde(default)]
    pub devoluciones_bs: f64,
    /// Phone top-ups sold (Bs); informational, never enters any total
    #[serde(default)]
    pub recarga_bs: f64,

    /// Receipt images (1 to 4)
    #[serde(default)]
    pub recibos: Vec<ReciboCuadre>,

    /// Derived totals, filled in before submission
    #[serde(flatten, default)]
    pub totales: CuadreTotales,

    /// Review state
    #[serde(default)]
    pub estado: EstadoCuadre,
}

impl Cuadre {
    /// All monetary input fields with their names, for sign validation
    pub fn campos_monetarios(&self) -> Vec<(&'static str, f64)> {
        let mut campos = vec![
            ("totalCajaSistemaBs", self.total_caja_sistema_bs),
            ("efectivoBs", self.efectivo_bs),
            ("pagomovilBs", self.pagomovil_bs),
            ("efectivoUsd", self.efectivo_usd),
            ("zelleUsd", self.zelle_usd),
            ("valesUsd", self.vales_usd),
            ("devolucionesBs", self.devoluciones_bs),
            ("recargaBs", self.recarga_bs),
        ];
        for punto in &self.puntos_venta {
            campos.push(("puntoDebito", punto.punto_debito));
            campos.push(("puntoCredito", punto.punto_credito));
        }
        campos
    }
}
