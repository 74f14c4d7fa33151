//! Cash-reconciliation aggregator
//!
//! Derives the totals of a register session from the amounts the
//! cashier entered, classifies the system-vs-counted difference as
//! surplus or shortfall, and validates the record before it may reach
//! the network. `devoluciones_bs` and `recarga_bs` are informational
//! and never enter any total.

use rust_decimal::Decimal;
use shared::error::AppResult;
use shared::models::cuadre::{Cuadre, CuadreTotales};
use shared::models::money::{Currency, ExchangeRate, Money};

use crate::money::{self, DIFERENCIA_TOLERANCE, to_decimal, to_f64, to_f64_rate};
use crate::utils::validation::{
    MAX_NAME_LEN, validate_monetary_fields, validate_positive_amount, validate_required_text,
};

/// Maximum receipt images per cuadre
pub const MAX_RECIBOS: usize = 4;

/// Compute the derived totals of a cuadre
///
/// USD-side legs degrade to zero when the session rate is unusable; the
/// difference and its classification are rounded to 4 decimals before
/// being written back.
pub fn calcular_totales(cuadre: &Cuadre) -> CuadreTotales {
    let tasa = ExchangeRate::from_f64(cuadre.tasa);

    // Everything entered in Bs: mobile payment + card terminals + cash
    let mut total_bs = to_decimal(cuadre.pagomovil_bs) + to_decimal(cuadre.efectivo_bs);
    for punto in &cuadre.puntos_venta {
        total_bs += to_decimal(punto.punto_debito) + to_decimal(punto.punto_credito);
    }

    let total_bs_en_usd = Money::bs(total_bs)
        .in_usd(tasa)
        .unwrap_or(Decimal::ZERO);

    let total_general_usd =
        total_bs_en_usd + to_decimal(cuadre.efectivo_usd) + to_decimal(cuadre.zelle_usd);

    // Vouchers are USD credits the system total already contains
    let vales_bs = Money::usd(to_decimal(cuadre.vales_usd))
        .in_bs(tasa)
        .unwrap_or(Decimal::ZERO);
    let total_caja_sistema_menos_vales = to_decimal(cuadre.total_caja_sistema_bs) - vales_bs;

    let diferencia_usd = match Money::bs(total_caja_sistema_menos_vales).in_usd(tasa) {
        Some(sistema_usd) => money::round_rate(total_general_usd - sistema_usd),
        None => Decimal::ZERO,
    };

    let (sobrante_usd, faltante_usd) = clasificar_diferencia(diferencia_usd);

    CuadreTotales {
        total_bs: to_f64(total_bs),
        total_bs_en_usd: to_f64(total_bs_en_usd),
        total_caja_sistema_menos_vales: to_f64(total_caja_sistema_menos_vales),
        total_general_usd: to_f64(total_general_usd),
        diferencia_usd: to_f64_rate(diferencia_usd),
        sobrante_usd: to_f64_rate(sobrante_usd),
        faltante_usd: to_f64_rate(faltante_usd),
    }
}

/// Split a 4-decimal-rounded difference into surplus/shortfall
///
/// Exactly one side is non-zero; both are zero iff the difference
/// rounded to zero.
fn clasificar_diferencia(diferencia: Decimal) -> (Decimal, Decimal) {
    if diferencia > Decimal::ZERO {
        (diferencia, Decimal::ZERO)
    } else if diferencia < Decimal::ZERO {
        (Decimal::ZERO, diferencia.abs())
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    }
}

/// Whether the pre-submit surplus/shortfall confirmation must be shown
///
/// A UX gate, not a data invariant: the record is stored regardless of
/// the path the user confirms through.
pub fn requiere_confirmacion(totales: &CuadreTotales) -> bool {
    to_decimal(totales.diferencia_usd).abs() > DIFERENCIA_TOLERANCE
}

/// Validate a cuadre before submission
///
/// Local check only; the network is never reached when it fails. Errors
/// name the offending field so the form can show them inline.
pub fn validar(cuadre: &Cuadre) -> AppResult<()> {
    validate_required_text(&cuadre.cajero, "cajero", MAX_NAME_LEN)?;
    validate_required_text(&cuadre.turno, "turno", MAX_NAME_LEN)?;

    if cuadre.caja_numero == 0 {
        return Err(shared::AppError::validation(
            "cajaNumero",
            "caja number must be greater than zero",
        ));
    }

    validate_positive_amount(cuadre.tasa, "tasa")?;
    validate_positive_amount(cuadre.costo_inventario, "costoInventario")?;
    validate_monetary_fields(&cuadre.campos_monetarios())?;

    for punto in &cuadre.puntos_venta {
        validate_required_text(&punto.banco, "banco", MAX_NAME_LEN)?;
    }

    if cuadre.recibos.is_empty() {
        return Err(shared::AppError::validation(
            "recibos",
            "at least one receipt image is required",
        ));
    }
    if cuadre.recibos.len() > MAX_RECIBOS {
        return Err(shared::AppError::validation(
            "recibos",
            format!("at most {MAX_RECIBOS} receipt images are allowed"),
        ));
    }

    Ok(())
}

/// Convenience: totals expressed through the generic conversion contract
///
/// `total_bs` re-expressed in USD for display, `None` (render `"--"`)
/// when the rate is unusable.
pub fn total_bs_como_usd(totales: &CuadreTotales, tasa: f64) -> Option<f64> {
    money::to_usd(totales.total_bs, Currency::Bs, ExchangeRate::from_f64(tasa)).map(to_f64)
}

#[cfg(test)]
mod tests;
