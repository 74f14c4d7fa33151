//! Payment / discount calculator
//!
//! Computes the payable preview for a cuenta por pagar under a
//! payment-edit overlay. Order matters: the two discounts are
//! sequential (discount 2 applies to the post-discount-1 remainder),
//! and retention/abono are subtracted last. The whole computation runs
//! on the Bs leg at the payment rate; re-expressing the edited amount
//! in another currency is a separate display-level conversion.

use rust_decimal::prelude::*;
use shared::models::cuenta::CuentaPorPagar;
use shared::models::money::{Currency, ExchangeRate, Money};
use shared::models::pago::{EdicionPago, TipoDescuento};

use crate::money::{to_decimal, to_f64};

/// Derived payment preview for one invoice
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalculoPago {
    /// Original amount in Bs (0 when underivable)
    pub monto_original_bs: f64,
    /// Original amount in USD (0 when underivable)
    pub monto_original_usd: f64,
    /// Original re-expressed in Bs at the payment rate
    pub nuevo_monto_bs: f64,
    pub descuento1_valor: f64,
    pub descuento2_valor: f64,
    pub total_descuentos: f64,
    /// Final payable; the user's own entry when `es_abono`
    pub monto_editado: f64,
    pub total_acreditar: f64,
    /// Remaining balance after crediting this payment
    pub nuevo_saldo: f64,
}

/// Value of one discount against a running base
fn valor_descuento(base: Decimal, valor: f64, tipo: TipoDescuento) -> Decimal {
    match tipo {
        TipoDescuento::Monto => to_decimal(valor),
        TipoDescuento::Porcentaje => base * to_decimal(valor) / Decimal::ONE_HUNDRED,
    }
}

/// Compute the payment preview for an invoice under an edit overlay
///
/// Zero or missing rates degrade the affected conversion legs to zero;
/// nothing throws.
pub fn calcular_pago(cuenta: &CuentaPorPagar, edicion: &EdicionPago) -> CalculoPago {
    // 1. Normalize the original to both currencies at the invoice rate
    let monto_original_bs = cuenta.monto_bs().unwrap_or(Decimal::ZERO);
    let monto_original_usd = cuenta.monto_usd().unwrap_or(Decimal::ZERO);

    // 2. Re-express through the USD leg at the payment rate; this is
    //    what decouples invoice currency from payment currency
    let tasa_pago = ExchangeRate::from_f64(edicion.tasa_pago);
    let nuevo_monto_bs = Money::usd(monto_original_usd)
        .in_bs(tasa_pago)
        .unwrap_or(Decimal::ZERO);

    // 3-4. Sequential discounts: the second applies to the remainder
    let descuento1 = valor_descuento(nuevo_monto_bs, edicion.descuento1, edicion.tipo_descuento1);
    let restante = nuevo_monto_bs - descuento1;
    let descuento2 = valor_descuento(restante, edicion.descuento2, edicion.tipo_descuento2);

    let total_descuentos = descuento1 + descuento2;

    // 6. Abono passes the user's entry through untouched
    let monto_editado = if edicion.es_abono {
        to_decimal(edicion.monto_editado)
    } else {
        nuevo_monto_bs - total_descuentos - to_decimal(edicion.abono) - to_decimal(edicion.retencion)
    };

    let total_acreditar = monto_editado;
    let nuevo_saldo = monto_original_bs - total_acreditar;

    CalculoPago {
        monto_original_bs: to_f64(monto_original_bs),
        monto_original_usd: to_f64(monto_original_usd),
        nuevo_monto_bs: to_f64(nuevo_monto_bs),
        descuento1_valor: to_f64(descuento1),
        descuento2_valor: to_f64(descuento2),
        total_descuentos: to_f64(total_descuentos),
        monto_editado: to_f64(monto_editado),
        total_acreditar: to_f64(total_acreditar),
        nuevo_saldo: to_f64(nuevo_saldo),
    }
}

/// Re-express an edited amount in another currency at the payment rate
///
/// Converts the *current* value rather than re-deriving from the
/// original amount, preserving the source behavior; decimal arithmetic
/// keeps a same-rate round-trip exact. An unusable rate leaves the
/// amount unconverted.
pub fn convertir_monto_editado(
    monto_editado: f64,
    desde: Currency,
    hacia: Currency,
    tasa_pago: f64,
) -> f64 {
    if desde == hacia {
        return monto_editado;
    }
    let rate = ExchangeRate::from_f64(tasa_pago);
    let convertido = match hacia {
        Currency::Bs => Money::new(to_decimal(monto_editado), desde).in_bs(rate),
        Currency::Usd => Money::new(to_decimal(monto_editado), desde).in_usd(rate),
    };
    match convertido {
        // Full precision here; display rounding would compound across
        // repeated toggles
        Some(v) => v.to_f64().unwrap_or(monto_editado),
        None => monto_editado,
    }
}

/// Aggregate "Total a Pagar" across a batch of previews
pub fn total_a_pagar(calculos: &[CalculoPago]) -> f64 {
    let total: Decimal = calculos.iter().map(|c| to_decimal(c.monto_editado)).sum();
    to_f64(total)
}

/// Whether a batch mixes payment currencies
///
/// Triggers a non-blocking warning (manual review recommended); it
/// never stops submission.
pub fn monedas_mezcladas<'a, I>(ediciones: I) -> bool
where
    I: IntoIterator<Item = &'a EdicionPago>,
{
    let mut monedas = ediciones.into_iter().map(|e| e.moneda);
    match monedas.next() {
        Some(primera) => monedas.any(|m| m != primera),
        None => false,
    }
}
