//! Money calculation utilities using rust_decimal for precision
//!
//! This module provides precise decimal arithmetic for monetary
//! calculations. All calculations are done using `Decimal` internally,
//! then converted to `f64` at the wire/store boundary.
//!
//! Conversion policy: cross-currency conversion with an unusable rate
//! (zero or negative) is unavailable in BOTH directions: `to_bs` and
//! `to_usd` return `None` and the caller decides whether to render a
//! placeholder or degrade to zero. Same-currency conversion is the
//! identity and never needs a rate.

use rust_decimal::prelude::*;
use shared::models::money::{Currency, ExchangeRate, Money};

/// Rounding for displayed/persisted monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Rounding for rate-sensitive reconciliation fields (4 decimal places)
const RATE_DECIMAL_PLACES: u32 = 4;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Reconciliation differences above this trigger the pre-submit
/// surplus/shortfall confirmation (0.009)
pub const DIFERENCIA_TOLERANCE: Decimal = Decimal::from_parts(9, 0, 0, false, 3);

/// Convert f64 to Decimal for calculation
///
/// Input values should be pre-validated at the boundary. If
/// NaN/Infinity somehow reaches here, logs an error and returns ZERO to
/// avoid silent data corruption in financial calculations.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // Any Decimal is within f64 representable range (~1.8e308)
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Convert Decimal back to f64 at reconciliation precision (4 decimal
/// places), used for `diferenciaUsd`, `sobranteUsd` and `faltanteUsd`
#[inline]
pub fn to_f64_rate(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(RATE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .expect("Decimal rounded to 4dp is always representable as f64")
}

/// Round at reconciliation precision without leaving Decimal
#[inline]
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Express `amount` (denominated in `currency`) in Bs
///
/// Identity for Bs; `None` for USD when the rate is unusable.
pub fn to_bs(amount: f64, currency: Currency, rate: ExchangeRate) -> Option<Decimal> {
    Money::new(to_decimal(amount), currency).in_bs(rate)
}

/// Express `amount` (denominated in `currency`) in USD
///
/// Identity for USD; `None` for Bs when the rate is unusable.
pub fn to_usd(amount: f64, currency: Currency, rate: ExchangeRate) -> Option<Decimal> {
    Money::new(to_decimal(amount), currency).in_usd(rate)
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}
