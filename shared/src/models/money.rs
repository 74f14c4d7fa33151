//! Monetary value types
//!
//! Every monetary amount is tagged with its currency; a bare number
//! never crosses a module boundary without one. Conversion between Bs
//! and USD goes through an [`ExchangeRate`] (Bs per USD). An unusable
//! rate (zero or negative) makes cross-currency conversion unavailable
//! in both directions, so callers render a placeholder instead of
//! dividing by zero.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

/// Currency of a monetary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    /// Venezuelan bolívar, the local currency
    #[default]
    #[serde(rename = "Bs")]
    Bs,
    /// US dollar, the reference currency
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Bs => "Bs",
            Currency::Usd => "USD",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Exchange rate ("tasa"): how many Bs equal one USD
///
/// Calculation-side value type; on the wire rates travel as the plain
/// `tasa` number of the enclosing record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExchangeRate(Decimal);

impl ExchangeRate {
    /// Rate meaning "conversion unavailable"
    pub const UNAVAILABLE: ExchangeRate = ExchangeRate(Decimal::ZERO);

    pub fn new(bs_per_usd: Decimal) -> Self {
        Self(bs_per_usd)
    }

    /// Build from a wire `f64`; non-finite input degrades to unavailable
    pub fn from_f64(bs_per_usd: f64) -> Self {
        match Decimal::from_f64(bs_per_usd) {
            Some(d) => Self(d),
            None => {
                tracing::error!(value = ?bs_per_usd, "Non-finite exchange rate, treating as unavailable");
                Self::UNAVAILABLE
            }
        }
    }

    /// A rate can convert only when it is strictly positive
    pub fn is_usable(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// A decimal amount tagged with its currency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Money {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn bs(amount: Decimal) -> Self {
        Self::new(amount, Currency::Bs)
    }

    pub fn usd(amount: Decimal) -> Self {
        Self::new(amount, Currency::Usd)
    }

    /// Express this amount in Bs
    ///
    /// Identity for Bs amounts; `None` for USD amounts when the rate is
    /// unusable.
    pub fn in_bs(&self, rate: ExchangeRate) -> Option<Decimal> {
        match self.currency {
            Currency::Bs => Some(self.amount),
            Currency::Usd => rate.is_usable().then(|| self.amount * rate.value()),
        }
    }

    /// Express this amount in USD
    ///
    /// Identity for USD amounts; `None` for Bs amounts when the rate is
    /// unusable.
    pub fn in_usd(&self, rate: ExchangeRate) -> Option<Decimal> {
        match self.currency {
            Currency::Usd => Some(self.amount),
            Currency::Bs => rate.is_usable().then(|| self.amount / rate.value()),
        }
    }
}
