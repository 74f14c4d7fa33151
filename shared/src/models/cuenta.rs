//! Cuenta por pagar model (accounts-payable invoice)

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use super::money::{Currency, ExchangeRate, Money};

/// Invoice status; transitions are explicit API actions, never inferred
/// from payment sums
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstatusCuenta {
    Wait,
    Activa,
    Inactiva,
    Pagada,
    Abonada,
    Anulada,
    Finalizada,
}

/// Invoice classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoCuenta {
    Traslado,
    PagoListo,
    CuentaPorPagar,
}

/// Accounts-payable invoice owed to a supplier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuentaPorPagar {
    #[serde(rename = "_id")]
    pub id: String,
    pub farmacia: String,
    pub proveedor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero_factura: Option<String>,

    /// Original amount, denominated in `divisa`
    pub monto: f64,
    /// Currency `monto` is stored in
    pub divisa: Currency,
    /// Exchange rate at emission, Bs per USD
    pub tasa: f64,
    /// Withholding amount in the original currency
    #[serde(default)]
    pub retencion: f64,

    pub fecha_emision: NaiveDate,
    /// Credit terms in days
    pub dias_credito: u32,

    pub estatus: EstatusCuenta,
    pub tipo: TipoCuenta,
}

impl CuentaPorPagar {
    /// Original amount as a tagged value
    pub fn monto_original(&self) -> Money {
        let amount = Decimal::from_f64(self.monto).unwrap_or_else(|| {
            tracing::error!(monto = ?self.monto, "Non-finite invoice amount, defaulting to zero");
            Decimal::ZERO
        });
        Money::new(amount, self.divisa)
    }

    /// Rate the invoice was emitted at
    pub fn tasa_original(&self) -> ExchangeRate {
        ExchangeRate::from_f64(self.tasa)
    }

    /// Amount in Bs, derivable whichever currency `monto` is stored in
    pub fn monto_bs(&self) -> Option<Decimal> {
        self.monto_original().in_bs(self.tasa_original())
    }

    /// Amount in USD, derivable whichever currency `monto` is stored in
    pub fn monto_usd(&self) -> Option<Decimal> {
        self.monto_original().in_usd(self.tasa_original())
    }

    /// Due date: emission date plus credit days
    pub fn fecha_vencimiento(&self) -> NaiveDate {
        self.fecha_emision
            .checked_add_days(Days::new(self.dias_credito as u64))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Days until due; negative means overdue ("Vencida")
    pub fn dias_restantes(&self, hoy: NaiveDate) -> i64 {
        (self.fecha_vencimiento() - hoy).num_days()
    }

    pub fn esta_vencida(&self, hoy: NaiveDate) -> bool {
        self.dias_restantes(hoy) < 0
    }
}
