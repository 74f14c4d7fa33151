//! Payment recording endpoints

use shared::models::pago::Pago;

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// Record a single payment against an invoice
    pub async fn registrar_pago(&self, pago: &Pago) -> ClientResult<Pago> {
        self.post("/pagoscpp", pago).await
    }

    /// Record a batch of payments
    ///
    /// A failure partway surfaces as `PartialFailure` with the count of
    /// items the server processed; already-submitted payments are not
    /// rolled back.
    pub async fn registrar_pagos_masivo(&self, pagos: &[Pago]) -> ClientResult<Vec<Pago>> {
        self.post("/pagoscpp/masivo", &pagos).await
    }

    /// Payments recorded against one invoice
    pub async fn pagos_de_cuenta(&self, cuenta_id: &str) -> ClientResult<Vec<Pago>> {
        self.get(&format!("/pagoscpp/{cuenta_id}")).await
    }
}
