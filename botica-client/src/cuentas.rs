//! Cuentas por pagar endpoints

use shared::models::cuenta::{CuentaPorPagar, EstatusCuenta, TipoCuenta};

use crate::types::{EstatusUpdate, TipoUpdate};
use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// All cuentas por pagar visible to the session
    pub async fn cuentas_por_pagar(&self) -> ClientResult<Vec<CuentaPorPagar>> {
        self.get("/cuentas-por-pagar").await
    }

    /// Change an invoice's status (explicit action, never inferred from
    /// accumulated payments)
    pub async fn actualizar_estatus_cuenta(
        &self,
        cuenta_id: &str,
        estatus: EstatusCuenta,
    ) -> ClientResult<()> {
        self.patch_unit(
            &format!("/cuentas-por-pagar/{cuenta_id}/estatus"),
            &EstatusUpdate { estatus },
        )
        .await
    }

    /// Reclassify an invoice
    pub async fn actualizar_tipo_cuenta(
        &self,
        cuenta_id: &str,
        tipo: TipoCuenta,
    ) -> ClientResult<()> {
        self.patch_unit(
            &format!("/cuentas-por-pagar/{cuenta_id}/tipo"),
            &TipoUpdate { tipo },
        )
        .await
    }
}
