//! Cuadre endpoints

use shared::models::cuadre::{Cuadre, EstadoCuadre};

use crate::types::EstadoUpdate;
use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// Submit a cuadre for a pharmacy
    ///
    /// The record must carry `estado = "wait"`; review transitions only
    /// happen server-side. On failure the caller keeps the form state
    /// so the cashier can retry without re-entering anything.
    pub async fn crear_cuadre(&self, farmacia_id: &str, cuadre: &Cuadre) -> ClientResult<Cuadre> {
        self.post(&format!("/agg/cuadre/{farmacia_id}"), cuadre)
            .await
    }

    /// Move a cuadre to `verified` or `denied`
    pub async fn actualizar_estado_cuadre(
        &self,
        farmacia_id: &str,
        cuadre_id: &str,
        estado: EstadoCuadre,
    ) -> ClientResult<()> {
        self.patch_unit(
            &format!("/cuadres/{farmacia_id}/{cuadre_id}/estado"),
            &EstadoUpdate { estado },
        )
        .await
    }

    /// Cuadres of a pharmacy for review
    pub async fn cuadres(&self, farmacia_id: &str) -> ClientResult<Vec<Cuadre>> {
        self.get(&format!("/cuadres/{farmacia_id}")).await
    }
}
