//! Expense endpoints

use shared::models::gasto::Gasto;

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// Record an expense for a pharmacy
    pub async fn registrar_gasto(&self, farmacia_id: &str, gasto: &Gasto) -> ClientResult<Gasto> {
        self.post(&format!("/gastos/{farmacia_id}"), gasto).await
    }

    /// Expenses of a pharmacy
    pub async fn gastos(&self, farmacia_id: &str) -> ClientResult<Vec<Gasto>> {
        self.get(&format!("/gastos/{farmacia_id}")).await
    }
}
