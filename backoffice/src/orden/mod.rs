//! Purchase-order cart aggregation
//!
//! The cart holds price-list lines selected per pharmacy. Grouping for
//! display/export is by pharmacy, then by supplier inside each group;
//! the nested breakdown is recomputed on demand, never cached. Group
//! totals always conserve the flat sum: no line is double-counted or
//! dropped.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::orden::ItemOrden;

use crate::money::{to_decimal, to_f64};

/// The purchase-order cart
///
/// Lines keep insertion order; `(lista_id, farmacia)` is unique.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrdenCompra {
    items: Vec<ItemOrden>,
}

/// One pharmacy's slice of the cart
#[derive(Debug, Clone, Serialize)]
pub struct GrupoFarmacia {
    pub farmacia: String,
    pub items: Vec<ItemOrden>,
    /// Σ precio_neto × cantidad over the group
    pub total: f64,
}

/// Supplier subtotal inside a pharmacy group
#[derive(Debug, Clone, Serialize)]
pub struct GrupoProveedor {
    pub proveedor_id: String,
    pub items: Vec<ItemOrden>,
    pub subtotal: f64,
}

impl OrdenCompra {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<ItemOrden>) -> Self {
        let mut orden = Self::new();
        for item in items {
            orden.agregar(item);
        }
        orden
    }

    pub fn items(&self) -> &[ItemOrden] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Add a line; an existing `(lista_id, farmacia)` line has its
    /// quantity incremented instead of duplicating
    pub fn agregar(&mut self, item: ItemOrden) {
        match self
            .items
            .iter_mut()
            .find(|existing| existing.clave() == item.clave())
        {
            Some(existing) => existing.cantidad += item.cantidad,
            None => self.items.push(item),
        }
    }

    /// Remove the matching line, if present
    pub fn quitar(&mut self, lista_id: &str, farmacia: &str) {
        self.items
            .retain(|item| item.clave() != (lista_id, farmacia));
    }

    /// Set a line's quantity; zero removes the line
    pub fn actualizar_cantidad(&mut self, lista_id: &str, farmacia: &str, cantidad: u32) {
        if cantidad == 0 {
            self.quitar(lista_id, farmacia);
            return;
        }
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.clave() == (lista_id, farmacia))
        {
            item.cantidad = cantidad;
        }
    }

    /// Flat total over every line
    pub fn total_general(&self) -> f64 {
        to_f64(suma_items(&self.items))
    }

    /// One group per distinct pharmacy, in first-appearance order
    pub fn agrupar_por_farmacia(&self) -> Vec<GrupoFarmacia> {
        let mut grupos: Vec<GrupoFarmacia> = Vec::new();
        for item in &self.items {
            match grupos.iter_mut().find(|g| g.farmacia == item.farmacia) {
                Some(grupo) => grupo.items.push(item.clone()),
                None => grupos.push(GrupoFarmacia {
                    farmacia: item.farmacia.clone(),
                    items: vec![item.clone()],
                    total: 0.0,
                }),
            }
        }
        for grupo in &mut grupos {
            grupo.total = to_f64(suma_items(&grupo.items));
        }
        grupos
    }
}

fn suma_items(items: &[ItemOrden]) -> Decimal {
    items
        .iter()
        .map(|item| to_decimal(item.precio_neto) * Decimal::from(item.cantidad))
        .sum()
}

/// Supplier breakdown of one pharmacy group, for export/print
///
/// Subtotals per supplier in first-appearance order; their sum equals
/// the pharmacy group total.
pub fn desglose_por_proveedor(grupo: &GrupoFarmacia) -> Vec<GrupoProveedor> {
    let mut proveedores: Vec<GrupoProveedor> = Vec::new();
    for item in &grupo.items {
        match proveedores
            .iter_mut()
            .find(|p| p.proveedor_id == item.proveedor_id)
        {
            Some(proveedor) => proveedor.items.push(item.clone()),
            None => proveedores.push(GrupoProveedor {
                proveedor_id: item.proveedor_id.clone(),
                items: vec![item.clone()],
                subtotal: 0.0,
            }),
        }
    }
    for proveedor in &mut proveedores {
        proveedor.subtotal = to_f64(suma_items(&proveedor.items));
    }
    proveedores
}
