//! Typed local store gateway
//!
//! The browser source used local storage as an ambient, untyped global
//! read from many unrelated call sites. Here every access is mediated
//! by a typed store over a swappable [`StorageBackend`]: redb on disk
//! for production, in-memory for tests.
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `sesion` | fixed | `Sesion` | Logged-in identity |
//! | `orden_compra` | fixed | `OrdenCompra` | Purchase-order cart |
//! | `cuentas_para_pagar` | cuenta id | `EdicionPago` | Payment-edit overlays |
//!
//! Values are whole JSON documents, fully overwritten on every mutation
//! (no partial patching); the last write wins, mirroring the source's
//! single-key local-storage semantics.

mod memory;
mod storage;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::pago::EdicionPago;
use shared::models::sesion::Sesion;
use thiserror::Error;

pub use memory::MemoryBackend;
pub use storage::RedbBackend;

use crate::orden::OrdenCompra;

/// Session identity table
pub const TABLA_SESION: &str = "sesion";
/// Purchase-order cart table
pub const TABLA_ORDEN_COMPRA: &str = "orden_compra";
/// Payment-edit overlay table
pub const TABLA_CUENTAS_PARA_PAGAR: &str = "cuentas_para_pagar";

/// Fixed key for single-document tables
const CLAVE_UNICA: &str = "actual";

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Raw key-value backend the typed stores sit on
///
/// Whole-value semantics: `put` overwrites, `get` returns the latest
/// committed value, and there is no merge or conflict detection.
pub trait StorageBackend: Send + Sync {
    fn get(&self, table: &'static str, key: &str) -> StoreResult<Option<Vec<u8>>>;
    fn put(&self, table: &'static str, key: &str, value: &[u8]) -> StoreResult<()>;
    fn remove(&self, table: &'static str, key: &str) -> StoreResult<()>;
    fn entries(&self, table: &'static str) -> StoreResult<Vec<(String, Vec<u8>)>>;
    fn clear(&self, table: &'static str) -> StoreResult<()>;
}

fn get_json<T: DeserializeOwned>(
    backend: &dyn StorageBackend,
    table: &'static str,
    key: &str,
) -> StoreResult<Option<T>> {
    match backend.get(table, key)? {
        Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        None => Ok(None),
    }
}

fn put_json<T: Serialize>(
    backend: &dyn StorageBackend,
    table: &'static str,
    key: &str,
    value: &T,
) -> StoreResult<()> {
    let bytes = serde_json::to_vec(value)?;
    backend.put(table, key, &bytes)
}

/// Logged-in identity store
///
/// `None` means absent or expired; the caller redirects to login.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn get(&self) -> StoreResult<Option<Sesion>> {
        get_json(self.backend.as_ref(), TABLA_SESION, CLAVE_UNICA)
    }

    pub fn set(&self, sesion: &Sesion) -> StoreResult<()> {
        put_json(self.backend.as_ref(), TABLA_SESION, CLAVE_UNICA, sesion)
    }

    /// Drop the stored identity (logout, or a 401 from the API)
    pub fn clear(&self) -> StoreResult<()> {
        self.backend.remove(TABLA_SESION, CLAVE_UNICA)
    }
}

/// Purchase-order cart store
#[derive(Clone)]
pub struct CartStore {
    backend: Arc<dyn StorageBackend>,
}

impl CartStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// The persisted cart; an absent key is an empty cart
    pub fn get(&self) -> StoreResult<OrdenCompra> {
        Ok(
            get_json(self.backend.as_ref(), TABLA_ORDEN_COMPRA, CLAVE_UNICA)?
                .unwrap_or_default(),
        )
    }

    /// Persist the cart after a mutation; an empty cart removes the key
    pub fn save(&self, orden: &OrdenCompra) -> StoreResult<()> {
        if orden.is_empty() {
            self.backend.remove(TABLA_ORDEN_COMPRA, CLAVE_UNICA)
        } else {
            put_json(self.backend.as_ref(), TABLA_ORDEN_COMPRA, CLAVE_UNICA, orden)
        }
    }

    pub fn clear(&self) -> StoreResult<()> {
        self.backend.remove(TABLA_ORDEN_COMPRA, CLAVE_UNICA)
    }
}

/// Payment-edit overlay store, keyed by cuenta id
///
/// Overlays survive only the pending batch-payment workflow; `clear`
/// runs when the batch is submitted or abandoned.
#[derive(Clone)]
pub struct PaymentOverlayStore {
    backend: Arc<dyn StorageBackend>,
}

impl PaymentOverlayStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn get(&self, cuenta_id: &str) -> StoreResult<Option<EdicionPago>> {
        get_json(self.backend.as_ref(), TABLA_CUENTAS_PARA_PAGAR, cuenta_id)
    }

    pub fn set(&self, cuenta_id: &str, edicion: &EdicionPago) -> StoreResult<()> {
        put_json(
            self.backend.as_ref(),
            TABLA_CUENTAS_PARA_PAGAR,
            cuenta_id,
            edicion,
        )
    }

    pub fn remove(&self, cuenta_id: &str) -> StoreResult<()> {
        self.backend.remove(TABLA_CUENTAS_PARA_PAGAR, cuenta_id)
    }

    /// Every pending overlay, as (cuenta id, overlay)
    pub fn all(&self) -> StoreResult<Vec<(String, EdicionPago)>> {
        let mut overlays = Vec::new();
        for (key, bytes) in self.backend.entries(TABLA_CUENTAS_PARA_PAGAR)? {
            overlays.push((key, serde_json::from_slice(&bytes)?));
        }
        Ok(overlays)
    }

    pub fn clear(&self) -> StoreResult<()> {
        self.backend.clear(TABLA_CUENTAS_PARA_PAGAR)
    }
}

#[cfg(test)]
mod tests;
