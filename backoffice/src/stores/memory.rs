//! In-memory backend, for tests and ephemeral sessions

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::{StorageBackend, StoreResult};

/// Backend that keeps everything in a process-local map
#[derive(Default)]
pub struct MemoryBackend {
    tables: Mutex<HashMap<&'static str, HashMap<String, Vec<u8>>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, table: &'static str, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(tables.get(table).and_then(|t| t.get(key)).cloned())
    }

    fn put(&self, table: &'static str, key: &str, value: &[u8]) -> StoreResult<()> {
        let mut tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        tables
            .entry(table)
            .or_default()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, table: &'static str, key: &str) -> StoreResult<()> {
        let mut tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(t) = tables.get_mut(table) {
            t.remove(key);
        }
        Ok(())
    }

    fn entries(&self, table: &'static str) -> StoreResult<Vec<(String, Vec<u8>)>> {
        let tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries: Vec<(String, Vec<u8>)> = tables
            .get(table)
            .map(|t| t.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }

    fn clear(&self, table: &'static str) -> StoreResult<()> {
        let mut tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        tables.remove(table);
        Ok(())
    }
}
