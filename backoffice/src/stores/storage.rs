//! redb-backed storage for the local store gateway
//!
//! One database file holds all three tables. redb commits with
//! `Durability::Immediate` by default, so the file is always in a
//! consistent state even across forced shutdowns; concurrent access
//! within the process is serialized by redb's own transaction locking.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};

use super::{
    StorageBackend, StoreResult, TABLA_CUENTAS_PARA_PAGAR, TABLA_ORDEN_COMPRA, TABLA_SESION,
};

const SESION_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new(TABLA_SESION);
const ORDEN_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new(TABLA_ORDEN_COMPRA);
const CUENTAS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new(TABLA_CUENTAS_PARA_PAGAR);

macro_rules! definicion {
    ($table:expr) => {
        match $table {
            TABLA_ORDEN_COMPRA => ORDEN_TABLE,
            TABLA_CUENTAS_PARA_PAGAR => CUENTAS_TABLE,
            _ => SESION_TABLE,
        }
    };
}

/// Persistent backend over a redb database file
pub struct RedbBackend {
    db: Arc<Database>,
}

impl RedbBackend {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;

        // Create all tables up front so reads never hit a missing table
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SESION_TABLE)?;
            let _ = write_txn.open_table(ORDEN_TABLE)?;
            let _ = write_txn.open_table(CUENTAS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl StorageBackend for RedbBackend {
    fn get(&self, table: &'static str, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(definicion!(table))?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }

    fn put(&self, table: &'static str, key: &str, value: &[u8]) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(definicion!(table))?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, table: &'static str, key: &str) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(definicion!(table))?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn entries(&self, table: &'static str) -> StoreResult<Vec<(String, Vec<u8>)>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(definicion!(table))?;

        let mut entries = Vec::new();
        for result in table.iter()? {
            let (key, value) = result?;
            entries.push((key.value().to_string(), value.value().to_vec()));
        }
        Ok(entries)
    }

    fn clear(&self, table: &'static str) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(definicion!(table))?;
            let keys: Vec<String> = {
                let mut keys = Vec::new();
                for result in table.iter()? {
                    let (key, _value) = result?;
                    keys.push(key.value().to_string());
                }
                keys
            };
            for key in keys {
                table.remove(key.as_str())?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }
}
