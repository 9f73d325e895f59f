// SqliteStore: rusqlite backend implementing the ModelStore trait.
//
// Connection is Send but not Sync, so it sits behind a Mutex. Each call locks,
// runs its statements, and releases. A batch of records is one transaction.

use std::sync::Mutex;

use anyhow::{anyhow, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::traits::ModelStore;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Wrap an already-opened connection whose tables exist.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("SQLite model store lock poisoned"))
    }
}

const UPSERT_RECORD: &str = "INSERT INTO model_records (record_key, payload, updated_at)
     VALUES (?1, ?2, datetime('now'))
     ON CONFLICT(record_key) DO UPDATE SET
        payload = ?2,
        updated_at = datetime('now')";

impl ModelStore for SqliteStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    fn save_record(&self, key: &str, payload: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(UPSERT_RECORD, params![key, payload])?;
        Ok(())
    }

    fn save_records(&self, records: &[(String, String)]) -> Result<()> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        for (key, payload) in records {
            tx.execute(UPSERT_RECORD, params![key, payload])?;
        }
        tx.commit()?;
        Ok(())
    }

    fn load_record(&self, key: &str) -> Result<Option<String>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT payload FROM model_records WHERE record_key = ?1")?;
        let payload = stmt.query_row(params![key], |row| row.get(0)).optional()?;
        Ok(payload)
    }
}
