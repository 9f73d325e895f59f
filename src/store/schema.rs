// SQLite schema for the model store.

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create all tables if they don't exist yet. Safe to call on every startup.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- One row per (model, category) record, e.g. 'churchill_stems'
        CREATE TABLE IF NOT EXISTS model_records (
            record_key TEXT PRIMARY KEY,
            payload TEXT NOT NULL,              -- JSON {category, counts}
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        INSERT OR IGNORE INTO schema_version (version) VALUES (1);
        ",
    )
    .context("Failed to create model store tables")?;
    Ok(())
}
