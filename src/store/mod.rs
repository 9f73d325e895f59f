// Model persistence: named JSON records in flat files or SQLite.
//
// The SQLite backend uses rusqlite with the "bundled" feature so there's no
// system SQLite dependency. It is compiled in with the default `sqlite`
// feature; the flat-file backend is always available.

pub mod files;
pub mod records;
pub mod traits;

#[cfg(feature = "sqlite")]
pub mod schema;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use files::FileStore;
pub use traits::ModelStore;

use anyhow::Result;
use tracing::info;

use crate::config::{Config, StoreBackend};

/// Open the store selected by configuration.
pub fn open_store(config: &Config) -> Result<Box<dyn ModelStore>> {
    match config.store_backend {
        StoreBackend::Files => {
            info!(dir = %config.store_dir.display(), "Using flat-file model store");
            Ok(Box::new(FileStore::new(config.store_dir.clone())))
        }
        StoreBackend::Sqlite => {
            config.require_sqlite()?;
            open_sqlite_store(config)
        }
    }
}

#[cfg(feature = "sqlite")]
fn open_sqlite_store(config: &Config) -> Result<Box<dyn ModelStore>> {
    info!(path = %config.db_path.display(), "Using SQLite model store");
    Ok(Box::new(initialize_sqlite(&config.db_path)?))
}

#[cfg(not(feature = "sqlite"))]
fn open_sqlite_store(config: &Config) -> Result<Box<dyn ModelStore>> {
    anyhow::bail!(
        "SQLite model store requested for {} but the 'sqlite' feature is not compiled in",
        config.db_path.display()
    )
}

/// Open (or create) a SQLite model store and run migrations.
#[cfg(feature = "sqlite")]
pub fn initialize_sqlite(db_path: &std::path::Path) -> Result<sqlite::SqliteStore> {
    use anyhow::Context;

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create directory for database: {}", db_path.display())
            })?;
        }
    }

    let conn = rusqlite::Connection::open(db_path)
        .with_context(|| format!("Failed to open database at {}", db_path.display()))?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    schema::create_tables(&conn)?;

    Ok(sqlite::SqliteStore::new(conn))
}
