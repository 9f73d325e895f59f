use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Where persisted models live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// One JSON file per record under INKPRINT_STORE_DIR (default)
    Files,
    /// One row per record in the SQLite database at INKPRINT_DB_PATH
    Sqlite,
}

impl StoreBackend {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "files" | "file" => Ok(StoreBackend::Files),
            "sqlite" => Ok(StoreBackend::Sqlite),
            other => anyhow::bail!(
                "Unknown INKPRINT_STORE value '{other}'. Expected 'files' or 'sqlite'."
            ),
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    /// Directory for the flat-file store
    pub store_dir: PathBuf,
    /// SQLite database path (only used by the sqlite backend)
    pub db_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables. Everything has a default.
    pub fn load() -> Result<Self> {
        let store_backend = match env::var("INKPRINT_STORE") {
            Ok(value) => StoreBackend::parse(&value)?,
            Err(_) => StoreBackend::Files,
        };

        Ok(Self {
            store_backend,
            store_dir: env::var("INKPRINT_STORE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_store_dir()),
            db_path: env::var("INKPRINT_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./inkprint.db")),
        })
    }

    /// Check that the sqlite backend, if selected, was compiled in.
    pub fn require_sqlite(&self) -> Result<()> {
        if self.store_backend == StoreBackend::Sqlite && !cfg!(feature = "sqlite") {
            anyhow::bail!(
                "INKPRINT_STORE=sqlite but the 'sqlite' feature is not compiled in.\n\
                 Rebuild with: cargo build --features sqlite\n\
                 Or set INKPRINT_STORE=files to use the flat-file store instead."
            );
        }
        Ok(())
    }
}

/// Platform data directory, e.g. ~/.local/share/inkprint/models on Linux.
pub fn default_store_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("inkprint").join("models"))
        .unwrap_or_else(|| PathBuf::from("./inkprint-models"))
}
