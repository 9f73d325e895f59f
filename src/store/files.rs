// FileStore: flat-file backend, one JSON file per record.
//
// Record `<key>` lives at `<dir>/<key>.json`. Keys are built from model
// names, so anything that could escape the directory is refused up front.
// A batch is staged as `<key>.json.tmp` files and renamed into place only
// once every payload is on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::debug;

use super::traits::ModelStore;

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use `dir` for records. It is created on the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key.contains(['/', '\\'])
            || key.contains("..")
            || key.starts_with('.')
        {
            bail!("Invalid model record key '{key}': model names must be plain file names");
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn create_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create model store directory: {}", self.dir.display())
        })
    }
}

fn staging_path(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}

impl ModelStore for FileStore {
    fn backend_name(&self) -> &'static str {
        "files"
    }

    fn save_record(&self, key: &str, payload: &str) -> Result<()> {
        let path = self.record_path(key)?;
        self.create_dir()?;
        fs::write(&path, payload)
            .with_context(|| format!("Failed to write model record: {}", path.display()))?;
        debug!(path = %path.display(), bytes = payload.len(), "Wrote model record");
        Ok(())
    }

    fn save_records(&self, records: &[(String, String)]) -> Result<()> {
        let paths = records
            .iter()
            .map(|(key, _)| self.record_path(key))
            .collect::<Result<Vec<_>>>()?;
        self.create_dir()?;

        let mut staged = Vec::with_capacity(paths.len());
        for (path, (_, payload)) in paths.iter().zip(records) {
            let tmp = staging_path(path);
            if let Err(e) = fs::write(&tmp, payload) {
                for written in &staged {
                    let _ = fs::remove_file(written);
                }
                return Err(e)
                    .with_context(|| format!("Failed to stage model record: {}", tmp.display()));
            }
            staged.push(tmp);
        }

        for (tmp, path) in staged.iter().zip(&paths) {
            fs::rename(tmp, path)
                .with_context(|| format!("Failed to write model record: {}", path.display()))?;
        }
        debug!(dir = %self.dir.display(), records = records.len(), "Wrote model records");
        Ok(())
    }

    fn load_record(&self, key: &str) -> Result<Option<String>> {
        let path = self.record_path(key)?;
        match fs::read_to_string(&path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read model record: {}", path.display())),
        }
    }
}
