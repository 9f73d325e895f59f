// Model store trait: backend-agnostic persistence of named records.
//
// Implementors: FileStore (one JSON file per record), SqliteStore (one row
// per record). A model writes five records keyed `<name>_<category>` in one
// save_records batch; the store treats keys and payloads as opaque strings.

use anyhow::Result;

pub trait ModelStore: Send + Sync {
    /// Short backend name for logs and status output.
    fn backend_name(&self) -> &'static str;

    /// Store a record, replacing any existing record with the same key.
    fn save_record(&self, key: &str, payload: &str) -> Result<()>;

    /// Store several records as one unit.
    ///
    /// The default writes them in order and stops at the first failure, which
    /// leaves earlier records written. Backends that can do better override it.
    fn save_records(&self, records: &[(String, String)]) -> Result<()> {
        for (key, payload) in records {
            self.save_record(key, payload)?;
        }
        Ok(())
    }

    /// Load a record by key. Returns None if no such record exists.
    fn load_record(&self, key: &str) -> Result<Option<String>>;
}
