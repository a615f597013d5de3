use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, Result};
use crate::storage::{LedgerData, LedgerStore};

/// File-backed store: one pretty-printed JSON document holding the whole
/// ledger, written atomically (`.tmp` then rename).
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for JsonFileStore {
    /// Missing file means no state was saved yet; corrupt content is an
    /// error the caller must act on, not silently empty history.
    fn load(&self) -> Result<LedgerData> {
        if !self.path.exists() {
            return Ok(LedgerData::new());
        }
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| {
            LedgerError::Storage(format!(
                "corrupt ledger file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn save(&self, data: &LedgerData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(data)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
