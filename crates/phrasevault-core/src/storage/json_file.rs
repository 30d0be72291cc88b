//! JSON-file record store.
//!
//! The whole record list is one JSON array on disk. Every mutation
//! rewrites the file through a sibling temp file and an atomic rename, so
//! a crash mid-write never leaves a truncated store behind. A missing
//! file is an empty store.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::traits::RecordStore;
use super::types::PhraseRecord;
use crate::error::{Result, VaultError};
use crate::fs::rename_with_fallback;

/// File-backed record store.
pub struct JsonFileStore {
    path: PathBuf,
    records: Vec<PhraseRecord>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading existing records if the file exists.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::Storage` if the file cannot be read and
    /// `VaultError::Validation` if its contents are not a record array.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            Vec::new()
        };
        Ok(Self { path, records })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.records)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut temp_path = self.path.clone().into_os_string();
        temp_path.push(".tmp");
        let temp_path = PathBuf::from(temp_path);

        fs::write(&temp_path, contents)?;
        rename_with_fallback(&temp_path, &self.path)?;
        Ok(())
    }

    fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|record| record.id == id)
    }
}

impl RecordStore for JsonFileStore {
    fn save(&mut self, record: PhraseRecord) -> Result<()> {
        if self.contains(&record.id) {
            return Err(VaultError::InvalidInput(format!(
                "Record id \"{}\" already exists",
                record.id
            )));
        }
        self.records.push(record);
        self.persist()
    }

    fn get(&self, id: &str) -> Result<Option<PhraseRecord>> {
        Ok(self.records.iter().find(|record| record.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<PhraseRecord>> {
        Ok(self.records.clone())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        if self.records.len() == before {
            return Err(VaultError::NotFound(format!("Record \"{}\"", id)));
        }
        self.persist()
    }

    fn clear(&mut self) -> Result<()> {
        self.records.clear();
        self.persist()
    }

    fn import(&mut self, records: Vec<PhraseRecord>) -> Result<usize> {
        let mut seen: HashSet<String> =
            self.records.iter().map(|record| record.id.clone()).collect();
        let mut added = 0;
        for record in records {
            if !seen.insert(record.id.clone()) {
                continue;
            }
            self.records.push(record);
            added += 1;
        }
        if added > 0 {
            self.persist()?;
        }
        Ok(added)
    }
}
