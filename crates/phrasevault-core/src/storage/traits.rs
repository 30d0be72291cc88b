//! Record store trait definition.
//!
//! `RecordStore` is the interface the CLI (or any other frontend) talks
//! to. Backends decide where the flat record list lives; the shipped
//! implementation is a single JSON file.

use super::types::PhraseRecord;
use crate::error::Result;

/// Flat store of saved phrase records.
///
/// All implementations must ensure:
/// - Records are never mutated in place once saved
/// - `save` rejects an id that already exists
/// - Deletion is wholesale by id
pub trait RecordStore {
    /// Persist a new record.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::InvalidInput` if a record with the same id
    /// already exists, or `VaultError::Storage` if persisting fails.
    fn save(&mut self, record: PhraseRecord) -> Result<()>;

    /// Look up a record by exact id.
    fn get(&self, id: &str) -> Result<Option<PhraseRecord>>;

    /// All records, in insertion order.
    fn list(&self) -> Result<Vec<PhraseRecord>>;

    /// Delete a record by id.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::NotFound` if no record has that id.
    fn delete(&mut self, id: &str) -> Result<()>;

    /// Delete all records.
    fn clear(&mut self) -> Result<()>;

    /// Add a batch of records, skipping ids that already exist.
    ///
    /// Returns the number of records actually added.
    fn import(&mut self, records: Vec<PhraseRecord>) -> Result<usize>;
}
