//! Application context for the Phrasevault CLI.
//!
//! Bundles global CLI arguments so handlers do not each re-derive the
//! store path, and centralizes prefix-based record lookup.

use phrasevault_core::{JsonFileStore, PhraseRecord, RecordStore};

use crate::cli::Cli;

/// Application context shared by all command handlers.
pub struct AppContext<'a> {
    cli: &'a Cli,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self { cli }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The configured store path.
    pub fn store_path(&self) -> anyhow::Result<&str> {
        self.cli.store.as_deref().ok_or_else(|| {
            anyhow::anyhow!("No store path provided. Use --store or set PHRASEVAULT_STORE.")
        })
    }

    /// Open the record store at the configured path.
    pub fn open_store(&self) -> anyhow::Result<JsonFileStore> {
        Ok(JsonFileStore::open(self.store_path()?)?)
    }
}

/// Resolve `id` against the store: an exact match wins, otherwise a
/// unique prefix is accepted.
pub fn resolve_record(store: &JsonFileStore, id: &str) -> anyhow::Result<PhraseRecord> {
    if id.is_empty() {
        return Err(anyhow::anyhow!("Record ID cannot be empty"));
    }

    if let Some(record) = store.get(id)? {
        return Ok(record);
    }

    let matches: Vec<PhraseRecord> = store
        .list()?
        .into_iter()
        .filter(|record| record.id.starts_with(id))
        .collect();
    match matches.len() {
        0 => Err(anyhow::anyhow!(
            "Record \"{}\" not found. Run `phrasevault list` to see stored records.",
            id
        )),
        1 => Ok(matches.into_iter().next().unwrap()),
        n => Err(anyhow::anyhow!(
            "Record ID prefix \"{}\" is ambiguous ({} matches)",
            id,
            n
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phrasevault_core::sampler::Phrase;
    use phrasevault_core::wordbank::WordEntry;
    use tempfile::tempdir;

    fn sample_record(title: &str) -> PhraseRecord {
        let phrase = Phrase::new(vec![WordEntry {
            word: "собака".to_string(),
            icon: "🐕".to_string(),
            category: "animals".to_string(),
        }]);
        PhraseRecord::new(title, phrase, String::new()).unwrap()
    }

    #[test]
    fn test_resolve_exact_and_prefix() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("records.json")).unwrap();
        let record = sample_record("mail");
        let id = record.id.clone();
        store.save(record).unwrap();

        assert_eq!(resolve_record(&store, &id).unwrap().id, id);
        assert_eq!(resolve_record(&store, &id[..8]).unwrap().id, id);
    }

    #[test]
    fn test_resolve_rejects_unknown_and_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("records.json")).unwrap();
        assert!(resolve_record(&store, "deadbeef").is_err());
        assert!(resolve_record(&store, "").is_err());
    }
}
