//! Core data types for the storage layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ident::generate_id;
use crate::sampler::Phrase;

/// A saved mnemonic phrase with its encrypted payload.
///
/// Serialized with camelCase field names (`createdAt`) to stay
/// interchange-compatible with exports produced by earlier versions of
/// this tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseRecord {
    /// 32-character lowercase hex identifier, unique by construction.
    pub id: String,

    /// User-facing label for the record.
    pub title: String,

    /// The phrase itself, in display order.
    pub words: Phrase,

    /// When this record was created.
    pub created_at: DateTime<Utc>,

    /// Encrypted payload (base64 string), empty when nothing was sealed.
    #[serde(default)]
    pub encrypted: String,
}

impl PhraseRecord {
    /// Build a new record with a fresh identifier and the current time.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::RandomSource` if id generation fails.
    pub fn new(title: impl Into<String>, words: Phrase, encrypted: String) -> Result<Self> {
        Ok(Self {
            id: generate_id()?,
            title: title.into(),
            words,
            created_at: Utc::now(),
            encrypted,
        })
    }

    /// The passphrase string for this record's payload.
    pub fn passphrase(&self) -> String {
        self.words.to_passphrase()
    }

    /// Whether the record carries an encrypted payload.
    pub fn has_payload(&self) -> bool {
        !self.encrypted.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank::WordEntry;

    fn sample_phrase() -> Phrase {
        Phrase::new(vec![
            WordEntry {
                word: "собака".to_string(),
                icon: "🐕".to_string(),
                category: "animals".to_string(),
            },
            WordEntry {
                word: "луна".to_string(),
                icon: "🌙".to_string(),
                category: "nature".to_string(),
            },
        ])
    }

    #[test]
    fn test_new_record_has_fresh_id() {
        let a = PhraseRecord::new("mail", sample_phrase(), String::new()).unwrap();
        let b = PhraseRecord::new("bank", sample_phrase(), String::new()).unwrap();
        assert_eq!(a.id.len(), 32);
        assert_ne!(a.id, b.id);
        assert!(!a.has_payload());
    }

    #[test]
    fn test_passphrase_joins_words() {
        let record = PhraseRecord::new("mail", sample_phrase(), String::new()).unwrap();
        assert_eq!(record.passphrase(), "собака луна");
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let record = PhraseRecord::new("mail", sample_phrase(), "abc".to_string()).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
        assert_eq!(json["words"][0]["word"], "собака");

        let back: PhraseRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
