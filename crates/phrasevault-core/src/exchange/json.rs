//! JSON import/export.

use serde_json::Value;

use crate::error::{Result, VaultError};
use crate::storage::PhraseRecord;

/// Serialize records as a pretty-printed JSON array.
pub fn export_json(records: &[PhraseRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parse a record batch from JSON.
///
/// The input must be a JSON array. Elements that fail to deserialize or
/// are missing required fields (id, title, words) are dropped silently.
///
/// # Errors
///
/// Returns `VaultError::InvalidInput` if the input is not a JSON array or
/// if no valid records remain after filtering.
pub fn import_json(input: &str) -> Result<Vec<PhraseRecord>> {
    let values: Vec<Value> = serde_json::from_str(input)
        .map_err(|e| VaultError::InvalidInput(format!("Import file is not a JSON array: {}", e)))?;

    let records: Vec<PhraseRecord> = values
        .into_iter()
        .filter_map(|value| serde_json::from_value::<PhraseRecord>(value).ok())
        .filter(is_complete)
        .collect();

    if records.is_empty() {
        return Err(VaultError::InvalidInput(
            "No valid records found in import file".to_string(),
        ));
    }
    Ok(records)
}

fn is_complete(record: &PhraseRecord) -> bool {
    !record.id.is_empty() && !record.title.is_empty() && !record.words.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::Phrase;
    use crate::wordbank::WordEntry;

    fn sample_record(title: &str) -> PhraseRecord {
        let phrase = Phrase::new(vec![
            WordEntry {
                word: "гора".to_string(),
                icon: "🏔️".to_string(),
                category: "nature".to_string(),
            },
            WordEntry {
                word: "чай".to_string(),
                icon: "🍵".to_string(),
                category: "food".to_string(),
            },
        ]);
        PhraseRecord::new(title, phrase, "c2VhbGVk".to_string()).unwrap()
    }

    #[test]
    fn test_json_round_trip() {
        let records = vec![sample_record("mail"), sample_record("bank")];
        let json = export_json(&records).unwrap();
        let back = import_json(&json).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn test_non_array_input_rejected() {
        let result = import_json("{\"id\": \"abc\"}");
        assert!(matches!(result, Err(VaultError::InvalidInput(_))));
    }

    #[test]
    fn test_malformed_entries_dropped_silently() {
        let good = sample_record("good");
        let json = format!(
            "[{}, {{\"title\": \"missing everything else\"}}, 42]",
            serde_json::to_string(&good).unwrap()
        );
        let back = import_json(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].title, "good");
    }

    #[test]
    fn test_batch_with_nothing_valid_rejected() {
        let result = import_json("[{\"title\": \"no id\"}, null]");
        assert!(matches!(result, Err(VaultError::InvalidInput(_))));
    }

    #[test]
    fn test_missing_encrypted_defaults_to_empty() {
        let mut value = serde_json::to_value(sample_record("mail")).unwrap();
        value.as_object_mut().unwrap().remove("encrypted");
        let json = format!("[{}]", value);
        let back = import_json(&json).unwrap();
        assert_eq!(back[0].encrypted, "");
    }
}
