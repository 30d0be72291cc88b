//! CSV import/export.
//!
//! The table format is deliberately simple: five named columns, naive
//! comma splitting, double quotes stripped rather than parsed. Values
//! containing commas therefore do not survive a round trip; this is an
//! inherited limitation of the interchange format, not a storage format.
//!
//! CSV cannot carry icons or categories, so imported words are rebuilt
//! with a placeholder icon and the category `imported`.

use chrono::{DateTime, Utc};

use crate::error::{Result, VaultError};
use crate::sampler::Phrase;
use crate::storage::PhraseRecord;
use crate::wordbank::WordEntry;

/// Column names used on export, in order. Import accepts any order.
pub const CSV_HEADERS: [&str; 5] = ["ID", "Title", "Phrase", "Created At", "Encrypted"];

/// Accepted header spellings per column. The Russian names keep files
/// exported by earlier versions of this tool importable.
const HEADER_ALIASES: [&[&str]; 5] = [
    &["ID"],
    &["Title", "Название"],
    &["Phrase", "Фраза"],
    &["Created At", "Дата создания"],
    &["Encrypted", "Зашифрованные данные"],
];

const IMPORT_ICON: &str = "🔑";
const IMPORT_CATEGORY: &str = "imported";

/// Serialize records as a CSV table.
pub fn export_csv(records: &[PhraseRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    for record in records {
        lines.push(
            [
                record.id.clone(),
                quoted(&record.title),
                quoted(&record.passphrase()),
                record.created_at.to_rfc3339(),
                quoted(&record.encrypted),
            ]
            .join(","),
        );
    }
    lines.join("\n")
}

/// Parse a record batch from CSV.
///
/// The header row must contain every expected column (by name; order is
/// free, and each column also accepts its Russian spelling). Data rows
/// missing an id, title or phrase, or carrying an unparseable timestamp,
/// are dropped silently.
///
/// # Errors
///
/// Returns `VaultError::InvalidInput` if the header is missing or
/// incomplete, or if no valid rows remain.
pub fn import_csv(input: &str) -> Result<Vec<PhraseRecord>> {
    let mut lines = input.lines().filter(|line| !line.trim().is_empty());

    let header_line = lines.next().ok_or_else(|| {
        VaultError::InvalidInput("CSV file must contain a header row and data".to_string())
    })?;
    let headers: Vec<String> = split_row(header_line);

    let mut columns = [0usize; CSV_HEADERS.len()];
    for (slot, aliases) in HEADER_ALIASES.iter().enumerate() {
        columns[slot] = headers
            .iter()
            .position(|header| aliases.contains(&header.as_str()))
            .ok_or_else(|| {
                VaultError::InvalidInput(format!(
                    "CSV header is missing required column \"{}\" (expected: {})",
                    CSV_HEADERS[slot],
                    CSV_HEADERS.join(", ")
                ))
            })?;
    }
    let [id_col, title_col, phrase_col, date_col, encrypted_col] = columns;

    let mut records = Vec::new();
    for line in lines {
        let values = split_row(line);
        let Some(record) =
            row_to_record(&values, id_col, title_col, phrase_col, date_col, encrypted_col)
        else {
            continue;
        };
        records.push(record);
    }

    if records.is_empty() {
        return Err(VaultError::InvalidInput(
            "No valid records found in import file".to_string(),
        ));
    }
    Ok(records)
}

fn row_to_record(
    values: &[String],
    id_col: usize,
    title_col: usize,
    phrase_col: usize,
    date_col: usize,
    encrypted_col: usize,
) -> Option<PhraseRecord> {
    let id = values.get(id_col)?.clone();
    let title = values.get(title_col)?.clone();
    if id.is_empty() || title.is_empty() {
        return None;
    }

    let created_at = DateTime::parse_from_rfc3339(values.get(date_col)?)
        .ok()?
        .with_timezone(&Utc);

    let words: Vec<WordEntry> = values
        .get(phrase_col)?
        .split_whitespace()
        .map(|word| WordEntry {
            word: word.to_string(),
            icon: IMPORT_ICON.to_string(),
            category: IMPORT_CATEGORY.to_string(),
        })
        .collect();
    if words.is_empty() {
        return None;
    }

    let encrypted = values.get(encrypted_col).cloned().unwrap_or_default();

    Some(PhraseRecord {
        id,
        title,
        words: Phrase::new(words),
        created_at,
        encrypted,
    })
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value)
}

fn split_row(line: &str) -> Vec<String> {
    line.split(',')
        .map(|value| value.trim().replace('"', ""))
        .collect()
}
