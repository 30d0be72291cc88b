//! Output formatting helpers for the CLI.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use phrasevault_core::{Phrase, PhraseRecord};

#[derive(Clone, Copy)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Display prefix of a record id: the first eight bytes, or the whole id
/// when it is shorter or byte 8 is not a char boundary. Imported ids are
/// arbitrary non-empty strings, so plain slicing would panic.
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(anyhow::anyhow!(
            "Unsupported format: {} (use table or plain)",
            other
        )),
    }
}

pub fn record_json(record: &PhraseRecord) -> serde_json::Value {
    serde_json::json!({
        "id": record.id,
        "title": record.title,
        "phrase": record.passphrase(),
        "words": record.words,
        "createdAt": record.created_at,
        "hasPayload": record.has_payload(),
    })
}

pub fn records_json(records: &[PhraseRecord]) -> Vec<serde_json::Value> {
    records.iter().map(record_json).collect()
}

/// Print a record list as JSON, a table, or plain lines.
pub fn print_record_list(
    records: &[PhraseRecord],
    json: bool,
    format: Option<OutputFormat>,
    quiet: bool,
) -> anyhow::Result<()> {
    if json {
        if format.is_some() {
            return Err(anyhow::anyhow!("--format cannot be used with --json"));
        }
        println!("{}", serde_json::to_string_pretty(&records_json(records))?);
        return Ok(());
    }

    match format.unwrap_or(OutputFormat::Table) {
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ID", "Title", "Words", "Created", "Sealed"]);
            for record in records {
                table.add_row(vec![
                    short_id(&record.id).to_string(),
                    record.title.clone(),
                    record.words.len().to_string(),
                    record.created_at.format("%Y-%m-%d %H:%M").to_string(),
                    if record.has_payload() { "yes" } else { "no" }.to_string(),
                ]);
            }
            println!("{}", table);
        }
        OutputFormat::Plain => {
            if !quiet && !records.is_empty() {
                println!("ID | CREATED_AT | TITLE");
            }
            for record in records {
                println!("{} | {} | {}", record.id, record.created_at, record.title);
            }
        }
    }
    Ok(())
}

/// Print a single record's details. The phrase itself is always shown;
/// that is the point of the tool.
pub fn print_record(record: &PhraseRecord, quiet: bool) {
    if !quiet {
        println!("ID: {}", record.id);
        println!("Title: {}", record.title);
        println!("Created: {}", record.created_at);
        println!(
            "Sealed secret: {}",
            if record.has_payload() { "yes" } else { "no" }
        );
        println!();
    }
    print_phrase(&record.words);
}

/// Print each word with its icon and category, then the bare passphrase
/// string on its own line for copy-paste.
pub fn print_phrase(phrase: &Phrase) {
    for entry in phrase.words() {
        println!("{} {} ({})", entry.icon, entry.word, entry.category);
    }
    println!();
    println!("{}", phrase.to_passphrase());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id_truncates_long_ids() {
        assert_eq!(short_id("0123456789abcdef"), "01234567");
    }

    #[test]
    fn test_short_id_keeps_short_ids_whole() {
        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id(""), "");
    }

    #[test]
    fn test_short_id_never_splits_multibyte_chars() {
        // Byte 8 falls inside the third Cyrillic character.
        assert_eq!(short_id("abcключи"), "abcключи");
    }
}
