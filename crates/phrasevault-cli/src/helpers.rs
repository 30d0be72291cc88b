//! Input helpers shared by command handlers.

use std::io::{IsTerminal, Read};
use std::path::Path;

use dialoguer::{Confirm, Password};
use zeroize::Zeroizing;

/// Interchange formats supported by export and import.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExchangeFormat {
    Json,
    Csv,
}

/// Decide the interchange format: an explicit `--format` wins, otherwise
/// the file extension decides.
pub fn resolve_exchange_format(
    explicit: Option<&str>,
    path: &str,
) -> anyhow::Result<ExchangeFormat> {
    if let Some(value) = explicit {
        return match value {
            "json" => Ok(ExchangeFormat::Json),
            "csv" => Ok(ExchangeFormat::Csv),
            other => Err(anyhow::anyhow!(
                "Unsupported format: {} (use json or csv)",
                other
            )),
        };
    }

    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(ExchangeFormat::Json),
        Some("csv") => Ok(ExchangeFormat::Csv),
        _ => Err(anyhow::anyhow!(
            "Cannot infer format from \"{}\"; use a .json/.csv extension or pass --format",
            path
        )),
    }
}

/// Read a secret with hidden input. `PHRASEVAULT_SECRET` and piped stdin
/// override the prompt for scripted use.
pub fn prompt_secret() -> anyhow::Result<Zeroizing<String>> {
    if let Ok(value) = std::env::var("PHRASEVAULT_SECRET") {
        if !value.trim().is_empty() {
            return Ok(Zeroizing::new(value));
        }
    }

    if !std::io::stdin().is_terminal() {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        let trimmed = buffer.trim_end().to_string();
        if trimmed.is_empty() {
            return Err(anyhow::anyhow!("No secret provided on stdin"));
        }
        return Ok(Zeroizing::new(trimmed));
    }

    let value = Password::new()
        .with_prompt("Secret to seal")
        .with_confirmation("Confirm secret", "Secrets do not match")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read secret: {}", e))?;
    Ok(Zeroizing::new(value))
}

/// Ask for confirmation unless `force` is set. Returns false when the
/// user declines.
pub fn confirm(prompt: &str, force: bool) -> anyhow::Result<bool> {
    if force {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}
