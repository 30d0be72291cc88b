use zeroize::Zeroizing;

use phrasevault_core::{encrypt, generate_phrase, PhraseRecord, RecordStore};

use crate::app::AppContext;
use crate::cli::GenerateArgs;
use crate::helpers::prompt_secret;
use crate::output::{print_phrase, record_json, short_id};

pub fn handle_generate(ctx: &AppContext, args: &GenerateArgs) -> anyhow::Result<()> {
    let phrase = generate_phrase(args.length)?;

    let secret: Option<Zeroizing<String>> = if args.prompt_secret {
        Some(prompt_secret()?)
    } else {
        args.secret.clone().map(Zeroizing::new)
    };

    let encrypted = match secret {
        Some(ref value) => encrypt(value, &phrase.to_passphrase())?,
        None => String::new(),
    };

    if args.no_save {
        if args.title.is_some() {
            return Err(anyhow::anyhow!("--title cannot be used with --no-save"));
        }
        if args.json {
            let mut value = serde_json::json!({
                "phrase": phrase.to_passphrase(),
                "words": phrase,
            });
            if !encrypted.is_empty() {
                value["encrypted"] = serde_json::Value::String(encrypted);
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            print_phrase(&phrase);
            if !encrypted.is_empty() {
                println!();
                println!("{}", encrypted);
            }
        }
        return Ok(());
    }

    let title = args.title.clone().ok_or_else(|| {
        anyhow::anyhow!("A title is required to save; pass --title or use --no-save")
    })?;
    if title.trim().is_empty() {
        return Err(anyhow::anyhow!("--title cannot be empty"));
    }

    let record = PhraseRecord::new(title, phrase, encrypted)?;
    let mut store = ctx.open_store()?;
    store.save(record.clone())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record_json(&record))?);
    } else {
        if !ctx.quiet() {
            println!("Saved record {} ({})", short_id(&record.id), record.title);
        }
        print_phrase(&record.words);
    }
    Ok(())
}
