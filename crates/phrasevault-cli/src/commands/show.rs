use phrasevault_core::decrypt;

use crate::app::{resolve_record, AppContext};
use crate::cli::ShowArgs;
use crate::output::{print_record, record_json};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let record = resolve_record(&store, &args.id)?;

    let revealed = if args.reveal {
        if !record.has_payload() {
            return Err(anyhow::anyhow!("Record has no sealed secret"));
        }
        Some(decrypt(&record.encrypted, &record.passphrase())?)
    } else {
        None
    };

    if args.json {
        let mut value = record_json(&record);
        if let Some(ref secret) = revealed {
            value["secret"] = serde_json::Value::String(secret.clone());
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print_record(&record, ctx.quiet());
    if let Some(secret) = revealed {
        println!();
        println!("{}", secret);
    }
    Ok(())
}
