use std::fs;

use phrasevault_core::exchange::{export_csv, export_json, import_csv, import_json};
use phrasevault_core::RecordStore;

use crate::app::AppContext;
use crate::cli::{ExportArgs, ImportArgs};
use crate::helpers::{resolve_exchange_format, ExchangeFormat};

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let format = match args.destination {
        // Without a destination there is no extension to inspect; json
        // unless told otherwise.
        None => match args.format.as_deref() {
            None | Some("json") => ExchangeFormat::Json,
            Some("csv") => ExchangeFormat::Csv,
            Some(other) => {
                return Err(anyhow::anyhow!(
                    "Unsupported format: {} (use json or csv)",
                    other
                ))
            }
        },
        Some(ref destination) => resolve_exchange_format(args.format.as_deref(), destination)?,
    };

    let store = ctx.open_store()?;
    let records = store.list()?;
    if records.is_empty() {
        return Err(anyhow::anyhow!("Nothing to export: the store is empty"));
    }

    let contents = match format {
        ExchangeFormat::Json => export_json(&records)?,
        ExchangeFormat::Csv => export_csv(&records),
    };

    match args.destination {
        None => println!("{}", contents),
        Some(ref destination) => {
            fs::write(destination, contents)
                .map_err(|e| anyhow::anyhow!("Failed to write export to {}: {}", destination, e))?;
            if !ctx.quiet() {
                println!("Exported {} record(s) to {}", records.len(), destination);
            }
        }
    }
    Ok(())
}

pub fn handle_import(ctx: &AppContext, args: &ImportArgs) -> anyhow::Result<()> {
    let format = resolve_exchange_format(args.format.as_deref(), &args.source)?;
    let contents = fs::read_to_string(&args.source)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", args.source, e))?;

    let records = match format {
        ExchangeFormat::Json => import_json(&contents)?,
        ExchangeFormat::Csv => import_csv(&contents)?,
    };
    let parsed = records.len();

    let mut store = ctx.open_store()?;
    let added = store.import(records)?;

    if !ctx.quiet() {
        if added < parsed {
            println!(
                "Imported {} record(s) from {} ({} already present)",
                added,
                args.source,
                parsed - added
            );
        } else {
            println!("Imported {} record(s) from {}", added, args.source);
        }
    }
    Ok(())
}
