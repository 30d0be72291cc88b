use phrasevault_core::RecordStore;

use crate::app::AppContext;
use crate::cli::ClearArgs;
use crate::helpers::confirm;

pub fn handle_clear(ctx: &AppContext, args: &ClearArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let count = store.list()?.len();
    if count == 0 {
        if !ctx.quiet() {
            println!("Nothing to clear");
        }
        return Ok(());
    }

    let prompt = format!("Delete all {} stored record(s)?", count);
    if !confirm(&prompt, args.force)? {
        if !ctx.quiet() {
            println!("Cancelled");
        }
        return Ok(());
    }

    store.clear()?;
    if !ctx.quiet() {
        println!("Cleared {} record(s)", count);
    }
    Ok(())
}
