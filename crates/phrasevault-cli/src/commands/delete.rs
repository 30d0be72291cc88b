use phrasevault_core::RecordStore;

use crate::app::{resolve_record, AppContext};
use crate::cli::DeleteArgs;
use crate::helpers::confirm;
use crate::output::short_id;

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let record = resolve_record(&store, &args.id)?;

    let prompt = format!("Delete record \"{}\"?", record.title);
    if !confirm(&prompt, args.force)? {
        if !ctx.quiet() {
            println!("Cancelled");
        }
        return Ok(());
    }

    store.delete(&record.id)?;
    if !ctx.quiet() {
        println!("Deleted record {} ({})", short_id(&record.id), record.title);
    }
    Ok(())
}
