use phrasevault_core::RecordStore;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{parse_output_format, print_record_list};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let records = store.list()?;

    let format = parse_output_format(args.format.as_deref())?;
    if records.is_empty() && !args.json {
        if !ctx.quiet() {
            println!("No records stored. Run `phrasevault generate --title <TITLE>` to add one.");
        }
        return Ok(());
    }
    print_record_list(&records, args.json, format, ctx.quiet())
}
