use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{items_json, print_item_list, print_json};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let handle = ctx.open_store()?;
    let items = handle.store().list_items()?;
    handle.close()?;

    if args.json {
        print_json(&items_json(&items))
    } else {
        print_item_list(&items, ctx.quiet());
        Ok(())
    }
}
