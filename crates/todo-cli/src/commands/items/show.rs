use crate::app::{item_not_found, AppContext};
use crate::cli::ShowArgs;
use crate::output::{item_json, print_item, print_json};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let handle = ctx.open_store()?;
    let item = handle.store().get_item(&args.id)?;
    handle.close()?;

    let item = item.ok_or_else(|| item_not_found(&args.id))?;
    if args.json {
        print_json(&item_json(&item))
    } else {
        print_item(&item);
        Ok(())
    }
}
