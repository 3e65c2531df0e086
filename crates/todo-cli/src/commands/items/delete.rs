use crate::app::{item_not_found, AppContext};
use crate::cli::DeleteArgs;

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut handle = ctx.open_store_for_write()?;
    let deleted = handle.store_mut().delete_item(&args.id)?;
    handle.close()?;

    if !deleted {
        return Err(item_not_found(&args.id).into());
    }
    if !ctx.quiet() {
        println!("Deleted todo {}", args.id);
    }
    Ok(())
}
