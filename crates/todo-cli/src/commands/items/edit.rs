use todo_core::ItemPatch;

use crate::app::{item_not_found, AppContext};
use crate::cli::EditArgs;
use crate::output::{item_json, print_item, print_json};

/// Build a patch from the flags that were actually given.
fn patch_from_args(args: &EditArgs) -> ItemPatch {
    let mut patch = ItemPatch::new();
    if let Some(ref title) = args.title {
        patch = patch.title(title.clone());
    }
    if let Some(ref description) = args.description {
        patch = patch.description(description.clone());
    } else if args.clear_description {
        patch = patch.clear_description();
    }
    if args.important {
        patch = patch.important(true);
    } else if args.not_important {
        patch = patch.important(false);
    }
    patch
}

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let patch = patch_from_args(args);
    if patch.is_empty() {
        tracing::debug!(id = %args.id, "edit called without changes");
    }

    let mut handle = ctx.open_store_for_write()?;
    let updated = handle.store_mut().update_item(&args.id, &patch)?;
    handle.close()?;

    let item = updated.ok_or_else(|| item_not_found(&args.id))?;
    if args.json {
        print_json(&item_json(&item))
    } else {
        if !ctx.quiet() {
            println!("Updated todo {}", item.id);
        }
        print_item(&item);
        Ok(())
    }
}
