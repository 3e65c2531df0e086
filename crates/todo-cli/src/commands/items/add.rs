use todo_core::NewItem;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::output::{item_json, print_json};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    if args.title.is_empty() {
        return Err(CliError::invalid_input("Title is required and must be a string").into());
    }

    let mut new_item = NewItem::new(args.title.clone(), args.important);
    if let Some(ref description) = args.description {
        new_item = new_item.with_description(description.clone());
    }

    let mut handle = ctx.open_store_for_write()?;
    let item = handle.store_mut().create_item(&new_item)?;
    handle.close()?;

    if args.json {
        print_json(&item_json(&item))?;
    } else if ctx.quiet() {
        println!("{}", item.id);
    } else {
        println!("Added todo {}: {}", item.id, item.title);
    }
    Ok(())
}
