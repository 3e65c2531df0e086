use std::path::PathBuf;

use anyhow::Context;
use todo_core::SqliteItemStore;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_db_path, write_config, StoreBackend, TodoConfig};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path(ctx.cli())?;
    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            config_path.display()
        ));
    }

    let db_path = match args.path.as_ref().or(ctx.cli().db.as_ref()) {
        Some(path) => PathBuf::from(path),
        None => default_db_path()?,
    };

    // Create the database up front so a bad path fails here, not on first use.
    SqliteItemStore::open(&db_path)
        .and_then(SqliteItemStore::close)
        .with_context(|| format!("Failed to create database {}", db_path.display()))?;

    let config = TodoConfig::new(StoreBackend::Sqlite, Some(db_path.clone()));
    write_config(&config_path, &config)?;

    if !ctx.quiet() {
        println!("Initialized todo store at {}", db_path.display());
        println!("Config written to {}", config_path.display());
    }
    Ok(())
}
