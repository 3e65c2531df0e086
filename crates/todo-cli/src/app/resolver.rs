//! Path and backend resolution for config and database files.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_db_path, read_config, StoreBackend, TodoConfig};
use crate::constants::LIST_HINT;
use crate::errors::CliError;

/// Where the store for this invocation lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    Memory,
    Sqlite(PathBuf),
}

/// Resolve the config file path (`--config` / `TODO_CONFIG`, then XDG default).
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(ref value) = cli.config {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file, falling back to defaults when it does not exist.
pub fn load_config(cli: &Cli) -> anyhow::Result<TodoConfig> {
    let path = resolve_config_path(cli)?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(TodoConfig::default());
    }
    read_config(&path)
}

/// Pick the store: CLI flags first, then config, then defaults.
pub fn resolve_store_location(cli: &Cli, config: &TodoConfig) -> anyhow::Result<StoreLocation> {
    if cli.memory {
        return Ok(StoreLocation::Memory);
    }
    if let Some(ref path) = cli.db {
        return Ok(StoreLocation::Sqlite(PathBuf::from(path)));
    }
    match config.store.backend {
        StoreBackend::Memory => Ok(StoreLocation::Memory),
        StoreBackend::Sqlite => {
            let path = match config.store.path {
                Some(ref path) => PathBuf::from(path),
                None => default_db_path()?,
            };
            Ok(StoreLocation::Sqlite(path))
        }
    }
}

/// Not-found error for an item id.
pub fn item_not_found(id: &str) -> CliError {
    CliError::not_found(format!("Todo not found: {}", id), LIST_HINT)
}
