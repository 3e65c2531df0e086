//! Application context for the Todo CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file and knows how
//! to open the store the invocation should run against.

use anyhow::Context;
use once_cell::unsync::OnceCell;
use todo_core::{ItemStore, MemoryItemStore, SqliteItemStore};
use tracing::warn;

use crate::cli::Cli;
use crate::config::TodoConfig;
use crate::constants::VOLATILE_STORE_WARNING;

use super::resolver::{load_config, resolve_store_location, StoreLocation};

/// An opened store, kept concrete so it can be closed on exit.
pub enum StoreHandle {
    Memory(MemoryItemStore),
    Sqlite(SqliteItemStore),
}

impl StoreHandle {
    pub fn store(&self) -> &dyn ItemStore {
        match self {
            StoreHandle::Memory(store) => store,
            StoreHandle::Sqlite(store) => store,
        }
    }

    pub fn store_mut(&mut self) -> &mut dyn ItemStore {
        match self {
            StoreHandle::Memory(store) => store,
            StoreHandle::Sqlite(store) => store,
        }
    }

    pub fn is_volatile(&self) -> bool {
        matches!(self, StoreHandle::Memory(_))
    }

    /// Release the backing store.
    pub fn close(self) -> anyhow::Result<()> {
        match self {
            StoreHandle::Memory(_) => Ok(()),
            StoreHandle::Sqlite(store) => store.close().context("Failed to close database"),
        }
    }
}

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<TodoConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&TodoConfig> {
        self.config.get_or_try_init(|| load_config(self.cli))
    }

    /// Open the store selected by flags and config.
    pub fn open_store(&self) -> anyhow::Result<StoreHandle> {
        let location = resolve_store_location(self.cli, self.config()?)?;
        match location {
            StoreLocation::Memory => Ok(StoreHandle::Memory(MemoryItemStore::new())),
            StoreLocation::Sqlite(path) => {
                let store = SqliteItemStore::open(&path)
                    .with_context(|| format!("Failed to open database {}", path.display()))?;
                Ok(StoreHandle::Sqlite(store))
            }
        }
    }

    /// Open the store for a command that changes items.
    ///
    /// The memory store does not outlive the process, so the change is
    /// reported as discarded.
    pub fn open_store_for_write(&self) -> anyhow::Result<StoreHandle> {
        let handle = self.open_store()?;
        if handle.is_volatile() {
            warn!("{}", VOLATILE_STORE_WARNING);
        }
        Ok(handle)
    }
}
