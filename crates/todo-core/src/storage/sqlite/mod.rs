//! SQLite storage backend.
//!
//! Items live in a single `todos` table. Ids come from
//! `INTEGER PRIMARY KEY AUTOINCREMENT`, so a deleted id is never handed out
//! again. `createdAt`/`updatedAt` are maintained by SQLite and only used for
//! ordering and change tracking.

mod row;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension, ToSql};
use tracing::{debug, info};

use crate::error::{Result, TodoError};
use crate::storage::traits::ItemStore;
use crate::storage::types::{Item, ItemPatch, NewItem};
use crate::storage::validation::ensure_title;

pub use row::ItemTimestamps;
use row::{parse_row_id, ItemRow, TimestampRow, ITEM_COLUMNS};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS todos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT,
        isImportant INTEGER NOT NULL DEFAULT 0,
        createdAt DATETIME DEFAULT CURRENT_TIMESTAMP,
        updatedAt DATETIME DEFAULT CURRENT_TIMESTAMP
    );
"#;

/// Durable store backed by a SQLite database file.
pub struct SqliteItemStore {
    path: Option<PathBuf>,
    conn: Mutex<Connection>,
}

impl SqliteItemStore {
    /// Open (creating if needed) the database at `path` and ensure the schema.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Self::init_schema(&conn)?;
        info!(path = %path.display(), "database initialized");

        Ok(Self {
            path: Some(path.to_path_buf()),
            conn: Mutex::new(conn),
        })
    }

    /// Open a private in-memory database with the same schema.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;

        Ok(Self {
            path: None,
            conn: Mutex::new(conn),
        })
    }

    /// Close the store, releasing the database handle.
    pub fn close(self) -> Result<()> {
        let conn = self
            .conn
            .into_inner()
            .map_err(|_| TodoError::Storage("SQLite connection poisoned".to_string()))?;
        conn.close().map_err(|(_, err)| TodoError::from(err))?;
        if let Some(path) = self.path {
            debug!(path = %path.display(), "database closed");
        }
        Ok(())
    }

    /// Path of the backing file, or `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Internal creation/modification timestamps for an item.
    pub fn item_timestamps(&self, id: &str) -> Result<Option<ItemTimestamps>> {
        let Some(row_id) = parse_row_id(id) else {
            return Ok(None);
        };
        let conn = self.lock_conn()?;
        let row = conn
            .query_row(
                "SELECT createdAt, updatedAt FROM todos WHERE id = ?",
                [row_id],
                |row| {
                    Ok(TimestampRow {
                        created_at: row.get(0)?,
                        updated_at: row.get(1)?,
                    })
                },
            )
            .optional()?;
        row.map(ItemTimestamps::try_from).transpose()
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| TodoError::Storage("SQLite connection poisoned".to_string()))
    }

    fn fetch_item(conn: &Connection, row_id: i64) -> Result<Option<Item>> {
        let row = conn
            .query_row(
                &format!("SELECT {} FROM todos WHERE id = ?", ITEM_COLUMNS),
                [row_id],
                ItemRow::from_sql,
            )
            .optional()?;
        row.map(Item::try_from).transpose()
    }
}

impl ItemStore for SqliteItemStore {
    fn list_items(&self) -> Result<Vec<Item>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM todos ORDER BY createdAt DESC, id DESC",
            ITEM_COLUMNS
        ))?;
        let rows = stmt.query_map([], ItemRow::from_sql)?;

        let mut items = Vec::new();
        for row in rows {
            items.push(Item::try_from(row?)?);
        }
        Ok(items)
    }

    fn get_item(&self, id: &str) -> Result<Option<Item>> {
        let Some(row_id) = parse_row_id(id) else {
            return Ok(None);
        };
        let conn = self.lock_conn()?;
        Self::fetch_item(&conn, row_id)
    }

    fn create_item(&mut self, item: &NewItem) -> Result<Item> {
        ensure_title(&item.title)?;

        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;

        let inserted = tx.execute(
            "INSERT INTO todos (title, description, isImportant) VALUES (?, ?, ?)",
            (&item.title, &item.description, i64::from(item.is_important)),
        )?;
        if inserted != 1 {
            return Err(TodoError::Storage(
                "Insert did not produce an item id".to_string(),
            ));
        }
        let row_id = tx.last_insert_rowid();
        let created = Self::fetch_item(&tx, row_id)?.ok_or_else(|| {
            TodoError::Storage(format!("Inserted item {} could not be read back", row_id))
        })?;

        tx.commit()?;

        debug!(id = %created.id, "created item");
        Ok(created)
    }

    fn update_item(&mut self, id: &str, patch: &ItemPatch) -> Result<Option<Item>> {
        if let Some(ref title) = patch.title {
            ensure_title(title)?;
        }
        let Some(row_id) = parse_row_id(id) else {
            return Ok(None);
        };

        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;

        if Self::fetch_item(&tx, row_id)?.is_none() {
            return Ok(None);
        }

        if !patch.is_empty() {
            let mut assignments: Vec<&str> = Vec::new();
            let mut params: Vec<Box<dyn ToSql>> = Vec::new();

            if let Some(ref title) = patch.title {
                assignments.push("title = ?");
                params.push(Box::new(title.clone()));
            }
            if let Some(ref description) = patch.description {
                assignments.push("description = ?");
                params.push(Box::new(description.clone()));
            }
            if let Some(is_important) = patch.is_important {
                assignments.push("isImportant = ?");
                params.push(Box::new(i64::from(is_important)));
            }
            assignments.push("updatedAt = CURRENT_TIMESTAMP");
            params.push(Box::new(row_id));

            let query = format!("UPDATE todos SET {} WHERE id = ?", assignments.join(", "));
            let param_refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();
            tx.execute(&query, param_refs.as_slice())?;
            debug!(id, "updated item");
        }

        let updated = Self::fetch_item(&tx, row_id)?;
        tx.commit()?;
        Ok(updated)
    }

    fn delete_item(&mut self, id: &str) -> Result<bool> {
        let Some(row_id) = parse_row_id(id) else {
            return Ok(false);
        };
        let conn = self.lock_conn()?;
        let deleted = conn.execute("DELETE FROM todos WHERE id = ?", [row_id])?;
        if deleted > 0 {
            debug!(id, "deleted item");
        }
        Ok(deleted > 0)
    }
}
