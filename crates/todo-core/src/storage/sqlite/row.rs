//! Row types for the `todos` table, before projection into domain types.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{Result, TodoError};
use crate::storage::types::Item;

/// Format SQLite uses for `CURRENT_TIMESTAMP`.
const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Columns selected on every item read path, in `ItemRow` order.
pub const ITEM_COLUMNS: &str = "id, title, description, isImportant";

/// Raw row data from the todos table.
#[derive(Debug)]
pub struct ItemRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_important: i64,
}

impl ItemRow {
    pub fn from_sql(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            is_important: row.get(3)?,
        })
    }
}

impl TryFrom<ItemRow> for Item {
    type Error = TodoError;

    fn try_from(row: ItemRow) -> Result<Self> {
        let is_important = match row.is_important {
            0 => false,
            1 => true,
            other => {
                return Err(TodoError::Storage(format!(
                    "Invalid isImportant value {} for item {}",
                    other, row.id
                )))
            }
        };

        Ok(Item {
            id: row.id.to_string(),
            title: row.title,
            description: row.description,
            is_important,
        })
    }
}

/// Internal bookkeeping timestamps of a stored item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemTimestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw timestamp columns, as SQLite stores them.
#[derive(Debug)]
pub struct TimestampRow {
    pub created_at: String,
    pub updated_at: String,
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, SQLITE_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| TodoError::Storage(format!("Invalid timestamp '{}': {}", value, e)))
}

impl TryFrom<TimestampRow> for ItemTimestamps {
    type Error = TodoError;

    fn try_from(row: TimestampRow) -> Result<Self> {
        Ok(ItemTimestamps {
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }
}

/// Map a public id onto a row id.
///
/// Only the canonical decimal rendering matches, so `"01"` or `" 1"` are
/// treated as unknown ids just like the in-memory store treats them.
pub fn parse_row_id(id: &str) -> Option<i64> {
    let row_id = id.parse::<i64>().ok()?;
    (row_id.to_string() == id).then_some(row_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection() {
        let row = ItemRow {
            id: 12,
            title: "Buy milk".to_string(),
            description: None,
            is_important: 1,
        };
        let item = Item::try_from(row).unwrap();
        assert_eq!(item.id, "12");
        assert!(item.is_important);
        assert_eq!(item.description, None);
    }

    #[test]
    fn test_projection_rejects_bad_flag() {
        let row = ItemRow {
            id: 1,
            title: "x".to_string(),
            description: None,
            is_important: 7,
        };
        assert!(matches!(Item::try_from(row), Err(TodoError::Storage(_))));
    }

    #[test]
    fn test_parse_row_id() {
        assert_eq!(parse_row_id("1"), Some(1));
        assert_eq!(parse_row_id("999"), Some(999));
        assert_eq!(parse_row_id("01"), None);
        assert_eq!(parse_row_id("+1"), None);
        assert_eq!(parse_row_id("abc"), None);
        assert_eq!(parse_row_id(""), None);
    }

    #[test]
    fn test_timestamps_parse_sqlite_format() {
        let stamps = ItemTimestamps::try_from(TimestampRow {
            created_at: "2024-03-01 10:00:00".to_string(),
            updated_at: "2024-03-02 11:30:05".to_string(),
        })
        .unwrap();
        assert!(stamps.updated_at > stamps.created_at);
        assert!(ItemTimestamps::try_from(TimestampRow {
            created_at: "yesterday".to_string(),
            updated_at: "2024-03-02 11:30:05".to_string(),
        })
        .is_err());
    }
}
