//! Core data types for the storage layer.

use serde::{Deserialize, Serialize};

/// A todo item as seen by callers.
///
/// Stores keep their own internal representation; this is the projection
/// returned from every read path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Store-assigned identifier, never reused
    pub id: String,

    /// Non-empty title
    pub title: String,

    /// Optional free-form description (absent is distinct from empty)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Importance flag
    pub is_important: bool,
}

/// Builder for creating new items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub title: String,
    pub description: Option<String>,
    pub is_important: bool,
}

impl NewItem {
    pub fn new(title: impl Into<String>, is_important: bool) -> Self {
        Self {
            title: title.into(),
            description: None,
            is_important,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A partial update.
///
/// Every field is a presence slot: `None` leaves the stored value alone.
/// For `description`, `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub is_important: Option<bool>,
}

impl ItemPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    pub fn important(mut self, is_important: bool) -> Self {
        self.is_important = Some(is_important);
        self
    }

    /// True when no field is present, i.e. applying it changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.is_important.is_none()
    }

    /// Merge the present fields into `item`.
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(ref title) = self.title {
            item.title = title.clone();
        }
        if let Some(ref description) = self.description {
            item.description = description.clone();
        }
        if let Some(is_important) = self.is_important {
            item.is_important = is_important;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Item {
        Item {
            id: "1".to_string(),
            title: "Buy milk".to_string(),
            description: Some("2 liters".to_string()),
            is_important: false,
        }
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "1",
                "title": "Buy milk",
                "description": "2 liters",
                "isImportant": false,
            })
        );
    }

    #[test]
    fn test_absent_description_is_omitted() {
        let mut item = sample();
        item.description = None;
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("description").is_none());

        let back: Item = serde_json::from_value(value).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_empty_patch() {
        assert!(ItemPatch::new().is_empty());
        assert!(!ItemPatch::new().clear_description().is_empty());
        assert!(!ItemPatch::new().important(false).is_empty());
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut item = sample();
        ItemPatch::new().title("x").apply_to(&mut item);
        assert_eq!(item.title, "x");
        assert_eq!(item.description.as_deref(), Some("2 liters"));
        assert!(!item.is_important);

        ItemPatch::new().clear_description().important(true).apply_to(&mut item);
        assert_eq!(item.title, "x");
        assert_eq!(item.description, None);
        assert!(item.is_important);
    }

    #[test]
    fn test_new_item_builder() {
        let item = NewItem::new("Call mom", true).with_description("");
        assert_eq!(item.title, "Call mom");
        assert_eq!(item.description.as_deref(), Some(""));
        assert!(item.is_important);
    }
}
