//! Payload validation for item creation and updates.
//!
//! These functions turn an untyped JSON body into `NewItem`/`ItemPatch`.
//! The messages here are the caller-facing ones; the boundary layer reports
//! them verbatim.

use serde_json::{Map, Value};

use crate::error::{Result, TodoError};
use crate::storage::types::{ItemPatch, NewItem};

pub const MSG_NOT_OBJECT: &str = "Request body must be a JSON object";
pub const MSG_TITLE_REQUIRED: &str = "Title is required and must be a string";
pub const MSG_TITLE_NOT_STRING: &str = "Title must be a string";
pub const MSG_TITLE_EMPTY: &str = "Title must not be empty";
pub const MSG_IMPORTANT_NOT_BOOL: &str = "isImportant must be a boolean";
pub const MSG_DESCRIPTION_NOT_STRING: &str = "Description must be a string";

fn invalid(message: &str) -> TodoError {
    TodoError::InvalidInput(message.to_string())
}

fn as_object(body: &Value) -> Result<&Map<String, Value>> {
    body.as_object().ok_or_else(|| invalid(MSG_NOT_OBJECT))
}

/// Absent and `null` both mean "no description" at creation time.
fn parse_description(value: Option<&Value>) -> Result<Option<Option<String>>> {
    match value {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(Value::String(s)) => Ok(Some(Some(s.clone()))),
        Some(_) => Err(invalid(MSG_DESCRIPTION_NOT_STRING)),
    }
}

/// Validate a creation payload.
///
/// `title` must be a non-empty string (whitespace is kept as-is) and
/// `isImportant` must be a JSON boolean; no coercion is attempted.
pub fn parse_new_item(body: &Value) -> Result<NewItem> {
    let fields = as_object(body)?;

    let title = match fields.get("title") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => return Err(invalid(MSG_TITLE_REQUIRED)),
    };

    let is_important = match fields.get("isImportant") {
        Some(Value::Bool(b)) => *b,
        _ => return Err(invalid(MSG_IMPORTANT_NOT_BOOL)),
    };

    let description = parse_description(fields.get("description"))?.flatten();

    Ok(NewItem {
        title,
        description,
        is_important,
    })
}

/// Validate an update payload.
///
/// Keys that are missing stay absent in the patch. A `null` description
/// clears the stored one; any string (including `""`) replaces it.
pub fn parse_item_patch(body: &Value) -> Result<ItemPatch> {
    let fields = as_object(body)?;

    let title = match fields.get("title") {
        None => None,
        Some(Value::String(s)) => {
            ensure_title(s)?;
            Some(s.clone())
        }
        Some(_) => return Err(invalid(MSG_TITLE_NOT_STRING)),
    };

    let is_important = match fields.get("isImportant") {
        None => None,
        Some(Value::Bool(b)) => Some(*b),
        Some(_) => return Err(invalid(MSG_IMPORTANT_NOT_BOOL)),
    };

    let description = parse_description(fields.get("description"))?;

    Ok(ItemPatch {
        title,
        description,
        is_important,
    })
}

/// Store-side precondition on titles.
pub fn ensure_title(title: &str) -> Result<()> {
    if title.is_empty() {
        return Err(invalid(MSG_TITLE_EMPTY));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(err: TodoError) -> String {
        match err {
            TodoError::InvalidInput(msg) => msg,
            other => panic!("expected input error, got {other:?}"),
        }
    }

    #[test]
    fn test_create_minimal() {
        let item = parse_new_item(&json!({"title": "Buy milk", "isImportant": false})).unwrap();
        assert_eq!(item, NewItem::new("Buy milk", false));
    }

    #[test]
    fn test_create_keeps_description_and_whitespace_title() {
        let item =
            parse_new_item(&json!({"title": "  ", "description": "", "isImportant": true}))
                .unwrap();
        assert_eq!(item.title, "  ");
        assert_eq!(item.description.as_deref(), Some(""));
        assert!(item.is_important);
    }

    #[test]
    fn test_create_null_description_is_absent() {
        let item =
            parse_new_item(&json!({"title": "a", "description": null, "isImportant": true}))
                .unwrap();
        assert_eq!(item.description, None);
    }

    #[test]
    fn test_create_rejects_bad_title() {
        for body in [
            json!({"isImportant": true}),
            json!({"title": "", "isImportant": true}),
            json!({"title": 42, "isImportant": true}),
            json!({"title": null, "isImportant": true}),
        ] {
            assert_eq!(message(parse_new_item(&body).unwrap_err()), MSG_TITLE_REQUIRED);
        }
    }

    #[test]
    fn test_create_rejects_non_boolean_flag() {
        for body in [
            json!({"title": "a"}),
            json!({"title": "a", "isImportant": "true"}),
            json!({"title": "a", "isImportant": 1}),
        ] {
            assert_eq!(
                message(parse_new_item(&body).unwrap_err()),
                MSG_IMPORTANT_NOT_BOOL
            );
        }
    }

    #[test]
    fn test_create_rejects_non_object() {
        assert_eq!(
            message(parse_new_item(&json!(["title"])).unwrap_err()),
            MSG_NOT_OBJECT
        );
    }

    #[test]
    fn test_create_rejects_non_string_description() {
        let body = json!({"title": "a", "description": 3, "isImportant": false});
        assert_eq!(
            message(parse_new_item(&body).unwrap_err()),
            MSG_DESCRIPTION_NOT_STRING
        );
    }

    #[test]
    fn test_patch_empty_object() {
        assert!(parse_item_patch(&json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_patch_presence_slots() {
        let patch = parse_item_patch(&json!({"description": null})).unwrap();
        assert_eq!(patch, ItemPatch::new().clear_description());

        let patch = parse_item_patch(&json!({"description": "", "isImportant": true})).unwrap();
        assert_eq!(patch, ItemPatch::new().description("").important(true));

        let patch = parse_item_patch(&json!({"title": "x"})).unwrap();
        assert_eq!(patch, ItemPatch::new().title("x"));
    }

    #[test]
    fn test_patch_rejects_bad_types() {
        assert_eq!(
            message(parse_item_patch(&json!({"title": 1})).unwrap_err()),
            MSG_TITLE_NOT_STRING
        );
        assert_eq!(
            message(parse_item_patch(&json!({"title": null})).unwrap_err()),
            MSG_TITLE_NOT_STRING
        );
        assert_eq!(
            message(parse_item_patch(&json!({"title": ""})).unwrap_err()),
            MSG_TITLE_EMPTY
        );
        assert_eq!(
            message(parse_item_patch(&json!({"isImportant": null})).unwrap_err()),
            MSG_IMPORTANT_NOT_BOOL
        );
        assert_eq!(
            message(parse_item_patch(&json!({"description": false})).unwrap_err()),
            MSG_DESCRIPTION_NOT_STRING
        );
    }

    #[test]
    fn test_patch_ignores_unknown_keys() {
        let patch = parse_item_patch(&json!({"id": "7", "done": true})).unwrap();
        assert!(patch.is_empty());
    }
}
