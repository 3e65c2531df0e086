//! JSON output formatting for items.

use todo_core::Item;

/// Convert an item to its public JSON shape.
pub fn item_json(item: &Item) -> serde_json::Value {
    serde_json::json!(item)
}

/// Convert multiple items to a JSON array.
pub fn items_json(items: &[Item]) -> serde_json::Value {
    serde_json::Value::Array(items.iter().map(item_json).collect())
}

/// Pretty-print a JSON value to stdout.
pub fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_json_keeps_order_and_shape() {
        let items = vec![
            Item {
                id: "2".to_string(),
                title: "b".to_string(),
                description: Some("".to_string()),
                is_important: true,
            },
            Item {
                id: "1".to_string(),
                title: "a".to_string(),
                description: None,
                is_important: false,
            },
        ];
        assert_eq!(
            items_json(&items),
            serde_json::json!([
                {"id": "2", "title": "b", "description": "", "isImportant": true},
                {"id": "1", "title": "a", "isImportant": false},
            ])
        );
    }
}
