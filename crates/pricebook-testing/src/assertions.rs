//! Custom assertions over `list --format json` output.
//!
//! The JSON shape is `{ "items": [{id, name, price}, ...], "total": n }`.

use anyhow::{Result, bail};
use serde_json::Value;

fn items<'a>(json: &'a Value) -> Result<&'a Vec<Value>> {
    match json.get("items").and_then(|v| v.as_array()) {
        Some(items) => Ok(items),
        None => bail!("JSON output has no 'items' array: {}", json),
    }
}

/// Assert the list holds exactly `expected` items.
pub fn assert_item_count(json: &Value, expected: usize) -> Result<()> {
    let actual = items(json)?.len();
    if actual != expected {
        bail!("Expected {} items, found {}", expected, actual);
    }
    Ok(())
}

/// Assert the reported total.
pub fn assert_total(json: &Value, expected: i64) -> Result<()> {
    let actual = json.get("total").and_then(|v| v.as_i64());
    if actual != Some(expected) {
        bail!("Expected total {}, found {:?}", expected, actual);
    }
    Ok(())
}

/// Assert an item with the given id, name and price is present.
pub fn assert_item(json: &Value, id: u64, name: &str, price: i64) -> Result<()> {
    let found = items(json)?.iter().any(|item| {
        item.get("id").and_then(|v| v.as_u64()) == Some(id)
            && item.get("name").and_then(|v| v.as_str()) == Some(name)
            && item.get("price").and_then(|v| v.as_i64()) == Some(price)
    });
    if !found {
        bail!("No item {{id: {}, name: {}, price: {}}} in {}", id, name, price, json);
    }
    Ok(())
}

/// Assert item ids are strictly increasing in list order.
pub fn assert_ids_strictly_increasing(json: &Value) -> Result<()> {
    let ids: Vec<u64> = items(json)?
        .iter()
        .filter_map(|item| item.get("id").and_then(|v| v.as_u64()))
        .collect();
    if !ids.windows(2).all(|pair| pair[0] < pair[1]) {
        bail!("Item ids are not strictly increasing: {:?}", ids);
    }
    Ok(())
}
