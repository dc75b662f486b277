//! Purpose: Shared inventory JSON serializers for CLI output envelopes.
//! Exports: receipt, quantity, low-stock, and report serializers.
//! Role: Keep stdout envelope shapes consistent across commands.
//! Invariants: Stable key names for published envelopes; fields are additive-only.

use larder::api::{Removal, Store};
use serde_json::{Map, Value, json};

pub(crate) fn add_receipt_json(item: &str, added: i64, quantity: u64) -> Value {
    json!({
        "item": item,
        "added": added,
        "quantity": quantity,
    })
}

pub(crate) fn remove_receipt_json(item: &str, removed: i64, removal: Removal) -> Value {
    let (quantity, drained) = match removal {
        Removal::Remaining(remaining) => (remaining, false),
        Removal::Drained => (0, true),
    };
    json!({
        "item": item,
        "removed": removed,
        "quantity": quantity,
        "drained": drained,
    })
}

pub(crate) fn quantity_json(item: &str, quantity: u64) -> Value {
    json!({
        "item": item,
        "quantity": quantity,
    })
}

pub(crate) fn low_stock_json(threshold: u64, entries: &[(String, u64)]) -> Value {
    let items = entries
        .iter()
        .map(|(item, quantity)| {
            json!({
                "item": item,
                "quantity": quantity,
            })
        })
        .collect::<Vec<_>>();
    json!({
        "threshold": threshold,
        "items": items,
    })
}

pub(crate) fn report_json(store: &Store) -> Value {
    let mut items = Map::new();
    for (item, quantity) in store.iter() {
        items.insert(item.to_string(), json!(quantity));
    }
    json!({
        "count": store.len(),
        "items": Value::Object(items),
    })
}
