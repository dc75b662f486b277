// In-memory item/quantity mapping with validated add/remove and read queries.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, ErrorKind};
use crate::core::journal::Journal;

pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 5;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Removal {
    Remaining(u64),
    Drained,
}

/// Ordered so reports and low-stock listings are deterministic.
/// Invariant: no entry holds quantity zero; draining an item deletes it.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    items: BTreeMap<String, u64>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.items.iter().map(|(item, qty)| (item.as_str(), *qty))
    }

    pub fn add(
        &mut self,
        item: &str,
        qty: i64,
        journal: Option<&mut Journal>,
    ) -> Result<u64, Error> {
        let qty = validate_qty(item, qty, "add")?;
        validate_item(item)?;

        let current = self.items.get(item).copied().unwrap_or(0);
        let updated = current.checked_add(qty).ok_or_else(|| {
            Error::new(ErrorKind::Usage)
                .with_message("quantity overflow")
                .with_item(item)
        })?;
        self.items.insert(item.to_string(), updated);

        if let Some(journal) = journal {
            journal.record(format!("Added {qty} of {item}"));
        }
        Ok(updated)
    }

    pub fn remove(&mut self, item: &str, qty: i64) -> Result<Removal, Error> {
        let qty = validate_qty(item, qty, "remove")?;
        validate_item(item)?;

        let current = match self.items.get(item).copied() {
            Some(current) => current,
            None => {
                return Err(Error::new(ErrorKind::NotFound)
                    .with_message("item not found, cannot remove")
                    .with_item(item));
            }
        };

        if qty >= current {
            self.items.remove(item);
            return Ok(Removal::Drained);
        }
        let remaining = current - qty;
        self.items.insert(item.to_string(), remaining);
        Ok(Removal::Remaining(remaining))
    }

    pub fn quantity(&self, item: &str) -> u64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Item names with quantity strictly below `threshold`, lexicographic.
    pub fn low_stock(&self, threshold: u64) -> Vec<String> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }
}

fn validate_item(item: &str) -> Result<(), Error> {
    if item.is_empty() {
        return Err(Error::new(ErrorKind::Usage).with_message("item name must not be empty"));
    }
    Ok(())
}

fn validate_qty(item: &str, qty: i64, action: &str) -> Result<u64, Error> {
    if qty <= 0 {
        let mut err = Error::new(ErrorKind::Usage)
            .with_message(format!("cannot {action} zero or negative quantity ({qty})"));
        if !item.is_empty() {
            err = err.with_item(item);
        }
        return Err(err);
    }
    Ok(qty as u64)
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_LOW_STOCK_THRESHOLD, Removal, Store};
    use crate::core::error::ErrorKind;
    use crate::core::journal::Journal;

    #[test]
    fn add_increases_quantity_by_exactly_qty() {
        let mut store = Store::new();
        assert_eq!(store.add("apple", 10, None).unwrap(), 10);
        assert_eq!(store.add("apple", 5, None).unwrap(), 15);
        assert_eq!(store.quantity("apple"), 15);
    }

    #[test]
    fn add_rejects_zero_and_negative_quantity() {
        let mut store = Store::new();
        for qty in [0, -1, -2] {
            let err = store.add("banana", qty, None).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Usage);
        }
        assert!(store.is_empty());
    }

    #[test]
    fn add_rejects_empty_item_name() {
        let mut store = Store::new();
        let err = store.add("", 10, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Usage);
        assert!(store.is_empty());
    }

    #[test]
    fn add_rejects_overflow_without_mutation() {
        let mut store = Store::new();
        store.add("apple", i64::MAX, None).unwrap();
        store.add("apple", i64::MAX, None).unwrap();
        let before = store.quantity("apple");
        let err = store.add("apple", i64::MAX, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Usage);
        assert_eq!(store.quantity("apple"), before);
    }

    #[test]
    fn add_records_journal_entry_on_success_only() {
        let mut store = Store::new();
        let mut journal = Journal::new();

        store.add("apple", 10, Some(&mut journal)).unwrap();
        store.add("banana", -2, Some(&mut journal)).unwrap_err();

        assert_eq!(journal.len(), 1);
        assert_eq!(journal.entries()[0].message, "Added 10 of apple");
    }

    #[test]
    fn remove_part_of_quantity_leaves_remainder() {
        let mut store = Store::new();
        store.add("apple", 10, None).unwrap();
        assert_eq!(store.remove("apple", 3).unwrap(), Removal::Remaining(7));
        assert_eq!(store.quantity("apple"), 7);
    }

    #[test]
    fn remove_at_or_above_quantity_drains_the_entry() {
        let mut store = Store::new();
        store.add("apple", 10, None).unwrap();
        assert_eq!(store.remove("apple", 10).unwrap(), Removal::Drained);
        assert_eq!(store.quantity("apple"), 0);
        assert_eq!(store.len(), 0);

        store.add("pear", 4, None).unwrap();
        assert_eq!(store.remove("pear", 9).unwrap(), Removal::Drained);
        assert!(store.is_empty());
    }

    #[test]
    fn remove_absent_item_is_not_found_and_leaves_store_unchanged() {
        let mut store = Store::new();
        store.add("apple", 10, None).unwrap();
        let err = store.remove("orange", 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.item(), Some("orange"));
        assert_eq!(store.quantity("apple"), 10);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_rejects_invalid_input_without_mutation() {
        let mut store = Store::new();
        store.add("apple", 10, None).unwrap();
        assert_eq!(store.remove("apple", 0).unwrap_err().kind(), ErrorKind::Usage);
        assert_eq!(store.remove("apple", -3).unwrap_err().kind(), ErrorKind::Usage);
        assert_eq!(store.remove("", 1).unwrap_err().kind(), ErrorKind::Usage);
        assert_eq!(store.quantity("apple"), 10);
    }

    #[test]
    fn quantity_of_absent_item_is_zero() {
        let store = Store::new();
        assert_eq!(store.quantity("ghost"), 0);
    }

    #[test]
    fn low_stock_is_strictly_below_threshold() {
        let mut store = Store::new();
        store.add("apple", 7, None).unwrap();
        store.add("banana", 2, None).unwrap();
        store.add("cherry", 5, None).unwrap();

        assert_eq!(store.low_stock(DEFAULT_LOW_STOCK_THRESHOLD), vec!["banana"]);
        // Threshold above every quantity selects the full item set.
        assert_eq!(store.low_stock(100), vec!["apple", "banana", "cherry"]);
        // Threshold at or below the minimum selects nothing.
        assert!(store.low_stock(2).is_empty());
        assert!(store.low_stock(0).is_empty());
    }

    #[test]
    fn low_stock_is_lexicographically_ordered() {
        let mut store = Store::new();
        store.add("pear", 1, None).unwrap();
        store.add("apple", 1, None).unwrap();
        store.add("mango", 1, None).unwrap();

        assert_eq!(store.low_stock(5), vec!["apple", "mango", "pear"]);
    }
}
