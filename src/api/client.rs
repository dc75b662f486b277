//! Purpose: Define the public inventory client owning a store and its file.
//! Exports: `Inventory` and inventory lifecycle operations.
//! Role: Stable boundary for the CLI and tests; the core stays private here.
//! Invariants: Mutators never print; failures surface as typed errors.
//! Invariants: A failed load never leaves a partially adopted store behind.
#![allow(clippy::result_large_err)]

use std::path::{Path, PathBuf};

use crate::core::error::{Error, ErrorKind};
use crate::core::journal::Journal;
use crate::core::persist;
use crate::core::report::render_report;
use crate::core::store::{Removal, Store};

pub type ApiResult<T> = Result<T, Error>;

#[derive(Clone, Debug)]
pub struct Inventory {
    store: Store,
    path: PathBuf,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            store: Store::new(),
            path: persist::default_inventory_path(),
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Opens the inventory at `path`, failing on any load error.
    pub fn open(path: impl Into<PathBuf>) -> ApiResult<Self> {
        let path = path.into();
        let store = persist::load(&path)?;
        Ok(Self { store, path })
    }

    /// Opens the inventory at `path`, starting empty when the file is
    /// missing or corrupt. The downgraded error is returned alongside so the
    /// caller can report it; other failures stay fatal.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> ApiResult<(Self, Option<Error>)> {
        let path = path.into();
        match persist::load(&path) {
            Ok(store) => Ok((Self { store, path }, None)),
            Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::Corrupt) => {
                Ok((Self::new().with_path(path), Some(err)))
            }
            Err(err) => Err(err),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn add(&mut self, item: &str, qty: i64, journal: Option<&mut Journal>) -> ApiResult<u64> {
        self.store.add(item, qty, journal)
    }

    pub fn remove(&mut self, item: &str, qty: i64) -> ApiResult<Removal> {
        self.store.remove(item, qty)
    }

    pub fn quantity(&self, item: &str) -> u64 {
        self.store.quantity(item)
    }

    pub fn low_stock(&self, threshold: u64) -> Vec<String> {
        self.store.low_stock(threshold)
    }

    pub fn report(&self) -> String {
        render_report(&self.store)
    }

    /// Replaces the in-memory store with the file's current contents.
    pub fn reload(&mut self) -> ApiResult<()> {
        self.store = persist::load(&self.path)?;
        Ok(())
    }

    pub fn save(&self) -> ApiResult<()> {
        persist::save(&self.store, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::Inventory;
    use crate::core::error::ErrorKind;

    #[test]
    fn open_or_empty_downgrades_a_missing_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("inventory.json");

        let (inventory, warning) = Inventory::open_or_empty(&path).unwrap();
        assert!(inventory.store().is_empty());
        assert_eq!(warning.unwrap().kind(), ErrorKind::NotFound);
    }

    #[test]
    fn open_or_empty_downgrades_a_corrupt_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("inventory.json");
        std::fs::write(&path, "{broken").unwrap();

        let (inventory, warning) = Inventory::open_or_empty(&path).unwrap();
        assert!(inventory.store().is_empty());
        assert_eq!(warning.unwrap().kind(), ErrorKind::Corrupt);
    }

    #[test]
    fn open_is_strict_about_missing_files() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = Inventory::open(temp.path().join("absent.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn save_then_reload_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("inventory.json");

        let mut inventory = Inventory::new().with_path(&path);
        inventory.add("apple", 7, None).unwrap();
        inventory.save().unwrap();

        inventory.add("scratch", 1, None).unwrap();
        inventory.reload().unwrap();
        assert_eq!(inventory.quantity("apple"), 7);
        assert_eq!(inventory.quantity("scratch"), 0);
    }
}
