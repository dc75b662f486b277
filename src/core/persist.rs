// Whole-file JSON load/save for the store; load replaces, save overwrites.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::error::{Error, ErrorKind};
use crate::core::store::Store;

pub const DEFAULT_FILE: &str = "inventory.json";

pub fn default_inventory_path() -> PathBuf {
    PathBuf::from(DEFAULT_FILE)
}

/// Reads `path` and parses it as an item-to-quantity object.
///
/// The parsed mapping is validated before it is adopted: a top-level value
/// that is not an object of positive integer quantities with non-empty item
/// names is `Corrupt`, and nothing of it is kept.
pub fn load(path: &Path) -> Result<Store, Error> {
    let text = fs::read_to_string(path).map_err(|err| {
        Error::new(map_io_error_kind(&err))
            .with_message("failed to read inventory file")
            .with_path(path)
            .with_source(err)
    })?;

    let store: Store = serde_json::from_str(&text).map_err(|err| {
        Error::new(ErrorKind::Corrupt)
            .with_message("could not decode inventory file")
            .with_path(path)
            .with_source(err)
    })?;

    for (item, qty) in store.iter() {
        if item.is_empty() {
            return Err(Error::new(ErrorKind::Corrupt)
                .with_message("inventory file contains an empty item name")
                .with_path(path));
        }
        if qty == 0 {
            return Err(Error::new(ErrorKind::Corrupt)
                .with_message("inventory file contains a zero quantity")
                .with_item(item)
                .with_path(path));
        }
    }
    Ok(store)
}

/// Serializes the store as pretty-printed JSON and overwrites `path`.
/// No atomic-write guarantee; a crash mid-write can corrupt the file.
pub fn save(store: &Store, path: &Path) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(store).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to encode inventory")
            .with_source(err)
    })?;
    fs::write(path, format!("{json}\n")).map_err(|err| {
        Error::new(map_io_error_kind(&err))
            .with_message("failed to write inventory file")
            .with_path(path)
            .with_source(err)
    })
}

fn map_io_error_kind(err: &io::Error) -> ErrorKind {
    match err.kind() {
        io::ErrorKind::NotFound => ErrorKind::NotFound,
        _ => ErrorKind::Io,
    }
}
