//! Purpose: Define the stable public Rust API boundary for larder.
//! Exports: Core types and operations needed by the CLI and tests.
//! Role: Public, additive-only surface; hides internal module layout.
//! Invariants: This module is the only public path to store primitives.

mod client;

#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::journal::{Journal, JournalEntry, now_rfc3339};
pub use crate::core::persist::{DEFAULT_FILE, default_inventory_path};
pub use crate::core::report::render_report;
pub use crate::core::store::{DEFAULT_LOW_STOCK_THRESHOLD, Removal, Store};
pub use client::{ApiResult, Inventory};
