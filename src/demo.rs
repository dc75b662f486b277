//! Purpose: Fixed demonstration sequence for the `demo` subcommand.
//! Exports: `run_demo`.
//! Role: Walk the full lifecycle: load, mutate, query, save, reload, report.
//! Invariants: Rejected operations become notices; the sequence continues.
//! Invariants: Exits 0 on every documented path; save failures stay fatal.

use super::*;

pub(super) fn run_demo(file: &std::path::Path) -> Result<RunOutcome, Error> {
    let mut inventory = open_demo_inventory(file)?;

    demo_add(&mut inventory, "apple", 10);
    demo_add(&mut inventory, "banana", -2);
    demo_add(&mut inventory, "", 10);

    demo_remove(&mut inventory, "apple", 3);
    demo_remove(&mut inventory, "orange", 1);

    println!("Apple stock: {}", inventory.quantity("apple"));
    println!(
        "Low items: {:?}",
        inventory.low_stock(DEFAULT_LOW_STOCK_THRESHOLD)
    );

    inventory.save()?;
    // Reload to confirm the save round-trips.
    inventory.reload()?;
    println!("{}", inventory.report());

    Ok(RunOutcome::ok())
}

fn open_demo_inventory(file: &std::path::Path) -> Result<Inventory, Error> {
    let (inventory, warning) = Inventory::open_or_empty(file)?;
    if let Some(warning) = &warning {
        emit_notice(&load_fallback_notice("demo", warning));
    }
    Ok(inventory)
}

fn demo_add(inventory: &mut Inventory, item: &str, qty: i64) {
    if let Err(err) = inventory.add(item, qty, None) {
        emit_notice(&make_notice("rejected", "demo", item, error_message(&err)));
    }
}

fn demo_remove(inventory: &mut Inventory, item: &str, qty: i64) {
    if let Err(err) = inventory.remove(item, qty) {
        emit_notice(&make_notice("rejected", "demo", item, error_message(&err)));
    }
}
