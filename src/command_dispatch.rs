//! Purpose: Hold top-level CLI command dispatch for `larder`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Command behavior, output envelopes, and exit code semantics stay unchanged.
//! Invariants: Load fallbacks are reported as notices; save failures stay fatal.

use super::*;

pub(super) fn dispatch_command(command: Command, file: PathBuf) -> Result<RunOutcome, Error> {
    match command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "larder", &mut io::stdout());
            Ok(RunOutcome::ok())
        }
        Command::Version => {
            emit_version_output();
            Ok(RunOutcome::ok())
        }
        Command::Add { item, qty, json } => {
            let mut inventory = open_lenient(&file, "add")?;
            let quantity = inventory.add(&item, qty, None)?;
            inventory.save()?;
            if json {
                emit_json(add_receipt_json(&item, qty, quantity));
            } else {
                println!("Added {qty} of {item} (now {quantity})");
            }
            Ok(RunOutcome::ok())
        }
        Command::Remove { item, qty, json } => {
            let mut inventory = open_lenient(&file, "remove")?;
            let removal = inventory.remove(&item, qty)?;
            inventory.save()?;
            if json {
                emit_json(remove_receipt_json(&item, qty, removal));
            } else {
                match removal {
                    Removal::Remaining(quantity) => {
                        println!("Removed {qty} of {item} (now {quantity})");
                    }
                    Removal::Drained => println!("Removed {item} (drained)"),
                }
            }
            Ok(RunOutcome::ok())
        }
        Command::Get { item, json } => {
            let inventory = open_lenient(&file, "get")?;
            let quantity = inventory.quantity(&item);
            if json {
                emit_json(quantity_json(&item, quantity));
            } else {
                println!("{quantity}");
            }
            Ok(RunOutcome::ok())
        }
        Command::Low { threshold, json } => {
            let inventory = open_lenient(&file, "low")?;
            let entries = inventory
                .low_stock(threshold)
                .into_iter()
                .map(|item| {
                    let quantity = inventory.quantity(&item);
                    (item, quantity)
                })
                .collect::<Vec<_>>();
            if json {
                emit_json(low_stock_json(threshold, &entries));
            } else if entries.is_empty() {
                println!("No low-stock items.");
            } else {
                for (item, quantity) in &entries {
                    println!("{item} -> {quantity}");
                }
            }
            Ok(RunOutcome::ok())
        }
        Command::Report { json } => {
            let inventory = open_lenient(&file, "report")?;
            if json {
                emit_json(report_json(inventory.store()));
            } else {
                println!("{}", inventory.report());
            }
            Ok(RunOutcome::ok())
        }
        Command::Demo => demo::run_demo(&file),
    }
}

/// Opens the inventory, downgrading a missing or corrupt file to a notice
/// plus an empty store. Other load failures propagate.
fn open_lenient(file: &std::path::Path, cmd: &str) -> Result<Inventory, Error> {
    let (inventory, warning) = Inventory::open_or_empty(file)?;
    if let Some(warning) = &warning {
        emit_notice(&load_fallback_notice(cmd, warning));
    }
    Ok(inventory)
}
