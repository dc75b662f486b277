//! Purpose: `larder` CLI entry point and command dispatch.
//! Role: Binary crate root; parses args, runs commands, emits results on stdout.
//! Invariants: Commands emit stable stdout formats (human or JSON by flags).
//! Invariants: Non-interactive errors and notices are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
//! Invariants: All store mutations go through `api::Inventory`.
#![allow(clippy::result_large_err)]
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueHint, error::ErrorKind as ClapErrorKind};
use clap_complete::aot::Shell;
use serde_json::{Map, Value, json};
use std::error::Error as StdError;

mod command_dispatch;
mod demo;
mod store_json;

use larder::api::{
    DEFAULT_LOW_STOCK_THRESHOLD, Error, ErrorKind, Inventory, Removal, default_inventory_path,
    now_rfc3339, to_exit_code,
};
use larder::notice::{Notice, notice_json};
use store_json::{add_receipt_json, low_stock_json, quantity_json, remove_receipt_json, report_json};

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }

    fn with_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

fn main() {
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err(err) => {
            emit_error(&err);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, Error> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    Error::new(ErrorKind::Io)
                        .with_message("failed to write help")
                        .with_source(io_err)
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome::with_code(exit_code));
            }
            _ => {
                return Err(Error::new(ErrorKind::Usage).with_message(clap_error_summary(&err)));
            }
        },
    };

    let file = cli.file.unwrap_or_else(default_inventory_path);

    command_dispatch::dispatch_command(cli.command, file)
        .map_err(add_missing_item_hint)
        .map_err(add_corrupt_hint)
        .map_err(add_io_hint)
}

fn clap_error_summary(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    rendered
        .lines()
        .find(|line| !line.trim().is_empty())
        .map(|line| line.trim_start_matches("error: ").to_string())
        .unwrap_or_else(|| "invalid arguments".to_string())
}

#[derive(Parser)]
#[command(
    name = "larder",
    version,
    about = "Track named item quantities in a JSON-backed inventory file",
    help_template = r#"{about-with-newline}
{before-help}USAGE
  {usage}

COMMANDS
{subcommands}

OPTIONS
{options}

{after-help}
"#,
    long_about = None,
    before_help = r#"Quantities live in one JSON object on disk. Every command loads the
file, applies its operation, and (for mutations) writes the file back.

Mental model:
  - `add` / `remove` change stock (write)
  - `get` / `low` / `report` inspect stock (read)
"#,
    after_help = r#"EXAMPLES
  $ larder add apple 10
  $ larder remove apple 3
  $ larder get apple
  $ larder low --threshold 5
  $ larder report

LEARN MORE
  $ larder demo                # guided walkthrough against ./inventory.json
  $ larder <command> --help"#,
    arg_required_else_help = true,
    disable_help_subcommand = false
)]
struct Cli {
    #[arg(
        long,
        help = "Inventory file path (default: inventory.json)",
        value_hint = ValueHint::FilePath
    )]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(
        arg_required_else_help = true,
        about = "Add stock for an item",
        long_about = r#"Add a positive quantity to an item, creating it when absent.

The inventory file is loaded first (missing or corrupt files fall back to an
empty inventory with a notice) and saved after the mutation."#,
        after_help = r#"EXAMPLES
  $ larder add apple 10
  $ larder add apple 5 --json
  $ larder --file /tmp/stock.json add widget 3

NOTES
  - Zero or negative quantities are rejected (exit code 2)."#
    )]
    Add {
        #[arg(help = "Item name")]
        item: String,
        #[arg(help = "Quantity to add", allow_negative_numbers = true)]
        qty: i64,
        #[arg(long, help = "Emit JSON instead of human-readable output")]
        json: bool,
    },
    #[command(
        arg_required_else_help = true,
        about = "Remove stock for an item",
        long_about = r#"Remove a positive quantity from an item.

Removing the full quantity (or more) deletes the entry; quantities never
persist at zero."#,
        after_help = r#"EXAMPLES
  $ larder remove apple 3
  $ larder remove apple 999        # drains the entry
  $ larder remove apple 3 --json

NOTES
  - Removing from an unknown item fails with exit code 3.
  - Zero or negative quantities are rejected (exit code 2)."#
    )]
    Remove {
        #[arg(help = "Item name")]
        item: String,
        #[arg(help = "Quantity to remove", allow_negative_numbers = true)]
        qty: i64,
        #[arg(long, help = "Emit JSON instead of human-readable output")]
        json: bool,
    },
    #[command(
        arg_required_else_help = true,
        about = "Print the stored quantity for an item",
        long_about = r#"Print the stored quantity for an item; absent items read as 0."#,
        after_help = r#"EXAMPLES
  $ larder get apple
  $ larder get apple --json"#
    )]
    Get {
        #[arg(help = "Item name")]
        item: String,
        #[arg(long, help = "Emit JSON instead of human-readable output")]
        json: bool,
    },
    #[command(
        about = "List items with stock below a threshold",
        long_about = r#"List items whose quantity is strictly below the threshold,
in lexicographic order."#,
        after_help = r#"EXAMPLES
  $ larder low
  $ larder low --threshold 10
  $ larder low --json"#
    )]
    Low {
        #[arg(
            long,
            default_value_t = DEFAULT_LOW_STOCK_THRESHOLD,
            help = "Quantities strictly below this count as low"
        )]
        threshold: u64,
        #[arg(long, help = "Emit JSON instead of human-readable output")]
        json: bool,
    },
    #[command(
        about = "Print a report of every item and quantity",
        after_help = r#"EXAMPLES
  $ larder report
  $ larder report --json"#
    )]
    Report {
        #[arg(long, help = "Emit JSON instead of human-readable output")]
        json: bool,
    },
    #[command(
        about = "Run the demonstration sequence",
        long_about = r#"Run a fixed walkthrough: load, a few adds and removes (including
deliberately invalid ones), two queries, save, reload, report.

Rejected operations are downgraded to stderr notices; the walkthrough
always exits 0 on the documented paths."#,
        after_help = r#"EXAMPLES
  $ larder demo
  $ larder --file /tmp/demo.json demo"#
    )]
    Demo,
    #[command(
        about = "Print version info as JSON",
        long_about = r#"Emit version info as JSON (stable, machine-readable)."#,
        after_help = r#"EXAMPLES
  $ larder version"#
    )]
    Version,
    #[command(
        arg_required_else_help = true,
        about = "Generate shell completions",
        long_about = r#"Generate shell completion scripts.

Prints a completion script for the given shell to stdout.
Install the generated file in your shell's completion directory (or source it)
to enable tab completion."#,
        after_help = r#"EXAMPLES
  $ larder completion bash > ~/.local/share/bash-completion/completions/larder
  $ larder completion zsh > ~/.zfunc/_larder
  $ larder completion fish > ~/.config/fish/completions/larder.fish"#
    )]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

fn add_missing_item_hint(err: Error) -> Error {
    if err.kind() != ErrorKind::NotFound || err.item().is_none() || err.hint().is_some() {
        return err;
    }
    err.with_hint("Nothing stored under that name. Check spelling with: larder report.")
}

fn add_corrupt_hint(err: Error) -> Error {
    if err.kind() != ErrorKind::Corrupt || err.hint().is_some() {
        return err;
    }
    err.with_hint("Inventory file appears corrupt. Inspect it, or delete it to start empty.")
}

fn add_io_hint(err: Error) -> Error {
    if err.kind() != ErrorKind::Io || err.hint().is_some() {
        return err;
    }
    err.with_hint("I/O error. Check the path, filesystem, and disk space.")
}

fn emit_version_output() {
    if io::stdout().is_terminal() {
        println!("larder {}", env!("CARGO_PKG_VERSION"));
    } else {
        emit_json(json!({
            "name": "larder",
            "version": env!("CARGO_PKG_VERSION"),
        }));
    }
}

fn emit_json(value: Value) {
    let json = if io::stdout().is_terminal() {
        serde_json::to_string_pretty(&value)
            .unwrap_or_else(|_| "{\"error\":\"json encode failed\"}".to_string())
    } else {
        serde_json::to_string(&value)
            .unwrap_or_else(|_| "{\"error\":\"json encode failed\"}".to_string())
    };
    println!("{json}");
}

#[derive(Copy, Clone, Debug)]
enum AnsiColor {
    Red,
    Yellow,
}

fn colorize_label(label: &str, enabled: bool, color: AnsiColor) -> String {
    if !enabled {
        return label.to_string();
    }
    let code = match color {
        AnsiColor::Red => "31",
        AnsiColor::Yellow => "33",
    };
    format!("\u{1b}[{code}m{label}\u{1b}[0m")
}

fn emit_error(err: &Error) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        let label = colorize_label("error:", true, AnsiColor::Red);
        eprintln!("{label} {}", error_message(err));
        if let Some(hint) = err.hint() {
            eprintln!("  hint: {hint}");
        }
        return;
    }

    let value = error_json(err);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn emit_notice(notice: &Notice) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        let label = colorize_label("notice:", true, AnsiColor::Yellow);
        if notice.item.is_empty() {
            eprintln!("{label} {}", notice.message);
        } else {
            eprintln!("{label} {} (item: {})", notice.message, notice.item);
        }
        return;
    }

    let value = notice_json(notice);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"notice\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn make_notice(kind: &str, cmd: &str, item: &str, message: impl Into<String>) -> Notice {
    Notice {
        kind: kind.to_string(),
        time: now_rfc3339().unwrap_or_default(),
        cmd: cmd.to_string(),
        item: item.to_string(),
        message: message.into(),
        details: Map::new(),
    }
}

fn load_fallback_notice(cmd: &str, err: &Error) -> Notice {
    let path = err
        .path()
        .map(|path| path.display().to_string())
        .unwrap_or_default();
    let mut notice = match err.kind() {
        ErrorKind::Corrupt => make_notice(
            "corrupt-file",
            cmd,
            "",
            format!("could not decode {path}; file might be corrupt"),
        ),
        _ => make_notice("missing-file", cmd, "", format!("{path} not found")),
    };
    notice
        .details
        .insert("path".to_string(), json!(path));
    notice.details.insert(
        "fallback".to_string(),
        json!("starting with empty inventory"),
    );
    notice
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::NotFound => "not found".to_string(),
        ErrorKind::Corrupt => "corrupt data".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(item) = err.item() {
        inner.insert("item".to_string(), json!(item));
    }
    if let Some(path) = err.path() {
        inner.insert("path".to_string(), json!(path.display().to_string()));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}
