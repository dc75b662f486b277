// Human-readable items report rendering shared by the CLI and tests.
use crate::core::store::Store;

const REPORT_HEADER: &str = "--- Items Report ---";
const REPORT_FOOTER: &str = "--------------------";

/// Every current store entry appears exactly once, between the banners.
pub fn render_report(store: &Store) -> String {
    let mut lines = Vec::with_capacity(store.len() + 2);
    lines.push(REPORT_HEADER.to_string());
    for (item, qty) in store.iter() {
        lines.push(format!("{item} -> {qty}"));
    }
    lines.push(REPORT_FOOTER.to_string());
    lines.join("\n")
}
