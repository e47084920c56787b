//! CLI command handlers, one per file.

mod columns;
mod history;
mod scan;

pub use columns::run_columns;
pub use history::run_history;
pub use scan::{run_scan, ScanArgs};
