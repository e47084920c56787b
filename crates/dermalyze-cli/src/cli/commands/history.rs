//! `dermalyze history` – list or export logged scans.

use anyhow::Result;
use dermalyze_core::activity_log::ActivityLog;
use std::path::Path;

pub fn run_history(log: &ActivityLog, email: Option<&str>, export: Option<&Path>) -> Result<()> {
    if let Some(dest) = export {
        let bytes = log.export_to(dest)?;
        println!("Exported {bytes} bytes of history to {}", dest.display());
        return Ok(());
    }

    let entries = match email {
        Some(e) => log.entries_for(e)?,
        None => log.entries()?,
    };
    if entries.is_empty() {
        println!("No history in {}.", log.path().display());
    } else {
        println!(
            "{:<27} {:<16} {:<28} {:<15} {}",
            "TIMESTAMP", "NAME", "EMAIL", "ANALYSIS", "INTERNAL HEALTH"
        );
        for e in entries {
            println!(
                "{:<27} {:<16} {:<28} {:<15} {}",
                e.timestamp, e.name, e.email, e.analysis, e.internal_health
            );
        }
    }
    Ok(())
}
