//! CLI for Dermalyze: the form, camera and history front end.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dermalyze_core::activity_log::ActivityLog;
use dermalyze_core::config;
use dermalyze_core::health::HealthStatus;
use dermalyze_core::recommend::Recommender;
use std::path::PathBuf;

use commands::{run_columns, run_history, run_scan, ScanArgs};

/// Top-level CLI for Dermalyze.
#[derive(Debug, Parser)]
#[command(name = "dermalyze")]
#[command(about = "Dermalyze: skin category and product recommendations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Submit a scan: derive the skin category, log it, and list matching products.
    Scan {
        /// User name.
        #[arg(long)]
        name: Option<String>,
        /// User email.
        #[arg(long)]
        email: Option<String>,
        /// Stomach / internal health: healthy, occasional-bloating or frequent-acidity.
        #[arg(long, default_value = "healthy")]
        health: HealthStatus,
        /// Camera snapshot file. Only its presence is checked.
        #[arg(long, value_name = "FILE")]
        capture: Option<PathBuf>,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show logged scans, or export the raw log.
    History {
        /// Only show entries for this email.
        #[arg(long)]
        email: Option<String>,
        /// Copy the log CSV to this path instead of printing it.
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,
    },

    /// Show dataset columns and which one is used as the skin-type label.
    Columns,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Scan {
                name,
                email,
                health,
                capture,
                json,
            } => {
                let recommender = Recommender::from_config(&cfg)?;
                let args = ScanArgs {
                    name: name.unwrap_or_default(),
                    email: email.unwrap_or_default(),
                    health,
                    capture,
                    json,
                };
                run_scan(&recommender, args)?;
            }
            CliCommand::History { email, export } => {
                let log = ActivityLog::new(cfg.resolved_log_path()?);
                run_history(&log, email.as_deref(), export.as_deref())?;
            }
            CliCommand::Columns => {
                let recommender = Recommender::from_config(&cfg)?;
                run_columns(&recommender)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
