//! Error types for the catalog, the activity log and scans.

use std::io;
use std::path::PathBuf;

/// Failure to load the product dataset.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No file at the configured dataset path.
    #[error("product dataset not found at {}", path.display())]
    MissingDataset { path: PathBuf },
    #[error("failed to open product dataset {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed product dataset")]
    Csv(#[from] csv::Error),
}

/// Failure to append to or read the activity log.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("activity log I/O failed: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed activity log row")]
    Csv(#[from] csv::Error),
    /// Nothing has been logged yet.
    #[error("no activity history at {}", path.display())]
    NoHistory { path: PathBuf },
}

/// Failure of a single scan submission.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Name, email or capture missing; nothing was derived or logged.
    #[error("scan needs {}", missing.join(", "))]
    IncompleteInput { missing: Vec<&'static str> },
    #[error(transparent)]
    Log(#[from] LogError),
}
