use std::path::PathBuf;

use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid budget: {0}")]
    InvalidBudget(String),
    #[error("Ledger file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("No ledger file is currently open")]
    NoActiveLedger,
}
