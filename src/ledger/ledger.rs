use std::path::{Path, PathBuf};

use super::expense::Expense;

/// In-memory aggregate of a budget and the ordered expenses loaded from
/// (or appended to) one backing file. The file is the durable source of
/// truth; this value is rebuilt from it on every open.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    pub budget: f64,
    pub entries: Vec<Expense>,
    pub file_path: Option<PathBuf>,
}

impl Ledger {
    /// Creates an empty ledger with the given budget, not yet bound to a file.
    pub fn new(budget: f64) -> Self {
        Self {
            budget,
            entries: Vec::new(),
            file_path: None,
        }
    }

    /// Binds the ledger to its backing file.
    pub fn bind(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Records an expense in memory. Entry order must match file row order,
    /// so only the store should call this after a successful append.
    pub fn record(&mut self, expense: Expense) {
        self.entries.push(expense);
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
