//! CSV backing store for ledger files.
//!
//! Layout: a fixed header row, one distinguished `Budget` row, then one row
//! per expense in append order. Loads are best-effort: rows that do not
//! decode are skipped with a warning rather than failing the whole file.

use std::{fs::OpenOptions, path::Path};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::warn;

use crate::{
    errors::LedgerError,
    ledger::{Expense, Ledger},
};

use super::Result;

/// Column names written as the first row of every ledger file.
pub const HEADER: [&str; 4] = ["Name", "Category", "Amount", "Date"];

/// First field of the distinguished row that stores the budget.
pub const BUDGET_TAG: &str = "Budget";

/// Creates (or truncates) the file at `path` and writes the header and
/// budget rows. Any prior content is destroyed; overwrite confirmation is
/// the caller's responsibility.
pub fn create_ledger(path: &Path, budget: f64) -> Result<Ledger> {
    if !budget.is_finite() || budget < 0.0 {
        return Err(LedgerError::InvalidBudget(format!(
            "budget must be a non-negative number, got {budget}"
        )));
    }

    let mut writer = WriterBuilder::new().flexible(true).from_path(path)?;
    writer.write_record(HEADER)?;
    writer.serialize((BUDGET_TAG, budget))?;
    writer.flush()?;

    Ok(Ledger::new(budget).bind(path))
}

/// Reconstructs a ledger from an existing file.
///
/// The first `Budget`-tagged row supplies the budget (0.0 when absent or
/// unparseable). Any other row with exactly four fields decodes as an
/// expense; everything else is skipped and logged.
pub fn open_ledger(path: &Path) -> Result<Ledger> {
    if !path.exists() {
        return Err(LedgerError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut budget: Option<f64> = None;
    let mut ledger = Ledger::new(0.0).bind(path);

    // Row numbers are 1-based and the reader has consumed the header row.
    for (index, record) in reader.records().enumerate() {
        let row = index + 2;
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                warn!("skipping unreadable row {row}: {err}");
                continue;
            }
        };
        if record.get(0) == Some(BUDGET_TAG) {
            if budget.is_none() {
                budget = Some(parse_budget(&record, row));
            }
            continue;
        }
        if record.len() != HEADER.len() {
            warn!(
                "skipping row {row}: expected {} fields, found {}",
                HEADER.len(),
                record.len()
            );
            continue;
        }
        match record.deserialize::<Expense>(None) {
            Ok(expense) => ledger.record(expense),
            Err(err) => warn!("skipping row {row}: {err}"),
        }
    }

    ledger.budget = budget.unwrap_or(0.0);
    Ok(ledger)
}

/// Appends one expense row to the ledger's backing file and mirrors it in
/// memory. Existing rows are never rewritten.
pub fn append_expense(ledger: &mut Ledger, expense: Expense) -> Result<()> {
    let path = ledger.path().ok_or(LedgerError::NoActiveLedger)?;
    let file = OpenOptions::new().append(true).open(path)?;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer.serialize(&expense)?;
    writer.flush()?;

    ledger.record(expense);
    Ok(())
}

fn parse_budget(record: &StringRecord, row: usize) -> f64 {
    match record.get(1).map(str::parse::<f64>) {
        Some(Ok(value)) => value,
        _ => {
            warn!("budget row {row} does not hold a numeric value, defaulting to 0.0");
            0.0
        }
    }
}
