pub mod csv_backend;

use crate::errors::LedgerError;

pub type Result<T> = std::result::Result<T, LedgerError>;

pub use csv_backend::{append_expense, create_ledger, open_ledger, BUDGET_TAG, HEADER};
