use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// A single spending record. Immutable once written to the ledger file.
/// Field order matches the file columns: Name, Category, Amount, Date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Expense {
    pub name: String,
    pub category: Category,
    pub amount: f64,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            amount,
            date,
        }
    }
}
