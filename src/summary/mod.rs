//! Budget summary derivations.

use chrono::{Datelike, NaiveDate};

use crate::ledger::Ledger;

/// Totals derived from a ledger and a reference date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total_spent: f64,
    /// May go negative; overspending is reported as-is.
    pub remaining_budget: f64,
    /// Days strictly after the reference date through month end.
    pub remaining_days: u32,
    pub daily_budget: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Computes spending totals as of `today`. Pure: the reference date is
    /// injected, so results are reproducible in tests.
    pub fn compute(ledger: &Ledger, today: NaiveDate) -> Summary {
        let total_spent: f64 = ledger.entries.iter().map(|expense| expense.amount).sum();
        let remaining_budget = ledger.budget - total_spent;
        let remaining_days = days_in_month(today.year(), today.month()) - today.day();
        let daily_budget = if remaining_days > 0 {
            remaining_budget / f64::from(remaining_days)
        } else {
            0.0
        };

        Summary {
            total_spent,
            remaining_budget,
            remaining_days,
            daily_budget,
        }
    }
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Category, Expense};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn ledger_with_entries(budget: f64, amounts: &[f64]) -> Ledger {
        let mut ledger = Ledger::new(budget);
        for (index, amount) in amounts.iter().enumerate() {
            ledger.record(Expense::new(
                format!("entry-{index}"),
                Category::Misc,
                *amount,
                date(2024, 3, 1),
            ));
        }
        ledger
    }

    #[test]
    fn empty_ledger_spends_nothing() {
        let summary = SummaryService::compute(&Ledger::new(100.0), date(2024, 3, 10));
        assert_eq!(summary.total_spent, 0.0);
        assert_eq!(summary.remaining_budget, 100.0);
    }

    #[test]
    fn compute_is_pure() {
        let ledger = ledger_with_entries(1000.0, &[12.5, 7.5]);
        let today = date(2024, 6, 4);
        assert_eq!(
            SummaryService::compute(&ledger, today),
            SummaryService::compute(&ledger, today)
        );
    }

    #[test]
    fn total_is_the_sum_of_all_amounts() {
        let ledger = ledger_with_entries(1000.0, &[10.0, 20.0, 30.0]);
        let summary = SummaryService::compute(&ledger, date(2024, 3, 10));
        assert_eq!(summary.total_spent, 60.0);
        assert_eq!(summary.remaining_budget, 940.0);
    }

    #[test]
    fn overspending_goes_negative_without_clamping() {
        let ledger = ledger_with_entries(50.0, &[80.0]);
        let summary = SummaryService::compute(&ledger, date(2024, 3, 10));
        assert_eq!(summary.remaining_budget, -30.0);
    }

    #[test]
    fn daily_budget_is_zero_on_the_last_day_of_the_month() {
        let ledger = ledger_with_entries(900.0, &[100.0]);

        for last_day in [date(2024, 2, 29), date(2023, 2, 28), date(2024, 12, 31)] {
            let summary = SummaryService::compute(&ledger, last_day);
            assert_eq!(summary.remaining_days, 0, "no days left after {last_day}");
            assert_eq!(summary.daily_budget, 0.0);
        }
    }

    #[test]
    fn mid_february_counts_remaining_days_against_month_length() {
        let ledger = ledger_with_entries(260.0, &[0.0]);
        let summary = SummaryService::compute(&ledger, date(2023, 2, 15));
        assert_eq!(summary.remaining_days, 13);
        assert_eq!(summary.daily_budget, 260.0 / 13.0);
    }

    #[test]
    fn month_lengths_cover_leap_and_common_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 1), 31);
    }
}
