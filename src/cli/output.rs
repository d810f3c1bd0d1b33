//! Colored terminal output helpers for the CLI.

use std::fmt;

use colored::Colorize;

use crate::{ledger::Ledger, summary::Summary};

pub fn info(message: impl fmt::Display) {
    println!("{} {}", "[i]".cyan(), message);
}

pub fn success(message: impl fmt::Display) {
    println!("{} {}", "[ok]".green(), message);
}

pub fn warning(message: impl fmt::Display) {
    println!("{} {}", "[!]".yellow(), message);
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{} {}", "[x]".red(), message);
}

/// Renders the expense table in append order.
pub fn print_entries(ledger: &Ledger) {
    if ledger.entries.is_empty() {
        info("No expenses recorded yet.");
        return;
    }

    let header = format!(
        "{:<24} {:<10} {:>12} {:>12}",
        "Name", "Category", "Amount", "Date"
    );
    println!("{}", header.bold());
    for expense in &ledger.entries {
        println!(
            "{:<24} {:<10} {:>12.2} {:>12}",
            expense.name, expense.category, expense.amount, expense.date
        );
    }
}

/// Prints the three summary figures the tracker reports after every change.
pub fn print_summary(summary: &Summary) {
    info(format!("Total Spent: {:.2}", summary.total_spent));
    info(format!("Remaining Budget: {:.2}", summary.remaining_budget));
    info(format!(
        "Daily Budget: {:.2} (for remaining {} days)",
        summary.daily_budget, summary.remaining_days
    ));
}
