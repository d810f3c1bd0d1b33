//! Dialoguer-backed prompts for ledger and expense input.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::ledger::{Category, Expense};

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, dialoguer::Error> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
}

/// Prompt for a ledger file path, offering `default` when available.
pub fn prompt_path(
    theme: &ColorfulTheme,
    prompt: &str,
    default: Option<&Path>,
) -> Result<PathBuf, dialoguer::Error> {
    let mut input = Input::<String>::with_theme(theme).with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.display().to_string());
    }
    Ok(PathBuf::from(input.interact_text()?))
}

/// Prompt for the budget of a new ledger. Rejects negative and non-numeric
/// values at the prompt so the store only ever sees valid budgets.
pub fn prompt_budget(theme: &ColorfulTheme) -> Result<f64, dialoguer::Error> {
    Input::<f64>::with_theme(theme)
        .with_prompt("Budget for this ledger")
        .validate_with(|value: &f64| {
            if value.is_finite() && *value >= 0.0 {
                Ok(())
            } else {
                Err("budget must be a non-negative number")
            }
        })
        .interact_text()
}

/// Prompt for a full expense, dated `date`. The category is picked from the
/// fixed set, so no invalid category can reach the store.
pub fn prompt_expense(
    theme: &ColorfulTheme,
    date: NaiveDate,
) -> Result<Expense, dialoguer::Error> {
    let name = Input::<String>::with_theme(theme)
        .with_prompt("Expense name")
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err("name must not be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let labels: Vec<&str> = Category::ALL.iter().map(|category| category.as_str()).collect();
    let picked = Select::with_theme(theme)
        .with_prompt("Category")
        .items(&labels)
        .default(0)
        .interact()?;

    let amount = Input::<f64>::with_theme(theme)
        .with_prompt("Amount")
        .validate_with(|value: &f64| {
            if value.is_finite() && *value >= 0.0 {
                Ok(())
            } else {
                Err("amount must be a non-negative number")
            }
        })
        .interact_text()?;

    Ok(Expense::new(name.trim(), Category::ALL[picked], amount, date))
}
