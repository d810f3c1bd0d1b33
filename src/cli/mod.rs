//! Interactive front-end: create a ledger, add expenses, summarize spending,
//! driven by terminal prompts.

pub mod forms;
pub mod output;

use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Select};
use thiserror::Error;

use crate::{config::ConfigManager, errors::LedgerError, storage, summary::SummaryService};

/// Errors surfaced by the CLI loop.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

const MENU_ITEMS: [&str; 4] = [
    "Create new ledger",
    "Add expense to existing ledger",
    "Summarize expenses",
    "Quit",
];

/// Runs the interactive menu until the user quits. A failed ledger operation
/// is reported and the menu stays usable; only prompt failures end the
/// session.
pub fn run_cli() -> Result<(), CliError> {
    let theme = ColorfulTheme::default();
    let config = ConfigManager::new()?;

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Expense Tracker")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;

        let outcome = match choice {
            0 => create_ledger_flow(&theme, &config),
            1 => add_expense_flow(&theme, &config),
            2 => summarize_flow(&theme, &config),
            _ => return Ok(()),
        };

        match outcome {
            Ok(()) => {}
            Err(CliError::Ledger(err)) => output::error(err),
            Err(err) => return Err(err),
        }
    }
}

fn create_ledger_flow(theme: &ColorfulTheme, config: &ConfigManager) -> Result<(), CliError> {
    let path = forms::prompt_path(theme, "New ledger file", None)?;
    if path.exists() && !forms::confirm_action(theme, "File already exists. Overwrite?", false)? {
        return Ok(());
    }

    let budget = forms::prompt_budget(theme)?;
    let ledger = storage::create_ledger(&path, budget)?;
    config.record_last_ledger(Some(&path))?;

    output::success(format!(
        "Created {} with budget {:.2}",
        path.display(),
        ledger.budget
    ));
    Ok(())
}

fn add_expense_flow(theme: &ColorfulTheme, config: &ConfigManager) -> Result<(), CliError> {
    let last = config.load()?.last_opened_ledger;
    let path = forms::prompt_path(theme, "Ledger file", last.as_deref())?;
    let mut ledger = storage::open_ledger(&path)?;
    config.record_last_ledger(Some(&path))?;

    let today = Local::now().date_naive();
    let expense = forms::prompt_expense(theme, today)?;
    storage::append_expense(&mut ledger, expense)?;

    output::success("Expense added.");
    output::print_entries(&ledger);
    output::print_summary(&SummaryService::compute(&ledger, today));
    Ok(())
}

fn summarize_flow(theme: &ColorfulTheme, config: &ConfigManager) -> Result<(), CliError> {
    let last = config.load()?.last_opened_ledger;
    let path = forms::prompt_path(theme, "Ledger file", last.as_deref())?;
    let ledger = storage::open_ledger(&path)?;
    config.record_last_ledger(Some(&path))?;

    output::print_entries(&ledger);
    output::print_summary(&SummaryService::compute(&ledger, Local::now().date_naive()));
    Ok(())
}
