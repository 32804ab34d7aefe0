//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Handlers print
//! their results to stdout and return errors for the binary to report.

pub mod audit;
pub mod budget;
pub mod report;
pub mod transaction;
pub mod transfer;
pub mod user;

pub use audit::handle_audit_command;
pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_expenses_command, handle_summary_command};
pub use transaction::{handle_expense_command, handle_history_command, handle_income_command};
pub use transfer::handle_transfer_command;
pub use user::{authenticate, handle_register_command};

use crate::error::{MoneyTrackError, MoneyTrackResult};
use crate::models::Money;
use crate::services::{RecordOutcome, Warning};

/// Parse a user-supplied amount
pub(crate) fn parse_amount(amount: &str) -> MoneyTrackResult<Money> {
    Money::parse(amount).map_err(|e| {
        MoneyTrackError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '100.00' or '100'. Error: {}",
            amount, e
        ))
    })
}

pub(crate) fn print_warnings<'w>(warnings: impl IntoIterator<Item = &'w Warning>) {
    for warning in warnings {
        println!("Warning: {}", warning);
    }
}

pub(crate) fn print_outcome(outcome: &RecordOutcome) {
    print_warnings(outcome.warnings());
}
