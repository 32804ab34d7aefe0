//! Budget CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::MoneyTrackResult;
use crate::models::Category;
use crate::reports::{deliver, BudgetStatusReport, FileReportSink};
use crate::services::{AccountService, Session};
use crate::storage::Storage;

use super::parse_amount;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set or replace the spending limit for a category
    Set {
        /// Category name
        category: String,
        /// Limit (e.g., "500" or "500.00")
        #[arg(allow_negative_numbers = true)]
        limit: String,
    },

    /// Show limit, spending and remainder for every budget
    Status {
        /// Write the report to this file in the reports directory
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    session: &Session,
    cmd: BudgetCommands,
) -> MoneyTrackResult<()> {
    let service = AccountService::new(storage);

    match cmd {
        BudgetCommands::Set { category, limit } => {
            let limit = parse_amount(&limit)?;
            let budget = service.set_budget(session, Category::new(category), limit)?;
            println!(
                "Budget for '{}' set to {}.",
                budget.category(),
                budget.limit().format_with_symbol(&settings.currency_symbol)
            );
        }
        BudgetCommands::Status { output } => {
            let wallet = service.wallet(session)?;
            let text = BudgetStatusReport::generate(&wallet).format_terminal(&settings.currency_symbol);
            let sink = FileReportSink::new(storage.paths().reports_dir());
            println!("{}", deliver(text, output.as_deref(), &sink).trim_end());
        }
    }

    Ok(())
}
