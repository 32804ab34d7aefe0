//! Summary and expenses report commands

use crate::config::settings::Settings;
use crate::error::MoneyTrackResult;
use crate::models::Category;
use crate::reports::{deliver, ExpensesReport, FileReportSink, SummaryReport};
use crate::services::{AccountService, Session};
use crate::storage::Storage;

/// Handle `summary [-o file]`
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    session: &Session,
    output: Option<&str>,
) -> MoneyTrackResult<()> {
    let wallet = AccountService::new(storage).wallet(session)?;
    let text = SummaryReport::generate(&wallet).format_terminal(&settings.currency_symbol);

    let sink = FileReportSink::new(storage.paths().reports_dir());
    println!("{}", deliver(text, output, &sink).trim_end());
    Ok(())
}

/// Handle `expenses <categories...> [-o file]`
pub fn handle_expenses_command(
    storage: &Storage,
    settings: &Settings,
    session: &Session,
    categories: &[String],
    output: Option<&str>,
) -> MoneyTrackResult<()> {
    let wallet = AccountService::new(storage).wallet(session)?;
    let categories: Vec<Category> = categories.iter().map(Category::new).collect();
    let text = ExpensesReport::generate(&wallet, &categories).format_terminal(&settings.currency_symbol);

    let sink = FileReportSink::new(storage.paths().reports_dir());
    println!("{}", deliver(text, output, &sink).trim_end());
    Ok(())
}
