//! Income, expense and history commands

use crate::config::settings::Settings;
use crate::display::format_transaction_register;
use crate::error::MoneyTrackResult;
use crate::models::Category;
use crate::services::{AccountService, Session};
use crate::storage::Storage;

use super::{parse_amount, print_outcome};

/// Handle `income <amount> [-c category] [-d description]`
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    session: &Session,
    amount: &str,
    category: Option<String>,
    description: Option<String>,
) -> MoneyTrackResult<()> {
    let amount = parse_amount(amount)?;
    let service = AccountService::new(storage);

    let outcome = service.add_income(
        session,
        amount,
        category.map(Category::new),
        description.as_deref().unwrap_or_default(),
    )?;

    println!(
        "Income of {} recorded.",
        amount.format_with_symbol(&settings.currency_symbol)
    );
    print_outcome(&outcome);
    Ok(())
}

/// Handle `expense <amount> <category> [-d description]`
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    session: &Session,
    amount: &str,
    category: &str,
    description: Option<String>,
) -> MoneyTrackResult<()> {
    let amount = parse_amount(amount)?;
    let service = AccountService::new(storage);

    let outcome = service.add_expense(
        session,
        amount,
        Some(Category::new(category)),
        description.as_deref().unwrap_or_default(),
    )?;

    println!(
        "Expense of {} in '{}' recorded.",
        amount.format_with_symbol(&settings.currency_symbol),
        category
    );
    print_outcome(&outcome);
    Ok(())
}

/// Handle `history [-n limit]`: the most recent transactions, oldest first
pub fn handle_history_command(
    storage: &Storage,
    settings: &Settings,
    session: &Session,
    limit: usize,
) -> MoneyTrackResult<()> {
    let wallet = AccountService::new(storage).wallet(session)?;
    let transactions = wallet.transactions();
    let start = transactions.len().saturating_sub(limit);

    print!(
        "{}",
        format_transaction_register(
            &transactions[start..],
            &settings.date_format,
            &settings.currency_symbol
        )
    );
    println!(
        "Balance: {}",
        wallet.balance().format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}
