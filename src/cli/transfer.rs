//! Transfer command

use crate::config::settings::Settings;
use crate::error::MoneyTrackResult;
use crate::services::{AccountService, Session};
use crate::storage::Storage;

use super::{parse_amount, print_warnings};

/// Handle `transfer <to> <amount>`
pub fn handle_transfer_command(
    storage: &Storage,
    settings: &Settings,
    session: &Session,
    to: &str,
    amount: &str,
) -> MoneyTrackResult<()> {
    let amount = parse_amount(amount)?;
    let outcome = AccountService::new(storage).transfer(session, to, amount)?;

    println!(
        "Transferred {} to '{}'.",
        amount.format_with_symbol(&settings.currency_symbol),
        to
    );
    // Credit-leg warnings describe the recipient's wallet
    print_warnings(outcome.debit.warnings());
    Ok(())
}
