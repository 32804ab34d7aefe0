//! Transaction display formatting
//!
//! Register-style views of a wallet's transaction log.

use chrono::Local;

use crate::models::{Category, Transaction, TransactionType};

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, date_format: &str, currency_symbol: &str) -> String {
    let transfer_indicator = if txn.is_transfer() { "⇄ " } else { "" };
    let category = txn.category().map_or("-", Category::name);

    let amount = match txn.transaction_type() {
        TransactionType::Income => format!("+{}", txn.amount().format_with_symbol(currency_symbol)),
        TransactionType::Expense => format!("-{}", txn.amount().format_with_symbol(currency_symbol)),
    };

    format!(
        "{:16} {:7} {} {:>12}  {}",
        txn.timestamp()
            .with_timezone(&Local)
            .format(date_format)
            .to_string(),
        txn.transaction_type().to_string(),
        truncate(&format!("{}{}", transfer_indicator, category), 18),
        amount,
        txn.description()
    )
    .trim_end()
    .to_string()
}

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[Transaction],
    date_format: &str,
    currency_symbol: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:16} {:7} {:18} {:>12}  {}\n",
        "Date", "Type", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, date_format, currency_symbol));
        output.push('\n');
    }

    output
}

/// Pad or cut a string to exactly `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}
