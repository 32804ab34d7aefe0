//! Aggregation queries over a wallet's transaction log
//!
//! Every function here is a pure O(n) fold over the log with no caching. An
//! unknown category sums to zero; "never used" and "used with a zero total"
//! look the same to callers.

use crate::models::{Category, Money, Transaction, TransactionId, TransactionType, Wallet};

/// Label used for income recorded without a category
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Sum of amounts of the given type recorded under `category`
pub fn total_by_category(
    wallet: &Wallet,
    category: &Category,
    transaction_type: TransactionType,
) -> Money {
    wallet
        .transactions()
        .iter()
        .filter(|t| t.matches(category, transaction_type))
        .map(Transaction::amount)
        .sum()
}

/// Sum of [`total_by_category`] over a list of categories.
///
/// Categories are not deduplicated, so a repeated category counts twice.
pub fn total_by_categories(
    wallet: &Wallet,
    categories: &[Category],
    transaction_type: TransactionType,
) -> Money {
    categories
        .iter()
        .map(|category| total_by_category(wallet, category, transaction_type))
        .sum()
}

/// Sum of all amounts of the given type, regardless of category
pub fn total(wallet: &Wallet, transaction_type: TransactionType) -> Money {
    wallet
        .transactions()
        .iter()
        .filter(|t| t.transaction_type() == transaction_type)
        .map(Transaction::amount)
        .sum()
}

/// Find a transaction by its id
pub fn find_transaction_by_id(wallet: &Wallet, id: TransactionId) -> Option<&Transaction> {
    wallet.transactions().iter().find(|t| t.id() == id)
}

/// Totals of the given type grouped by category name, in first-seen order.
///
/// Uncategorized transactions are grouped under [`UNCATEGORIZED_LABEL`].
pub fn totals_grouped_by_category(
    wallet: &Wallet,
    transaction_type: TransactionType,
) -> Vec<(String, Money)> {
    let mut groups: Vec<(String, Money)> = Vec::new();

    for txn in wallet
        .transactions()
        .iter()
        .filter(|t| t.transaction_type() == transaction_type)
    {
        let label = txn.category().map_or(UNCATEGORIZED_LABEL, Category::name);
        match groups.iter_mut().find(|(name, _)| name == label) {
            Some((_, sum)) => *sum = sum.saturating_add(txn.amount()),
            None => groups.push((label.to_string(), txn.amount())),
        }
    }

    groups
}
