//! Wallet model
//!
//! The wallet is the per-user ledger: a running balance, the append-only
//! transaction log and the category budgets. Fields are private; the only
//! mutations are [`Wallet::record_transaction`] and [`Wallet::set_budget`].
//! Validation and warnings live in the service layer on top.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::budget::Budget;
use super::category::Category;
use super::money::Money;
use super::transaction::{Transaction, TransactionType};

/// A user's ledger
///
/// Invariant: `balance == opening balance + Σincome − Σexpense` after every
/// mutation. The log is never reordered or shortened.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(default)]
    balance: Money,

    #[serde(default)]
    transactions: Vec<Transaction>,

    #[serde(default)]
    budgets: HashMap<Category, Budget>,
}

impl Wallet {
    /// Create an empty wallet with a zero balance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty wallet whose running balance starts at `opening`
    pub fn with_opening_balance(opening: Money) -> Self {
        Self {
            balance: opening,
            ..Self::default()
        }
    }

    /// Append a transaction and apply it to the balance
    pub fn record_transaction(&mut self, transaction: Transaction) {
        self.balance += transaction.signed_amount();
        self.transactions.push(transaction);
    }

    /// Insert or replace the budget for a category
    pub fn set_budget(&mut self, category: Category, limit: Money) -> &Budget {
        let budget = Budget::new(category.clone(), limit);
        self.budgets.insert(category.clone(), budget);
        &self.budgets[&category]
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Read-only view of the budgets keyed by category
    pub fn budgets(&self) -> &HashMap<Category, Budget> {
        &self.budgets
    }

    /// Look up the budget for a category
    pub fn budget(&self, category: &Category) -> Option<&Budget> {
        self.budgets.get(category)
    }

    /// Budgets sorted by category name, for stable display
    pub fn budgets_sorted(&self) -> Vec<&Budget> {
        let mut budgets: Vec<_> = self.budgets.values().collect();
        budgets.sort_by(|a, b| a.category().cmp(b.category()));
        budgets
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the balance is below zero
    pub fn is_overdrawn(&self) -> bool {
        self.balance.is_negative()
    }

    /// Net effect of the transaction log alone, ignoring the cached balance
    pub fn recomputed_balance(&self) -> Money {
        self.transactions.iter().map(Transaction::signed_amount).sum()
    }

    /// Check that recording `transactions` in order keeps the balance and
    /// both per-type totals within the range of [`Money`].
    ///
    /// [`Wallet::record_transaction`] does not check this itself.
    pub fn can_record<'t>(&self, transactions: impl IntoIterator<Item = &'t Transaction>) -> bool {
        let mut balance = Some(self.balance);
        let mut income = self.checked_total(TransactionType::Income);
        let mut expense = self.checked_total(TransactionType::Expense);

        for txn in transactions {
            balance = balance.and_then(|b| b.checked_add(txn.signed_amount()));
            let total = match txn.transaction_type() {
                TransactionType::Income => &mut income,
                TransactionType::Expense => &mut expense,
            };
            *total = total.and_then(|t| t.checked_add(txn.amount()));
        }

        balance.is_some() && income.is_some() && expense.is_some()
    }

    fn checked_total(&self, transaction_type: TransactionType) -> Option<Money> {
        self.transactions
            .iter()
            .filter(|t| t.transaction_type() == transaction_type)
            .try_fold(Money::zero(), |acc, t| acc.checked_add(t.amount()))
    }
}
