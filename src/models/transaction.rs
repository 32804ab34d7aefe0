//! Transaction model
//!
//! An immutable income or expense record. Identity is the transaction id:
//! two transactions are equal iff their ids match, whatever the other fields
//! hold.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming into the wallet
    Income,
    /// Money leaving the wallet
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, generated when absent from stored data
    #[serde(default)]
    id: TransactionId,

    /// Income or expense
    transaction_type: TransactionType,

    /// Category (None for uncategorized income)
    #[serde(default)]
    category: Option<Category>,

    /// Amount, never negative when created through the account layer
    amount: Money,

    /// When the transaction was captured
    timestamp: DateTime<Utc>,

    /// Free-text description
    #[serde(default)]
    description: String,
}

impl Transaction {
    /// Create a new transaction with a fresh id
    pub fn new(
        transaction_type: TransactionType,
        category: Option<Category>,
        amount: Money,
        timestamp: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        Self::with_id(
            TransactionId::new(),
            transaction_type,
            category,
            amount,
            timestamp,
            description,
        )
    }

    /// Create a transaction with a known id
    pub fn with_id(
        id: TransactionId,
        transaction_type: TransactionType,
        category: Option<Category>,
        amount: Money,
        timestamp: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            transaction_type,
            category,
            amount,
            timestamp,
            description: description.into(),
        }
    }

    /// Create an income transaction stamped now
    pub fn income(category: Option<Category>, amount: Money, description: impl Into<String>) -> Self {
        Self::new(TransactionType::Income, category, amount, Utc::now(), description)
    }

    /// Create an expense transaction stamped now
    pub fn expense(category: Option<Category>, amount: Money, description: impl Into<String>) -> Self {
        Self::new(TransactionType::Expense, category, amount, Utc::now(), description)
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Check if this transaction is one leg of a transfer
    pub fn is_transfer(&self) -> bool {
        self.category.as_ref().is_some_and(Category::is_transfer)
    }

    /// Check if this transaction matches both a category and a type
    pub fn matches(&self, category: &Category, transaction_type: TransactionType) -> bool {
        self.transaction_type == transaction_type && self.category.as_ref() == Some(category)
    }

    /// Signed effect of this transaction on a wallet balance
    pub fn signed_amount(&self) -> Money {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Transaction {}

impl Hash for Transaction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let category = self.category.as_ref().map_or("N/A", Category::name);
        write!(
            f,
            "{} {} {} ({})",
            self.transaction_type, self.amount, category, self.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_equality_is_by_id_only() {
        let id = TransactionId::new();
        let a = Transaction::with_id(
            id,
            TransactionType::Income,
            None,
            Money::new(dec!(10)),
            Utc::now(),
            "a",
        );
        let b = Transaction::with_id(
            id,
            TransactionType::Expense,
            Some(Category::new("Food")),
            Money::new(dec!(99)),
            Utc::now(),
            "b",
        );
        assert_eq!(a, b);

        let c = Transaction::income(None, Money::new(dec!(10)), "a");
        assert_ne!(a, c);
    }

    #[test]
    fn test_matches_category_and_type() {
        let txn = Transaction::expense(Some(Category::new("Food")), Money::new(dec!(5)), "");
        assert!(txn.matches(&Category::new("Food"), TransactionType::Expense));
        assert!(!txn.matches(&Category::new("Food"), TransactionType::Income));
        assert!(!txn.matches(&Category::new("Taxi"), TransactionType::Expense));

        let uncategorized = Transaction::income(None, Money::new(dec!(5)), "");
        assert!(!uncategorized.matches(&Category::new("Food"), TransactionType::Income));
    }

    #[test]
    fn test_signed_amount() {
        let income = Transaction::income(None, Money::new(dec!(12.5)), "");
        let expense = Transaction::expense(None, Money::new(dec!(12.5)), "");
        assert_eq!(income.signed_amount(), Money::new(dec!(12.5)));
        assert_eq!(expense.signed_amount(), Money::new(dec!(-12.5)));
    }

    #[test]
    fn test_transfer_detection() {
        let leg = Transaction::expense(Some(Category::transfer()), Money::new(dec!(1)), "");
        assert!(leg.is_transfer());
        assert!(!Transaction::income(None, Money::new(dec!(1)), "").is_transfer());
    }

    #[test]
    fn test_missing_id_is_generated_on_load() {
        let json = r#"{
            "transaction_type": "income",
            "category": null,
            "amount": "1000",
            "timestamp": "2024-01-15T10:00:00Z",
            "description": "salary"
        }"#;
        let a: Transaction = serde_json::from_str(json).unwrap();
        let b: Transaction = serde_json::from_str(json).unwrap();
        assert!(!a.id().as_uuid().is_nil());
        assert_ne!(a.id(), b.id());
        assert_eq!(a.amount(), Money::from_units(1000));
        assert!(a.is_income());
    }
}
