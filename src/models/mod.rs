//! Core data models for MoneyTrack
//!
//! This module contains the ledger domain: money amounts, categories,
//! transactions, budgets, the per-user wallet and the user that owns it.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;
pub mod user;
pub mod wallet;

pub use budget::Budget;
pub use category::Category;
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionType};
pub use user::User;
pub use wallet::Wallet;
