//! MoneyTrack - personal income, expense and budget tracking
//!
//! Each registered user owns one wallet: a running balance, an append-only
//! transaction log and per-category spending limits. Recording a transaction
//! never fails on business grounds; crossing a budget or dropping below zero
//! produces warnings alongside the applied change.
//!
//! # Architecture
//!
//! - `models`: core data types (money, transactions, budgets, wallets, users)
//! - `services`: wallet, budget and transfer logic plus the account use cases
//! - `storage`: per-user JSON files with atomic writes, or in-memory
//! - `audit`: append-only audit log of every mutation
//! - `reports` / `display`: terminal rendering and report files
//! - `config`: path resolution and settings
//! - `cli`: command handlers for the `moneytrack` binary
//!
//! # Example
//!
//! ```
//! use moneytrack::models::{Category, Money, Transaction, Wallet};
//! use moneytrack::services::WalletService;
//!
//! let service = WalletService::new();
//! let mut wallet = Wallet::new();
//! wallet.set_budget(Category::new("Food"), Money::from_units(100));
//!
//! service.add_transaction(&mut wallet, Transaction::income(None, Money::from_units(50), "gift"));
//! let outcome = service.add_transaction(
//!     &mut wallet,
//!     Transaction::expense(Some(Category::new("Food")), Money::from_units(120), "dinner"),
//! );
//!
//! assert_eq!(wallet.balance(), Money::from_units(-70));
//! assert_eq!(outcome.warnings().len(), 2);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{MoneyTrackError, MoneyTrackResult};
