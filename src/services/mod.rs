//! Service layer for MoneyTrack
//!
//! Domain services operate on a borrowed [`Wallet`](crate::models::Wallet);
//! [`AccountService`] sits on top and adds authentication, validation,
//! persistence and auditing.

pub mod account;
pub mod aggregation;
pub mod budget;
pub mod session;
pub mod transfer;
pub mod wallet;
pub mod warning;

pub use account::AccountService;
pub use budget::{BudgetService, BudgetStatus};
pub use session::Session;
pub use transfer::{TransferOutcome, TransferPlan, TransferService};
pub use wallet::WalletService;
pub use warning::{RecordOutcome, Warning};
