//! Transfer service
//!
//! A transfer is a pair of recordings: an expense on the sender's wallet and
//! an income on the recipient's, both tagged with the reserved transfer
//! category. The two legs are committed one after the other; there is no
//! rollback if the process dies between them.

use chrono::Utc;
use tracing::info;

use crate::models::{Category, Money, Transaction, TransactionType, Wallet};

use super::wallet::WalletService;
use super::warning::{RecordOutcome, Warning};

/// Description recorded on the sender's leg
pub const DEBIT_DESCRIPTION: &str = "Funds transfer";
/// Description recorded on the recipient's leg
pub const CREDIT_DESCRIPTION: &str = "Transfer received";

/// The intended dual-leg operation, before it touches any wallet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPlan {
    pub amount: Money,
    pub category: Category,
    pub debit_description: String,
    pub credit_description: String,
}

impl TransferPlan {
    /// Plan a transfer of `amount` with the default category and descriptions
    pub fn new(amount: Money) -> Self {
        Self {
            amount,
            category: Category::transfer(),
            debit_description: DEBIT_DESCRIPTION.to_string(),
            credit_description: CREDIT_DESCRIPTION.to_string(),
        }
    }

    /// Build the sender's leg, stamped now
    pub fn debit_leg(&self) -> Transaction {
        Transaction::new(
            TransactionType::Expense,
            Some(self.category.clone()),
            self.amount,
            Utc::now(),
            self.debit_description.clone(),
        )
    }

    /// Build the recipient's leg, stamped now
    pub fn credit_leg(&self) -> Transaction {
        Transaction::new(
            TransactionType::Income,
            Some(self.category.clone()),
            self.amount,
            Utc::now(),
            self.credit_description.clone(),
        )
    }
}

/// Result of executing a transfer
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    /// The expense recorded on the sender's wallet
    pub debit_transaction: Transaction,
    /// The income recorded on the recipient's wallet
    pub credit_transaction: Transaction,
    /// Warnings raised by the debit leg
    pub debit: RecordOutcome,
    /// Warnings raised by the credit leg
    pub credit: RecordOutcome,
}

impl TransferOutcome {
    /// All warnings, debit leg first
    pub fn warnings(&self) -> impl Iterator<Item = &Warning> {
        self.debit.warnings().iter().chain(self.credit.warnings())
    }

    /// True when neither leg raised a warning
    pub fn is_clean(&self) -> bool {
        self.debit.is_clean() && self.credit.is_clean()
    }
}

/// Service for wallet-to-wallet transfers
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferService {
    wallet_service: WalletService,
}

impl TransferService {
    /// Create a new transfer service on top of a wallet service
    pub fn new(wallet_service: WalletService) -> Self {
        Self { wallet_service }
    }

    /// Move `amount` from one wallet to another
    pub fn transfer(&self, from: &mut Wallet, to: &mut Wallet, amount: Money) -> TransferOutcome {
        self.execute(&TransferPlan::new(amount), from, to)
    }

    /// Execute a plan: debit `from`, then credit `to`
    pub fn execute(&self, plan: &TransferPlan, from: &mut Wallet, to: &mut Wallet) -> TransferOutcome {
        self.run(plan, |leg, transaction| match leg {
            Leg::Debit => self.wallet_service.add_transaction(from, transaction),
            Leg::Credit => self.wallet_service.add_transaction(to, transaction),
        })
    }

    /// Transfer from a wallet to itself.
    ///
    /// Both legs land on the same wallet: the balance is unchanged and two
    /// transactions are appended.
    pub fn transfer_within(&self, wallet: &mut Wallet, amount: Money) -> TransferOutcome {
        self.execute_within(&TransferPlan::new(amount), wallet)
    }

    /// Execute a plan with both legs on one wallet
    pub fn execute_within(&self, plan: &TransferPlan, wallet: &mut Wallet) -> TransferOutcome {
        self.run(plan, |_, transaction| {
            self.wallet_service.add_transaction(wallet, transaction)
        })
    }

    fn run<F>(&self, plan: &TransferPlan, mut record: F) -> TransferOutcome
    where
        F: FnMut(Leg, Transaction) -> RecordOutcome,
    {
        let debit_transaction = plan.debit_leg();
        let debit = record(Leg::Debit, debit_transaction.clone());

        let credit_transaction = plan.credit_leg();
        let credit = record(Leg::Credit, credit_transaction.clone());

        info!(amount = %plan.amount, "transfer recorded");

        TransferOutcome {
            debit_transaction,
            credit_transaction,
            debit,
            credit,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Leg {
    Debit,
    Credit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn wallet_with(amount: Money) -> Wallet {
        let mut wallet = Wallet::new();
        if !amount.is_zero() {
            wallet.record_transaction(Transaction::income(None, amount, "seed"));
        }
        wallet
    }

    #[test]
    fn test_transfer_conserves_funds() {
        let service = TransferService::default();
        let mut alice = wallet_with(Money::new(dec!(500)));
        let mut bob = wallet_with(Money::new(dec!(20)));
        let (alice_count, bob_count) = (alice.transaction_count(), bob.transaction_count());

        let outcome = service.transfer(&mut alice, &mut bob, Money::new(dec!(120.50)));

        assert!(outcome.is_clean());
        assert_eq!(alice.balance(), Money::new(dec!(379.50)));
        assert_eq!(bob.balance(), Money::new(dec!(140.50)));
        assert_eq!(alice.transaction_count(), alice_count + 1);
        assert_eq!(bob.transaction_count(), bob_count + 1);
    }

    #[test]
    fn test_legs_are_tagged_and_typed() {
        let service = TransferService::default();
        let mut alice = wallet_with(Money::new(dec!(100)));
        let mut bob = Wallet::new();

        let outcome = service.transfer(&mut alice, &mut bob, Money::new(dec!(10)));

        let debit = alice.transactions().last().unwrap();
        let credit = bob.transactions().last().unwrap();
        assert_eq!(debit, &outcome.debit_transaction);
        assert_eq!(credit, &outcome.credit_transaction);
        assert!(debit.is_expense() && debit.is_transfer());
        assert!(credit.is_income() && credit.is_transfer());
        assert_eq!(debit.description(), DEBIT_DESCRIPTION);
        assert_eq!(credit.description(), CREDIT_DESCRIPTION);
        assert!(debit.timestamp() <= credit.timestamp());
        assert_ne!(debit.id(), credit.id());
    }

    #[test]
    fn test_overdrawn_sender_still_credits_receiver() {
        let service = TransferService::default();
        let mut sender = wallet_with(Money::new(dec!(50)));
        let mut receiver = Wallet::new();

        let outcome = service.transfer(&mut sender, &mut receiver, Money::new(dec!(200)));

        assert_eq!(sender.balance(), Money::new(dec!(-150)));
        assert_eq!(receiver.balance(), Money::new(dec!(200)));
        assert!(outcome.debit.overdrawn().is_some());
        assert!(outcome.credit.is_clean());
        assert_eq!(outcome.warnings().count(), 1);
    }

    #[test]
    fn test_transfer_budget_applies_to_sender() {
        let service = TransferService::default();
        let mut sender = wallet_with(Money::new(dec!(1000)));
        sender.set_budget(Category::transfer(), Money::new(dec!(100)));
        let mut receiver = Wallet::new();

        let outcome = service.transfer(&mut sender, &mut receiver, Money::new(dec!(150)));
        assert!(outcome.debit.budget_exceeded().is_some());
        assert!(outcome.debit.overdrawn().is_none());
    }

    #[test]
    fn test_credit_leg_warning_is_surfaced() {
        let service = TransferService::default();
        let mut sender = wallet_with(Money::new(dec!(100)));
        let mut receiver = Wallet::with_opening_balance(Money::new(dec!(-500)));

        let outcome = service.transfer(&mut sender, &mut receiver, Money::new(dec!(10)));
        assert!(outcome.debit.is_clean());
        assert!(outcome.credit.overdrawn().is_some());
        assert!(!outcome.is_clean());
    }

    #[test]
    fn test_self_transfer_keeps_balance() {
        let service = TransferService::default();
        let mut wallet = wallet_with(Money::new(dec!(300)));

        let outcome = service.transfer_within(&mut wallet, Money::new(dec!(75)));

        assert!(outcome.is_clean());
        assert_eq!(wallet.balance(), Money::new(dec!(300)));
        assert_eq!(wallet.transaction_count(), 3);

        let legs = &wallet.transactions()[1..];
        assert_eq!(legs[0], outcome.debit_transaction);
        assert_eq!(legs[1], outcome.credit_transaction);
        assert!(legs[0].is_expense() && legs[1].is_income());
    }

    #[test]
    fn test_self_transfer_overdraft_is_on_debit_leg() {
        let service = TransferService::default();
        let mut wallet = wallet_with(Money::new(dec!(10)));

        let outcome = service.transfer_within(&mut wallet, Money::new(dec!(25)));

        assert!(outcome.debit.overdrawn().is_some());
        assert!(outcome.credit.is_clean());
        assert_eq!(wallet.balance(), Money::new(dec!(10)));
    }

    #[test]
    fn test_execute_custom_plan() {
        let service = TransferService::default();
        let mut from = wallet_with(Money::new(dec!(10)));
        let mut to = Wallet::new();
        let plan = TransferPlan {
            amount: Money::new(dec!(4)),
            category: Category::new("Gift"),
            debit_description: "birthday".into(),
            credit_description: "birthday".into(),
        };

        let outcome = service.execute(&plan, &mut from, &mut to);
        assert_eq!(
            outcome.credit_transaction.category(),
            Some(&Category::new("Gift"))
        );
        assert_eq!(to.balance(), Money::new(dec!(4)));
    }
}
