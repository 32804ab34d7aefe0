//! Wallet service
//!
//! Records transactions on a wallet and evaluates the budget and overdraft
//! rules afterwards. Nothing is rejected here: amount sign and the presence of
//! a category are checked by the account layer before a call reaches this
//! service.

use tracing::{debug, warn};

use crate::models::{Category, Money, Transaction, TransactionId, TransactionType, Wallet};

use super::aggregation;
use super::warning::{RecordOutcome, Warning};

/// Service that appends transactions to a wallet and reports warnings
#[derive(Debug, Clone, Copy, Default)]
pub struct WalletService;

impl WalletService {
    /// Create a new wallet service
    pub fn new() -> Self {
        Self
    }

    /// Record a transaction and evaluate warnings.
    ///
    /// The transaction is always applied. For a categorized expense whose
    /// category has a budget, all-time spending in that category is compared
    /// with the limit (strictly greater is a violation). Independently, a
    /// negative balance afterwards produces an overdraft warning.
    pub fn add_transaction(&self, wallet: &mut Wallet, transaction: Transaction) -> RecordOutcome {
        let mut outcome = RecordOutcome::clean();

        let budget_category = match (transaction.transaction_type(), transaction.category()) {
            (TransactionType::Expense, Some(category)) => Some(category.clone()),
            _ => None,
        };

        debug!(
            id = %transaction.id(),
            kind = %transaction.transaction_type(),
            amount = %transaction.amount(),
            "recording transaction"
        );
        wallet.record_transaction(transaction);

        if let Some(category) = budget_category {
            if let Some(warning) = self.check_budget(wallet, &category) {
                warn!(category = %category, "budget limit exceeded");
                outcome.push(warning);
            }
        }

        if wallet.is_overdrawn() {
            warn!(balance = %wallet.balance(), "wallet balance is negative");
            outcome.push(Warning::NegativeBalance {
                balance: wallet.balance(),
            });
        }

        outcome
    }

    fn check_budget(&self, wallet: &Wallet, category: &Category) -> Option<Warning> {
        let budget = wallet.budget(category)?;
        let spent = self.calculate_total_by_category(wallet, category, TransactionType::Expense);

        budget.is_exceeded_by(spent).then(|| Warning::BudgetExceeded {
            category: category.clone(),
            limit: budget.limit(),
            spent,
        })
    }

    /// Sum of amounts of the given type recorded under `category`
    pub fn calculate_total_by_category(
        &self,
        wallet: &Wallet,
        category: &Category,
        transaction_type: TransactionType,
    ) -> Money {
        aggregation::total_by_category(wallet, category, transaction_type)
    }

    /// Sum over several categories (repeats count twice)
    pub fn calculate_total_by_categories(
        &self,
        wallet: &Wallet,
        categories: &[Category],
        transaction_type: TransactionType,
    ) -> Money {
        aggregation::total_by_categories(wallet, categories, transaction_type)
    }

    /// Sum of every transaction of the given type
    pub fn calculate_total(&self, wallet: &Wallet, transaction_type: TransactionType) -> Money {
        aggregation::total(wallet, transaction_type)
    }

    /// Look up a transaction by id
    pub fn find_transaction_by_id<'w>(
        &self,
        wallet: &'w Wallet,
        id: TransactionId,
    ) -> Option<&'w Transaction> {
        aggregation::find_transaction_by_id(wallet, id)
    }
}
