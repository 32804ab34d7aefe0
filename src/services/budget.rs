//! Budget service
//!
//! Creates, replaces and reads category limits on a wallet. Limits are not
//! validated: a zero or negative limit is accepted and simply makes the next
//! expense in that category over budget.

use tracing::debug;

use crate::models::{Budget, Category, Money, TransactionType, Wallet};

use super::aggregation;

/// Limit, spending and remainder for one budgeted category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetStatus {
    pub category: Category,
    pub limit: Money,
    /// All-time expense total in the category
    pub spent: Money,
    /// `limit - spent`, negative once overspent
    pub remaining: Money,
}

impl BudgetStatus {
    /// Check if spending is strictly above the limit
    pub fn is_exceeded(&self) -> bool {
        self.spent > self.limit
    }
}

/// Service for category budgets
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetService;

impl BudgetService {
    /// Create a new budget service
    pub fn new() -> Self {
        Self
    }

    /// Set or replace the limit for a category and return the stored budget
    pub fn set_budget(&self, wallet: &mut Wallet, category: Category, limit: Money) -> Budget {
        debug!(category = %category, limit = %limit, "setting budget");
        wallet.set_budget(category, limit).clone()
    }

    /// Get the budget for a category, if one is set
    pub fn get_budget(&self, wallet: &Wallet, category: &Category) -> Option<Budget> {
        wallet.budget(category).cloned()
    }

    /// Status of every budget, sorted by category name
    pub fn budget_statuses(&self, wallet: &Wallet) -> Vec<BudgetStatus> {
        wallet
            .budgets_sorted()
            .into_iter()
            .map(|budget| {
                let spent = aggregation::total_by_category(
                    wallet,
                    budget.category(),
                    TransactionType::Expense,
                );
                BudgetStatus {
                    category: budget.category().clone(),
                    limit: budget.limit(),
                    spent,
                    remaining: budget.remaining(spent),
                }
            })
            .collect()
    }
}
