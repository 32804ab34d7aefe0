//! Budget Status Report
//!
//! One row per budgeted category: limit, spent, remaining.

use crate::models::Wallet;
use crate::services::{BudgetService, BudgetStatus};

/// Budget status report
#[derive(Debug, Clone)]
pub struct BudgetStatusReport {
    pub rows: Vec<BudgetStatus>,
}

impl BudgetStatusReport {
    pub fn generate(wallet: &Wallet) -> Self {
        Self {
            rows: BudgetService::new().budget_statuses(wallet),
        }
    }

    /// Number of budgets whose spending is above the limit
    pub fn exceeded_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_exceeded()).count()
    }

    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.rows.is_empty() {
            return "No budgets set.\n".to_string();
        }

        let mut output = String::new();
        output.push_str("Budget Status\n");
        output.push_str(&"=".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>12} {:>12} {:>12}\n",
            "Category", "Limit", "Spent", "Remaining"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for row in &self.rows {
            let marker = if row.is_exceeded() { "  OVER" } else { "" };
            output.push_str(&format!(
                "{:<20} {:>12} {:>12} {:>12}{}\n",
                row.category.name(),
                row.limit.format_with_symbol(currency_symbol),
                row.spent.format_with_symbol(currency_symbol),
                row.remaining.format_with_symbol(currency_symbol),
                marker
            ));
        }

        output
    }
}
