//! Expenses Report
//!
//! Expense totals for a caller-chosen list of categories. A category with a
//! zero total is reported as "not found or no expenses" and left out of the
//! grand total; an unused category and one whose expenses sum to zero look
//! the same.

use crate::models::{Category, Money, TransactionType, Wallet};
use crate::services::aggregation;

/// Total for one requested category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseLine {
    pub category: Category,
    pub total: Money,
}

impl ExpenseLine {
    /// True when the category has no expenses to report
    pub fn is_empty(&self) -> bool {
        self.total.is_zero()
    }
}

/// Expenses by requested category
#[derive(Debug, Clone)]
pub struct ExpensesReport {
    /// One line per requested category, in request order (repeats kept)
    pub lines: Vec<ExpenseLine>,
    /// Sum of the non-zero lines
    pub grand_total: Money,
}

impl ExpensesReport {
    pub fn generate(wallet: &Wallet, categories: &[Category]) -> Self {
        let lines: Vec<ExpenseLine> = categories
            .iter()
            .map(|category| ExpenseLine {
                category: category.clone(),
                total: aggregation::total_by_category(wallet, category, TransactionType::Expense),
            })
            .collect();

        let grand_total = lines
            .iter()
            .filter(|line| !line.is_empty())
            .map(|line| line.total)
            .sum();

        Self { lines, grand_total }
    }

    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::from("Expenses by category:\n");

        for line in &self.lines {
            if line.is_empty() {
                output.push_str(&format!(
                    " - Category '{}' not found or no expenses.\n",
                    line.category
                ));
            } else {
                output.push_str(&format!(
                    " - {}: {}\n",
                    line.category,
                    line.total.format_with_symbol(currency_symbol)
                ));
            }
        }

        output.push_str(&format!(
            "\nTotal for selected categories: {}\n",
            self.grand_total.format_with_symbol(currency_symbol)
        ));
        output
    }
}
