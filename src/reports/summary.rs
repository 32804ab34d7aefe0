//! Summary Report
//!
//! Totals of income and expense, income broken down by category, and the
//! remaining amount of every budget.

use crate::models::{Money, TransactionType, Wallet};
use crate::services::aggregation;
use crate::services::{BudgetService, BudgetStatus};

/// Overall income/expense summary for one wallet
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub total_income: Money,
    /// Income per category label, in first-seen order
    pub income_by_category: Vec<(String, Money)>,
    pub total_expense: Money,
    /// Budgets sorted by category name
    pub budgets: Vec<BudgetStatus>,
    pub balance: Money,
}

impl SummaryReport {
    /// Generate the summary for a wallet
    pub fn generate(wallet: &Wallet) -> Self {
        Self {
            total_income: aggregation::total(wallet, TransactionType::Income),
            income_by_category: aggregation::totals_grouped_by_category(
                wallet,
                TransactionType::Income,
            ),
            total_expense: aggregation::total(wallet, TransactionType::Expense),
            budgets: BudgetService::new().budget_statuses(wallet),
            balance: wallet.balance(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(currency_symbol);
        let mut output = String::new();

        output.push_str(&format!("Total income: {}\n", money(self.total_income)));

        output.push_str("Income by category:\n");
        if self.income_by_category.is_empty() {
            output.push_str("  (none)\n");
        }
        for (label, amount) in &self.income_by_category {
            output.push_str(&format!("  {}: {}\n", label, money(*amount)));
        }

        output.push_str(&format!("Total expenses: {}\n", money(self.total_expense)));

        output.push_str("Budgets by category:\n");
        if self.budgets.is_empty() {
            output.push_str("  (none)\n");
        }
        for status in &self.budgets {
            output.push_str(&format!(
                "  {}: {}, remaining: {}\n",
                status.category,
                money(status.limit),
                money(status.remaining)
            ));
        }

        output.push_str(&format!("Balance: {}\n", money(self.balance)));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Transaction};
    use rust_decimal_macros::dec;

    fn sample_wallet() -> Wallet {
        let mut wallet = Wallet::new();
        wallet.record_transaction(Transaction::income(None, Money::new(dec!(1000)), ""));
        wallet.record_transaction(Transaction::income(
            Some(Category::new("Bonus")),
            Money::new(dec!(200)),
            "",
        ));
        wallet.record_transaction(Transaction::expense(
            Some(Category::new("Food")),
            Money::new(dec!(550)),
            "",
        ));
        wallet.set_budget(Category::new("Food"), Money::new(dec!(500)));
        wallet.set_budget(Category::new("Cinema"), Money::new(dec!(100)));
        wallet
    }

    #[test]
    fn test_generate() {
        let report = SummaryReport::generate(&sample_wallet());

        assert_eq!(report.total_income, Money::new(dec!(1200)));
        assert_eq!(report.total_expense, Money::new(dec!(550)));
        assert_eq!(report.balance, Money::new(dec!(650)));
        assert_eq!(report.income_by_category.len(), 2);

        let names: Vec<_> = report.budgets.iter().map(|b| b.category.name()).collect();
        assert_eq!(names, ["Cinema", "Food"]);
        assert_eq!(report.budgets[1].remaining, Money::new(dec!(-50)));
    }

    #[test]
    fn test_format_terminal() {
        let text = SummaryReport::generate(&sample_wallet()).format_terminal("$");

        assert!(text.contains("Total income: $1200"));
        assert!(text.contains("  Uncategorized: $1000"));
        assert!(text.contains("  Bonus: $200"));
        assert!(text.contains("Total expenses: $550"));
        assert!(text.contains("  Food: $500, remaining: -$50"));
        assert!(text.contains("Balance: $650"));
    }

    #[test]
    fn test_empty_wallet() {
        let text = SummaryReport::generate(&Wallet::new()).format_terminal("$");
        assert!(text.contains("Total income: $0"));
        assert!(text.contains("(none)"));
    }
}
