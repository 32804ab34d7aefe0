//! Business warnings
//!
//! Warnings are advisory: they accompany a recording that has already been
//! applied and never cause it to be undone.

use std::fmt;

use crate::models::{Category, Money};

/// A business-rule threshold crossed by a recording
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// All-time spending in the category is now strictly above its limit
    BudgetExceeded {
        category: Category,
        limit: Money,
        spent: Money,
    },
    /// The wallet balance dropped below zero
    NegativeBalance { balance: Money },
}

impl Warning {
    pub fn is_budget_exceeded(&self) -> bool {
        matches!(self, Self::BudgetExceeded { .. })
    }

    pub fn is_negative_balance(&self) -> bool {
        matches!(self, Self::NegativeBalance { .. })
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BudgetExceeded { category, .. } => {
                write!(f, "Budget limit exceeded for category: {}", category)
            }
            Self::NegativeBalance { .. } => write!(f, "Wallet balance is negative"),
        }
    }
}

/// Result of recording a single transaction
///
/// Holds every warning that fired, budget first and overdraft second.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordOutcome {
    warnings: Vec<Warning>,
}

impl RecordOutcome {
    /// An outcome with no warnings
    pub fn clean() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// True when no threshold was crossed
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// The budget warning, if one fired
    pub fn budget_exceeded(&self) -> Option<&Warning> {
        self.warnings.iter().find(|w| w.is_budget_exceeded())
    }

    /// The overdraft warning, if one fired
    pub fn overdrawn(&self) -> Option<&Warning> {
        self.warnings.iter().find(|w| w.is_negative_balance())
    }

    /// The single warning a one-message caller should show.
    ///
    /// Overdraft takes precedence over the budget warning.
    pub fn primary(&self) -> Option<&Warning> {
        self.overdrawn().or_else(|| self.budget_exceeded())
    }
}

impl fmt::Display for RecordOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, warning) in self.warnings.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", warning)?;
        }
        Ok(())
    }
}
