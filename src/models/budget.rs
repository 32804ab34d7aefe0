//! Budget model
//!
//! A budget is a standing spending limit for one category. It is not tied to
//! any period: spending is measured over all time.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;

/// A spending limit bound to a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    category: Category,
    limit: Money,
}

impl Budget {
    /// Create a new budget
    pub fn new(category: Category, limit: Money) -> Self {
        Self { category, limit }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn limit(&self) -> Money {
        self.limit
    }

    /// What is left of the limit after `spent` (negative once overspent)
    pub fn remaining(&self, spent: Money) -> Money {
        self.limit.saturating_sub(spent)
    }

    /// Check if `spent` strictly exceeds the limit
    pub fn is_exceeded_by(&self, spent: Money) -> bool {
        spent > self.limit
    }
}
