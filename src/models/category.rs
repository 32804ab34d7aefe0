//! Category model
//!
//! A category is a plain name. Two categories with the same name are the same
//! category; comparison is case-sensitive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the reserved category used to tag both legs of a transfer
pub const TRANSFER_CATEGORY: &str = "Transfer";

/// A spending or income category, identified solely by its name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category {
    name: String,
}

impl Category {
    /// Create a category with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The reserved category for transfer legs
    pub fn transfer() -> Self {
        Self::new(TRANSFER_CATEGORY)
    }

    /// Get the category name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if this is the reserved transfer category
    pub fn is_transfer(&self) -> bool {
        self.name == TRANSFER_CATEGORY
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
