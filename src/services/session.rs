//! Authenticated session context

use std::fmt;

/// Proof that a user logged in; passed explicitly to every account operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    login: String,
}

impl Session {
    pub(crate) fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.login)
    }
}
