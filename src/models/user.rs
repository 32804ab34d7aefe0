//! User model
//!
//! A user owns exactly one wallet for their whole lifetime. Users are
//! identified by login; the password is only ever kept as an Argon2 PHC hash.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::wallet::Wallet;

/// Maximum login length (logins become file names)
pub const MAX_LOGIN_LEN: usize = 64;

/// A registered user and their wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    login: String,
    password_hash: String,
    #[serde(default)]
    wallet: Wallet,
}

impl User {
    /// Create a user with an empty wallet
    pub fn new(login: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password_hash: password_hash.into(),
            wallet: Wallet::new(),
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    pub fn wallet_mut(&mut self) -> &mut Wallet {
        &mut self.wallet
    }

    /// Validate a login string
    pub fn validate_login(login: &str) -> Result<(), LoginValidationError> {
        if login.is_empty() {
            return Err(LoginValidationError::Empty);
        }
        if login.len() > MAX_LOGIN_LEN {
            return Err(LoginValidationError::TooLong(login.len()));
        }
        if let Some(c) = login
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')))
        {
            return Err(LoginValidationError::InvalidCharacter(c));
        }
        Ok(())
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.login == other.login
    }
}

impl Eq for User {}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.login)
    }
}

/// Login validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    Empty,
    TooLong(usize),
    InvalidCharacter(char),
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Login cannot be empty"),
            Self::TooLong(len) => write!(
                f,
                "Login too long ({} chars, max {})",
                len, MAX_LOGIN_LEN
            ),
            Self::InvalidCharacter(c) => write!(f, "Login contains invalid character '{}'", c),
        }
    }
}

impl std::error::Error for LoginValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_empty_wallet() {
        let user = User::new("alice", "hash");
        assert_eq!(user.login(), "alice");
        assert!(user.wallet().transactions().is_empty());
    }

    #[test]
    fn test_equality_by_login() {
        assert_eq!(User::new("alice", "a"), User::new("alice", "b"));
        assert_ne!(User::new("alice", "a"), User::new("bob", "a"));
    }

    #[test]
    fn test_validate_login() {
        assert!(User::validate_login("alice_01.x-y").is_ok());
        assert_eq!(User::validate_login(""), Err(LoginValidationError::Empty));
        assert_eq!(
            User::validate_login("../etc"),
            Err(LoginValidationError::InvalidCharacter('/'))
        );
        assert_eq!(
            User::validate_login(&"a".repeat(65)),
            Err(LoginValidationError::TooLong(65))
        );
    }
}
