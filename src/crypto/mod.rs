//! Credential handling for MoneyTrack
//!
//! Login passwords are hashed with Argon2id before they ever reach storage.

pub mod password;

pub use password::{hash_password, verify_password};
