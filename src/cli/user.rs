//! Registration and login from the command line

use crate::error::{MoneyTrackError, MoneyTrackResult};
use crate::services::{AccountService, Session};
use crate::storage::Storage;

fn password_or_prompt(password: Option<String>) -> MoneyTrackResult<String> {
    match password {
        Some(password) => Ok(password),
        None => rpassword::prompt_password("Password: ")
            .map_err(|e| MoneyTrackError::Io(format!("Failed to read password: {}", e))),
    }
}

/// Handle `register <login>`
pub fn handle_register_command(
    storage: &Storage,
    login: &str,
    password: Option<String>,
) -> MoneyTrackResult<()> {
    let password = password_or_prompt(password)?;
    let user = AccountService::new(storage).register(login, &password)?;

    println!("User '{}' registered.", user.login());
    Ok(())
}

/// Resolve credentials from flags/env (prompting for a missing password)
/// and log in.
pub fn authenticate(
    storage: &Storage,
    login: Option<&str>,
    password: Option<String>,
) -> MoneyTrackResult<Session> {
    let login = login.ok_or_else(|| {
        MoneyTrackError::Validation(
            "A login is required: pass --login or set MONEYTRACK_LOGIN".into(),
        )
    })?;
    let password = password_or_prompt(password)?;

    AccountService::new(storage).login(login, &password)
}
