//! User repositories
//!
//! [`UserRepository`] is the persistence seam for users and their wallets.
//! [`JsonUserRepository`] keeps one `data_<login>.json` file per user;
//! [`InMemoryUserRepository`] backs tests and throwaway sessions.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, warn};

use crate::error::{MoneyTrackError, MoneyTrackResult};
use crate::models::User;

use super::file_io::{read_json_optional, write_json_atomic};

const FILE_PREFIX: &str = "data_";
const FILE_SUFFIX: &str = ".json";

/// Persistence for users
pub trait UserRepository: Send + Sync {
    /// Look up a user by login
    fn find_by_login(&self, login: &str) -> MoneyTrackResult<Option<User>>;

    /// Store a new user; fails with `Duplicate` if the login is taken
    fn save(&self, user: &User) -> MoneyTrackResult<()>;

    /// Overwrite an existing user; fails with `NotFound` if absent
    fn update(&self, user: &User) -> MoneyTrackResult<()>;

    /// Remove a user, returning whether one existed
    fn delete(&self, login: &str) -> MoneyTrackResult<bool>;

    /// Every stored user, ordered by login
    fn find_all(&self) -> MoneyTrackResult<Vec<User>>;

    fn exists(&self, login: &str) -> MoneyTrackResult<bool> {
        Ok(self.find_by_login(login)?.is_some())
    }
}

fn validate(login: &str) -> MoneyTrackResult<()> {
    User::validate_login(login).map_err(|e| MoneyTrackError::Validation(e.to_string()))
}

fn duplicate(login: &str) -> MoneyTrackError {
    MoneyTrackError::Duplicate {
        entity_type: "User",
        identifier: login.to_string(),
    }
}

fn check_balance(user: &User) {
    let wallet = user.wallet();
    let recomputed = wallet.recomputed_balance();
    if wallet.balance() != recomputed {
        warn!(
            login = user.login(),
            stored = %wallet.balance(),
            recomputed = %recomputed,
            "stored balance does not match transaction log"
        );
    }
}

/// One JSON file per user inside a data directory
pub struct JsonUserRepository {
    data_dir: PathBuf,
}

impl JsonUserRepository {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn user_file(&self, login: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}{}{}", FILE_PREFIX, login, FILE_SUFFIX))
    }

    fn load(&self, path: &Path) -> MoneyTrackResult<Option<User>> {
        let user: Option<User> = read_json_optional(path)?;
        if let Some(user) = &user {
            check_balance(user);
        }
        Ok(user)
    }
}

impl UserRepository for JsonUserRepository {
    fn find_by_login(&self, login: &str) -> MoneyTrackResult<Option<User>> {
        // A login that fails validation can't have a file
        if User::validate_login(login).is_err() {
            return Ok(None);
        }
        self.load(&self.user_file(login))
    }

    fn save(&self, user: &User) -> MoneyTrackResult<()> {
        validate(user.login())?;
        let path = self.user_file(user.login());
        if path.exists() {
            return Err(duplicate(user.login()));
        }
        debug!(login = user.login(), path = %path.display(), "creating user file");
        write_json_atomic(&path, user)
    }

    fn update(&self, user: &User) -> MoneyTrackResult<()> {
        validate(user.login())?;
        let path = self.user_file(user.login());
        if !path.exists() {
            return Err(MoneyTrackError::user_not_found(user.login()));
        }
        write_json_atomic(&path, user)
    }

    fn delete(&self, login: &str) -> MoneyTrackResult<bool> {
        validate(login)?;
        let path = self.user_file(login);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).map_err(|e| {
            MoneyTrackError::Storage(format!("Failed to remove {}: {}", path.display(), e))
        })?;
        Ok(true)
    }

    fn find_all(&self) -> MoneyTrackResult<Vec<User>> {
        if !self.data_dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.data_dir).map_err(|e| {
            MoneyTrackError::Storage(format!(
                "Failed to read {}: {}",
                self.data_dir.display(),
                e
            ))
        })?;

        let mut users = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let is_user_file = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(FILE_PREFIX) && name.ends_with(FILE_SUFFIX));
            if !is_user_file {
                continue;
            }
            if let Some(user) = self.load(&path)? {
                users.push(user);
            }
        }

        users.sort_by(|a, b| a.login().cmp(b.login()));
        Ok(users)
    }
}

/// Users held in memory only
#[derive(Default)]
pub struct InMemoryUserRepository {
    data: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> MoneyTrackResult<std::sync::RwLockReadGuard<'_, HashMap<String, User>>> {
        self.data
            .read()
            .map_err(|e| MoneyTrackError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> MoneyTrackResult<std::sync::RwLockWriteGuard<'_, HashMap<String, User>>> {
        self.data
            .write()
            .map_err(|e| MoneyTrackError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_login(&self, login: &str) -> MoneyTrackResult<Option<User>> {
        Ok(self.read()?.get(login).cloned())
    }

    fn save(&self, user: &User) -> MoneyTrackResult<()> {
        validate(user.login())?;
        let mut data = self.write()?;
        if data.contains_key(user.login()) {
            return Err(duplicate(user.login()));
        }
        data.insert(user.login().to_string(), user.clone());
        Ok(())
    }

    fn update(&self, user: &User) -> MoneyTrackResult<()> {
        let mut data = self.write()?;
        match data.get_mut(user.login()) {
            Some(existing) => {
                *existing = user.clone();
                Ok(())
            }
            None => Err(MoneyTrackError::user_not_found(user.login())),
        }
    }

    fn delete(&self, login: &str) -> MoneyTrackResult<bool> {
        Ok(self.write()?.remove(login).is_some())
    }

    fn find_all(&self) -> MoneyTrackResult<Vec<User>> {
        let mut users: Vec<User> = self.read()?.values().cloned().collect();
        users.sort_by(|a, b| a.login().cmp(b.login()));
        Ok(users)
    }
}
