//! Storage layer for MoneyTrack
//!
//! JSON file storage with atomic writes, plus an in-memory backend. The
//! [`Storage`] coordinator bundles the user repository with the paths and
//! the audit logger.

pub mod file_io;
pub mod users;

pub use file_io::{read_json_optional, write_json_atomic};
pub use users::{InMemoryUserRepository, JsonUserRepository, UserRepository};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::MoneyTrackPaths;
use crate::error::MoneyTrackResult;

/// Main storage coordinator
pub struct Storage {
    paths: MoneyTrackPaths,
    users: Box<dyn UserRepository>,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// JSON-backed storage rooted at `paths`
    pub fn new(paths: MoneyTrackPaths) -> MoneyTrackResult<Self> {
        paths.ensure_directories()?;
        let users = Box::new(JsonUserRepository::new(paths.data_dir()));
        Ok(Self::with_repository(paths, users))
    }

    /// Users kept in memory; the audit log still goes to `paths`
    pub fn in_memory(paths: MoneyTrackPaths) -> Self {
        Self::with_repository(paths, Box::new(InMemoryUserRepository::new()))
    }

    /// Storage over any repository implementation
    pub fn with_repository(paths: MoneyTrackPaths, users: Box<dyn UserRepository>) -> Self {
        Self {
            audit: AuditLogger::new(paths.audit_log()),
            paths,
            users,
            audit_enabled: true,
        }
    }

    /// Turn audit logging on or off
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit_enabled = enabled;
        self
    }

    pub fn paths(&self) -> &MoneyTrackPaths {
        &self.paths
    }

    pub fn users(&self) -> &dyn UserRepository {
        self.users.as_ref()
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Append an entry to the audit log, if enabled
    pub fn log_audit(&self, entry: &AuditEntry) -> MoneyTrackResult<()> {
        if self.audit_enabled {
            self.audit.log(entry)?;
        }
        Ok(())
    }
}
