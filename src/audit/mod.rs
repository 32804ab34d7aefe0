//! Audit logging for MoneyTrack
//!
//! Every mutation made through the account layer appends one entry to an
//! append-only, line-delimited JSON log (`audit.log`).
//!
//! - `AuditEntry`: timestamp, operation, entity information and optional
//!   before/after snapshots.
//! - `AuditLogger`: appends entries and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
