//! Audit log command

use crate::error::MoneyTrackResult;
use crate::services::Session;
use crate::storage::Storage;

/// Handle `audit [-n limit]`: recent entries touching the session user
pub fn handle_audit_command(storage: &Storage, session: &Session, limit: usize) -> MoneyTrackResult<()> {
    let login = session.login();
    let recent = storage.audit().read_recent(limit, |e| e.involves(login))?;

    if recent.is_empty() {
        println!("No audit entries found.");
    }
    for entry in recent {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
