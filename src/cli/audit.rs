//! Audit log CLI command

use clap::Args;

use crate::error::FitcoachResult;
use crate::storage::Storage;

/// Arguments for the audit command
#[derive(Args)]
pub struct AuditArgs {
    /// Number of entries to show
    #[arg(short = 'n', long, default_value = "20")]
    pub limit: usize,

    /// Show entries for every user, not just the current one
    #[arg(long)]
    pub all_users: bool,
}

/// Show the most recent audit entries, newest last
pub fn handle_audit_command(storage: &Storage, user_id: &str, args: AuditArgs) -> FitcoachResult<()> {
    let user = if args.all_users { None } else { Some(user_id) };
    let entries = storage.audit().read_recent(args.limit, user)?;

    if entries.is_empty() {
        println!("No audit entries.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
