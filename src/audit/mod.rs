//! Audit logging system for FitCoach
//!
//! Records profile updates, logged and removed entries, and day resets in an
//! append-only JSONL file next to the settings.
//!
//! - `AuditEntry`: one operation with timestamp, user, entity and optional
//!   before/after values.
//! - `AuditLogger`: appends entries and reads them back.
//! - `generate_diff`: one-line summary of changed fields.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
