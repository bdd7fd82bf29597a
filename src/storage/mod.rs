//! Storage layer for FitCoach
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation: one state file per user, the reference food table, and the
//! audit log.

pub mod file_io;
pub mod foods;
pub mod init;
pub mod user_state;

pub use file_io::{read_json_optional, write_json_atomic};
pub use foods::{builtin_foods, FoodTableRepository, FoodTableSource};
pub use init::initialize_storage;
pub use user_state::UserStateRepository;

use std::path::PathBuf;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::FitcoachPaths;
use crate::error::FitcoachError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub users: UserStateRepository,
    pub foods: FoodTableRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance reading foods from `foods_path`
    pub fn new(paths: FitcoachPaths, foods_path: PathBuf) -> Result<Self, FitcoachError> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            users: UserStateRepository::new(paths),
            foods: FoodTableRepository::new(foods_path),
        })
    }

    /// Append an entry to the audit log
    pub fn log_audit(&self, entry: &AuditEntry) -> Result<(), FitcoachError> {
        self.audit.log(entry)
    }

    /// Access the audit log for reading
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }
}
