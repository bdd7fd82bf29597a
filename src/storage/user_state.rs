//! Per-user state repository
//!
//! One JSON record per user identity holding `{profile, history}`.

use std::path::PathBuf;

use tracing::debug;

use crate::config::paths::FitcoachPaths;
use crate::error::FitcoachError;
use crate::models::UserState;

use super::file_io::{read_json_optional, write_json_atomic};

/// Repository for user state persistence
pub struct UserStateRepository {
    paths: FitcoachPaths,
}

impl UserStateRepository {
    pub fn new(paths: FitcoachPaths) -> Self {
        Self { paths }
    }

    /// Path of the state file for `user_id`
    pub fn path_for(&self, user_id: &str) -> PathBuf {
        self.paths.user_state_file(user_id)
    }

    /// Load a user's state
    ///
    /// `Ok(None)` when nothing was ever saved for this user; an error when the
    /// stored record is unreadable.
    pub fn load(&self, user_id: &str) -> Result<Option<UserState>, FitcoachError> {
        let path = self.path_for(user_id);
        let state = read_json_optional(&path)?;
        debug!(user = user_id, path = %path.display(), found = state.is_some(), "loaded user state");
        Ok(state)
    }

    /// Persist a user's state
    pub fn save(&self, user_id: &str, state: &UserState) -> Result<(), FitcoachError> {
        let path = self.path_for(user_id);
        write_json_atomic(&path, state)?;
        debug!(user = user_id, days = state.history.len(), "saved user state");
        Ok(())
    }

    /// Whether a record exists for `user_id`
    pub fn exists(&self, user_id: &str) -> bool {
        self.path_for(user_id).exists()
    }
}
