//! Path management for FitCoach
//!
//! ## Path Resolution Order
//!
//! 1. `FITCOACH_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (e.g. `~/.config/fitcoach` on Linux, `%APPDATA%\fitcoach` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FitcoachError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FITCOACH_DATA_DIR";

/// Manages all paths used by FitCoach
#[derive(Debug, Clone)]
pub struct FitcoachPaths {
    /// Base directory for all FitCoach data
    base_dir: PathBuf,
}

impl FitcoachPaths {
    /// Create a new FitcoachPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, FitcoachError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FitcoachPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Directory holding one state file per user
    pub fn users_dir(&self) -> PathBuf {
        self.data_dir().join("users")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Default location of the reference food table
    pub fn foods_file(&self) -> PathBuf {
        self.data_dir().join("foods.json")
    }

    /// State file for a user, keyed the same way as `fitcoach_<id>`
    pub fn user_state_file(&self, user_id: &str) -> PathBuf {
        self.users_dir()
            .join(format!("fitcoach_{}.json", sanitize_user_id(user_id)))
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), FitcoachError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FitcoachError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.users_dir())
            .map_err(|e| FitcoachError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Keep user ids from escaping the users directory
fn sanitize_user_id(user_id: &str) -> String {
    user_id
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn resolve_default_path() -> Result<PathBuf, FitcoachError> {
    ProjectDirs::from("", "", "fitcoach")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FitcoachError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FitcoachPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.users_dir(), temp_dir.path().join("data").join("users"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);

        let paths = FitcoachPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FitcoachPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.users_dir().exists());
    }

    #[test]
    fn test_user_state_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FitcoachPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(
            paths.user_state_file("12345"),
            temp_dir.path().join("data").join("users").join("fitcoach_12345.json")
        );
        // Path separators never leak into the file name
        assert_eq!(
            paths.user_state_file("../evil"),
            paths.users_dir().join("fitcoach____evil.json")
        );
    }
}
