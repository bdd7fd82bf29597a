//! Storage initialization
//!
//! Handles first-run setup and default data creation

use std::path::Path;

use crate::config::paths::FitcoachPaths;
use crate::error::FitcoachError;

use super::foods::{builtin_foods, FoodTableRepository};

/// Initialize storage for a fresh installation
///
/// Creates the directory layout and seeds the food table file with the
/// built-in list so it can be edited by hand.
pub fn initialize_storage(paths: &FitcoachPaths, foods_path: &Path) -> Result<(), FitcoachError> {
    paths.ensure_directories()?;

    if !foods_path.exists() {
        FoodTableRepository::new(foods_path.to_path_buf()).save(&builtin_foods())?;
    }

    Ok(())
}
