//! Reference food table
//!
//! The table is an ordered JSON array of `{name, kcal100, p, f, c}` records.
//! Order matters: ambiguous name lookups resolve to the earliest match.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::FitcoachError;
use crate::models::FoodItem;

use super::file_io::{read_json_optional, write_json_atomic};

/// Built-in foods used when no table file is available
pub fn builtin_foods() -> Vec<FoodItem> {
    [
        ("Куриная грудка, варёная", 165.0, 31.0, 3.6, 0.0),
        ("Гречка, сухая", 329.0, 12.6, 3.3, 62.0),
        ("Рис, сухой", 344.0, 6.7, 0.7, 78.0),
        ("Творог 5%", 145.0, 17.0, 5.0, 2.8),
        ("Яйцо куриное", 143.0, 12.6, 10.6, 0.7),
        ("Яблоко", 52.0, 0.3, 0.2, 14.0),
        ("Банан", 96.0, 1.2, 0.3, 21.8),
        ("Овсянка, сухая", 380.0, 13.0, 7.0, 67.0),
        ("Лосось, запечённый", 208.0, 22.0, 13.0, 0.0),
        ("Арахисовая паста", 588.0, 25.0, 50.0, 20.0),
    ]
    .into_iter()
    .map(|(name, kcal100, p, f, c)| FoodItem {
        name: name.to_string(),
        kcal100,
        protein: p,
        fat: f,
        carbs: c,
    })
    .collect()
}

/// Where the active table came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoodTableSource {
    File(PathBuf),
    Builtin,
}

/// Repository for the reference food table
pub struct FoodTableRepository {
    path: PathBuf,
}

impl FoodTableRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the table file
    ///
    /// `Ok(None)` when the file is missing. Records that fail to decode or
    /// validate are skipped with a warning instead of rejecting the whole
    /// table; only a file that is not a JSON array is an error.
    pub fn load(&self) -> Result<Option<Vec<FoodItem>>, FitcoachError> {
        let Some(records) = read_json_optional::<Vec<serde_json::Value>, _>(&self.path)? else {
            return Ok(None);
        };

        let total = records.len();
        let foods: Vec<FoodItem> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let food = match serde_json::from_value::<FoodItem>(record) {
                    Ok(food) => food,
                    Err(e) => {
                        warn!(index, error = %e, "skipping unreadable food record");
                        return None;
                    }
                };
                match food.validate() {
                    Ok(()) => Some(food),
                    Err(e) => {
                        warn!(food = %food.name, error = %e, "skipping invalid food record");
                        None
                    }
                }
            })
            .collect();

        debug!(path = %self.path.display(), total, kept = foods.len(), "loaded food table");
        Ok(Some(foods))
    }

    /// Load the table, falling back to the built-in list when unavailable
    pub fn load_or_builtin(&self) -> (Vec<FoodItem>, FoodTableSource) {
        match self.load() {
            Ok(Some(foods)) => (foods, FoodTableSource::File(self.path.clone())),
            Ok(None) => (builtin_foods(), FoodTableSource::Builtin),
            Err(e) => {
                warn!(error = %e, "food table unavailable, using built-in list");
                (builtin_foods(), FoodTableSource::Builtin)
            }
        }
    }

    /// Write `foods` as the table file
    pub fn save(&self, foods: &[FoodItem]) -> Result<(), FitcoachError> {
        write_json_atomic(&self.path, &foods)
    }
}
