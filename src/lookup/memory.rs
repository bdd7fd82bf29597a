//! In-memory lookup (no network)
//!
//! Serves a fixed list of foods by case-insensitive substring match, standing
//! in for the HTTP client where the network is not wanted.

use crate::error::{FitcoachError, FitcoachResult};
use crate::models::FoodItem;

use super::FoodLookup;

/// Lookup backed by a fixed list
#[derive(Debug, Clone, Default)]
pub struct InMemoryLookup {
    foods: Vec<FoodItem>,
    unavailable: bool,
}

impl InMemoryLookup {
    pub fn new(foods: Vec<FoodItem>) -> Self {
        Self {
            foods,
            unavailable: false,
        }
    }

    /// A lookup whose every search fails, like an unreachable server
    pub fn unavailable() -> Self {
        Self {
            foods: Vec::new(),
            unavailable: true,
        }
    }
}

impl FoodLookup for InMemoryLookup {
    fn search(&self, query: &str) -> FitcoachResult<Vec<FoodItem>> {
        if self.unavailable {
            return Err(FitcoachError::Lookup("lookup service unavailable".into()));
        }

        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .foods
            .iter()
            .filter(|f| f.kcal100 > 0.0 && f.name.to_lowercase().contains(&needle))
            .take(5)
            .cloned()
            .collect())
    }
}
