//! External food lookup
//!
//! When a food is missing from the reference table the tracker asks a
//! `FoodLookup` for candidates and uses the first one. Any failure is treated
//! the same as "not found".

pub mod memory;
pub mod open_food_facts;

pub use memory::InMemoryLookup;
pub use open_food_facts::{OpenFoodFactsClient, OpenFoodFactsConfig};

use crate::error::FitcoachResult;
use crate::models::FoodItem;

/// Source of food candidates for a free-text query
pub trait FoodLookup {
    /// Search for foods matching `query`, best candidates first
    ///
    /// Returned items always carry a positive energy value.
    fn search(&self, query: &str) -> FitcoachResult<Vec<FoodItem>>;
}
