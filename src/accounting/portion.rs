//! Portion arithmetic
//!
//! Forward: nutrients for a number of grams. Reverse: the largest whole-gram
//! portion that fits in a calorie budget.

use crate::models::{FoodItem, Nutrients};

/// Nutrients in `grams` of `food`: `value100 * grams / 100` for every field
///
/// Unrounded; rounding is a presentation concern.
pub fn scale(food: &FoodItem, grams: f64) -> Nutrients {
    food.per_100g().scaled(grams / 100.0)
}

/// Largest whole number of grams of `food` whose energy stays within `budget_kcal`
///
/// `floor(budget / kcal100 * 100)`. Zero means there is no safe portion:
/// the budget is exhausted, or the food has no energy value to divide by.
pub fn portion_for_budget(food: &FoodItem, budget_kcal: f64) -> u32 {
    if !(food.kcal100 > 0.0) || !(budget_kcal > 0.0) {
        return 0;
    }
    let grams = (budget_kcal / food.kcal100 * 100.0).floor();
    if grams.is_finite() {
        grams as u32
    } else {
        0
    }
}
