//! Calorie accounting engine
//!
//! Pure functions over immutable inputs: the daily target from a profile,
//! portion scaling, intake totals, the remaining budget, reverse portion
//! sizing and food name resolution. Nothing here holds state; the tracker
//! service owns the profile and history and passes them in.

pub mod portion;
pub mod resolve;
pub mod target;
pub mod totals;

pub use portion::{portion_for_budget, scale};
pub use resolve::find_food;
pub use target::{bmr, estimate_target};
pub use totals::{aggregate, remaining};
