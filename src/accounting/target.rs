//! Daily energy target
//!
//! Basal metabolic rate by the Mifflin–St Jeor equation, then a goal factor.
//! No activity multiplier is applied: the target is a sedentary baseline.

use crate::models::{Gender, Profile};

/// Basal metabolic rate in kcal/day, unrounded
///
/// - male: `10·weight + 6.25·height − 5·age + 5`
/// - female: `10·weight + 6.25·height − 5·age − 161`
///
/// Total over any input; biologically impossible profiles still produce a number.
pub fn bmr(profile: &Profile) -> f64 {
    let base = 10.0 * profile.weight + 6.25 * profile.height - 5.0 * f64::from(profile.age);
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Daily calorie target: BMR scaled by the goal factor, rounded to whole kcal
pub fn estimate_target(profile: &Profile) -> i64 {
    (bmr(profile) * profile.goal.factor()).round() as i64
}
