//! Canned workout plans
//!
//! A static table keyed by training location and goal. Each plan is a list of
//! titled blocks; each block lists exercises with a rep scheme and a video.

mod plans;

use crate::models::{Goal, Location};

/// One exercise in a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub name: &'static str,
    /// Sets × reps or duration, as free text
    pub reps: &'static str,
    pub video: &'static str,
}

/// A titled group of exercises done in one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutBlock {
    pub title: &'static str,
    pub exercises: &'static [Exercise],
}

/// The plan for a location and goal; never empty
pub fn plan_for(location: Location, goal: Goal) -> &'static [WorkoutBlock] {
    match (location, goal) {
        (Location::Home, Goal::Lose) => plans::HOME_LOSE,
        (Location::Home, Goal::Maintain) => plans::HOME_MAINTAIN,
        (Location::Home, Goal::Gain) => plans::HOME_GAIN,
        (Location::Gym, Goal::Lose) => plans::GYM_LOSE,
        (Location::Gym, Goal::Maintain) => plans::GYM_MAINTAIN,
        (Location::Gym, Goal::Gain) => plans::GYM_GAIN,
    }
}
