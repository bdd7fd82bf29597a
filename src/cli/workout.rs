//! Workout plan CLI command

use clap::Args;

use crate::display::format_workout_plan;
use crate::error::{FitcoachError, FitcoachResult};
use crate::models::{Goal, Location};
use crate::services::TrackerService;
use crate::workouts::plan_for;

/// Arguments for the workout command
#[derive(Args)]
pub struct WorkoutArgs {
    /// Location to plan for instead of the profile's (home, gym)
    #[arg(short, long)]
    pub location: Option<String>,
    /// Goal to plan for instead of the profile's (lose, maintain, gain)
    #[arg(short, long)]
    pub goal: Option<String>,
}

/// Show the workout plan for the profile, or for the overrides given
pub fn handle_workout_command(tracker: &TrackerService<'_>, args: WorkoutArgs) -> FitcoachResult<()> {
    let location = match args.location {
        Some(s) => Location::parse(&s)
            .ok_or_else(|| FitcoachError::Validation(format!("Invalid location: '{}'", s)))?,
        None => tracker.profile().location,
    };
    let goal = match args.goal {
        Some(s) => Goal::parse(&s)
            .ok_or_else(|| FitcoachError::Validation(format!("Invalid goal: '{}'", s)))?,
        None => tracker.profile().goal,
    };

    print!("{}", format_workout_plan(location, goal, plan_for(location, goal)));
    Ok(())
}
