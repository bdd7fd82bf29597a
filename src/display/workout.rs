//! Workout plan display

use crate::models::{Goal, Location};
use crate::workouts::WorkoutBlock;

/// Format a plan as titled blocks of exercises with video links
pub fn format_workout_plan(location: Location, goal: Goal, blocks: &[WorkoutBlock]) -> String {
    let mut output = format!("Workout plan: {} / {}\n", location, goal);

    for block in blocks {
        output.push_str(&format!("\n{}\n", block.title));
        for exercise in block.exercises {
            output.push_str(&format!(
                "  • {:<28} {:<10} {}\n",
                exercise.name, exercise.reps, exercise.video
            ));
        }
    }

    output
}
