//! Profile CLI commands

use clap::Subcommand;

use crate::display::format_profile;
use crate::error::{FitcoachError, FitcoachResult};
use crate::models::{Gender, Goal, Location, ProfileUpdate};
use crate::services::TrackerService;

/// Profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the profile and the daily target it produces
    Show,
    /// Change one or more profile fields
    Set {
        /// Gender (male, female)
        #[arg(long)]
        gender: Option<String>,
        /// Age in years
        #[arg(long)]
        age: Option<u32>,
        /// Height in cm
        #[arg(long)]
        height: Option<f64>,
        /// Weight in kg
        #[arg(long)]
        weight: Option<f64>,
        /// Goal (lose, maintain, gain)
        #[arg(long)]
        goal: Option<String>,
        /// Training location (home, gym)
        #[arg(long)]
        location: Option<String>,
    },
}

/// Handle a profile command
pub fn handle_profile_command(tracker: &mut TrackerService<'_>, cmd: ProfileCommands) -> FitcoachResult<()> {
    match cmd {
        ProfileCommands::Show => {
            print!("{}", format_profile(tracker.profile(), tracker.target()));
        }

        ProfileCommands::Set {
            gender,
            age,
            height,
            weight,
            goal,
            location,
        } => {
            let update = ProfileUpdate {
                gender: gender.as_deref().map(parse_gender).transpose()?,
                age,
                height,
                weight,
                goal: goal.as_deref().map(parse_goal).transpose()?,
                location: location.as_deref().map(parse_location).transpose()?,
            };

            if update.is_empty() {
                println!("No changes specified. Use --gender, --age, --height, --weight, --goal or --location.");
                return Ok(());
            }

            let before = tracker.target();
            let profile = tracker.update_profile(&update)?;
            let after = tracker.target();

            println!("Profile updated.");
            print!("{}", format_profile(&profile, after));
            if before != after {
                println!("Daily target: {} -> {} kcal", before, after);
            }
        }
    }

    Ok(())
}

fn parse_gender(s: &str) -> FitcoachResult<Gender> {
    Gender::parse(s).ok_or_else(|| {
        FitcoachError::Validation(format!("Invalid gender: '{}'. Valid values: male, female", s))
    })
}

fn parse_goal(s: &str) -> FitcoachResult<Goal> {
    Goal::parse(s).ok_or_else(|| {
        FitcoachError::Validation(format!("Invalid goal: '{}'. Valid values: lose, maintain, gain", s))
    })
}

fn parse_location(s: &str) -> FitcoachResult<Location> {
    Location::parse(s).ok_or_else(|| {
        FitcoachError::Validation(format!("Invalid location: '{}'. Valid values: home, gym", s))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_goal("Bulk").unwrap(), Goal::Gain);
        assert_eq!(parse_location(" gym ").unwrap(), Location::Gym);
        assert!(parse_gender("other").unwrap_err().is_validation());
    }
}
