//! Food log CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::{format_log, format_logged_entry};
use crate::error::FitcoachResult;
use crate::services::TrackerService;

/// Food log subcommands
#[derive(Subcommand)]
pub enum LogCommands {
    /// Log a portion of food
    Add {
        /// Food name (case-insensitive, partial names match)
        food: String,
        /// Portion weight in grams
        grams: f64,
    },
    /// List the day's entries
    List,
    /// Remove an entry by position (1-based) or ID
    #[command(alias = "rm")]
    Remove {
        /// Entry position or ID
        entry: String,
    },
    /// Clear every entry of the day
    Reset,
}

/// Handle a log command for `date`
pub fn handle_log_command(
    tracker: &mut TrackerService<'_>,
    date: NaiveDate,
    cmd: LogCommands,
) -> FitcoachResult<()> {
    match cmd {
        LogCommands::Add { food, grams } => {
            let (entry, origin) = tracker.log_food(&food, grams, date)?;
            println!("{}", format_logged_entry(&entry, origin));

            let summary = tracker.summary(date);
            println!("Remaining today: {} kcal", summary.remaining);
        }

        LogCommands::List => {
            println!("Food log for {}", date);
            print!("{}", format_log(tracker.history().entries_for(date)));
        }

        LogCommands::Remove { entry } => {
            let removed = tracker.remove_log_entry(date, &entry)?;
            println!("Removed {} ({} g, {:.0} kcal)", removed.name, removed.grams, removed.nutrients.kcal);
        }

        LogCommands::Reset => {
            let count = tracker.reset_day(date)?;
            println!("Cleared {} entries from {}", count, date);
        }
    }

    Ok(())
}
