//! Food table and portion CLI commands

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::display::{format_fit_portion, format_food_table, format_search_results};
use crate::error::FitcoachResult;
use crate::services::{FoodOrigin, TrackerService};
use crate::storage::FoodTableSource;

/// Food subcommands
#[derive(Subcommand)]
pub enum FoodCommands {
    /// List the reference table
    List,
    /// Show the food a name resolves to
    Find {
        /// Food name
        query: String,
    },
    /// Search the table and the online database
    Search {
        /// Search terms
        query: String,
    },
}

/// Arguments for sizing a portion to a budget
#[derive(Args)]
pub struct FitArgs {
    /// Food name
    pub food: String,
    /// Calorie budget (defaults to what is left today)
    #[arg(short, long)]
    pub budget: Option<f64>,
}

/// Handle a food command
pub fn handle_food_command(tracker: &TrackerService<'_>, cmd: FoodCommands) -> FitcoachResult<()> {
    match cmd {
        FoodCommands::List => {
            match tracker.food_source() {
                FoodTableSource::File(path) => println!("Food table: {}", path.display()),
                FoodTableSource::Builtin => println!("Food table: built-in"),
            }
            print!("{}", format_food_table(tracker.foods()));
        }

        FoodCommands::Find { query } => {
            let (food, origin) = tracker.resolve_food(&query)?;
            println!("{}", food);
            println!(
                "  per 100 g: P {:.1} · F {:.1} · C {:.1}",
                food.protein, food.fat, food.carbs
            );
            if origin == FoodOrigin::Lookup {
                println!("  (from the online database)");
            }
        }

        FoodCommands::Search { query } => {
            let results = tracker.search_foods(&query);
            print!("{}", format_search_results(&query, &results));
        }
    }

    Ok(())
}

/// Handle the fit command for `date`
pub fn handle_fit_command(tracker: &TrackerService<'_>, date: NaiveDate, args: FitArgs) -> FitcoachResult<()> {
    let fit = tracker.compute_fit_portion(&args.food, args.budget, date)?;
    print!("{}", format_fit_portion(&fit));
    Ok(())
}
