//! Intake statistics CLI command

use chrono::NaiveDate;
use clap::Args;

use crate::display::format_stats;
use crate::error::FitcoachResult;
use crate::services::TrackerService;

/// Arguments for the stats command
#[derive(Args)]
pub struct StatsArgs {
    /// Number of days to show (defaults to the configured period)
    #[arg(short, long)]
    pub days: Option<u32>,
}

/// Show daily totals for the period ending at `end`
pub fn handle_stats_command(
    tracker: &TrackerService<'_>,
    end: NaiveDate,
    default_days: u32,
    args: StatsArgs,
) -> FitcoachResult<()> {
    let days = args.days.unwrap_or(default_days).max(1);
    let totals = tracker.daily_totals(end, days)?;

    println!("Last {} days", days);
    print!("{}", format_stats(&totals, tracker.target()));
    Ok(())
}
