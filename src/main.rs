use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use fitcoach::cli::{
    handle_audit_command, handle_export_command, handle_fit_command, handle_food_command,
    handle_log_command, handle_profile_command, handle_stats_command, handle_workout_command,
    AuditArgs, ExportArgs, FitArgs, FoodCommands, LogCommands, ProfileCommands, StatsArgs,
    WorkoutArgs,
};
use fitcoach::config::logging::init_logging;
use fitcoach::config::{paths::FitcoachPaths, settings::Settings};
use fitcoach::display::format_dashboard;
use fitcoach::lookup::{FoodLookup, OpenFoodFactsClient, OpenFoodFactsConfig};
use fitcoach::services::TrackerService;
use fitcoach::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "fitcoach",
    author = "Kaylee Beyene",
    version,
    about = "Terminal calorie tracker with goal-driven daily targets",
    long_about = "FitCoach estimates a daily calorie target from your profile, \
                  keeps a food log per day, tells you how much of a food still \
                  fits, and suggests a workout plan for your goal."
)]
struct Cli {
    /// User whose data to use
    #[arg(short, long, global = true, env = "FITCOACH_USER")]
    user: Option<String>,

    /// Day to operate on (YYYY-MM-DD, defaults to today)
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// Don't query the online food database
    #[arg(long, global = true)]
    offline: bool,

    /// Verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile commands
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Food log commands
    #[command(subcommand)]
    Log(LogCommands),

    /// How many grams of a food fit the remaining budget
    Fit(FitArgs),

    /// Food table commands
    #[command(subcommand)]
    Food(FoodCommands),

    /// Daily intake over the last days
    Stats(StatsArgs),

    /// Workout plan for the profile's goal and location
    Workout(WorkoutArgs),

    /// Export profile and history
    Export(ExportArgs),

    /// Show recent changes from the audit log
    Audit(AuditArgs),

    /// Initialize the data directory and food table
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = FitcoachPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let foods_path = settings.foods_path(&paths);

    let user_id = cli.user.clone().unwrap_or_else(|| settings.user_id.clone());
    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    debug!(user = %user_id, %date, "starting");

    let storage = Storage::new(paths.clone(), foods_path.clone())?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing FitCoach at: {}", paths.base_dir().display());
            initialize_storage(&paths, &foods_path)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Food table: {}", foods_path.display());
            println!("Run 'fitcoach profile set --help' to describe yourself.");
            return Ok(());
        }
        Some(Commands::Config) => {
            println!("FitCoach Configuration");
            println!("======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Users directory: {}", paths.users_dir().display());
            println!("Food table:      {}", foods_path.display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  User:          {}", user_id);
            println!("  Online lookup: {}", if settings.lookup.enabled { "enabled" } else { "disabled" });
            println!("  Lookup URL:    {}", settings.lookup.base_url);
            println!("  Stats days:    {}", settings.stats_days);
            return Ok(());
        }
        Some(Commands::Audit(args)) => {
            handle_audit_command(&storage, &user_id, args)?;
            return Ok(());
        }
        _ => {}
    }

    let lookup = if settings.lookup.enabled && !cli.offline {
        build_lookup(&settings)
    } else {
        None
    };
    let mut tracker = TrackerService::open(&storage, user_id.as_str(), lookup);

    match cli.command {
        Some(Commands::Profile(cmd)) => handle_profile_command(&mut tracker, cmd)?,
        Some(Commands::Log(cmd)) => handle_log_command(&mut tracker, date, cmd)?,
        Some(Commands::Fit(args)) => handle_fit_command(&tracker, date, args)?,
        Some(Commands::Food(cmd)) => handle_food_command(&tracker, cmd)?,
        Some(Commands::Stats(args)) => handle_stats_command(&tracker, date, settings.stats_days, args)?,
        Some(Commands::Workout(args)) => handle_workout_command(&tracker, args)?,
        Some(Commands::Export(args)) => handle_export_command(&tracker, args)?,
        Some(Commands::Init | Commands::Config | Commands::Audit(_)) => {}
        None => {
            print!(
                "{}",
                format_dashboard(tracker.user_id(), tracker.profile(), &tracker.summary(date))
            );
            println!();
            println!("Run 'fitcoach --help' for usage information.");
        }
    }

    Ok(())
}

fn build_lookup(settings: &Settings) -> Option<Box<dyn FoodLookup>> {
    match OpenFoodFactsClient::new(OpenFoodFactsConfig::from(&settings.lookup)) {
        Ok(client) => Some(Box::new(client)),
        Err(e) => {
            warn!(error = %e, "online food lookup unavailable");
            None
        }
    }
}
