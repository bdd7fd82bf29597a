//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the tracker service.

pub mod audit;
pub mod export;
pub mod food;
pub mod log;
pub mod profile;
pub mod stats;
pub mod workout;

pub use audit::{handle_audit_command, AuditArgs};
pub use export::{handle_export_command, ExportArgs};
pub use food::{handle_fit_command, handle_food_command, FitArgs, FoodCommands};
pub use log::{handle_log_command, LogCommands};
pub use profile::{handle_profile_command, ProfileCommands};
pub use stats::{handle_stats_command, StatsArgs};
pub use workout::{handle_workout_command, WorkoutArgs};
