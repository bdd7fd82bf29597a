//! FitCoach - terminal calorie tracker with goal-driven daily targets
//!
//! This library provides the core functionality for the FitCoach tracker:
//! a daily calorie target derived from the user's profile, a food log per
//! day, portion sizing against what is left of the target, and canned
//! workout plans.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, path management and logging setup
//! - `error`: Custom error types
//! - `models`: Core data models (profile, foods, log entries, history)
//! - `accounting`: Pure calorie arithmetic (targets, scaling, portions)
//! - `storage`: JSON file storage layer
//! - `lookup`: External food database lookup
//! - `services`: User-facing actions on top of storage
//! - `audit`: Audit logging system
//! - `workouts`: Static workout plans
//! - `export`: CSV, JSON and YAML export
//! - `display` and `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fitcoach::config::{paths::FitcoachPaths, settings::Settings};
//! use fitcoach::services::TrackerService;
//! use fitcoach::storage::Storage;
//!
//! let paths = FitcoachPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths.clone(), settings.foods_path(&paths))?;
//! let tracker = TrackerService::open(&storage, "guest", None);
//! ```

pub mod accounting;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod lookup;
pub mod models;
pub mod services;
pub mod storage;
pub mod workouts;

pub use error::{FitcoachError, FitcoachResult};
