//! Core data models for FitCoach
//!
//! This module contains the data structures of the tracking domain: the user
//! profile, reference foods, logged entries and their per-day history.

pub mod food;
pub mod ids;
pub mod log;
pub mod nutrients;
pub mod profile;

pub use food::{FoodItem, FoodValidationError};
pub use ids::EntryId;
pub use log::{DailyLog, History, LogEntry, UserState};
pub use nutrients::Nutrients;
pub use profile::{Gender, Goal, Location, Profile, ProfileUpdate, ProfileValidationError};
