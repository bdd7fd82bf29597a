//! Service layer for FitCoach
//!
//! The service layer provides the user-facing actions on top of the storage
//! layer and the accounting engine, handling validation, persistence, and
//! audit logging.

pub mod tracker;

pub use tracker::{DaySummary, DayTotal, FitPortion, FoodOrigin, TrackerService};
