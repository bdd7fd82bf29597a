//! Configuration module for FitCoach
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence
//! - Logging setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use paths::FitcoachPaths;
pub use settings::{LookupSettings, Settings};
