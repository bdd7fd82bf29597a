//! Custom error types for FitCoach
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every variant is recoverable: the CLI
//! prints the message and the persisted state is left untouched.

use thiserror::Error;

/// The main error type for FitCoach operations
#[derive(Error, Debug)]
pub enum FitcoachError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input and models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A food name matched nothing in the table or the external lookup
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    /// Grams missing, zero or negative
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// External food lookup failed or returned nothing usable
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FitcoachError {
    /// Create a "not found" error for log entries
    pub fn entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Log entry",
            identifier: identifier.into(),
        }
    }

    /// Create a "food not found" error
    pub fn food_not_found(query: impl Into<String>) -> Self {
        Self::FoodNotFound(query.into())
    }

    /// Check if this is a "not found" error (entries or foods)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::FoodNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidQuantity(_))
    }
}

impl From<std::io::Error> for FitcoachError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FitcoachError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for FitCoach operations
pub type FitcoachResult<T> = Result<T, FitcoachError>;
