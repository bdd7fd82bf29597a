//! Export module for FitCoach
//!
//! Exports one user's data in several formats:
//! - CSV: the food log, one row per entry (spreadsheet-compatible)
//! - JSON: profile and full history, machine-readable
//! - YAML: the same document as JSON, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_log_csv;
pub use json::{export_user_json, ExportMetadata, UserExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_user_yaml;
