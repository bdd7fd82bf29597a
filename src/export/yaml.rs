//! YAML Export functionality
//!
//! Writes the same document as the JSON export, for reading by humans.

use std::io::Write;

use crate::error::{FitcoachError, FitcoachResult};
use crate::export::json::UserExport;
use crate::services::TrackerService;

/// Export the user's data as YAML
pub fn export_user_yaml<W: Write>(tracker: &TrackerService<'_>, writer: &mut W) -> FitcoachResult<()> {
    let export = UserExport::from_tracker(tracker);

    writeln!(writer, "# FitCoach export for {}", export.user_id)
        .map_err(|e| FitcoachError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| FitcoachError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FitcoachError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FitcoachError::Export(e.to_string()))?;

    Ok(())
}
