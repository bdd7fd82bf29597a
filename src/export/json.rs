//! JSON Export functionality
//!
//! Exports a user's profile and history to JSON with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FitcoachError, FitcoachResult};
use crate::models::{History, Profile};
use crate::services::TrackerService;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export of one user's data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub user_id: String,

    pub profile: Profile,

    /// Daily calorie target at export time
    pub target_kcal: i64,

    pub history: History,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Number of days with a log (including emptied days)
    pub day_count: usize,

    pub entry_count: usize,

    pub earliest_day: Option<String>,

    pub latest_day: Option<String>,
}

impl UserExport {
    pub fn from_tracker(tracker: &TrackerService<'_>) -> Self {
        let history = tracker.history().clone();

        let metadata = ExportMetadata {
            day_count: history.len(),
            entry_count: history.iter().map(|(_, day)| day.len()).sum(),
            earliest_day: history.iter().next().map(|(date, _)| date.to_string()),
            latest_day: history.iter().last().map(|(date, _)| date.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            user_id: tracker.user_id().to_string(),
            profile: tracker.profile().clone(),
            target_kcal: tracker.target(),
            history,
            metadata,
        }
    }
}

/// Export the user's data as JSON
pub fn export_user_json<W: Write>(
    tracker: &TrackerService<'_>,
    writer: &mut W,
    pretty: bool,
) -> FitcoachResult<()> {
    let export = UserExport::from_tracker(tracker);

    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    result.map_err(|e| FitcoachError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| FitcoachError::Export(e.to_string()))?;
    Ok(())
}
