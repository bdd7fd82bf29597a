//! CSV Export functionality
//!
//! Exports the food log, one row per entry, oldest day first.

use std::io::Write;

use serde::Serialize;

use crate::error::{FitcoachError, FitcoachResult};
use crate::services::TrackerService;

#[derive(Serialize)]
struct LogRow<'a> {
    date: String,
    id: String,
    name: &'a str,
    grams: f64,
    kcal: f64,
    protein: f64,
    fat: f64,
    carbs: f64,
    logged_at: String,
}

/// Export every log entry to CSV, returning the number of rows written
pub fn export_log_csv<W: Write>(tracker: &TrackerService<'_>, writer: W) -> FitcoachResult<usize> {
    let mut csv = csv::Writer::from_writer(writer);
    let mut rows = 0;

    for (date, day) in tracker.history().iter() {
        for entry in day.entries() {
            csv.serialize(LogRow {
                date: date.to_string(),
                id: entry.id.as_uuid().to_string(),
                name: &entry.name,
                grams: entry.grams,
                kcal: entry.nutrients.kcal,
                protein: entry.nutrients.protein,
                fat: entry.nutrients.fat,
                carbs: entry.nutrients.carbs,
                logged_at: entry.created_at.to_rfc3339(),
            })
            .map_err(|e| FitcoachError::Export(e.to_string()))?;
            rows += 1;
        }
    }

    // Header row even when there is nothing to export
    if rows == 0 {
        csv.write_record([
            "date", "id", "name", "grams", "kcal", "protein", "fat", "carbs", "logged_at",
        ])
        .map_err(|e| FitcoachError::Export(e.to_string()))?;
    }

    csv.flush().map_err(|e| FitcoachError::Export(e.to_string()))?;
    Ok(rows)
}
