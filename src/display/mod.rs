//! Display formatting for terminal output
//!
//! Every formatter returns a `String`; printing is left to the CLI layer.

pub mod dashboard;
pub mod food;
pub mod log;
pub mod stats;
pub mod workout;

pub use dashboard::{format_dashboard, format_profile};
pub use food::{format_fit_portion, format_food_table, format_search_results};
pub use log::{format_log, format_logged_entry};
pub use stats::format_stats;
pub use workout::format_workout_plan;

use crate::models::Nutrients;

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One-line macro breakdown, e.g. `P 46.5 · F 5.4 · C 0.0`
pub fn format_macros(n: &Nutrients) -> String {
    format!("P {:.1} · F {:.1} · C {:.1}", n.protein, n.fat, n.carbs)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
