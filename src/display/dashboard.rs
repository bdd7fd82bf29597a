//! Dashboard and profile display

use crate::models::Profile;
use crate::services::DaySummary;

use super::{format_bar, format_log, format_macros, separator};

/// Format the profile with its derived target
pub fn format_profile(profile: &Profile, target: i64) -> String {
    let mut output = String::new();

    output.push_str("Profile\n");
    output.push_str(&format!("  Gender:    {}\n", profile.gender));
    output.push_str(&format!("  Age:       {}\n", profile.age));
    output.push_str(&format!("  Height:    {} cm\n", profile.height));
    output.push_str(&format!("  Weight:    {} kg\n", profile.weight));
    output.push_str(&format!(
        "  Goal:      {} ({})\n",
        profile.goal,
        profile.goal.describe()
    ));
    output.push_str(&format!("  Location:  {}\n", profile.location));
    output.push_str(&format!("  Target:    {} kcal/day\n", target));

    output
}

/// Format the main screen: target, what was eaten, what is left, and the log
pub fn format_dashboard(user_id: &str, profile: &Profile, summary: &DaySummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("FitCoach · {} · {}\n", user_id, summary.date));
    output.push_str(&separator(40));
    output.push('\n');

    output.push_str(&format!(
        "Goal:       {} ({})\n",
        profile.goal,
        profile.goal.describe()
    ));
    output.push_str(&format!("Target:     {:>6} kcal\n", summary.target));
    output.push_str(&format!(
        "Eaten:      {:>6.0} kcal   {}\n",
        summary.eaten.kcal,
        format_macros(&summary.eaten)
    ));
    output.push_str(&format!("Remaining:  {:>6} kcal\n", summary.remaining));
    output.push_str(&format!(
        "            {}\n",
        format_bar(summary.eaten.kcal, summary.target as f64, 30)
    ));

    if summary.remaining == 0 && !summary.entries.is_empty() {
        output.push_str("Daily limit reached.\n");
    }

    output.push('\n');
    output.push_str(&format_log(&summary.entries));

    output
}
