//! Intake statistics display

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::services::DayTotal;

use super::format_bar;

#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "kcal")]
    kcal: String,
    #[tabled(rename = "Entries")]
    entries: usize,
    #[tabled(rename = "vs target")]
    bar: String,
}

/// Format daily totals against the target, with the period average
pub fn format_stats(totals: &[DayTotal], target: i64) -> String {
    if totals.is_empty() {
        return "No days to show.\n".to_string();
    }

    let rows = totals.iter().map(|t| StatsRow {
        date: t.date.format("%a %d.%m").to_string(),
        kcal: format!("{:.0}", t.kcal),
        entries: t.entry_count,
        bar: format_bar(t.kcal, target as f64, 20),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let average = totals.iter().map(|t| t.kcal).sum::<f64>() / totals.len() as f64;
    format!(
        "{}\nAverage: {:.0} kcal/day (target {} kcal)\n",
        table, average, target
    )
}
