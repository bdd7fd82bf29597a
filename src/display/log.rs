//! Food log display

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{LogEntry, Nutrients};
use crate::services::FoodOrigin;

use super::format_macros;

#[derive(Tabled)]
struct LogRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Food")]
    name: String,
    #[tabled(rename = "g")]
    grams: String,
    #[tabled(rename = "kcal")]
    kcal: String,
    #[tabled(rename = "P")]
    protein: String,
    #[tabled(rename = "F")]
    fat: String,
    #[tabled(rename = "C")]
    carbs: String,
}

/// Format a day's entries as a numbered table with a total line
pub fn format_log(entries: &[LogEntry]) -> String {
    if entries.is_empty() {
        return "Nothing logged yet.\n".to_string();
    }

    let rows = entries.iter().enumerate().map(|(i, e)| LogRow {
        position: i + 1,
        id: e.id.to_string(),
        name: e.name.clone(),
        grams: format!("{}", e.grams),
        kcal: format!("{:.0}", e.nutrients.kcal),
        protein: format!("{:.1}", e.nutrients.protein),
        fat: format!("{:.1}", e.nutrients.fat),
        carbs: format!("{:.1}", e.nutrients.carbs),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let total: Nutrients = entries.iter().map(|e| e.nutrients).sum();
    format!(
        "{}\nTotal: {:.0} kcal  {}\n",
        table,
        total.kcal,
        format_macros(&total)
    )
}

/// One-line confirmation for a freshly logged entry
pub fn format_logged_entry(entry: &LogEntry, origin: FoodOrigin) -> String {
    let source = match origin {
        FoodOrigin::Table => "",
        FoodOrigin::Lookup => " [online]",
    };
    format!(
        "Logged {} g of {}{}: {:.0} kcal ({}) [{}]",
        entry.grams,
        entry.name,
        source,
        entry.nutrients.kcal,
        format_macros(&entry.nutrients),
        entry.id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_log() {
        assert_eq!(format_log(&[]), "Nothing logged yet.\n");
    }

    #[test]
    fn test_log_table() {
        let entries = vec![
            LogEntry::new("Банан", 120.0, Nutrients::new(115.2, 1.44, 0.36, 26.16)),
            LogEntry::new("Яблоко", 200.0, Nutrients::new(104.0, 0.6, 0.4, 28.0)),
        ];
        let output = format_log(&entries);

        assert!(output.contains("Банан"));
        assert!(output.contains("Яблоко"));
        assert!(output.contains(&entries[0].id.to_string()));
        assert!(output.contains("Total: 219 kcal"));
    }

    #[test]
    fn test_logged_entry_marks_lookup() {
        let entry = LogEntry::new("Greek yogurt", 200.0, Nutrients::new(146.0, 20.0, 4.0, 7.2));
        let line = format_logged_entry(&entry, FoodOrigin::Lookup);
        assert!(line.starts_with("Logged 200 g of Greek yogurt [online]: 146 kcal"));

        let line = format_logged_entry(&entry, FoodOrigin::Table);
        assert!(!line.contains("[online]"));
    }
}
