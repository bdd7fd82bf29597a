//! Food name resolution against the reference table

use crate::models::FoodItem;

/// Find a food by name, ignoring case and surrounding whitespace
///
/// An exact name match wins. Otherwise the first item (in table order) whose
/// name contains the query is returned. A blank query matches nothing.
pub fn find_food<'a>(query: &str, table: &'a [FoodItem]) -> Option<&'a FoodItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    table
        .iter()
        .find(|f| f.name.to_lowercase() == needle)
        .or_else(|| table.iter().find(|f| f.name.to_lowercase().contains(&needle)))
}
