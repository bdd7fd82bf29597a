//! Food table, search and fit-portion display

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::FoodItem;
use crate::services::{FitPortion, FoodOrigin};

#[derive(Tabled)]
struct FoodRow {
    #[tabled(rename = "Food")]
    name: String,
    #[tabled(rename = "kcal/100g")]
    kcal100: String,
    #[tabled(rename = "P")]
    protein: String,
    #[tabled(rename = "F")]
    fat: String,
    #[tabled(rename = "C")]
    carbs: String,
    #[tabled(rename = "Source")]
    source: &'static str,
}

fn food_row(food: &FoodItem, origin: FoodOrigin) -> FoodRow {
    FoodRow {
        name: food.name.clone(),
        kcal100: format!("{}", food.kcal100),
        protein: format!("{:.1}", food.protein),
        fat: format!("{:.1}", food.fat),
        carbs: format!("{:.1}", food.carbs),
        source: match origin {
            FoodOrigin::Table => "table",
            FoodOrigin::Lookup => "online",
        },
    }
}

/// Format the reference table
pub fn format_food_table(foods: &[FoodItem]) -> String {
    if foods.is_empty() {
        return "The food table is empty.\n".to_string();
    }

    let mut table = Table::new(foods.iter().map(|f| food_row(f, FoodOrigin::Table)));
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format search candidates from the table and the lookup
pub fn format_search_results(query: &str, results: &[(FoodItem, FoodOrigin)]) -> String {
    if results.is_empty() {
        return format!("No foods match \"{}\".\n", query);
    }

    let mut table = Table::new(results.iter().map(|(f, o)| food_row(f, *o)));
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format a fit-portion answer
pub fn format_fit_portion(fit: &FitPortion) -> String {
    if fit.grams == 0 {
        return format!(
            "No room left for {}: the daily limit is exhausted.\n",
            fit.food.name
        );
    }

    let budget_note = if fit.from_override {
        "your budget"
    } else {
        "today's remaining budget"
    };

    format!(
        "{} g of {} fits {} of {:.0} kcal.\n",
        fit.grams, fit.food.name, budget_note, fit.budget
    )
}
