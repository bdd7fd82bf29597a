//! Food reference data
//!
//! A `FoodItem` describes nutrients per 100 g. Items come from the reference
//! table or the external lookup and are never owned or edited by the user.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::nutrients::Nutrients;

/// Nutrient content of a food, per 100 grams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Display name, also the case-insensitive lookup key
    pub name: String,

    /// Energy per 100 g
    pub kcal100: f64,

    /// Protein grams per 100 g
    #[serde(rename = "p", default)]
    pub protein: f64,

    /// Fat grams per 100 g
    #[serde(rename = "f", default)]
    pub fat: f64,

    /// Carbohydrate grams per 100 g
    #[serde(rename = "c", default)]
    pub carbs: f64,
}

impl FoodItem {
    /// Create a validated food item
    pub fn new(
        name: impl Into<String>,
        kcal100: f64,
        protein: f64,
        fat: f64,
        carbs: f64,
    ) -> Result<Self, FoodValidationError> {
        let item = Self {
            name: name.into().trim().to_string(),
            kcal100,
            protein,
            fat,
            carbs,
        };
        item.validate()?;
        Ok(item)
    }

    /// Nutrients in 100 g of this food
    pub fn per_100g(&self) -> Nutrients {
        Nutrients::new(self.kcal100, self.protein, self.fat, self.carbs)
    }

    /// Validate the food item
    pub fn validate(&self) -> Result<(), FoodValidationError> {
        if self.name.trim().is_empty() {
            return Err(FoodValidationError::EmptyName);
        }

        for (field, value) in [
            ("kcal100", self.kcal100),
            ("p", self.protein),
            ("f", self.fat),
            ("c", self.carbs),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FoodValidationError::InvalidValue(field, value));
            }
        }

        Ok(())
    }
}

impl fmt::Display for FoodItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} kcal/100g)", self.name, self.kcal100)
    }
}

/// Validation errors for food items
#[derive(Debug, Clone, PartialEq)]
pub enum FoodValidationError {
    EmptyName,
    InvalidValue(&'static str, f64),
}

impl fmt::Display for FoodValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Food name cannot be empty"),
            Self::InvalidValue(field, value) => {
                write!(f, "Food {} must be a non-negative number, got {}", field, value)
            }
        }
    }
}

impl std::error::Error for FoodValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_name() {
        let food = FoodItem::new("  Apple ", 52.0, 0.3, 0.2, 14.0).unwrap();
        assert_eq!(food.name, "Apple");
        assert_eq!(food.per_100g(), Nutrients::new(52.0, 0.3, 0.2, 14.0));
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            FoodItem::new("", 10.0, 0.0, 0.0, 0.0),
            Err(FoodValidationError::EmptyName)
        );
        assert!(FoodItem::new("Bad", -1.0, 0.0, 0.0, 0.0).is_err());
        assert!(FoodItem::new("Bad", f64::NAN, 0.0, 0.0, 0.0).is_err());
        assert!(FoodItem::new("Water", 0.0, 0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_deserialize_table_record() {
        let food: FoodItem =
            serde_json::from_str(r#"{"name":"Творог 5%","kcal100":145,"p":17,"f":5,"c":2.8}"#)
                .unwrap();
        assert_eq!(food.name, "Творог 5%");
        assert_eq!(food.kcal100, 145.0);
        assert_eq!(food.protein, 17.0);
        assert_eq!(food.carbs, 2.8);
    }

    #[test]
    fn test_missing_macros_default_to_zero() {
        let food: FoodItem = serde_json::from_str(r#"{"name":"Cola","kcal100":42}"#).unwrap();
        assert_eq!(food.protein, 0.0);
        assert_eq!(food.fat, 0.0);
        assert_eq!(food.carbs, 0.0);
    }
}
