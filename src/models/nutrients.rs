//! Nutrient amounts
//!
//! A `Nutrients` value is energy plus the protein/fat/carbohydrate (PFC)
//! breakdown for some quantity of food. Values are kept unrounded; rounding is
//! a display concern.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Energy (kcal) and macros (grams)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    /// Energy in kilocalories
    pub kcal: f64,
    /// Protein in grams
    #[serde(rename = "p")]
    pub protein: f64,
    /// Fat in grams
    #[serde(rename = "f")]
    pub fat: f64,
    /// Carbohydrates in grams
    #[serde(rename = "c")]
    pub carbs: f64,
}

impl Nutrients {
    pub const fn new(kcal: f64, protein: f64, fat: f64, carbs: f64) -> Self {
        Self {
            kcal,
            protein,
            fat,
            carbs,
        }
    }

    /// All-zero totals
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Multiply every field by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            kcal: self.kcal * factor,
            protein: self.protein * factor,
            fat: self.fat * factor,
            carbs: self.carbs * factor,
        }
    }
}

impl Add for Nutrients {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            kcal: self.kcal + other.kcal,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            carbs: self.carbs + other.carbs,
        }
    }
}

impl Sum for Nutrients {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, n| acc + n)
    }
}

impl<'a> Sum<&'a Nutrients> for Nutrients {
    fn sum<I: Iterator<Item = &'a Nutrients>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, n| acc + *n)
    }
}
