//! Profile model
//!
//! Biometric data plus the goal and training location that drive the daily
//! calorie target and the workout plan.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Biological sex used by the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Parse gender from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Self::Male),
            "female" | "f" => Some(Self::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// What the user wants to do with body weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// ~15% calorie deficit
    Lose,
    #[default]
    Maintain,
    /// ~15% calorie surplus
    Gain,
}

impl Goal {
    /// Parse goal from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lose" | "cut" => Some(Self::Lose),
            "maintain" | "maintenance" => Some(Self::Maintain),
            "gain" | "bulk" => Some(Self::Gain),
            _ => None,
        }
    }

    /// Multiplier applied to the BMR
    pub fn factor(&self) -> f64 {
        match self {
            Self::Lose => 0.85,
            Self::Maintain => 1.0,
            Self::Gain => 1.15,
        }
    }

    /// Human-readable description of the adjustment
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Lose => "Deficit ~15%",
            Self::Maintain => "Maintenance",
            Self::Gain => "Surplus ~15%",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lose => write!(f, "lose"),
            Self::Maintain => write!(f, "maintain"),
            Self::Gain => write!(f, "gain"),
        }
    }
}

/// Where the user trains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    #[default]
    Home,
    Gym,
}

impl Location {
    /// Parse location from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "home" => Some(Self::Home),
            "gym" => Some(Self::Gym),
            _ => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Gym => write!(f, "gym"),
        }
    }
}

/// A user's profile
///
/// Fields missing from a stored profile are filled from `Profile::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub gender: Gender,
    /// Age in whole years
    pub age: u32,
    /// Height in centimetres
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    pub goal: Goal,
    pub location: Location,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            age: 25,
            height: 175.0,
            weight: 70.0,
            goal: Goal::Maintain,
            location: Location::Home,
        }
    }
}

impl Profile {
    /// Apply a partial update, returning the new profile
    ///
    /// The receiver is left untouched when validation fails.
    pub fn apply(&self, update: &ProfileUpdate) -> Result<Self, ProfileValidationError> {
        let updated = Self {
            gender: update.gender.unwrap_or(self.gender),
            age: update.age.unwrap_or(self.age),
            height: update.height.unwrap_or(self.height),
            weight: update.weight.unwrap_or(self.weight),
            goal: update.goal.unwrap_or(self.goal),
            location: update.location.unwrap_or(self.location),
        };
        updated.validate()?;
        Ok(updated)
    }

    /// Validate the profile
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if self.age == 0 {
            return Err(ProfileValidationError::NonPositive("age"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(ProfileValidationError::NonPositive("height"));
        }
        if !(self.weight.is_finite() && self.weight > 0.0) {
            return Err(ProfileValidationError::NonPositive("weight"));
        }
        Ok(())
    }
}

/// Fields to change on a profile; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub gender: Option<Gender>,
    pub age: Option<u32>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub goal: Option<Goal>,
    pub location: Option<Location>,
}

impl ProfileUpdate {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Validation errors for profiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    NonPositive(&'static str),
}

impl fmt::Display for ProfileValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive(field) => write!(f, "Profile {} must be greater than zero", field),
        }
    }
}

impl std::error::Error for ProfileValidationError {}
