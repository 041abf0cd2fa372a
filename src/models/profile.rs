use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Biological sex used by the Mifflin–St Jeor equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            _ => Err(PlanError::InvalidEnum {
                field: "sex",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sex::Male => "male",
            Sex::Female => "female",
        })
    }
}

/// Activity level, in increasing order of energy expenditure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    Very,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::Very,
    ];

    /// Human-readable label for prompts.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Light (1-3 d/wk)",
            ActivityLevel::Moderate => "Moderate (3-5 d/wk)",
            ActivityLevel::Active => "Active (6-7 d/wk)",
            ActivityLevel::Very => "Very Active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very" => Ok(ActivityLevel::Very),
            _ => Err(PlanError::InvalidEnum {
                field: "activity level",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::Very => "very",
        })
    }
}

/// Training goal. Drives the calorie multiplier and the macro split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    FatLoss,
    MuscleGain,
    GeneralFitness,
    Endurance,
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Goal::FatLoss,
        Goal::MuscleGain,
        Goal::GeneralFitness,
        Goal::Endurance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Goal::FatLoss => "Fat Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::GeneralFitness => "General Fitness",
            Goal::Endurance => "Endurance",
        }
    }

    /// Parse a goal, treating anything unrecognized as general fitness.
    ///
    /// Unknown goals take the neutral branch of every goal-dependent formula,
    /// which is exactly what `GeneralFitness` does.
    pub fn parse_lenient(s: &str) -> Goal {
        match s.trim().to_lowercase().as_str() {
            "fat_loss" => Goal::FatLoss,
            "muscle_gain" => Goal::MuscleGain,
            "general_fitness" => Goal::GeneralFitness,
            "endurance" => Goal::Endurance,
            other => {
                tracing::warn!(goal = other, "unrecognized goal, using general_fitness");
                Goal::GeneralFitness
            }
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Goal::FatLoss => "fat_loss",
            Goal::MuscleGain => "muscle_gain",
            Goal::GeneralFitness => "general_fitness",
            Goal::Endurance => "endurance",
        })
    }
}

/// Normalized allergen exclusion set (lowercase, trimmed, non-empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergySet(BTreeSet<String>);

impl AllergySet {
    /// Parse comma-separated allergy text.
    pub fn parse(text: &str) -> Self {
        Self(
            text.split(',')
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    /// Whether the given allergen (any case) is excluded.
    pub fn contains(&self, allergen: &str) -> bool {
        self.0.contains(&allergen.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Everything the engine needs to compute a plan.
///
/// A profile is a snapshot: every computation takes it by reference and
/// nothing derived from it is cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub sex: Sex,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity: ActivityLevel,
    pub goal: Goal,
    pub diet_category: String,
    /// Raw value; clamped to [3, 6] when the week is composed.
    pub meals_per_day: u32,
    pub allergies: AllergySet,
}

impl Profile {
    /// Check the body-metric contract: positive, finite height and weight.
    pub fn validate(&self) -> crate::error::Result<()> {
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err(PlanError::InvalidInput(format!(
                "height must be positive, got {}",
                self.height_cm
            )));
        }
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(PlanError::InvalidInput(format!(
                "weight must be positive, got {}",
                self.weight_kg
            )));
        }
        Ok(())
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            sex: Sex::Male,
            age: 30,
            height_cm: 175.0,
            weight_kg: 75.0,
            activity: ActivityLevel::Moderate,
            goal: Goal::MuscleGain,
            diet_category: "balanced".to_string(),
            meals_per_day: 4,
            allergies: AllergySet::default(),
        }
    }
}
