use crate::models::{ActivityLevel, Goal};

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin–St Jeor
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 5.0;

/// Sex-specific constant added to the shared base.
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Energy conversion
// ─────────────────────────────────────────────────────────────────────────────

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Weekly rotation
// ─────────────────────────────────────────────────────────────────────────────

pub const DAYS_PER_WEEK: usize = 7;

pub const MIN_MEALS_PER_DAY: u32 = 3;
pub const MAX_MEALS_PER_DAY: u32 = 6;

/// Number of workouts shown from the catalog.
pub const WORKOUT_DISPLAY_LIMIT: usize = 240;

/// TDEE multiplier for an activity level.
pub fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::Very => 1.9,
    }
}

/// Calorie multiplier applied to TDEE. Replaces, never adds.
pub fn goal_calorie_factor(goal: Goal) -> f64 {
    match goal {
        Goal::FatLoss => 0.80,
        Goal::MuscleGain => 1.15,
        Goal::Endurance => 1.05,
        Goal::GeneralFitness => 1.0,
    }
}

/// Grams of protein per kg of body weight.
pub fn protein_per_kg(goal: Goal) -> f64 {
    match goal {
        Goal::MuscleGain => 2.0,
        Goal::FatLoss => 1.8,
        _ => 1.6,
    }
}

/// Share of daily calories allotted to fat.
pub fn fat_calorie_share(goal: Goal) -> f64 {
    match goal {
        Goal::Endurance => 0.20,
        _ => 0.25,
    }
}
