use serde::Serialize;

use crate::models::MealEntry;

/// Daily energy needs derived from a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyTargets {
    /// Basal metabolic rate (kcal/day).
    pub bmr: f64,

    /// Total daily energy expenditure (kcal/day).
    pub tdee: f64,

    /// Goal-adjusted calorie target (kcal/day).
    pub daily_calories: f64,
}

/// Grams of each macro nutrient for a calorie budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroSplit {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Summed nutrients for a sequence of meals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DayTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// One day of the rotation. Meals are borrowed from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan<'a> {
    pub meals: Vec<&'a MealEntry>,
}

impl<'a> DayPlan<'a> {
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a MealEntry> + '_ {
        self.meals.iter().copied()
    }
}

/// Seven days of meals, Monday-first by convention.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPlan<'a> {
    pub days: Vec<DayPlan<'a>>,
}

impl<'a> WeeklyPlan<'a> {
    pub fn meals_per_day(&self) -> usize {
        self.days.first().map(DayPlan::len).unwrap_or(0)
    }
}
