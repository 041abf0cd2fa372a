pub mod compose;
pub mod constants;
pub mod filter;
pub mod metabolic;
pub mod totals;
pub mod workouts;

pub use compose::{clamp_meals_per_day, compose_week, day_window};
pub use constants::*;
pub use filter::{catalog_categories, filter_meals, parse_allergies, suggest_category};
pub use metabolic::{
    adjust_calories, compute_bmr, compute_macro_split, compute_tdee, energy_targets,
    macro_targets,
};
pub use totals::totals;
pub use workouts::select_workouts;

use serde::Serialize;

use crate::error::Result;
use crate::models::{DayTotals, EnergyTargets, MacroSplit, MealEntry, Profile, WeeklyPlan};

/// Everything computed for one profile snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport<'a> {
    pub targets: EnergyTargets,
    pub macros: MacroSplit,
    pub week: WeeklyPlan<'a>,
    pub day_totals: Vec<DayTotals>,
}

/// Run the whole engine for a profile against a meal catalog.
///
/// Targets, the weekly rotation and the per-day totals are all recomputed
/// from `profile`; call again whenever any profile field changes.
pub fn build_plan<'a>(profile: &Profile, catalog: &'a [MealEntry]) -> Result<PlanReport<'a>> {
    profile.validate()?;

    let targets = energy_targets(profile);
    let macros = macro_targets(profile, &targets);

    let eligible = filter_meals(catalog, &profile.diet_category, &profile.allergies);
    if eligible.is_empty() {
        tracing::warn!(
            category = %profile.diet_category,
            allergies = profile.allergies.len(),
            "no eligible meals for profile"
        );
    }
    let week = compose_week(&eligible, profile.meals_per_day)?;

    let day_totals = week.days.iter().map(|day| totals(day.iter())).collect();

    Ok(PlanReport {
        targets,
        macros,
        week,
        day_totals,
    })
}
