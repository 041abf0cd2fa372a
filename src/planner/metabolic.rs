//! Energy and macro targets.
//!
//! Nothing here rounds; rounding is a display concern.

use crate::models::{ActivityLevel, EnergyTargets, Goal, MacroSplit, Profile, Sex};
use crate::planner::constants::*;

/// Basal metabolic rate via Mifflin–St Jeor.
///
/// `10·w + 6.25·h − 5·a`, then +5 for men and −161 for women.
pub fn compute_bmr(sex: Sex, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let base = BMR_WEIGHT_COEF * weight_kg + BMR_HEIGHT_COEF * height_cm
        - BMR_AGE_COEF * age as f64;
    match sex {
        Sex::Male => base + BMR_MALE_OFFSET,
        Sex::Female => base + BMR_FEMALE_OFFSET,
    }
}

/// Total daily energy expenditure.
pub fn compute_tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity_factor(activity)
}

/// Goal-adjusted calorie target.
pub fn adjust_calories(tdee: f64, goal: Goal) -> f64 {
    tdee * goal_calorie_factor(goal)
}

/// Split a calorie budget into protein, fat and carbs.
///
/// Protein scales with body weight and fat with calories; carbs take what is
/// left and floor at zero when protein and fat already exceed the budget.
pub fn compute_macro_split(calories: f64, weight_kg: f64, goal: Goal) -> MacroSplit {
    let protein_g = protein_per_kg(goal) * weight_kg;
    let fat_kcal = calories * fat_calorie_share(goal);
    let fat_g = fat_kcal / KCAL_PER_G_FAT;
    let carb_kcal = (calories - protein_g * KCAL_PER_G_PROTEIN - fat_kcal).max(0.0);
    let carbs_g = carb_kcal / KCAL_PER_G_CARBS;

    MacroSplit {
        protein_g,
        carbs_g,
        fat_g,
    }
}

/// BMR, TDEE and daily calories for a profile.
pub fn energy_targets(profile: &Profile) -> EnergyTargets {
    let bmr = compute_bmr(
        profile.sex,
        profile.weight_kg,
        profile.height_cm,
        profile.age,
    );
    let tdee = compute_tdee(bmr, profile.activity);
    let daily_calories = adjust_calories(tdee, profile.goal);

    tracing::debug!(bmr, tdee, daily_calories, goal = %profile.goal, "computed energy targets");

    EnergyTargets {
        bmr,
        tdee,
        daily_calories,
    }
}

/// Macro split for a profile's daily calorie target.
pub fn macro_targets(profile: &Profile, targets: &EnergyTargets) -> MacroSplit {
    compute_macro_split(targets.daily_calories, profile.weight_kg, profile.goal)
}
