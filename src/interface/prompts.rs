use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};

use crate::error::{PlanError, Result};
use crate::models::{ActivityLevel, AllergySet, Goal, Profile, Sex};

fn prompt_number<T>(prompt: &str, default: T) -> Result<T>
where
    T: FromStr + ToString,
{
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for a positive body measurement.
fn prompt_positive(prompt: &str, default: f64) -> Result<f64> {
    let value: f64 = prompt_number(prompt, default)?;
    if !(value.is_finite() && value > 0.0) {
        return Err(PlanError::InvalidInput(format!(
            "{} must be positive",
            prompt
        )));
    }
    Ok(value)
}

/// Prompt for sex.
pub fn prompt_sex(default: Sex) -> Result<Sex> {
    let options = ["Male", "Female"];
    let selection = Select::new()
        .with_prompt("Sex")
        .items(&options)
        .default(if default == Sex::Male { 0 } else { 1 })
        .interact()?;

    Ok(if selection == 0 { Sex::Male } else { Sex::Female })
}

/// Prompt for activity level.
pub fn prompt_activity(default: ActivityLevel) -> Result<ActivityLevel> {
    let options: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.label()).collect();
    let default_idx = ActivityLevel::ALL
        .iter()
        .position(|a| *a == default)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Activity")
        .items(&options)
        .default(default_idx)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

/// Prompt for training goal.
pub fn prompt_goal(default: Goal) -> Result<Goal> {
    let options: Vec<&str> = Goal::ALL.iter().map(|g| g.label()).collect();
    let default_idx = Goal::ALL.iter().position(|g| *g == default).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Goal")
        .items(&options)
        .default(default_idx)
        .interact()?;

    Ok(Goal::ALL[selection])
}

/// Prompt for a diet category from those present in the catalog.
pub fn prompt_diet_category(categories: &[&str], default: &str) -> Result<String> {
    if categories.is_empty() {
        return Err(PlanError::EmptyEligibleCatalog);
    }

    let default_idx = categories.iter().position(|c| *c == default).unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Diet category")
        .items(categories)
        .default(default_idx)
        .interact()?;

    Ok(categories[selection].to_string())
}

/// Prompt for comma-separated allergies.
pub fn prompt_allergies() -> Result<AllergySet> {
    let input: String = Input::new()
        .with_prompt("Allergies (comma separated, e.g. dairy, gluten, peanuts)")
        .allow_empty(true)
        .interact_text()?;

    Ok(AllergySet::parse(&input))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full profile, starting from `defaults`.
pub fn collect_profile(defaults: &Profile, categories: &[&str]) -> Result<Profile> {
    let age: u32 = prompt_number("Age", defaults.age)?;
    let sex = prompt_sex(defaults.sex)?;
    let height_cm = prompt_positive("Height (cm)", defaults.height_cm)?;
    let weight_kg = prompt_positive("Weight (kg)", defaults.weight_kg)?;
    let activity = prompt_activity(defaults.activity)?;
    let goal = prompt_goal(defaults.goal)?;
    let diet_category = prompt_diet_category(categories, &defaults.diet_category)?;
    let meals_per_day: u32 = prompt_number("Meals per day (3-6)", defaults.meals_per_day)?;
    let allergies = prompt_allergies()?;

    Ok(Profile {
        sex,
        age,
        height_cm,
        weight_kg,
        activity,
        goal,
        diet_category,
        meals_per_day,
        allergies,
    })
}
