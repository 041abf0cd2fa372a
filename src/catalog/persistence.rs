use std::fs;
use std::path::Path;

use crate::error::{PlanError, Result};
use crate::models::{MealCatalog, MealEntry, WorkoutCatalog, WorkoutEntry};

/// Load and validate the meal catalog from a JSON file.
///
/// Order is kept as-is; duplicates are allowed since the rotation treats
/// each position as its own slot.
pub fn load_meals<P: AsRef<Path>>(path: P) -> Result<Vec<MealEntry>> {
    let content = fs::read_to_string(path.as_ref())?;
    let meals = parse_meals(&content)?;
    tracing::info!(path = %path.as_ref().display(), count = meals.len(), "loaded meal catalog");
    Ok(meals)
}

/// Parse and validate meal catalog JSON.
pub fn parse_meals(json: &str) -> Result<Vec<MealEntry>> {
    let catalog: MealCatalog = serde_json::from_str(json)?;

    for (index, meal) in catalog.meals.iter().enumerate() {
        if let Some(reason) = meal.validation_error() {
            return Err(PlanError::InvalidCatalogEntry { index, reason });
        }
    }

    Ok(catalog.meals)
}

/// Load the workout catalog from a JSON file.
pub fn load_workouts<P: AsRef<Path>>(path: P) -> Result<Vec<WorkoutEntry>> {
    let content = fs::read_to_string(path.as_ref())?;
    let catalog: WorkoutCatalog = serde_json::from_str(&content)?;

    for (index, workout) in catalog.workouts.iter().enumerate() {
        if workout.name.trim().is_empty() {
            return Err(PlanError::InvalidCatalogEntry {
                index,
                reason: "empty name".to_string(),
            });
        }
    }

    tracing::info!(
        path = %path.as_ref().display(),
        count = catalog.workouts.len(),
        "loaded workout catalog"
    );
    Ok(catalog.workouts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_meals_keeps_order() {
        let json = r#"{"meals": [
            {"name": "Oats", "category": "balanced", "mealType": "Breakfast", "calories": 350,
             "macros": {"protein": 12, "carbs": 60, "fat": 7}, "allergens": ["gluten"]},
            {"name": "Dal Rice", "category": "vegetarian", "mealType": "Lunch", "calories": 520,
             "macros": {"protein": 18, "carbs": 90, "fat": 9}, "allergens": [],
             "link": "https://example.com/dal"}
        ]}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let meals = load_meals(file.path()).unwrap();
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].name, "Oats");
        assert_eq!(meals[1].link.as_deref(), Some("https://example.com/dal"));
    }

    #[test]
    fn test_parse_meals_rejects_negative_calories() {
        let json = r#"{"meals": [
            {"name": "Oats", "category": "balanced", "mealType": "Breakfast", "calories": 350},
            {"name": "Broken", "category": "balanced", "mealType": "Lunch", "calories": -5}
        ]}"#;

        match parse_meals(json) {
            Err(PlanError::InvalidCatalogEntry { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected invalid entry, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_meals_rejects_missing_category() {
        let json = r#"{"meals": [{"name": "Oats", "calories": 350}]}"#;
        assert!(matches!(parse_meals(json), Err(PlanError::Json(_))));
    }

    #[test]
    fn test_load_workouts() {
        let json = r#"{"workouts": [
            {"name": "Push-up", "type": "strength", "muscle": "chest", "sets": 3, "reps": 12},
            {"name": "Cycling", "type": "cardio", "duration": "40 min", "intensity": "zone 2"}
        ]}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let workouts = load_workouts(file.path()).unwrap();
        assert_eq!(workouts.len(), 2);
        assert_eq!(workouts[1].kind, "cardio");
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_meals("/nonexistent/dietPlans.json"),
            Err(PlanError::Io(_))
        ));
    }
}
