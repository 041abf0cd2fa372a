use strsim::jaro_winkler;

use crate::models::{AllergySet, MealEntry};

/// Minimum Jaro–Winkler similarity for a category suggestion.
const CATEGORY_MATCH_THRESHOLD: f64 = 0.7;

/// Parse comma-separated allergy text into a normalized set.
pub fn parse_allergies(text: &str) -> AllergySet {
    AllergySet::parse(text)
}

/// Select the meals eligible for a diet category and allergy set.
///
/// Catalog order is preserved; the rotation depends on it. A meal is dropped
/// if any declared allergen matches an excluded one exactly (no substring
/// matching, case-insensitive).
pub fn filter_meals<'a>(
    catalog: &'a [MealEntry],
    diet_category: &str,
    allergies: &AllergySet,
) -> Vec<&'a MealEntry> {
    let eligible: Vec<&MealEntry> = catalog
        .iter()
        .filter(|m| m.category == diet_category)
        .filter(|m| !m.has_allergen(|a| allergies.contains(a)))
        .collect();

    tracing::debug!(
        category = diet_category,
        excluded_allergens = allergies.len(),
        eligible = eligible.len(),
        "filtered meal catalog"
    );

    eligible
}

/// Distinct diet categories with their meal counts, in first-seen order.
pub fn catalog_categories(catalog: &[MealEntry]) -> Vec<(&str, usize)> {
    let mut out: Vec<(&str, usize)> = Vec::new();
    for meal in catalog {
        match out.iter_mut().find(|(c, _)| *c == meal.category) {
            Some((_, count)) => *count += 1,
            None => out.push((meal.category.as_str(), 1)),
        }
    }
    out
}

/// Closest known category to an unknown one, if any is similar enough.
pub fn suggest_category<'a>(catalog: &'a [MealEntry], unknown: &str) -> Option<&'a str> {
    let needle = unknown.to_lowercase();
    catalog_categories(catalog)
        .into_iter()
        .map(|(c, _)| (c, jaro_winkler(&c.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > CATEGORY_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c)
}
