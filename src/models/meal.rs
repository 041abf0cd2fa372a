use serde::{Deserialize, Serialize};

/// Macro nutrients of a catalog meal, in grams. Absent values count as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    #[serde(default)]
    pub protein: Option<f64>,

    #[serde(default)]
    pub carbs: Option<f64>,

    #[serde(default)]
    pub fat: Option<f64>,
}

impl Macros {
    pub fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            protein: Some(protein),
            carbs: Some(carbs),
            fat: Some(fat),
        }
    }

    #[inline]
    pub fn protein_g(&self) -> f64 {
        self.protein.unwrap_or(0.0)
    }

    #[inline]
    pub fn carbs_g(&self) -> f64 {
        self.carbs.unwrap_or(0.0)
    }

    #[inline]
    pub fn fat_g(&self) -> f64 {
        self.fat.unwrap_or(0.0)
    }
}

/// A meal record from the catalog.
///
/// Catalog order is significant: the weekly rotation walks entries in the
/// order they were loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    pub name: String,

    pub category: String,

    #[serde(rename = "mealType", default)]
    pub meal_type: String,

    #[serde(default)]
    pub calories: f64,

    #[serde(default)]
    pub macros: Macros,

    #[serde(default)]
    pub allergens: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl MealEntry {
    /// Whether any declared allergen, trimmed and lowercased, satisfies `predicate`.
    pub fn has_allergen(&self, mut predicate: impl FnMut(&str) -> bool) -> bool {
        self.allergens
            .iter()
            .any(|a| predicate(&a.trim().to_lowercase()))
    }

    /// Describe the first schema violation, if any.
    ///
    /// Names and categories must be non-empty; calories and macros must be
    /// finite and non-negative.
    pub fn validation_error(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("empty name".to_string());
        }
        if self.category.trim().is_empty() {
            return Some(format!("'{}' has an empty category", self.name));
        }
        let numbers = [
            ("calories", Some(self.calories)),
            ("protein", self.macros.protein),
            ("carbs", self.macros.carbs),
            ("fat", self.macros.fat),
        ];
        for (field, value) in numbers {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Some(format!("'{}' has invalid {}: {}", self.name, field, v));
                }
            }
        }
        None
    }

    pub fn is_valid(&self) -> bool {
        self.validation_error().is_none()
    }
}

/// On-disk shape of the meal catalog: `{ "meals": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealCatalog {
    pub meals: Vec<MealEntry>,
}
