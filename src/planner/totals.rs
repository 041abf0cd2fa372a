use crate::models::{DayTotals, MealEntry};

/// Sum calories and macros over a sequence of meals.
///
/// Missing macros count as zero.
pub fn totals<'a, I>(meals: I) -> DayTotals
where
    I: IntoIterator<Item = &'a MealEntry>,
{
    meals.into_iter().fold(DayTotals::default(), |acc, m| DayTotals {
        calories: acc.calories + m.calories,
        protein: acc.protein + m.macros.protein_g(),
        carbs: acc.carbs + m.macros.carbs_g(),
        fat: acc.fat + m.macros.fat_g(),
    })
}
