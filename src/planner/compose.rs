use crate::error::{PlanError, Result};
use crate::models::{DayPlan, MealEntry, WeeklyPlan};
use crate::planner::constants::{DAYS_PER_WEEK, MAX_MEALS_PER_DAY, MIN_MEALS_PER_DAY};

/// Clamp a requested meals-per-day count to the supported range.
pub fn clamp_meals_per_day(requested: u32) -> usize {
    requested.clamp(MIN_MEALS_PER_DAY, MAX_MEALS_PER_DAY) as usize
}

/// Catalog indices served on day `day`.
///
/// The window starts at `(day * per_day) % len` and runs forward, continuing
/// from the front of the list once it passes the end.
pub fn day_window(day: usize, per_day: usize, len: usize) -> Vec<usize> {
    let start = (day * per_day) % len;
    (0..per_day).map(|i| (start + i) % len).collect()
}

/// Rotate eligible meals into a seven-day plan.
///
/// Every day holds exactly the clamped meals-per-day count; meals repeat
/// across the week, and within a day when fewer meals are eligible than
/// slots to fill. The result depends only on the input order and count.
pub fn compose_week<'a>(
    meals: &[&'a MealEntry],
    meals_per_day: u32,
) -> Result<WeeklyPlan<'a>> {
    if meals.is_empty() {
        return Err(PlanError::EmptyEligibleCatalog);
    }

    let per_day = clamp_meals_per_day(meals_per_day);
    if per_day as u32 != meals_per_day {
        tracing::debug!(requested = meals_per_day, per_day, "clamped meals per day");
    }

    let days = (0..DAYS_PER_WEEK)
        .map(|day| {
            let window = day_window(day, per_day, meals.len());
            tracing::trace!(day, ?window, "rotation window");
            DayPlan {
                meals: window.into_iter().map(|i| meals[i]).collect(),
            }
        })
        .collect();

    Ok(WeeklyPlan { days })
}
