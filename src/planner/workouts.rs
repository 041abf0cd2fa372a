use crate::models::WorkoutEntry;

/// The first `limit` workouts of the catalog, in catalog order.
pub fn select_workouts(catalog: &[WorkoutEntry], limit: usize) -> &[WorkoutEntry] {
    &catalog[..limit.min(catalog.len())]
}
