mod persistence;

pub use persistence::{load_meals, load_workouts, parse_meals};
