pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;

pub use error::{PlanError, Result};
pub use models::{MealEntry, Profile};
pub use planner::{build_plan, PlanReport};
