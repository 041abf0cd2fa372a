pub mod meal;
pub mod plan;
pub mod profile;
pub mod workout;

pub use meal::{Macros, MealCatalog, MealEntry};
pub use plan::{DayPlan, DayTotals, EnergyTargets, MacroSplit, WeeklyPlan};
pub use profile::{ActivityLevel, AllergySet, Goal, Profile, Sex};
pub use workout::{WorkoutCatalog, WorkoutEntry};
