pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_plan_csv, write_plan_json};
pub use prompts::{collect_profile, prompt_yes_no};
pub use render::{
    display_categories, display_notes, display_report, display_targets, display_weekly_plan,
    display_workouts, format_macros, round_to,
};
