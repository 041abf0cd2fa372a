use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::Result;
use crate::models::{AllergySet, Goal, Profile};

/// OneStop Planner — calorie targets, macros and a weekly meal rotation.
#[derive(Parser, Debug)]
#[command(name = "onestop_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the meal catalog JSON file.
    #[arg(long, global = true, env = "ONESTOP_MEALS", default_value = "data/dietPlans.json")]
    pub meals: PathBuf,

    /// Path to the workout catalog JSON file.
    #[arg(
        long,
        global = true,
        env = "ONESTOP_WORKOUTS",
        default_value = "data/workoutPlans.json"
    )]
    pub workouts: PathBuf,

    /// Log level filter (overridden by RUST_LOG).
    #[arg(long, global = true, env = "ONESTOP_LOG", default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute targets and the weekly meal plan for a profile.
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Enter the profile interactively, then print the plan.
    Interactive,

    /// Write the weekly meal plan to a file.
    Export {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Destination file.
        #[arg(short, long, default_value = "fitness-plan.csv")]
        out: PathBuf,

        /// File format.
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },

    /// List diet categories in the meal catalog.
    Categories,

    /// List workouts from the workout catalog.
    Workouts {
        /// Maximum number of workouts to show.
        #[arg(long, default_value_t = crate::planner::WORKOUT_DISPLAY_LIMIT)]
        limit: usize,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            profile: ProfileArgs::default(),
            format: OutputFormat::Text,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Profile fields as command-line flags. Defaults match `Profile::default()`.
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// male or female.
    #[arg(long, default_value = "male")]
    pub sex: String,

    /// Age in years.
    #[arg(long, default_value_t = 30)]
    pub age: u32,

    /// Height in centimeters.
    #[arg(long, default_value_t = 175.0)]
    pub height_cm: f64,

    /// Weight in kilograms.
    #[arg(long, default_value_t = 75.0)]
    pub weight_kg: f64,

    /// sedentary, light, moderate, active or very.
    #[arg(long, default_value = "moderate")]
    pub activity: String,

    /// fat_loss, muscle_gain, general_fitness or endurance.
    #[arg(long, default_value = "muscle_gain")]
    pub goal: String,

    /// Diet category key in the meal catalog.
    #[arg(long, default_value = "balanced")]
    pub diet: String,

    /// Meals per day; clamped to 3-6.
    #[arg(long, default_value_t = 4)]
    pub meals_per_day: u32,

    /// Comma-separated allergens to exclude.
    #[arg(long, default_value = "")]
    pub allergies: String,
}

impl Default for ProfileArgs {
    fn default() -> Self {
        let p = Profile::default();
        Self {
            sex: p.sex.to_string(),
            age: p.age,
            height_cm: p.height_cm,
            weight_kg: p.weight_kg,
            activity: p.activity.to_string(),
            goal: p.goal.to_string(),
            diet: p.diet_category,
            meals_per_day: p.meals_per_day,
            allergies: String::new(),
        }
    }
}

impl ProfileArgs {
    /// Build a validated profile. Sex and activity must be recognized;
    /// unknown goals fall back to general fitness.
    pub fn to_profile(&self) -> Result<Profile> {
        let profile = Profile {
            sex: self.sex.parse()?,
            age: self.age,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            activity: self.activity.parse()?,
            goal: Goal::parse_lenient(&self.goal),
            diet_category: self.diet.trim().to_string(),
            meals_per_day: self.meals_per_day,
            allergies: AllergySet::parse(&self.allergies),
        };
        profile.validate()?;
        Ok(profile)
    }
}
