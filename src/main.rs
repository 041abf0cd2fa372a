use std::path::Path;

use clap::Parser;

use onestop_planner_rs::catalog::{load_meals, load_workouts};
use onestop_planner_rs::cli::{Cli, Command, ExportFormat, OutputFormat, ProfileArgs};
use onestop_planner_rs::error::{PlanError, Result};
use onestop_planner_rs::interface::{
    collect_profile, display_categories, display_report, display_workouts, prompt_yes_no,
    write_plan_csv, write_plan_json,
};
use onestop_planner_rs::logging::init_logging;
use onestop_planner_rs::models::{MealEntry, Profile};
use onestop_planner_rs::planner::{
    build_plan, catalog_categories, select_workouts, suggest_category,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan { profile, format } => cmd_plan(&cli.meals, &profile, format),
        Command::Interactive => cmd_interactive(&cli.meals),
        Command::Export {
            profile,
            out,
            format,
        } => cmd_export(&cli.meals, &profile, &out, format),
        Command::Categories => cmd_categories(&cli.meals),
        Command::Workouts { limit } => cmd_workouts(&cli.workouts, limit),
    }
}

/// Print the "no meals" state, with a category hint when the category is unknown.
fn report_no_meals(catalog: &[MealEntry], profile: &Profile) {
    println!("No meals match your filters.");

    let known = catalog
        .iter()
        .any(|m| m.category == profile.diet_category);
    if !known {
        match suggest_category(catalog, &profile.diet_category) {
            Some(suggestion) => println!(
                "Unknown diet category '{}'. Did you mean '{}'?",
                profile.diet_category, suggestion
            ),
            None => println!(
                "Unknown diet category '{}'. Use 'categories' to list them.",
                profile.diet_category
            ),
        }
    } else if !profile.allergies.is_empty() {
        let excluded: Vec<&str> = profile.allergies.iter().collect();
        println!(
            "Every '{}' meal contains one of: {}",
            profile.diet_category,
            excluded.join(", ")
        );
    }
}

/// Compute and print the plan for a profile given on the command line.
fn cmd_plan(meals_path: &Path, args: &ProfileArgs, format: OutputFormat) -> Result<()> {
    let profile = args.to_profile()?;
    let catalog = load_meals(meals_path)?;
    print_plan(&catalog, &profile, format)
}

fn print_plan(catalog: &[MealEntry], profile: &Profile, format: OutputFormat) -> Result<()> {
    let report = match build_plan(profile, catalog) {
        Ok(report) => report,
        Err(PlanError::EmptyEligibleCatalog) => {
            report_no_meals(catalog, profile);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    match format {
        OutputFormat::Text => display_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Collect the profile with prompts, then print the plan.
fn cmd_interactive(meals_path: &Path) -> Result<()> {
    let catalog = load_meals(meals_path)?;
    let categories: Vec<&str> = catalog_categories(&catalog)
        .into_iter()
        .map(|(c, _)| c)
        .collect();

    println!("Loaded {} meals in {} categories", catalog.len(), categories.len());
    println!();

    let profile = collect_profile(&Profile::default(), &categories)?;
    print_plan(&catalog, &profile, OutputFormat::Text)
}

/// Write the weekly plan to a CSV or JSON file.
fn cmd_export(
    meals_path: &Path,
    args: &ProfileArgs,
    out: &Path,
    format: ExportFormat,
) -> Result<()> {
    let profile = args.to_profile()?;
    let catalog = load_meals(meals_path)?;

    let report = match build_plan(&profile, &catalog) {
        Ok(report) => report,
        Err(PlanError::EmptyEligibleCatalog) => {
            report_no_meals(&catalog, &profile);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if out.exists() {
        let overwrite = prompt_yes_no(&format!("{} exists. Overwrite?", out.display()), false)?;
        if !overwrite {
            println!("Export cancelled.");
            return Ok(());
        }
    }

    match format {
        ExportFormat::Csv => write_plan_csv(&report, out)?,
        ExportFormat::Json => write_plan_json(&report, out)?,
    }
    println!("Plan written to {}", out.display());

    Ok(())
}

/// List diet categories and meal counts.
fn cmd_categories(meals_path: &Path) -> Result<()> {
    let catalog = load_meals(meals_path)?;
    display_categories(&catalog_categories(&catalog));
    Ok(())
}

/// List the bounded workout slice.
fn cmd_workouts(workouts_path: &Path, limit: usize) -> Result<()> {
    let catalog = load_workouts(workouts_path)?;
    display_workouts(select_workouts(&catalog, limit));
    Ok(())
}
