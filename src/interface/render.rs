use crate::models::{DayTotals, EnergyTargets, MacroSplit, WorkoutEntry};
use crate::planner::PlanReport;

/// Training and nutrition notes printed under the plan.
pub const TRAINING_NOTES: [&str; 5] = [
    "Distribute protein across meals (25-45 g each).",
    "Strength days: RPE 7-9, leave 1-2 reps in reserve.",
    "HIIT 1-2x/week; Zone 2 cardio 2-3x/week.",
    "Hydration: 30-40 ml/kg/day; include electrolytes in heat.",
    "Supplements: whey/plant protein, creatine 3-5 g/day, vitamin D per labs, fish oil for EPA/DHA.",
];

/// Round to `decimals` places, half away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// "150P / 431C / 86F" with whole grams.
pub fn format_macros(protein: f64, carbs: f64, fat: f64) -> String {
    format!(
        "{}P / {}C / {}F",
        round_to(protein, 0),
        round_to(carbs, 0),
        round_to(fat, 0)
    )
}

/// Display BMR, TDEE, calorie target and macro grams.
pub fn display_targets(targets: &EnergyTargets, macros: &MacroSplit) {
    println!();
    println!("=== Targets ===");
    println!();
    println!("BMR:            {:>6} kcal", round_to(targets.bmr, 0));
    println!("TDEE:           {:>6} kcal", round_to(targets.tdee, 0));
    println!("Daily Calories: {:>6} kcal", round_to(targets.daily_calories, 0));
    println!(
        "Macros:         {}",
        format_macros(macros.protein_g, macros.carbs_g, macros.fat_g)
    );
}

fn display_day_header(index: usize, totals: &DayTotals) {
    println!(
        "Day {}  Total: {} kcal  {}",
        index + 1,
        round_to(totals.calories, 0),
        format_macros(totals.protein, totals.carbs, totals.fat)
    );
}

/// Display the seven-day rotation with a total line per day.
pub fn display_weekly_plan(report: &PlanReport) {
    println!();
    println!("=== Weekly Meals ===");

    let max_name_len = report
        .week
        .days
        .iter()
        .flat_map(|d| d.iter())
        .map(|m| m.name.len())
        .max()
        .unwrap_or(10);
    let max_type_len = report
        .week
        .days
        .iter()
        .flat_map(|d| d.iter())
        .map(|m| m.meal_type.len())
        .max()
        .unwrap_or(4)
        .max(4);

    for (i, (day, totals)) in report.week.days.iter().zip(&report.day_totals).enumerate() {
        println!();
        display_day_header(i, totals);

        for meal in day.iter() {
            let fmt_opt = |v: Option<f64>| v.map(|g| g.to_string()).unwrap_or_else(|| "-".into());
            println!(
                "  {:<tw$}  {:<nw$}  {:>5} cal | P {:>4} C {:>4} F {:>4} | {}",
                meal.meal_type,
                meal.name,
                meal.calories,
                fmt_opt(meal.macros.protein),
                fmt_opt(meal.macros.carbs),
                fmt_opt(meal.macros.fat),
                meal.link.as_deref().unwrap_or("-"),
                tw = max_type_len,
                nw = max_name_len
            );
        }
    }

    println!();
}

/// Display the training notes.
pub fn display_notes() {
    println!("--- Notes ---");
    for note in TRAINING_NOTES {
        println!("  - {}", note);
    }
    println!();
}

/// Display the complete report: targets, weekly meals and notes.
pub fn display_report(report: &PlanReport) {
    display_targets(&report.targets, &report.macros);
    display_weekly_plan(report);
    display_notes();
}

/// Display a list of workouts.
pub fn display_workouts(workouts: &[WorkoutEntry]) {
    if workouts.is_empty() {
        println!("No workouts in catalog.");
        return;
    }

    println!();
    println!("=== Workouts ({} items) ===", workouts.len());
    println!();

    for w in workouts {
        println!(
            "  [{}] {} ({}) - {} | Intensity: {} | Equipment: {}",
            w.kind,
            w.name,
            w.target_muscle(),
            w.volume(),
            w.intensity.as_deref().unwrap_or("-"),
            w.equipment.as_deref().unwrap_or("-"),
        );
        if let Some(link) = &w.link {
            println!("      {}", link);
        }
    }

    println!();
}

/// Display diet categories with their meal counts.
pub fn display_categories(categories: &[(&str, usize)]) {
    if categories.is_empty() {
        println!("Meal catalog is empty.");
        return;
    }

    println!();
    println!("=== Diet Categories ===");
    println!();
    for (category, count) in categories {
        println!("  {:<16} {} meals", category, count);
    }
    println!();
}
