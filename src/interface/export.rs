use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::interface::render::round_to;
use crate::planner::PlanReport;

/// Write the weekly plan as CSV: one row per meal, then a total row per day.
pub fn write_plan_csv(report: &PlanReport, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "day", "meal_type", "name", "calories", "protein", "carbs", "fat", "link",
    ])?;

    for (i, (day, totals)) in report.week.days.iter().zip(&report.day_totals).enumerate() {
        let day_label = (i + 1).to_string();
        for meal in day.iter() {
            wtr.write_record(vec![
                day_label.clone(),
                meal.meal_type.clone(),
                meal.name.clone(),
                format_number(meal.calories),
                format_optional(meal.macros.protein),
                format_optional(meal.macros.carbs),
                format_optional(meal.macros.fat),
                meal.link.clone().unwrap_or_default(),
            ])?;
        }
        wtr.write_record(vec![
            day_label,
            "TOTAL".to_string(),
            String::new(),
            format_number(round_to(totals.calories, 0)),
            format_number(round_to(totals.protein, 0)),
            format_number(round_to(totals.carbs, 0)),
            format_number(round_to(totals.fat, 0)),
            String::new(),
        ])?;
    }

    wtr.flush()?;
    tracing::info!(path = %path.display(), "wrote plan CSV");
    Ok(())
}

/// Write the full report (targets, macros, week, totals) as pretty JSON.
pub fn write_plan_json(report: &PlanReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), "wrote plan JSON");
    Ok(())
}

fn format_number(value: f64) -> String {
    format!("{}", value)
}

fn format_optional(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Macros, MealEntry, Profile};
    use crate::planner::build_plan;
    use tempfile::NamedTempFile;

    fn catalog() -> Vec<MealEntry> {
        (0..5)
            .map(|i| MealEntry {
                name: format!("Meal {}", i),
                category: "balanced".to_string(),
                meal_type: "Lunch".to_string(),
                calories: 500.0,
                macros: Macros::new(30.0, 50.0, 15.0),
                allergens: Vec::new(),
                link: None,
            })
            .collect()
    }

    #[test]
    fn test_write_plan_csv() {
        let catalog = catalog();
        let report = build_plan(&Profile::default(), &catalog).unwrap();

        let file = NamedTempFile::new().unwrap();
        write_plan_csv(&report, file.path()).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();

        // 7 days * (4 meals + 1 total row)
        assert_eq!(rows.len(), 35);
        assert_eq!(&rows[4][1], "TOTAL");
        assert_eq!(&rows[4][3], "2000");
    }

    #[test]
    fn test_write_plan_json() {
        let catalog = catalog();
        let report = build_plan(&Profile::default(), &catalog).unwrap();

        let file = NamedTempFile::new().unwrap();
        write_plan_json(&report, file.path()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(value["week"]["days"].as_array().unwrap().len(), 7);
        assert_eq!(value["day_totals"][0]["calories"], 2000.0);
    }
}
