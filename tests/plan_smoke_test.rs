use proptest::prelude::*;

use onestop_planner_rs::catalog::load_meals;
use onestop_planner_rs::error::PlanError;
use onestop_planner_rs::models::{AllergySet, Macros, MealEntry, Profile};
use onestop_planner_rs::planner::{
    build_plan, clamp_meals_per_day, compose_week, filter_meals, parse_allergies, totals,
    DAYS_PER_WEEK,
};

const ALLERGENS: [&str; 6] = ["dairy", "gluten", "peanuts", "soy", "eggs", "fish"];

fn make_meal(i: usize, category: &str, allergens: &[&str]) -> MealEntry {
    MealEntry {
        name: format!("Meal {}", i),
        category: category.to_string(),
        meal_type: "Lunch".to_string(),
        calories: 100.0 + i as f64,
        macros: Macros::new(10.0 + i as f64, 20.0, 5.0 + (i % 3) as f64),
        allergens: allergens.iter().map(|a| a.to_string()).collect(),
        link: None,
    }
}

fn sample_catalog() -> Vec<MealEntry> {
    vec![
        make_meal(0, "balanced", &["Dairy"]),
        make_meal(1, "balanced", &[]),
        make_meal(2, "vegan", &["soy"]),
        make_meal(3, "balanced", &["gluten", "eggs"]),
        make_meal(4, "balanced", &[]),
        make_meal(5, "balanced", &["peanuts"]),
        make_meal(6, "balanced", &[]),
    ]
}

#[test]
fn test_build_plan_shape() {
    let catalog = sample_catalog();
    let report = build_plan(&Profile::default(), &catalog).unwrap();

    assert_eq!(report.week.days.len(), DAYS_PER_WEEK);
    assert_eq!(report.day_totals.len(), DAYS_PER_WEEK);
    for day in &report.week.days {
        assert_eq!(day.len(), 4);
        assert!(day.iter().all(|m| m.category == "balanced"));
    }
}

#[test]
fn test_build_plan_excludes_allergens() {
    let catalog = sample_catalog();
    let profile = Profile {
        allergies: AllergySet::parse("dairy, GLUTEN"),
        meals_per_day: 3,
        ..Default::default()
    };
    let report = build_plan(&profile, &catalog).unwrap();

    // Eligible: 1, 4, 5, 6
    let first: Vec<&str> = report.week.days[0].iter().map(|m| m.name.as_str()).collect();
    assert_eq!(first, vec!["Meal 1", "Meal 4", "Meal 5"]);
    // day 1: start 3 -> [6, 1, 4]
    let second: Vec<&str> = report.week.days[1].iter().map(|m| m.name.as_str()).collect();
    assert_eq!(second, vec!["Meal 6", "Meal 1", "Meal 4"]);
}

#[test]
fn test_build_plan_no_eligible_meals() {
    let catalog = sample_catalog();
    let profile = Profile {
        diet_category: "vegan".to_string(),
        allergies: AllergySet::parse("soy"),
        ..Default::default()
    };
    assert!(matches!(
        build_plan(&profile, &catalog),
        Err(PlanError::EmptyEligibleCatalog)
    ));
}

#[test]
fn test_build_plan_rejects_bad_metrics() {
    let catalog = sample_catalog();
    let profile = Profile {
        height_cm: -170.0,
        ..Default::default()
    };
    assert!(matches!(
        build_plan(&profile, &catalog),
        Err(PlanError::InvalidInput(_))
    ));
}

#[test]
fn test_bundled_catalog_plans_every_category() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/dietPlans.json");
    let catalog = load_meals(path).unwrap();

    for category in ["balanced", "vegetarian", "vegan", "nonVegetarian", "snacks"] {
        let profile = Profile {
            diet_category: category.to_string(),
            meals_per_day: 5,
            ..Default::default()
        };
        let report = build_plan(&profile, &catalog).unwrap();
        assert!(report.week.days.iter().all(|d| d.len() == 5));
    }
}

fn arb_catalog() -> impl Strategy<Value = Vec<MealEntry>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["balanced", "vegan"]),
            prop::sample::subsequence(ALLERGENS.to_vec(), 0..3),
            0.0f64..900.0,
            prop::option::of(0.0f64..60.0),
            prop::option::of(0.0f64..120.0),
            prop::option::of(0.0f64..40.0),
        ),
        0..25,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (category, allergens, calories, protein, carbs, fat))| MealEntry {
                name: format!("Meal {}", i),
                category: category.to_string(),
                meal_type: "Lunch".to_string(),
                calories,
                macros: Macros {
                    protein,
                    carbs,
                    fat,
                },
                allergens: allergens.iter().map(|a| a.to_uppercase()).collect(),
                link: None,
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// No filtered meal carries an excluded allergen.
    #[test]
    fn prop_filter_excludes_allergens(
        catalog in arb_catalog(),
        excluded in prop::sample::subsequence(ALLERGENS.to_vec(), 0..4)
    ) {
        let text = excluded.join(" , ");
        let allergies = parse_allergies(&text);
        for meal in filter_meals(&catalog, "balanced", &allergies) {
            prop_assert_eq!(meal.category.as_str(), "balanced");
            for allergen in &meal.allergens {
                prop_assert!(!allergies.contains(allergen));
            }
        }
    }

    /// Each day holds exactly the rotation's entries and its totals add up.
    #[test]
    fn prop_week_matches_rotation(
        catalog in arb_catalog(),
        requested in 0u32..10
    ) {
        let eligible = filter_meals(&catalog, "balanced", &AllergySet::default());
        match compose_week(&eligible, requested) {
            Err(PlanError::EmptyEligibleCatalog) => prop_assert!(eligible.is_empty()),
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
            Ok(week) => {
                let per_day = clamp_meals_per_day(requested);
                prop_assert_eq!(week.days.len(), DAYS_PER_WEEK);
                for (d, day) in week.days.iter().enumerate() {
                    prop_assert_eq!(day.len(), per_day);
                    let start = (d * per_day) % eligible.len();
                    let expected: Vec<&MealEntry> = (0..per_day)
                        .map(|i| eligible[(start + i) % eligible.len()])
                        .collect();
                    prop_assert_eq!(&day.meals, &expected);

                    let t = totals(day.iter());
                    let calories: f64 = expected.iter().map(|m| m.calories).sum();
                    let protein: f64 = expected.iter().map(|m| m.macros.protein_g()).sum();
                    prop_assert!((t.calories - calories).abs() < 1e-6);
                    prop_assert!((t.protein - protein).abs() < 1e-6);
                }

                let again = compose_week(&eligible, requested).unwrap();
                prop_assert_eq!(week, again);
            }
        }
    }
}
