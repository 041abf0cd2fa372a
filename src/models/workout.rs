use serde::{Deserialize, Serialize};

/// A workout record from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub muscle: Option<String>,

    #[serde(default)]
    pub sets: Option<u32>,

    /// Free text, e.g. "8-12" or "AMRAP".
    #[serde(default, deserialize_with = "string_or_number")]
    pub reps: Option<String>,

    #[serde(default)]
    pub duration: Option<String>,

    #[serde(default)]
    pub intensity: Option<String>,

    #[serde(default)]
    pub equipment: Option<String>,

    #[serde(default)]
    pub link: Option<String>,
}

impl WorkoutEntry {
    /// "3 x 10" when sets are given, otherwise the duration, otherwise "-".
    pub fn volume(&self) -> String {
        match (self.sets, &self.reps, &self.duration) {
            (Some(sets), Some(reps), _) => format!("{} x {}", sets, reps),
            (Some(sets), None, _) => format!("{} sets", sets),
            (None, _, Some(duration)) => duration.clone(),
            _ => "-".to_string(),
        }
    }

    pub fn target_muscle(&self) -> &str {
        self.muscle.as_deref().unwrap_or("full body")
    }
}

/// On-disk shape of the workout catalog: `{ "workouts": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutCatalog {
    pub workouts: Vec<WorkoutEntry>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reps_accept_numbers_and_text() {
        let json = r#"[
            {"name": "Push-up", "type": "strength", "sets": 3, "reps": 12},
            {"name": "Squat", "type": "strength", "sets": 4, "reps": "8-10"},
            {"name": "Run", "type": "cardio", "duration": "30 min"}
        ]"#;
        let workouts: Vec<WorkoutEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(workouts[0].volume(), "3 x 12");
        assert_eq!(workouts[1].volume(), "4 x 8-10");
        assert_eq!(workouts[2].volume(), "30 min");
        assert_eq!(workouts[2].target_muscle(), "full body");
    }
}
