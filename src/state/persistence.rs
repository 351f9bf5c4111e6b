use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::models::{DailyMealPlan, ProfileInput};

/// Load a questionnaire profile from a JSON file.
///
/// Missing required fields are not an error here; they are reported when the
/// profile is validated.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<ProfileInput> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let profile: ProfileInput = serde_json::from_str(&content)?;
    debug!(path = %path.display(), "loaded profile");
    Ok(profile)
}

/// Save a profile as pretty-printed JSON.
pub fn save_profile<P: AsRef<Path>>(path: P, profile: &ProfileInput) -> Result<()> {
    write_json(path.as_ref(), profile)
}

/// Save a meal plan as pretty-printed JSON.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &DailyMealPlan) -> Result<()> {
    write_json(path.as_ref(), plan)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "wrote JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::error::NutriError;
    use crate::planner::MealPlanner;

    #[test]
    fn test_load_profile_from_api_payload() {
        let json = r#"{
            "age": 41, "gender": "Female", "height_cm": 162, "weight_kg": 58.5,
            "activity_level": "very_active", "dietary_pattern": "vegetarian",
            "goals": ["weight_gain"], "output_wants": ["calories"]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let input = load_profile(file.path()).unwrap();
        assert_eq!(input.age, Some(41));
        assert_eq!(input.details.dietary_pattern.as_deref(), Some("vegetarian"));
        assert!(input.goals.contains("weight_gain"));
        assert!(!input.output_wants.contains("recipes"));
    }

    #[test]
    fn test_save_and_reload_profile() {
        let input = ProfileInput::new(25, "male", 180.0, 82.0, "light").with_goal("weight_loss");

        let file = NamedTempFile::new().unwrap();
        save_profile(file.path(), &input).unwrap();

        let reloaded = load_profile(file.path()).unwrap();
        assert_eq!(reloaded, input);
    }

    #[test]
    fn test_save_plan_writes_json() {
        let profile = ProfileInput::new(25, "male", 180.0, 82.0, "light")
            .validate()
            .unwrap();
        let plan = MealPlanner::new().generate_meal_plan(&profile).unwrap();

        let file = NamedTempFile::new().unwrap();
        save_plan(file.path(), &plan).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let reread: DailyMealPlan = serde_json::from_str(&content).unwrap();
        assert_eq!(reread.total_calories, plan.total_calories);
    }

    #[test]
    fn test_load_profile_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        assert!(matches!(load_profile(file.path()), Err(NutriError::Json(_))));
    }
}
