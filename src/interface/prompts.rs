use std::collections::BTreeSet;

use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{NutriError, Result};
use crate::models::profile::WANT_RECIPES;
use crate::models::{ActivityLevel, ProfileInput};

/// Similarity above which an unknown activity level gets a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Other"];

/// Prompt for age in years.
pub fn prompt_age() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How old are you?")
        .interact_text()?;

    let age: u32 = input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid age".to_string()))?;

    if age == 0 {
        return Err(NutriError::InvalidInput("Age must be positive".to_string()));
    }
    Ok(age)
}

/// Prompt for gender; returns the lowercase key.
pub fn prompt_gender() -> Result<String> {
    let selection = Select::new()
        .with_prompt("What's your gender?")
        .items(&GENDER_OPTIONS)
        .default(0)
        .interact()?;

    Ok(GENDER_OPTIONS[selection].to_lowercase())
}

/// Prompt for a positive measurement such as height or weight.
pub fn prompt_measurement(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    parse_measurement(&input)
}

fn parse_measurement(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid number".to_string()))?;

    if !(value.is_finite() && value > 0.0) {
        return Err(NutriError::InvalidInput(
            "Measurement must be a positive number".to_string(),
        ));
    }
    Ok(value)
}

/// Prompt for activity level using the questionnaire wording.
pub fn prompt_activity_level() -> Result<ActivityLevel> {
    let labels: Vec<&str> = ActivityLevel::ALL.iter().map(|l| l.label()).collect();

    let selection = Select::new()
        .with_prompt("How active are you?")
        .items(&labels)
        .default(2) // moderate
        .interact()?;

    ActivityLevel::from_label(labels[selection])
        .ok_or_else(|| NutriError::InvalidInput("Unknown activity level".to_string()))
}

/// Prompt for goals as comma-separated text.
pub fn prompt_goals() -> Result<BTreeSet<String>> {
    let input: String = Input::new()
        .with_prompt("What are your health goals? (e.g. weight loss, muscle gain)")
        .allow_empty(true)
        .interact_text()?;

    Ok(parse_goals(&input))
}

/// Normalize comma-separated goals: trimmed, lowercase, spaces as `_`.
///
/// Empty input yields the default `wellness` goal.
pub fn parse_goals(input: &str) -> BTreeSet<String> {
    let goals: BTreeSet<String> = input
        .split(',')
        .map(|g| g.trim().to_lowercase())
        .filter(|g| !g.is_empty())
        .map(|g| g.split_whitespace().collect::<Vec<_>>().join("_"))
        .collect();

    if goals.is_empty() {
        BTreeSet::from(["wellness".to_string()])
    } else {
        goals
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk through the questionnaire and build a profile.
pub fn collect_profile() -> Result<ProfileInput> {
    let age = prompt_age()?;
    let gender = prompt_gender()?;
    let height = prompt_measurement("What's your height? (cm)", 175.0)?;
    let weight = prompt_measurement("What's your current weight? (kg)", 70.0)?;
    let activity = prompt_activity_level()?;
    let goals = prompt_goals()?;
    let wants_recipes = prompt_yes_no("Include recipes with each meal?", true)?;

    let mut profile = ProfileInput::new(age, gender, height, weight, activity.key());
    profile.goals = goals;
    profile.output_wants = ["calories", "macros"].into_iter().map(String::from).collect();
    if wants_recipes {
        profile.output_wants.insert(WANT_RECIPES.to_string());
    }

    Ok(profile)
}

/// Closest known activity level for an unrecognized value.
///
/// Returns `None` when the value is already recognized or nothing is close.
pub fn suggest_activity_level(value: &str) -> Option<ActivityLevel> {
    if ActivityLevel::parse(value).is_some() {
        return None;
    }

    let normalized = value.trim().to_lowercase().replace([' ', '-'], "_");
    ActivityLevel::ALL
        .into_iter()
        .map(|level| (level, jaro_winkler(level.key(), &normalized)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(level, _)| level)
}
