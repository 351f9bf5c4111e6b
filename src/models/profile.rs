use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::planner::constants::{
    ACTIVE_MULT, LIGHT_MULT, MODERATE_MULT, SEDENTARY_MULT, VERY_ACTIVE_MULT,
};

/// Goal key that applies the calorie deficit.
pub const GOAL_WEIGHT_LOSS: &str = "weight_loss";

/// Goal key that applies the calorie surplus.
pub const GOAL_WEIGHT_GAIN: &str = "weight_gain";

/// `output_wants` key that attaches a recipe to every meal.
pub const WANT_RECIPES: &str = "recipes";

fn default_goals() -> BTreeSet<String> {
    BTreeSet::from(["wellness".to_string()])
}

fn default_output_wants() -> BTreeSet<String> {
    ["calories", "macros", "recipes"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Profile as received from the questionnaire layer.
///
/// The five fields needed by the calculator are optional here so that a
/// missing answer can be reported; [`ProfileInput::validate`] turns this into
/// a [`UserProfile`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    pub age: Option<u32>,

    pub gender: Option<String>,

    /// Height in centimeters.
    #[serde(alias = "height_cm")]
    pub height: Option<f64>,

    /// Weight in kilograms.
    #[serde(alias = "weight_kg")]
    pub weight: Option<f64>,

    pub activity_level: Option<String>,

    #[serde(default = "default_goals")]
    pub goals: BTreeSet<String>,

    #[serde(default = "default_output_wants")]
    pub output_wants: BTreeSet<String>,

    #[serde(flatten)]
    pub details: ProfileDetails,
}

impl ProfileInput {
    /// Profile with every required field set and empty goal/output sets.
    pub fn new(
        age: u32,
        gender: impl Into<String>,
        height: f64,
        weight: f64,
        activity_level: impl Into<String>,
    ) -> Self {
        Self {
            age: Some(age),
            gender: Some(gender.into()),
            height: Some(height),
            weight: Some(weight),
            activity_level: Some(activity_level.into()),
            ..Default::default()
        }
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goals.insert(goal.into());
        self
    }

    pub fn with_output_want(mut self, want: impl Into<String>) -> Self {
        self.output_wants.insert(want.into());
        self
    }

    /// Check required fields in the fixed order age, gender, height, weight,
    /// activity_level and return the first one missing.
    pub fn validate(&self) -> Result<UserProfile, ValidationError> {
        let age = self.age.ok_or(ValidationError::MissingField("age"))?;
        let gender = self
            .gender
            .clone()
            .ok_or(ValidationError::MissingField("gender"))?;
        let height = self.height.ok_or(ValidationError::MissingField("height"))?;
        let weight = self.weight.ok_or(ValidationError::MissingField("weight"))?;
        let activity_level = self
            .activity_level
            .clone()
            .ok_or(ValidationError::MissingField("activity_level"))?;

        Ok(UserProfile {
            age,
            gender,
            height,
            weight,
            activity_level,
            goals: self.goals.clone(),
            output_wants: self.output_wants.clone(),
            details: self.details.clone(),
        })
    }
}

/// Descriptive answers carried alongside the profile.
///
/// None of these feed the calorie or macro calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDetails {
    /// Hours of sleep per night.
    #[serde(alias = "sleep_hours")]
    pub sleep: Option<f64>,
    pub medical_conditions: Vec<String>,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
    pub dietary_pattern: Option<String>,
    pub dislikes: Vec<String>,
    pub likes: Vec<String>,
    pub religious_restrictions: Vec<String>,
    pub meals_per_day: Option<u32>,
    pub eating_window: Option<EatingWindow>,
    pub budget: Option<String>,
    pub cooking_skill: Option<String>,
    pub dietary_preferences: Vec<String>,
    pub cuisine_preferences: Vec<String>,
}

/// Daily eating window as "HH:MM" strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EatingWindow {
    pub start: String,
    pub end: String,
}

/// Validated profile consumed by the calculator and planner.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub age: u32,
    pub gender: String,
    /// Height in centimeters.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    pub activity_level: String,
    pub goals: BTreeSet<String>,
    pub output_wants: BTreeSet<String>,
    pub details: ProfileDetails,
}

impl UserProfile {
    /// Whether the male BMR formula applies (case-insensitive).
    pub fn is_male(&self) -> bool {
        self.gender.eq_ignore_ascii_case("male")
    }

    /// Goals are free-form answers, so matching ignores case.
    pub fn has_goal(&self, goal: &str) -> bool {
        self.goals.iter().any(|g| g.eq_ignore_ascii_case(goal))
    }

    pub fn wants(&self, output: &str) -> bool {
        self.output_wants.iter().any(|w| w.eq_ignore_ascii_case(output))
    }

    pub fn wants_recipes(&self) -> bool {
        self.wants(WANT_RECIPES)
    }
}

/// Recognized activity levels, in increasing order of expenditure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Parse a profile key, ignoring case. Unknown keys yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.to_lowercase();
        Self::ALL.into_iter().find(|level| level.key() == normalized)
    }

    /// Key used in profiles.
    pub fn key(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// Questionnaire wording for this level.
    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little to no exercise)",
            ActivityLevel::Light => "Lightly active (light exercise 1-3 days/week)",
            ActivityLevel::Moderate => "Moderately active (moderate exercise 3-5 days/week)",
            ActivityLevel::Active => "Active (hard exercise 4-5 days/week)",
            ActivityLevel::VeryActive => "Very active (hard exercise 6-7 days/week)",
        }
    }

    /// Map a questionnaire label back to its level.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }

    /// TDEE multiplier applied to BMR.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => SEDENTARY_MULT,
            ActivityLevel::Light => LIGHT_MULT,
            ActivityLevel::Moderate => MODERATE_MULT,
            ActivityLevel::Active => ACTIVE_MULT,
            ActivityLevel::VeryActive => VERY_ACTIVE_MULT,
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
