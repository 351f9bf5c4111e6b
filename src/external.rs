//! Choosing between a plan returned by the hosted generative model and the
//! locally computed one.
//!
//! The model is asked for a `DailyMealPlan` as JSON but frequently wraps it
//! in prose or a fenced code block. Anything that does not parse into the
//! expected shape is discarded and the computed plan is used instead.

use std::fmt;

use tracing::{info, warn};

use crate::advisor::NutritionAdvisor;
use crate::error::AdviceGenerationError;
use crate::models::{DailyMealPlan, ProfileInput};
use crate::planner::MealProvider;

/// Where a resolved plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    External,
    Computed,
}

impl fmt::Display for PlanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanSource::External => f.write_str("external"),
            PlanSource::Computed => f.write_str("computed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlan {
    pub plan: DailyMealPlan,
    pub source: PlanSource,
}

/// Extract a meal plan from a model response.
///
/// Accepts bare JSON, or text containing a single JSON object (everything
/// from the first `{` to the last `}`).
pub fn parse_external_plan(text: &str) -> Option<DailyMealPlan> {
    let trimmed = text.trim();
    if let Ok(plan) = serde_json::from_str(trimmed) {
        return Some(plan);
    }

    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&trimmed[start..=end]).ok()
}

/// Use the external plan when it parses, otherwise compute one.
///
/// The profile is validated either way, so a response cannot stand in for
/// missing answers.
pub fn resolve_plan<P: MealProvider>(
    advisor: &NutritionAdvisor<P>,
    input: &ProfileInput,
    response: Option<&str>,
) -> Result<ResolvedPlan, AdviceGenerationError> {
    input.validate().map_err(AdviceGenerationError::wrap)?;

    if let Some(plan) = response.and_then(parse_external_plan) {
        info!(total_calories = plan.total_calories, "using external meal plan");
        return Ok(ResolvedPlan {
            plan,
            source: PlanSource::External,
        });
    }

    match response {
        Some(text) => warn!(
            response_len = text.len(),
            "external response unusable, falling back to computed plan"
        ),
        None => info!("no external response, computing plan"),
    }

    let plan = advisor.generate_advice(input)?;
    Ok(ResolvedPlan {
        plan,
        source: PlanSource::Computed,
    })
}
