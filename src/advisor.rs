use tracing::{info, warn};

use crate::error::AdviceGenerationError;
use crate::models::{DailyMealPlan, ProfileInput};
use crate::planner::{MealPlanner, MealProvider, PlaceholderMeals};

/// Entry point for producing a meal plan from questionnaire output.
///
/// Every failure, whether a missing field or an error raised while building
/// meals, comes back as [`AdviceGenerationError`].
#[derive(Debug, Clone, Default)]
pub struct NutritionAdvisor<P = PlaceholderMeals> {
    planner: MealPlanner<P>,
}

impl NutritionAdvisor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: MealProvider> NutritionAdvisor<P> {
    pub fn with_planner(planner: MealPlanner<P>) -> Self {
        Self { planner }
    }

    pub fn generate_advice(
        &self,
        input: &ProfileInput,
    ) -> Result<DailyMealPlan, AdviceGenerationError> {
        let profile = input.validate().map_err(|e| {
            warn!(error = %e, "profile rejected");
            AdviceGenerationError::wrap(e)
        })?;

        let plan = self.planner.generate_meal_plan(&profile).map_err(|e| {
            warn!(error = %e, "meal plan generation failed");
            AdviceGenerationError::wrap(e)
        })?;

        info!(
            total_calories = plan.total_calories,
            protein = plan.macro_breakdown.protein,
            carbs = plan.macro_breakdown.carbs,
            fat = plan.macro_breakdown.fat,
            "nutrition advice generated"
        );
        Ok(plan)
    }
}
