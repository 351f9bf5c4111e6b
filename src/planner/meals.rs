use tracing::debug;

use crate::error::Result;
use crate::models::{DailyMealPlan, Macros, Meal, MealSlot, Recipe, UserProfile};
use crate::planner::calculations::calculate_daily_needs;
use crate::planner::constants::*;

/// Builds the meal for one slot of the day.
///
/// The planner decides how many calories each slot gets; a provider only
/// decides what goes on the plate.
pub trait MealProvider: Send + Sync {
    fn produce(
        &self,
        slot: MealSlot,
        profile: &UserProfile,
        target_calories: f64,
    ) -> Result<Meal>;
}

/// Default provider: fixed placeholder meals, with a stub recipe when the
/// profile asks for recipes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderMeals;

impl MealProvider for PlaceholderMeals {
    fn produce(
        &self,
        slot: MealSlot,
        profile: &UserProfile,
        target_calories: f64,
    ) -> Result<Meal> {
        Ok(generate_meal(profile, slot, target_calories))
    }
}

/// Build a placeholder meal for a slot.
///
/// Macros are the fixed placeholder grams regardless of `target_calories`.
pub fn generate_meal(profile: &UserProfile, slot: MealSlot, target_calories: f64) -> Meal {
    let (protein, carbs, fat) = PLACEHOLDER_MACROS;
    let mut meal = Meal {
        name: PLACEHOLDER_MEAL_NAME.to_string(),
        portion_size: PLACEHOLDER_PORTION.to_string(),
        calories: target_calories,
        macros: Macros::new(protein, carbs, fat),
        reason: PLACEHOLDER_REASON.to_string(),
        recipe: None,
    };

    if profile.wants_recipes() {
        meal.recipe = Some(generate_recipe(&meal.name));
    }

    debug!(%slot, target_calories, with_recipe = meal.recipe.is_some(), "generated meal");
    meal
}

/// Stub recipe attached to placeholder meals.
pub fn generate_recipe(_meal_name: &str) -> Recipe {
    Recipe {
        ingredients: vec![PLACEHOLDER_INGREDIENTS.to_string()],
        instructions: vec![PLACEHOLDER_INSTRUCTIONS.to_string()],
        prep_time: PLACEHOLDER_PREP_TIME,
        cook_time: PLACEHOLDER_COOK_TIME,
    }
}

/// Split daily calories across the meal slots by their fixed shares.
pub fn allocate_calories(daily_calories: i64) -> [(MealSlot, f64); 3] {
    MealSlot::ALL.map(|slot| (slot, daily_calories as f64 * slot.share()))
}

/// Turns a profile's daily needs into a three-meal plan.
#[derive(Debug, Clone, Default)]
pub struct MealPlanner<P = PlaceholderMeals> {
    provider: P,
}

impl MealPlanner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: MealProvider> MealPlanner<P> {
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Generate the daily plan.
    ///
    /// Provider errors are returned as-is.
    pub fn generate_meal_plan(&self, profile: &UserProfile) -> Result<DailyMealPlan> {
        let daily_needs = calculate_daily_needs(profile);
        let [breakfast, lunch, dinner] = allocate_calories(daily_needs.calories);

        let plan = DailyMealPlan {
            total_calories: daily_needs.calories,
            macro_breakdown: daily_needs.macros,
            breakfast: self.produce(breakfast, profile)?,
            lunch: self.produce(lunch, profile)?,
            dinner: self.produce(dinner, profile)?,
        };

        debug!(total_calories = plan.total_calories, "meal plan assembled");
        Ok(plan)
    }

    fn produce(&self, (slot, target): (MealSlot, f64), profile: &UserProfile) -> Result<Meal> {
        self.provider.produce(slot, profile, target)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use assert_float_eq::*;

    use super::*;
    use crate::error::NutriError;
    use crate::models::ProfileInput;
    use crate::models::profile::{GOAL_WEIGHT_LOSS, WANT_RECIPES};

    fn profile() -> UserProfile {
        ProfileInput::new(30, "male", 175.0, 70.0, "moderate")
            .with_goal(GOAL_WEIGHT_LOSS)
            .validate()
            .unwrap()
    }

    #[test]
    fn test_allocate_calories() {
        let [breakfast, lunch, dinner] = allocate_calories(2103);
        assert_eq!(breakfast.0, MealSlot::Breakfast);
        assert_float_absolute_eq!(breakfast.1, 630.9, 1e-9);
        assert_float_absolute_eq!(lunch.1, 736.05, 1e-9);
        assert_float_absolute_eq!(dinner.1, 736.05, 1e-9);
    }

    #[test]
    fn test_generate_meal_plan_example() {
        let plan = MealPlanner::new().generate_meal_plan(&profile()).unwrap();

        assert_eq!(plan.total_calories, 2103);
        assert_eq!(plan.macro_breakdown, Macros::new(131, 237, 70));
        assert_float_absolute_eq!(plan.allocated_calories(), 2103.0, 1e-9);

        for (_, meal) in plan.meals() {
            assert_eq!(meal.name, PLACEHOLDER_MEAL_NAME);
            assert_eq!(meal.portion_size, PLACEHOLDER_PORTION);
            assert_eq!(meal.macros, Macros::new(20, 40, 10));
            assert!(meal.recipe.is_none());
        }
    }

    #[test]
    fn test_meal_calories_are_not_rounded() {
        let plan = MealPlanner::new().generate_meal_plan(&profile()).unwrap();
        assert!(plan.breakfast.calories.fract() > 0.0);
    }

    #[test]
    fn test_recipes_attached_when_wanted() {
        let mut p = profile();
        p.output_wants.insert(WANT_RECIPES.to_string());

        let plan = MealPlanner::new().generate_meal_plan(&p).unwrap();
        for (slot, meal) in plan.meals() {
            let recipe = meal.recipe.as_ref().unwrap_or_else(|| panic!("{slot} lacks recipe"));
            assert_eq!(recipe.prep_time, 15);
            assert_eq!(recipe.cook_time, 30);
            assert_eq!(recipe.ingredients, vec!["placeholder ingredients".to_string()]);
        }
    }

    #[test]
    fn test_generate_recipe_stub() {
        let recipe = generate_recipe("anything");
        assert_eq!(recipe.instructions, vec!["placeholder instructions".to_string()]);
        assert_eq!(recipe.total_time(), 45);
    }

    /// Records what the planner asked for.
    #[derive(Default)]
    struct Recording {
        calls: Mutex<Vec<(MealSlot, f64)>>,
    }

    impl MealProvider for Recording {
        fn produce(&self, slot: MealSlot, profile: &UserProfile, target: f64) -> Result<Meal> {
            self.calls.lock().unwrap().push((slot, target));
            let mut meal = generate_meal(profile, slot, target);
            meal.name = format!("{slot} bowl");
            Ok(meal)
        }
    }

    #[test]
    fn test_custom_provider_receives_allocation() {
        let planner = MealPlanner::with_provider(Recording::default());
        let plan = planner.generate_meal_plan(&profile()).unwrap();

        assert_eq!(plan.dinner.name, "dinner bowl");
        let calls = planner.provider().calls.lock().unwrap();
        let slots: Vec<MealSlot> = calls.iter().map(|(s, _)| *s).collect();
        assert_eq!(slots, MealSlot::ALL.to_vec());
        assert_float_absolute_eq!(calls[1].1, 736.05, 1e-9);
    }

    struct Failing;

    impl MealProvider for Failing {
        fn produce(&self, slot: MealSlot, _: &UserProfile, _: f64) -> Result<Meal> {
            Err(NutriError::Provider(
                format!("recipe catalog offline for {slot}").into(),
            ))
        }
    }

    #[test]
    fn test_provider_error_propagates() {
        let err = MealPlanner::with_provider(Failing)
            .generate_meal_plan(&profile())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "recipe catalog offline for breakfast"
        );
    }
}
