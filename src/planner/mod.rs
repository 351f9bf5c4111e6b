pub mod calculations;
pub mod constants;
pub mod meals;

pub use calculations::{
    activity_multiplier, calculate_bmr, calculate_daily_needs, calculate_tdee, goal_factor,
    macros_for,
};
pub use constants::*;
pub use meals::{
    MealPlanner, MealProvider, PlaceholderMeals, allocate_calories, generate_meal,
    generate_recipe,
};
