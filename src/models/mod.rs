pub mod plan;
pub mod profile;

pub use plan::{DailyMealPlan, DailyNeeds, Macros, Meal, MealSlot, Recipe};
pub use profile::{ActivityLevel, EatingWindow, ProfileDetails, ProfileInput, UserProfile};
