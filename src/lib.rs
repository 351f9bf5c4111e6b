pub mod advisor;
pub mod cli;
pub mod error;
pub mod external;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use advisor::NutritionAdvisor;
pub use error::{AdviceGenerationError, NutriError, Result, ValidationError};
pub use external::{PlanSource, ResolvedPlan, resolve_plan};
pub use models::{DailyMealPlan, DailyNeeds, Meal, ProfileInput, UserProfile};
