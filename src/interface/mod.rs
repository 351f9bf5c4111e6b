pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_plan_csv;
pub use prompts::{
    collect_profile, parse_goals, prompt_activity_level, prompt_age, prompt_gender, prompt_goals,
    prompt_measurement, prompt_yes_no, suggest_activity_level,
};
pub use render::{display_meal_plan, format_macro_breakdown, format_meal_plan};
