use std::io::Write;

use crate::error::Result;
use crate::models::DailyMealPlan;

const HEADER: [&str; 9] = [
    "meal",
    "name",
    "portion_size",
    "calories",
    "protein_g",
    "carbs_g",
    "fat_g",
    "prep_time",
    "cook_time",
];

/// Write one CSV row per meal.
///
/// Recipe timing columns are empty when the meal has no recipe.
pub fn write_plan_csv<W: Write>(plan: &DailyMealPlan, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for (slot, meal) in plan.meals() {
        let (prep, cook) = meal
            .recipe
            .as_ref()
            .map(|r| (r.prep_time.to_string(), r.cook_time.to_string()))
            .unwrap_or_default();

        wtr.write_record([
            slot.name().to_string(),
            meal.name.clone(),
            meal.portion_size.clone(),
            format!("{:.2}", meal.calories),
            meal.macros.protein.to_string(),
            meal.macros.carbs.to_string(),
            meal.macros.fat.to_string(),
            prep,
            cook,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
