use std::fmt::Write;

use crate::models::{DailyMealPlan, Macros, Meal, MealSlot};
use crate::planner::constants::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Display a meal plan as a formatted table.
pub fn display_meal_plan(plan: &DailyMealPlan) {
    print!("{}", format_meal_plan(plan));
}

/// Render a meal plan as text.
pub fn format_meal_plan(plan: &DailyMealPlan) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out);
    let _ = writeln!(out, "=== Daily Meal Plan ===");
    let _ = writeln!(out);
    let _ = writeln!(out, "Target: {} kcal/day", plan.total_calories);
    let _ = writeln!(out, "Macros: {}", format_macro_breakdown(&plan.macro_breakdown));
    let _ = writeln!(out);

    let width = MealSlot::ALL
        .iter()
        .map(|s| s.name().len())
        .max()
        .unwrap_or(9);

    for (slot, meal) in plan.meals() {
        write_meal(&mut out, slot, meal, width);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "--- Summary ---");
    let _ = writeln!(
        out,
        "Allocated: {:.0} kcal across {} meals",
        plan.allocated_calories(),
        MealSlot::ALL.len()
    );
    let _ = writeln!(out);

    out
}

fn write_meal(out: &mut String, slot: MealSlot, meal: &Meal, width: usize) {
    let indent = " ".repeat(width + 3);
    let _ = writeln!(
        out,
        "  {:<width$} - {:>5.0} kcal | {} ({}) | P {} g  C {} g  F {} g",
        capitalize(slot.name()),
        meal.calories,
        meal.name,
        meal.portion_size,
        meal.macros.protein,
        meal.macros.carbs,
        meal.macros.fat,
        width = width
    );
    let _ = writeln!(out, "{indent}{}", meal.reason);

    if let Some(recipe) = &meal.recipe {
        let _ = writeln!(
            out,
            "{indent}Recipe: {} min prep + {} min cook",
            recipe.prep_time, recipe.cook_time
        );
        let _ = writeln!(out, "{indent}Ingredients: {}", recipe.ingredients.join(", "));
        for (i, step) in recipe.instructions.iter().enumerate() {
            let _ = writeln!(out, "{indent}{}. {step}", i + 1);
        }
    }
}

/// "protein 131 g (524 kcal, 24%) | ..." with each share of macro energy.
pub fn format_macro_breakdown(macros: &Macros) -> String {
    let parts = [
        ("protein", macros.protein, macros.protein * KCAL_PER_G_PROTEIN),
        ("carbs", macros.carbs, macros.carbs * KCAL_PER_G_CARBS),
        ("fat", macros.fat, macros.fat * KCAL_PER_G_FAT),
    ];
    let total = macros.calories();

    parts
        .iter()
        .map(|(name, grams, kcal)| {
            if total > 0 {
                let pct = *kcal as f64 / total as f64 * 100.0;
                format!("{name} {grams} g ({kcal} kcal, {pct:.0}%)")
            } else {
                format!("{name} {grams} g ({kcal} kcal)")
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
