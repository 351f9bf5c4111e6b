use std::fmt;

use serde::{Deserialize, Serialize};

use crate::planner::constants::{
    BREAKFAST_SHARE, DINNER_SHARE, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
    LUNCH_SHARE,
};

/// Macro-nutrient amounts in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

impl Macros {
    pub fn new(protein: i64, carbs: i64, fat: i64) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }

    /// Energy of these macros: 4 kcal/g protein and carbs, 9 kcal/g fat.
    pub fn calories(&self) -> i64 {
        self.protein * KCAL_PER_G_PROTEIN + self.carbs * KCAL_PER_G_CARBS + self.fat * KCAL_PER_G_FAT
    }
}

/// Daily calorie target with its macro split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyNeeds {
    pub calories: i64,
    pub macros: Macros,
}

/// Meal slots in the daily plan, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn name(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }

    /// Fraction of the daily calories allotted to this slot.
    pub fn share(self) -> f64 {
        match self {
            MealSlot::Breakfast => BREAKFAST_SHARE,
            MealSlot::Lunch => LUNCH_SHARE,
            MealSlot::Dinner => DINNER_SHARE,
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Minutes.
    pub prep_time: u32,
    /// Minutes.
    pub cook_time: u32,
}

impl Recipe {
    pub fn total_time(&self) -> u32 {
        self.prep_time + self.cook_time
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub portion_size: String,
    /// Target calories for the slot, not rounded.
    pub calories: f64,
    pub macros: Macros,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Recipe>,
}

/// A full day: calorie target, macro breakdown and three meals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMealPlan {
    pub total_calories: i64,
    pub macro_breakdown: Macros,
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
}

impl DailyMealPlan {
    pub fn meal(&self, slot: MealSlot) -> &Meal {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Meals paired with their slot, in serving order.
    pub fn meals(&self) -> impl Iterator<Item = (MealSlot, &Meal)> {
        MealSlot::ALL.into_iter().map(move |slot| (slot, self.meal(slot)))
    }

    /// Sum of the per-meal calorie targets.
    pub fn allocated_calories(&self) -> f64 {
        self.meals().map(|(_, meal)| meal.calories).sum()
    }
}
