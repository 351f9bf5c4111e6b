// ─────────────────────────────────────────────────────────────────────────────
// BMR coefficients (Harris-Benedict as revised by Roza & Shizgal)
// ─────────────────────────────────────────────────────────────────────────────

pub const MALE_BMR_BASE: f64 = 88.362;
pub const MALE_BMR_PER_KG: f64 = 13.397;
pub const MALE_BMR_PER_CM: f64 = 4.799;
pub const MALE_BMR_PER_YEAR: f64 = 5.677;

pub const FEMALE_BMR_BASE: f64 = 447.593;
pub const FEMALE_BMR_PER_KG: f64 = 9.247;
pub const FEMALE_BMR_PER_CM: f64 = 3.098;
pub const FEMALE_BMR_PER_YEAR: f64 = 4.330;

// ─────────────────────────────────────────────────────────────────────────────
// Activity multipliers (BMR -> TDEE)
// ─────────────────────────────────────────────────────────────────────────────

pub const SEDENTARY_MULT: f64 = 1.2;
pub const LIGHT_MULT: f64 = 1.375;
pub const MODERATE_MULT: f64 = 1.55;
pub const ACTIVE_MULT: f64 = 1.725;
pub const VERY_ACTIVE_MULT: f64 = 1.9;

/// Used for any activity level outside the known set.
pub const FALLBACK_ACTIVITY_MULT: f64 = SEDENTARY_MULT;

// ─────────────────────────────────────────────────────────────────────────────
// Goal adjustments
// ─────────────────────────────────────────────────────────────────────────────

/// 20% deficit.
pub const WEIGHT_LOSS_FACTOR: f64 = 0.8;

/// 20% surplus.
pub const WEIGHT_GAIN_FACTOR: f64 = 1.2;

// ─────────────────────────────────────────────────────────────────────────────
// Macro split (share of calories) and energy density
// ─────────────────────────────────────────────────────────────────────────────

pub const PROTEIN_SHARE: f64 = 0.25;
pub const CARBS_SHARE: f64 = 0.45;
pub const FAT_SHARE: f64 = 0.30;

pub const KCAL_PER_G_PROTEIN: i64 = 4;
pub const KCAL_PER_G_CARBS: i64 = 4;
pub const KCAL_PER_G_FAT: i64 = 9;

// ─────────────────────────────────────────────────────────────────────────────
// Meal allocation
// ─────────────────────────────────────────────────────────────────────────────

pub const BREAKFAST_SHARE: f64 = 0.30;
pub const LUNCH_SHARE: f64 = 0.35;
pub const DINNER_SHARE: f64 = 0.35;

// ─────────────────────────────────────────────────────────────────────────────
// Placeholder meal and recipe
// ─────────────────────────────────────────────────────────────────────────────

pub const PLACEHOLDER_MEAL_NAME: &str = "Placeholder Meal";
pub const PLACEHOLDER_PORTION: &str = "1 serving";
pub const PLACEHOLDER_REASON: &str = "Balanced meal matching your preferences";

/// Fixed per-meal macros in grams (protein, carbs, fat).
pub const PLACEHOLDER_MACROS: (i64, i64, i64) = (20, 40, 10);

pub const PLACEHOLDER_INGREDIENTS: &str = "placeholder ingredients";
pub const PLACEHOLDER_INSTRUCTIONS: &str = "placeholder instructions";

/// Minutes.
pub const PLACEHOLDER_PREP_TIME: u32 = 15;

/// Minutes.
pub const PLACEHOLDER_COOK_TIME: u32 = 30;
