use tracing::debug;

use crate::models::profile::{GOAL_WEIGHT_GAIN, GOAL_WEIGHT_LOSS};
use crate::models::{ActivityLevel, DailyNeeds, Macros, UserProfile};
use crate::planner::constants::*;

/// Calculate basal metabolic rate in kcal/day.
///
/// Gender "male" (any case) uses the male coefficients; every other value
/// uses the female ones. Inputs are not range-checked, so zero or negative
/// measurements produce a correspondingly meaningless result.
pub fn calculate_bmr(profile: &UserProfile) -> f64 {
    let weight = profile.weight;
    let height = profile.height;
    let age = f64::from(profile.age);

    if profile.is_male() {
        MALE_BMR_BASE + (MALE_BMR_PER_KG * weight) + (MALE_BMR_PER_CM * height)
            - (MALE_BMR_PER_YEAR * age)
    } else {
        FEMALE_BMR_BASE + (FEMALE_BMR_PER_KG * weight) + (FEMALE_BMR_PER_CM * height)
            - (FEMALE_BMR_PER_YEAR * age)
    }
}

/// Look up the TDEE multiplier for an activity level key.
///
/// Total over all strings: unknown keys get the sedentary multiplier.
pub fn activity_multiplier(activity: &str) -> f64 {
    ActivityLevel::parse(activity).map_or(FALLBACK_ACTIVITY_MULT, ActivityLevel::multiplier)
}

/// Total daily energy expenditure before any goal adjustment.
pub fn calculate_tdee(profile: &UserProfile) -> f64 {
    calculate_bmr(profile) * activity_multiplier(&profile.activity_level)
}

/// Calorie factor implied by the profile goals.
///
/// Weight loss takes precedence over weight gain when both are present.
pub fn goal_factor(profile: &UserProfile) -> f64 {
    if profile.has_goal(GOAL_WEIGHT_LOSS) {
        WEIGHT_LOSS_FACTOR
    } else if profile.has_goal(GOAL_WEIGHT_GAIN) {
        WEIGHT_GAIN_FACTOR
    } else {
        1.0
    }
}

/// Split an (unrounded) calorie target into macro grams.
pub fn macros_for(target_calories: f64) -> Macros {
    Macros {
        protein: grams(target_calories, PROTEIN_SHARE, KCAL_PER_G_PROTEIN),
        carbs: grams(target_calories, CARBS_SHARE, KCAL_PER_G_CARBS),
        fat: grams(target_calories, FAT_SHARE, KCAL_PER_G_FAT),
    }
}

fn grams(target_calories: f64, share: f64, kcal_per_gram: i64) -> i64 {
    round_half_up(target_calories * share / kcal_per_gram as f64)
}

/// Round to the nearest integer with halves going toward positive infinity.
///
/// `f64::round` sends negative halves away from zero (-2.5 to -3); this keeps
/// them at -2 so degenerate profiles round the same way as positive ones.
fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

/// Calculate the daily calorie target and macro split.
///
/// Macros are derived from the unrounded target, so their energy can differ
/// from `calories` by a few kcal.
pub fn calculate_daily_needs(profile: &UserProfile) -> DailyNeeds {
    let tdee = calculate_tdee(profile);
    let target = tdee * goal_factor(profile);

    debug!(tdee, target, "computed daily energy needs");

    DailyNeeds {
        calories: round_half_up(target),
        macros: macros_for(target),
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;

    use super::*;
    use crate::models::ProfileInput;

    fn profile(gender: &str, activity: &str) -> UserProfile {
        ProfileInput::new(30, gender, 175.0, 70.0, activity)
            .validate()
            .unwrap()
    }

    #[test]
    fn test_bmr_male() {
        let bmr = calculate_bmr(&profile("male", "moderate"));
        assert_float_absolute_eq!(bmr, 1695.667, 1e-6);
    }

    #[test]
    fn test_bmr_female() {
        let bmr = calculate_bmr(&profile("female", "moderate"));
        // 447.593 + 9.247*70 + 3.098*175 - 4.330*30
        assert_float_absolute_eq!(bmr, 1507.133, 1e-6);
    }

    #[test]
    fn test_bmr_unrecognized_gender_uses_female_formula() {
        let other = calculate_bmr(&profile("other", "moderate"));
        let female = calculate_bmr(&profile("female", "moderate"));
        assert_eq!(other, female);
    }

    #[test]
    fn test_bmr_degenerate_inputs_do_not_fail() {
        let mut p = profile("male", "sedentary");
        p.weight = 0.0;
        p.height = 0.0;
        p.age = 120;
        assert!(calculate_bmr(&p) < 0.0);
    }

    #[test]
    fn test_activity_multiplier_table() {
        assert_eq!(activity_multiplier("sedentary"), 1.2);
        assert_eq!(activity_multiplier("light"), 1.375);
        assert_eq!(activity_multiplier("moderate"), 1.55);
        assert_eq!(activity_multiplier("active"), 1.725);
        assert_eq!(activity_multiplier("very_active"), 1.9);
        assert_eq!(activity_multiplier("Very_Active"), 1.9);
    }

    #[test]
    fn test_activity_multiplier_fallback() {
        for junk in ["", "athlete", "very active", " moderate"] {
            assert_eq!(activity_multiplier(junk), SEDENTARY_MULT, "{junk:?}");
        }
    }

    #[test]
    fn test_goal_factor_precedence() {
        let mut p = profile("male", "moderate");
        assert_eq!(goal_factor(&p), 1.0);

        p.goals.insert(GOAL_WEIGHT_GAIN.to_string());
        assert_eq!(goal_factor(&p), WEIGHT_GAIN_FACTOR);

        p.goals.insert(GOAL_WEIGHT_LOSS.to_string());
        assert_eq!(goal_factor(&p), WEIGHT_LOSS_FACTOR);
    }

    #[test]
    fn test_goal_factor_ignores_case() {
        let mut p = profile("male", "moderate");
        p.goals.insert("WEIGHT_GAIN".to_string());
        assert_eq!(goal_factor(&p), WEIGHT_GAIN_FACTOR);

        p.goals.insert("Weight_Loss".to_string());
        assert_eq!(goal_factor(&p), WEIGHT_LOSS_FACTOR);
        assert_eq!(calculate_daily_needs(&p).calories, 2103);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2102.5), 2103);
        assert_eq!(round_half_up(2102.49), 2102);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(0.49999999999999994), 0);
    }

    #[test]
    fn test_daily_needs_uses_tdee() {
        let p = profile("female", "light");
        let needs = calculate_daily_needs(&p);
        assert_eq!(needs.calories, calculate_tdee(&p).round() as i64);
    }

    #[test]
    fn test_daily_needs_weight_loss_example() {
        let mut p = profile("male", "moderate");
        p.goals.insert(GOAL_WEIGHT_LOSS.to_string());

        let needs = calculate_daily_needs(&p);
        assert_eq!(needs.calories, 2103);
        assert_eq!(needs.macros, Macros::new(131, 237, 70));
    }

    #[test]
    fn test_macro_energy_close_to_calories() {
        for activity in ["sedentary", "light", "moderate", "active", "very_active"] {
            let needs = calculate_daily_needs(&profile("female", activity));
            let diff = (needs.macros.calories() - needs.calories).abs();
            // 0.5 g rounding on each macro plus 0.5 kcal on the total
            assert!(diff <= 9, "{activity}: off by {diff}");
        }
    }

    #[test]
    fn test_daily_needs_idempotent() {
        let p = profile("male", "active");
        assert_eq!(calculate_daily_needs(&p), calculate_daily_needs(&p));
    }
}
