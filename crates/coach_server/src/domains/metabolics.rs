//! Metabolic calculator: body metrics to calorie and macro targets.
//!
//! All intermediate math stays in f64; rounding happens once, in
//! [`nutrition_for`], when the numbers cross the response boundary.

use crate::types::{ActivityLevel, Gender, Goal, MacroSplit, NutritionResult, UserProfile};

/// Basal metabolic rate (kcal/day) via the Mifflin-St Jeor equation.
/// Caller guarantees weight in kg and height in cm.
pub fn bmr(weight: f64, height: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight + 6.25 * height - 5.0 * f64::from(age);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Other => base - 161.0,
    }
}

fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary | ActivityLevel::Unknown => 1.2,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
    }
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier.
/// An unrecognized level scales like sedentary instead of failing the request.
pub fn tdee(bmr: f64, level: ActivityLevel) -> f64 {
    bmr * activity_multiplier(level)
}

/// Calorie adjustment for the fitness goal: a fixed 500 kcal deficit or
/// surplus, unchanged for maintenance.
pub fn adjust_for_goal(tdee: f64, goal: Goal) -> f64 {
    match goal {
        Goal::LoseWeight => tdee - 500.0,
        Goal::GainMuscle => tdee + 500.0,
        Goal::Maintain | Goal::Unknown => tdee,
    }
}

pub struct RawMacros {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Macro distribution in grams: protein at 2.2 g per unit of body weight,
/// fat at 25% of calories, carbs from whatever calories remain. Carbs go
/// negative when the target cannot cover protein and fat; that value is
/// returned as-is for the caller to surface.
///
/// TODO: confirm the intended unit of the 2.2 protein factor with product;
/// it reads as a per-lb allotment applied to a kg weight.
pub fn macro_split(weight: f64, target_calories: f64) -> RawMacros {
    let protein = weight * 2.2;
    let fat = (target_calories * 0.25) / 9.0;
    let carbs = (target_calories - (protein * 4.0 + fat * 9.0)) / 4.0;
    RawMacros {
        protein,
        carbs,
        fat,
    }
}

/// The full pipeline for one profile, rounded to whole kcal/grams.
pub fn nutrition_for(profile: &UserProfile) -> NutritionResult {
    let bmr = bmr(profile.weight, profile.height, profile.age, profile.gender);
    let tdee = tdee(bmr, profile.activity_level);
    let target = adjust_for_goal(tdee, profile.goal);
    let macros = macro_split(profile.weight, target);

    NutritionResult {
        bmr: bmr.round() as i64,
        tdee: tdee.round() as i64,
        target_calories: target.round() as i64,
        macros: MacroSplit {
            protein: macros.protein.round() as i64,
            carbs: macros.carbs.round() as i64,
            fat: macros.fat.round() as i64,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DietPreference;

    #[test]
    fn bmr_matches_mifflin_st_jeor_reference_male() {
        let value = bmr(70.0, 175.0, 25, Gender::Male);
        assert!((value - 1742.75).abs() < f64::EPSILON);
    }

    #[test]
    fn bmr_non_male_subtracts_161() {
        let male = bmr(70.0, 175.0, 25, Gender::Male);
        let other = bmr(70.0, 175.0, 25, Gender::Other);
        assert!((male - other - 166.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tdee_unknown_level_uses_sedentary_multiplier() {
        assert!((tdee(1000.0, ActivityLevel::Unknown) - 1200.0).abs() < f64::EPSILON);
        assert!((tdee(1000.0, ActivityLevel::Sedentary) - 1200.0).abs() < f64::EPSILON);
        assert!((tdee(1000.0, ActivityLevel::Moderate) - 1550.0).abs() < f64::EPSILON);
        assert!((tdee(1000.0, ActivityLevel::Active) - 1725.0).abs() < f64::EPSILON);
    }

    #[test]
    fn goal_adjustment_is_plus_minus_500() {
        assert!((adjust_for_goal(2000.0, Goal::LoseWeight) - 1500.0).abs() < f64::EPSILON);
        assert!((adjust_for_goal(2000.0, Goal::GainMuscle) - 2500.0).abs() < f64::EPSILON);
        assert!((adjust_for_goal(2000.0, Goal::Maintain) - 2000.0).abs() < f64::EPSILON);
        assert!((adjust_for_goal(2000.0, Goal::Unknown) - 2000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn macro_split_is_algebraically_consistent() {
        let m = macro_split(80.0, 2400.0);
        assert!((m.protein - 176.0).abs() < 1e-9);
        assert!((m.fat - 2400.0 * 0.25 / 9.0).abs() < 1e-9);
        let recomposed = m.protein * 4.0 + m.carbs * 4.0 + m.fat * 9.0;
        assert!((recomposed - 2400.0).abs() < 1e-9);
    }

    #[test]
    fn macro_split_reports_negative_carbs() {
        // 150 kg at an 800 kcal target: protein alone exceeds the budget.
        // protein 330 g = 1320 kcal, fat 200 kcal, carbs (800-1320-200)/4 = -180 g
        let m = macro_split(150.0, 800.0);
        assert!((m.carbs + 180.0).abs() < 1e-9);
    }

    #[test]
    fn nutrition_for_rounds_at_the_boundary() {
        let profile = UserProfile {
            weight: 70.0,
            height: 175.0,
            age: 25,
            gender: Gender::Male,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::Maintain,
            diet_preference: DietPreference::NonVegetarian,
        };
        let result = nutrition_for(&profile);
        assert_eq!(result.bmr, 1743);
        assert_eq!(result.tdee, 2091); // 1742.75 * 1.2 = 2091.3
        assert_eq!(result.target_calories, 2091);
        assert_eq!(result.macros.protein, 154); // 70 * 2.2
        assert!(!result.carbs_deficit());
    }

    #[test]
    fn nutrition_for_flags_carbs_deficit() {
        let profile = UserProfile {
            weight: 200.0,
            height: 140.0,
            age: 80,
            gender: Gender::Other,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::LoseWeight,
            diet_preference: DietPreference::Vegan,
        };
        let result = nutrition_for(&profile);
        assert!(result.macros.carbs < 0);
        assert!(result.carbs_deficit());
    }
}
