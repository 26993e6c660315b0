//! Weekly workout tables and the goal overlay.
//!
//! `base_plan` constructs an owned table on every call, so the overlay in
//! [`select_workout_plan`] can never leak into state shared across requests.

use crate::types::{ActivityLevel, Goal, WeeklyWorkoutPlan};

pub(crate) fn base_plan(level: ActivityLevel) -> WeeklyWorkoutPlan {
    match level {
        ActivityLevel::Sedentary => WeeklyWorkoutPlan {
            monday: "30-minute brisk walk + 10-minute stretching".into(),
            tuesday: "Rest day".into(),
            wednesday: "30-minute yoga session".into(),
            thursday: "Rest day".into(),
            friday: "30-minute light cardio".into(),
            saturday: "Rest day".into(),
            sunday: "30-minute stretching and mobility exercises".into(),
        },
        ActivityLevel::Active => WeeklyWorkoutPlan {
            monday: "60-minute strength training (push day)".into(),
            tuesday: "45-minute cardio + core workout".into(),
            wednesday: "60-minute strength training (pull day)".into(),
            thursday: "45-minute HIIT + plyometrics".into(),
            friday: "60-minute strength training (legs)".into(),
            saturday: "45-minute cardio + core workout".into(),
            sunday: "60-minute active recovery (yoga/stretching)".into(),
        },
        ActivityLevel::Moderate | ActivityLevel::Unknown => WeeklyWorkoutPlan {
            monday: "45-minute strength training (upper body)".into(),
            tuesday: "30-minute cardio (running/cycling)".into(),
            wednesday: "45-minute strength training (lower body)".into(),
            thursday: "30-minute HIIT workout".into(),
            friday: "45-minute strength training (full body)".into(),
            saturday: "Rest day".into(),
            sunday: "45-minute yoga or stretching".into(),
        },
    }
}

/// Weekly plan for the activity level with the goal overlay applied:
/// weight loss intensifies the Tuesday/Thursday cardio slots, muscle gain
/// the Monday/Wednesday/Friday strength slots. The overlay only ever
/// touches the fresh copy built here.
pub fn select_workout_plan(level: ActivityLevel, goal: Goal) -> WeeklyWorkoutPlan {
    let mut plan = base_plan(level);
    match goal {
        Goal::LoseWeight => {
            plan.tuesday = "45-minute cardio (running/cycling) + 15-minute HIIT".into();
            plan.thursday = "45-minute HIIT workout + 15-minute cardio".into();
        }
        Goal::GainMuscle => {
            plan.monday = "60-minute strength training (upper body) + 15-minute core".into();
            plan.wednesday = "60-minute strength training (lower body) + 15-minute core".into();
            plan.friday = "60-minute strength training (full body)".into();
        }
        Goal::Maintain | Goal::Unknown => {}
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lose_weight_overrides_exactly_tuesday_and_thursday() {
        let base = base_plan(ActivityLevel::Moderate);
        let plan = select_workout_plan(ActivityLevel::Moderate, Goal::LoseWeight);
        assert_eq!(plan.monday, base.monday);
        assert_ne!(plan.tuesday, base.tuesday);
        assert_eq!(plan.wednesday, base.wednesday);
        assert_ne!(plan.thursday, base.thursday);
        assert_eq!(plan.friday, base.friday);
        assert_eq!(plan.saturday, base.saturday);
        assert_eq!(plan.sunday, base.sunday);
    }

    #[test]
    fn gain_muscle_overrides_exactly_the_strength_days() {
        let base = base_plan(ActivityLevel::Active);
        let plan = select_workout_plan(ActivityLevel::Active, Goal::GainMuscle);
        assert_ne!(plan.monday, base.monday);
        assert_eq!(plan.tuesday, base.tuesday);
        assert_ne!(plan.wednesday, base.wednesday);
        assert_eq!(plan.thursday, base.thursday);
        assert_ne!(plan.friday, base.friday);
        assert_eq!(plan.saturday, base.saturday);
        assert_eq!(plan.sunday, base.sunday);
    }

    #[test]
    fn maintain_leaves_the_base_table_untouched() {
        let base = base_plan(ActivityLevel::Sedentary);
        let plan = select_workout_plan(ActivityLevel::Sedentary, Goal::Maintain);
        assert_eq!(plan, base);
    }

    #[test]
    fn unknown_level_falls_back_to_moderate() {
        let plan = select_workout_plan(ActivityLevel::Unknown, Goal::Maintain);
        assert_eq!(plan, base_plan(ActivityLevel::Moderate));
    }

    #[test]
    fn sequential_calls_show_no_cross_call_contamination() {
        let first = select_workout_plan(ActivityLevel::Moderate, Goal::LoseWeight);
        let untouched = select_workout_plan(ActivityLevel::Moderate, Goal::Maintain);
        let second = select_workout_plan(ActivityLevel::Moderate, Goal::LoseWeight);
        assert_eq!(first, second);
        assert_eq!(untouched, base_plan(ActivityLevel::Moderate));
    }
}
