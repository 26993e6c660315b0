//! Deterministic fallback responder for chat turns.
//!
//! The engine decodes the message into an [`Intent`] once, against an
//! ordered rule table, then dispatches to a pure responder over the caller's
//! conversation context. Rule order is a contract: the first matching entry
//! wins, so a message touching several topics resolves to the
//! earliest-listed one.

use crate::types::{ActivityLevel, ConversationContext, DietPreference, Goal};

/// One user turn decoded into a coaching topic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    CommitmentLength,
    MealFrequency,
    ExerciseFrequency,
    Recovery,
    ProgressTracking,
    Meals,
    Workouts,
    General,
}

/// Trigger table, evaluated top to bottom over the lower-cased message.
const RULES: &[(Intent, &[&str])] = &[
    (
        Intent::CommitmentLength,
        &["how many days", "how long", "duration", "timeline"],
    ),
    (
        Intent::MealFrequency,
        &["how many meals", "meal frequency", "when to eat"],
    ),
    (
        Intent::ExerciseFrequency,
        &["how often", "exercise frequency", "workout frequency"],
    ),
    (Intent::Recovery, &["rest", "recovery", "break", "rest day"]),
    (
        Intent::ProgressTracking,
        &["track progress", "measure results", "check progress"],
    ),
    (Intent::Meals, &["meal", "food", "eat"]),
    (Intent::Workouts, &["exercise", "workout"]),
];

/// Decode a message into its highest-priority intent.
pub fn classify(message: &str) -> Intent {
    let message = message.to_lowercase();
    for (intent, triggers) in RULES {
        if triggers.iter().any(|t| message.contains(t)) {
            return *intent;
        }
    }
    Intent::General
}

/// Answer a chat turn from the stored profile alone. Pure: no side effects,
/// same output for the same (message, context) pair.
pub fn respond(message: &str, ctx: &ConversationContext) -> String {
    match classify(message) {
        Intent::CommitmentLength => commitment_length(ctx.goal),
        Intent::MealFrequency => meal_frequency(ctx.target_calories),
        Intent::ExerciseFrequency => exercise_frequency(ctx.activity_level),
        Intent::Recovery => recovery(ctx.activity_level),
        Intent::ProgressTracking => progress_tracking(ctx.goal),
        Intent::Meals => meals(ctx.diet_preference),
        Intent::Workouts => workouts(ctx.activity_level),
        Intent::General => general(),
    }
}

fn commitment_length(goal: Goal) -> String {
    match goal {
        Goal::LoseWeight => "For weight loss, you should follow this plan for at least 8-12 weeks to see significant results. Aim to lose 1-2 pounds per week for sustainable weight loss. Remember to track your progress and adjust the plan as needed.".into(),
        Goal::GainMuscle => "For muscle gain, commit to this plan for at least 12-16 weeks. Muscle building takes time, and you should expect to gain about 0.5-1 pound of lean muscle per week when following the nutrition and workout plans consistently.".into(),
        Goal::Maintain | Goal::Unknown => "For maintaining your fitness level and weight, this is meant to be a sustainable lifestyle plan. Start with a 12-week commitment, then adjust based on your progress and goals. Regular check-ins every 4 weeks will help ensure you're staying on track.".into(),
    }
}

fn meal_frequency(target_calories: i64) -> String {
    if target_calories > 2000 {
        format!(
            "With your target of {target_calories} calories, aim for 5-6 smaller meals throughout the day. This helps maintain steady energy levels and makes it easier to meet your caloric needs."
        )
    } else {
        format!(
            "With your target of {target_calories} calories, aim for 3 main meals and 1-2 snacks per day. Space your meals every 3-4 hours to maintain stable blood sugar levels."
        )
    }
}

fn exercise_frequency(level: ActivityLevel) -> String {
    match level {
        ActivityLevel::Sedentary => "Start with 3 days per week of light exercise, focusing on building consistency. Include rest days between workouts to allow your body to adjust to the new routine.".into(),
        ActivityLevel::Moderate => "Aim for 4-5 workout days per week, alternating between strength training and cardio. This gives you enough stimulus for progress while allowing adequate recovery.".into(),
        ActivityLevel::Active | ActivityLevel::Unknown => "With your active lifestyle, you can train 5-6 days per week. Just ensure you're taking at least one full rest day and listening to your body's recovery needs.".into(),
    }
}

fn recovery(level: ActivityLevel) -> String {
    match level {
        ActivityLevel::Active => "Take at least one full rest day per week. Active recovery like light walking or yoga can be done on other days when you feel you need extra recovery.".into(),
        _ => "Include 2-3 rest days per week, spacing them between workout days. This helps prevent burnout and allows proper recovery, especially when you're starting out.".into(),
    }
}

fn progress_tracking(goal: Goal) -> String {
    match goal {
        Goal::LoseWeight => "Track your progress weekly by: 1) Weighing yourself first thing in the morning, 2) Taking body measurements, 3) Tracking your energy levels and workout performance, 4) Taking progress photos monthly.".into(),
        Goal::GainMuscle => "Monitor your progress by: 1) Tracking your strength gains in workouts, 2) Taking monthly body measurements, 3) Weighing yourself weekly, 4) Taking progress photos every 4 weeks.".into(),
        Goal::Maintain | Goal::Unknown => "Keep track of your maintenance by: 1) Monthly body measurements, 2) Weekly weigh-ins, 3) Tracking your energy levels and workout performance, 4) Regular progress photos if desired.".into(),
    }
}

fn meals(pref: DietPreference) -> String {
    match pref {
        DietPreference::Vegetarian => "For your vegetarian diet, I recommend focusing on plant-based proteins like beans, lentils, and tofu. Include plenty of vegetables and whole grains for balanced nutrition. Aim to eat every 3-4 hours to maintain energy levels.".into(),
        DietPreference::Vegan => "As a vegan, make sure to get enough protein from sources like tempeh, seitan, and legumes. Include a variety of fruits, vegetables, and whole grains in your meals. Consider B12 supplementation and eat regularly throughout the day.".into(),
        DietPreference::NonVegetarian | DietPreference::Unknown => "For a balanced diet, include lean proteins, whole grains, and plenty of vegetables. Try to have regular meals and healthy snacks throughout the day. Timing your meals every 3-4 hours helps maintain stable energy levels.".into(),
    }
}

fn workouts(level: ActivityLevel) -> String {
    match level {
        ActivityLevel::Sedentary => "Start with light activities like walking, stretching, or yoga. Aim for 30 minutes of activity most days of the week, with plenty of rest between sessions as you build up your fitness level.".into(),
        ActivityLevel::Moderate => "Include a mix of cardio and strength training. Try to exercise 3-5 times per week for 30-45 minutes, allowing for rest days between strength training sessions.".into(),
        ActivityLevel::Active | ActivityLevel::Unknown => "For your active lifestyle, focus on a combination of strength training, cardio, and flexibility exercises. Make sure to include rest days for recovery, and vary your workout intensity throughout the week.".into(),
    }
}

fn general() -> String {
    "I can help you with specific questions about your meal plan, workout routine, exercise frequency, rest days, and progress tracking. What would you like to know more about?".into()
}
