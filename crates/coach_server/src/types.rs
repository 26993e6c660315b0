use serde::{Deserialize, Serialize};

/// Gender as used by the Mifflin-St Jeor equation. Anything that is not
/// `male` on the wire takes the non-male constant.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Moderate,
    Active,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum Goal {
    #[serde(rename = "lose weight", alias = "lose-weight")]
    LoseWeight,
    #[serde(rename = "gain muscle", alias = "gain-muscle")]
    GainMuscle,
    #[serde(rename = "maintain")]
    Maintain,
    #[default]
    #[serde(other, rename = "unknown")]
    Unknown,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DietPreference {
    Vegetarian,
    #[serde(rename = "non-vegetarian")]
    NonVegetarian,
    Vegan,
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::Unknown => "not specified",
        };
        f.write_str(s)
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Goal::LoseWeight => "lose weight",
            Goal::GainMuscle => "gain muscle",
            Goal::Maintain => "maintain",
            Goal::Unknown => "not specified",
        };
        f.write_str(s)
    }
}

impl std::fmt::Display for DietPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DietPreference::Vegetarian => "vegetarian",
            DietPreference::NonVegetarian => "non-vegetarian",
            DietPreference::Vegan => "vegan",
            DietPreference::Unknown => "not specified",
        };
        f.write_str(s)
    }
}

/// Body metrics and goals for one request. Immutable once decoded.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct UserProfile {
    /// kg
    pub weight: f64,
    /// cm
    pub height: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub diet_preference: DietPreference,
}

/// Grams of protein/carbs/fat composing the calorie target. Carbs can be
/// negative for low targets with high body weight; callers surface this
/// rather than clamping it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroSplit {
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

/// Computed nutrition targets, kcal/day, rounded at the boundary only.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct NutritionResult {
    pub bmr: i64,
    pub tdee: i64,
    pub target_calories: i64,
    pub macros: MacroSplit,
}

impl NutritionResult {
    /// True when the calorie target cannot cover the protein+fat allotment.
    pub fn carbs_deficit(&self) -> bool {
        self.macros.carbs < 0
    }
}

/// One meal name per slot, drawn from the catalog.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct DailyMealPlan {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: String,
}

/// One activity description per weekday. Every value is owned so a goal
/// overlay can only ever touch this instance.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct WeeklyWorkoutPlan {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

/// Profile subset the caller resends with every chat turn; the server keeps
/// no state between turns. Absent fields decode to their `Unknown`/zero
/// defaults before any backend call is attempted.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ConversationContext {
    #[serde(default)]
    pub diet_preference: DietPreference,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal: Goal,
    #[serde(default)]
    pub target_calories: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_categories_decode_to_unknown() {
        let level: ActivityLevel = serde_json::from_str("\"couch\"").unwrap();
        assert_eq!(level, ActivityLevel::Unknown);
        let pref: DietPreference = serde_json::from_str("\"pescatarian\"").unwrap();
        assert_eq!(pref, DietPreference::Unknown);
        let goal: Goal = serde_json::from_str("\"bulk\"").unwrap();
        assert_eq!(goal, Goal::Unknown);
    }

    #[test]
    fn goal_accepts_spaced_and_kebab_forms() {
        let spaced: Goal = serde_json::from_str("\"lose weight\"").unwrap();
        let kebab: Goal = serde_json::from_str("\"lose-weight\"").unwrap();
        assert_eq!(spaced, Goal::LoseWeight);
        assert_eq!(kebab, Goal::LoseWeight);
    }

    #[test]
    fn context_defaults_are_materialized() {
        let ctx: ConversationContext = serde_json::from_str("{}").unwrap();
        assert_eq!(ctx.diet_preference, DietPreference::Unknown);
        assert_eq!(ctx.activity_level, ActivityLevel::Unknown);
        assert_eq!(ctx.goal, Goal::Unknown);
        assert_eq!(ctx.target_calories, 0);
    }
}
