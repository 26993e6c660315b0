//! Static meal catalog and the per-slot selector.
//!
//! The catalog is read-only; randomness is injected by the caller so plan
//! selection is reproducible under a seeded rng.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::types::{DailyMealPlan, DietPreference};

pub(crate) struct SlotCandidates {
    pub breakfast: [&'static str; 3],
    pub lunch: [&'static str; 3],
    pub dinner: [&'static str; 3],
    pub snacks: [&'static str; 3],
}

const VEGETARIAN: SlotCandidates = SlotCandidates {
    breakfast: [
        "Oatmeal with berries and nuts",
        "Greek yogurt with granola and honey",
        "Avocado toast with eggs",
    ],
    lunch: [
        "Quinoa salad with mixed vegetables",
        "Vegetable stir-fry with tofu",
        "Lentil soup with whole grain bread",
    ],
    dinner: [
        "Grilled vegetable pasta",
        "Chickpea curry with brown rice",
        "Stuffed bell peppers with quinoa",
    ],
    snacks: [
        "Mixed nuts and dried fruits",
        "Hummus with vegetable sticks",
        "Fruit smoothie with protein powder",
    ],
};

const NON_VEGETARIAN: SlotCandidates = SlotCandidates {
    breakfast: [
        "Scrambled eggs with whole grain toast",
        "Chicken and vegetable omelette",
        "Protein smoothie with banana and peanut butter",
    ],
    lunch: [
        "Grilled chicken salad",
        "Salmon with quinoa and vegetables",
        "Turkey wrap with whole grain tortilla",
    ],
    dinner: [
        "Grilled fish with sweet potato and greens",
        "Lean beef stir-fry with brown rice",
        "Baked chicken with roasted vegetables",
    ],
    snacks: [
        "Greek yogurt with berries",
        "Hard-boiled eggs",
        "Protein bar",
    ],
};

const VEGAN: SlotCandidates = SlotCandidates {
    breakfast: [
        "Smoothie bowl with plant-based protein",
        "Tofu scramble with vegetables",
        "Chia pudding with almond milk",
    ],
    lunch: [
        "Vegan Buddha bowl",
        "Lentil and vegetable curry",
        "Vegan wrap with hummus",
    ],
    dinner: [
        "Vegan chili with brown rice",
        "Stuffed portobello mushrooms",
        "Vegan stir-fry with tofu",
    ],
    snacks: [
        "Roasted chickpeas",
        "Vegan protein shake",
        "Fruit and nut mix",
    ],
};

pub(crate) fn candidates(pref: DietPreference) -> &'static SlotCandidates {
    match pref {
        DietPreference::Vegetarian => &VEGETARIAN,
        DietPreference::Vegan => &VEGAN,
        DietPreference::NonVegetarian | DietPreference::Unknown => &NON_VEGETARIAN,
    }
}

fn draw<R: Rng + ?Sized>(slot: &[&'static str; 3], rng: &mut R) -> String {
    (*slot.choose(rng).expect("catalog slots are non-empty")).to_string()
}

/// One uniform draw per meal slot from the preference's catalog; an unknown
/// preference draws from the non-vegetarian table.
pub fn select_meal_plan<R: Rng + ?Sized>(pref: DietPreference, rng: &mut R) -> DailyMealPlan {
    let catalog = candidates(pref);
    DailyMealPlan {
        breakfast: draw(&catalog.breakfast, rng),
        lunch: draw(&catalog.lunch, rng),
        dinner: draw(&catalog.dinner, rng),
        snacks: draw(&catalog.snacks, rng),
    }
}
