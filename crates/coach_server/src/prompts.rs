use crate::types::ConversationContext;

/// System prompt for the chat backend, embedding the caller's stored profile
/// so generated answers align with their plan.
pub fn coaching_system_prompt(ctx: &ConversationContext) -> String {
    let calories = if ctx.target_calories > 0 {
        ctx.target_calories.to_string()
    } else {
        "not specified".to_string()
    };

    format!(
        "You are an AI Diet and Fitness Coach assistant. The user has the following context:\n\
         - Diet Preference: {}\n\
         - Activity Level: {}\n\
         - Fitness Goal: {}\n\
         - Daily Calorie Target: {}\n\n\
         Provide helpful, accurate, and personalized advice about diet and fitness based on this context. \
         If the user asks about specific exercises or meals, make sure your suggestions align with their preferences and goals. \
         Always maintain a professional and encouraging tone.",
        ctx.diet_preference, ctx.activity_level, ctx.goal, calories,
    )
}
