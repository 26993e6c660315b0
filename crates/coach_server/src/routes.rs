//! HTTP surface: request/response DTOs and the router.
//!
//! Every fallible handler returns `Result<_, CoachError>` so faults are
//! classified exactly once, in [`CoachError::into_response`].

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::debug_handler;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::timeout::TimeoutLayer;

use crate::domains::{meal_plans, metabolics, workout_plans};
use crate::error::CoachError;
use crate::state::AppState;
use crate::types::{
    ActivityLevel, ConversationContext, DailyMealPlan, DietPreference, Gender, Goal, MacroSplit,
    UserProfile, WeeklyWorkoutPlan,
};

#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<Goal>,
    pub diet_preference: Option<DietPreference>,
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub bmr: i64,
    pub tdee: i64,
    pub target_calories: i64,
    pub macros: MacroSplit,
    /// Set when the calorie target cannot cover protein and fat, leaving a
    /// negative carb allotment. The negative number is reported as-is.
    pub carbs_deficit: bool,
}

fn default_calories() -> i64 {
    2000
}

fn default_diet() -> DietPreference {
    DietPreference::NonVegetarian
}

fn default_level() -> ActivityLevel {
    ActivityLevel::Moderate
}

fn default_goal() -> Goal {
    Goal::Maintain
}

#[derive(Debug, Deserialize)]
pub struct MealPlanRequest {
    #[serde(default = "default_calories")]
    pub target_calories: i64,
    #[serde(default = "default_diet")]
    pub diet_preference: DietPreference,
}

#[derive(Debug, Serialize)]
pub struct MealPlanResponse {
    pub status: &'static str,
    pub daily_plan: DailyMealPlan,
    pub calories: i64,
    pub diet_preference: DietPreference,
}

#[derive(Debug, Deserialize)]
pub struct WorkoutPlanRequest {
    #[serde(default = "default_level")]
    pub activity_level: ActivityLevel,
    #[serde(default = "default_goal")]
    pub goal: Goal,
}

#[derive(Debug, Serialize)]
pub struct WorkoutPlanResponse {
    pub status: &'static str,
    pub weekly_plan: WeeklyWorkoutPlan,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatTurnRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub context: ConversationContext,
}

#[derive(Debug, Serialize)]
pub struct ChatTurnResponse {
    pub status: &'static str,
    pub response: String,
}

fn require<T>(field: &'static str, value: Option<T>) -> Result<T, CoachError> {
    value.ok_or_else(|| CoachError::validation(field, "required field missing"))
}

#[debug_handler]
async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

#[debug_handler]
async fn metrics_endpoint(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = state.metrics.render();
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}

#[debug_handler]
async fn calculate(
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, CoachError> {
    let Json(req) = payload.map_err(|rej| CoachError::validation("body", rej.body_text()))?;

    let profile = UserProfile {
        weight: require("weight", req.weight)?,
        height: require("height", req.height)?,
        age: require("age", req.age)?,
        gender: require("gender", req.gender)?,
        activity_level: require("activity_level", req.activity_level)?,
        goal: require("goal", req.goal)?,
        diet_preference: require("diet_preference", req.diet_preference)?,
    };

    let result = metabolics::nutrition_for(&profile);
    Ok(Json(CalculateResponse {
        bmr: result.bmr,
        tdee: result.tdee,
        target_calories: result.target_calories,
        macros: result.macros,
        carbs_deficit: result.carbs_deficit(),
    }))
}

#[debug_handler]
async fn generate_meal_plan(Json(req): Json<MealPlanRequest>) -> Json<MealPlanResponse> {
    let mut rng = rand::rng();
    let daily_plan = meal_plans::select_meal_plan(req.diet_preference, &mut rng);
    Json(MealPlanResponse {
        status: "success",
        daily_plan,
        calories: req.target_calories,
        diet_preference: req.diet_preference,
    })
}

#[debug_handler]
async fn generate_workout_plan(Json(req): Json<WorkoutPlanRequest>) -> Json<WorkoutPlanResponse> {
    let weekly_plan = workout_plans::select_workout_plan(req.activity_level, req.goal);
    Json(WorkoutPlanResponse {
        status: "success",
        weekly_plan,
        activity_level: req.activity_level,
        goal: req.goal,
    })
}

#[debug_handler]
async fn text_to_speech(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SpeechRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoachError> {
    let Json(req) = payload.map_err(|rej| CoachError::validation("body", rej.body_text()))?;
    let text = req
        .text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| CoachError::validation("text", "required field missing"))?;

    let audio = state.speech.synthesize(&text).await?;

    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    Ok((
        [
            (header::CONTENT_TYPE, "audio/mpeg".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"speech_{stamp}.mp3\""),
            ),
        ],
        audio,
    ))
}

#[debug_handler]
async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatTurnRequest>,
) -> Json<ChatTurnResponse> {
    let (response, _source) = state.chat.respond(&req.message, &req.context).await;
    Json(ChatTurnResponse {
        status: "success",
        response,
    })
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_endpoint))
        .route("/calculate", post(calculate))
        .route("/generate_meal_plan", post(generate_meal_plan))
        .route("/generate_workout_plan", post(generate_workout_plan))
        .route("/text_to_speech", post(text_to_speech))
        .route("/chat", post(chat))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .with_state(state)
}
