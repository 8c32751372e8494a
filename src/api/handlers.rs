use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{Mood, Restaurant};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct MoodQuery {
    pub mood: String,
}

#[derive(Debug, Serialize)]
pub struct MoodResponse {
    pub keyword: String,
    pub label: String,
}

impl From<Mood> for MoodResponse {
    fn from(mood: Mood) -> Self {
        Self {
            keyword: mood.keyword().to_string(),
            label: mood.label().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FoodRecommendationResponse {
    pub mood: Mood,
    pub foods: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RestaurantRecommendationRequest {
    pub food_items: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RestaurantResponse {
    pub name: String,
    pub cuisines: String,
    pub rating: f32,
    pub address: String,
}

impl From<&Restaurant> for RestaurantResponse {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            name: restaurant.name.clone(),
            cuisines: restaurant.cuisines.clone(),
            rating: restaurant.rating,
            address: restaurant.address.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub mood: Mood,
    pub foods: Vec<String>,
    pub restaurants: Vec<RestaurantResponse>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Lists the moods with enough survey coverage to recommend from.
/// Reports an explicit insufficient-data condition when no mood qualifies,
/// rather than an empty list.
pub async fn get_moods(State(state): State<AppState>) -> AppResult<Json<Vec<MoodResponse>>> {
    let moods = state.recommender.available_moods();
    if moods.is_empty() {
        return Err(AppError::InsufficientData(
            "No mood has enough survey coverage".to_string(),
        ));
    }
    Ok(Json(moods.into_iter().map(MoodResponse::from).collect()))
}

/// Top comfort foods for a mood
pub async fn get_food_recommendations(
    State(state): State<AppState>,
    Query(query): Query<MoodQuery>,
) -> AppResult<Json<FoodRecommendationResponse>> {
    let mood = parse_mood(&query.mood)?;
    let foods = state.recommender.recommend_foods(mood);
    if foods.is_empty() {
        return Err(AppError::InsufficientData(format!(
            "Not enough survey data for mood '{mood}'"
        )));
    }
    Ok(Json(FoodRecommendationResponse { mood, foods }))
}

/// Top-rated restaurants for a list of comfort foods
pub async fn recommend_restaurants(
    State(state): State<AppState>,
    Json(request): Json<RestaurantRecommendationRequest>,
) -> AppResult<Json<Vec<RestaurantResponse>>> {
    let restaurants = state.recommender.recommend_restaurants(&request.food_items);
    if restaurants.is_empty() {
        return Err(AppError::InsufficientData(
            "No matching restaurants for the given foods".to_string(),
        ));
    }
    Ok(Json(
        restaurants.iter().map(RestaurantResponse::from).collect(),
    ))
}

/// The composed pipeline: mood → foods → restaurant blocks
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(query): Query<MoodQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    let mood = parse_mood(&query.mood)?;
    let foods = state.recommender.recommend_foods(mood);
    if foods.is_empty() {
        return Err(AppError::InsufficientData(format!(
            "Not enough survey data for mood '{mood}'"
        )));
    }

    let restaurants = state.recommender.recommend_restaurants(&foods);
    tracing::debug!(
        mood = %mood,
        foods = foods.len(),
        restaurants = restaurants.len(),
        "Recommendation pipeline completed"
    );

    Ok(Json(RecommendationResponse {
        mood,
        foods,
        restaurants: restaurants.iter().map(RestaurantResponse::from).collect(),
    }))
}

fn parse_mood(keyword: &str) -> AppResult<Mood> {
    Mood::from_keyword(keyword)
        .ok_or_else(|| AppError::InvalidInput(format!("Unknown mood keyword '{keyword}'")))
}
