use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Mood availability
        .route("/moods", get(handlers::get_moods))
        // Recommendation pipeline
        .route("/recommendations", get(handlers::get_recommendations))
        .route(
            "/recommendations/foods",
            get(handlers::get_food_recommendations),
        )
        .route(
            "/recommendations/restaurants",
            post(handlers::recommend_restaurants),
        )
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
