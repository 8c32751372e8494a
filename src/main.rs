use anyhow::Context;
use tracing_subscriber::EnvFilter;

use moodfare_api::api::{create_router, AppState};
use moodfare_api::config::Config;
use moodfare_api::datasets::{self, RestaurantFilter};
use moodfare_api::services::text::{english_stopwords, DictionaryLemmatizer};
use moodfare_api::services::Recommender;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("moodfare_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    // Both tables are loaded once and never mutated; every query recomputes
    // from these immutable snapshots.
    let surveys = datasets::load_surveys(&config.survey_data_path)
        .with_context(|| format!("Failed to load survey data from {}", config.survey_data_path))?;
    let restaurants = datasets::load_restaurants(
        &config.restaurant_data_path,
        &RestaurantFilter {
            country_code: config.country_code,
            city: config.city.clone(),
        },
    )
    .with_context(|| {
        format!(
            "Failed to load restaurant data from {}",
            config.restaurant_data_path
        )
    })?;

    tracing::info!(
        surveys = surveys.len(),
        restaurants = restaurants.len(),
        city = %config.city,
        "Datasets loaded"
    );

    let recommender = Recommender::new(
        surveys,
        restaurants,
        english_stopwords(),
        Box::new(DictionaryLemmatizer),
    );
    let state = AppState::new(recommender);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
