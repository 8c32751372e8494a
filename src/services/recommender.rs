use std::collections::HashSet;

use crate::models::{Mood, Restaurant, SurveyRecord};
use crate::services::cuisine::match_restaurants;
use crate::services::mood_index::food_frequencies;
use crate::services::selector::top_foods;
use crate::services::text::Lemmatizer;

/// The recommendation engine
///
/// Owns immutable snapshots of both tables plus the injected text
/// capabilities. Every query recomputes from scratch; there is no cache and
/// nothing to lock. The survey table is small enough that the per-mood
/// availability scan stays cheap.
pub struct Recommender {
    surveys: Vec<SurveyRecord>,
    restaurants: Vec<Restaurant>,
    stopwords: HashSet<String>,
    lemmatizer: Box<dyn Lemmatizer>,
}

impl Recommender {
    /// Creates an engine over fully loaded, pre-filtered tables
    pub fn new(
        surveys: Vec<SurveyRecord>,
        restaurants: Vec<Restaurant>,
        stopwords: HashSet<String>,
        lemmatizer: Box<dyn Lemmatizer>,
    ) -> Self {
        Self {
            surveys,
            restaurants,
            stopwords,
            lemmatizer,
        }
    }

    /// The top comfort foods for a mood, at most three, most frequent first.
    /// An empty list is a normal output for a mood nobody mentioned.
    pub fn recommend_foods(&self, mood: Mood) -> Vec<String> {
        let counts = food_frequencies(
            mood.keyword(),
            &self.surveys,
            &self.stopwords,
            self.lemmatizer.as_ref(),
        );
        top_foods(&counts)
    }

    /// Top-rated restaurants for the given foods, grouped per food in input
    /// order, up to three venues each
    pub fn recommend_restaurants(&self, food_items: &[String]) -> Vec<Restaurant> {
        match_restaurants(food_items, &self.restaurants)
    }

    /// Moods worth offering: those whose survey scan turns up at least one
    /// comfort food. Re-runs the full index per mood on every call.
    pub fn available_moods(&self) -> Vec<Mood> {
        Mood::ALL
            .iter()
            .filter(|mood| {
                !food_frequencies(
                    mood.keyword(),
                    &self.surveys,
                    &self.stopwords,
                    self.lemmatizer.as_ref(),
                )
                .is_empty()
            })
            .copied()
            .collect()
    }
}
