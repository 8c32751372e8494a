use std::sync::Arc;

use crate::services::Recommender;

/// Shared application state
///
/// The engine is immutable after startup, so a bare `Arc` is enough; no lock
/// is involved anywhere in the request path.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

impl AppState {
    /// Wraps a constructed engine for sharing across handlers
    pub fn new(recommender: Recommender) -> Self {
        Self {
            recommender: Arc::new(recommender),
        }
    }
}
