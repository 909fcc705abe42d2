//! Application state for the API server

use pantry_core::FoodStore;
use std::sync::Arc;

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    /// The food collection
    pub store: Arc<FoodStore>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create state backed by an empty store
    pub fn new() -> Self {
        Self::with_store(FoodStore::new())
    }

    /// Create state backed by a pre-built store (used by tests that
    /// inject a scripted id generator)
    pub fn with_store(store: FoodStore) -> Self {
        Self {
            store: Arc::new(store),
            start_time: std::time::Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
