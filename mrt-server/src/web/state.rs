//! Application state for the web layer.

use std::sync::Arc;

use crate::service::StationService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Station and schedule service
    pub stations: Arc<StationService>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(stations: StationService) -> Self {
        Self {
            stations: Arc::new(stations),
        }
    }
}
