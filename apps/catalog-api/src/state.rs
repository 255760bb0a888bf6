//! Application state management

use database::elasticsearch::ElasticClient;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Cluster client used by readiness checks; `None` for the memory backend
    pub elastic: Option<ElasticClient>,
}

impl AppState {
    pub fn new(config: Config, elastic: Option<ElasticClient>) -> Self {
        Self { config, elastic }
    }
}
