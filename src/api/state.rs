use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    services::{providers::SpringClient, RecommendationService, SlotPolicy},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<RecommendationService>,
}

impl AppState {
    pub fn new(recommender: RecommendationService) -> Self {
        Self {
            recommender: Arc::new(recommender),
        }
    }

    /// Wires the Spring backend client into the recommender
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let client = Arc::new(SpringClient::new(
            config.spring_url.clone(),
            std::time::Duration::from_secs(config.request_timeout_secs),
        )?);

        let recommender =
            RecommendationService::new(client.clone(), client, SlotPolicy::from(config));

        Ok(Self::new(recommender))
    }
}
