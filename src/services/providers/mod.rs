//! External collaborators of the recommender
//!
//! Meal history comes from, and recommendations are stored in, the Spring
//! backend.

use crate::{
    error::AppResult,
    models::{MealRecord, SaveRecommendationRequest},
};

pub mod spring;

pub use spring::SpringClient;

/// Source of a user's meal history
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MealHistoryProvider: Send + Sync {
    /// Fetch every recorded meal for the user
    ///
    /// An empty vector means the call succeeded but the user has no records.
    async fn fetch_user_meals(&self, user_id: &str) -> AppResult<Vec<MealRecord>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Sink that persists chosen recommendations
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationSink: Send + Sync {
    async fn save_recommendation(&self, request: &SaveRecommendationRequest) -> AppResult<()>;
}
