//! History Fetcher with default-meal fallback.

use crate::{
    models::{default_meals, MealRecord},
    services::providers::MealHistoryProvider,
};

/// Loads a user's meal history, falling back to the default meals.
///
/// A failed fetch and an empty history both yield `default_meals()`; the error
/// is logged and goes no further.
pub async fn load_history(provider: &dyn MealHistoryProvider, user_id: &str) -> Vec<MealRecord> {
    match provider.fetch_user_meals(user_id).await {
        Ok(meals) if meals.is_empty() => {
            tracing::info!(
                user_id = %user_id,
                provider = provider.name(),
                "No meal history for user, using default meals"
            );
            default_meals()
        }
        Ok(meals) => meals,
        Err(e) => {
            tracing::warn!(
                user_id = %user_id,
                provider = provider.name(),
                error = %e,
                "Meal history fetch failed, using default meals"
            );
            default_meals()
        }
    }
}
