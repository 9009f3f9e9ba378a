//! Recommendation Orchestrator.
//!
//! Runs the slots in order, records each pick with the sink, and stops early
//! unless every slot was asked for.

use std::sync::Arc;

use rand::Rng;

use crate::{
    config::Config,
    models::{MealRecord, MealSlot, Recommendation, SaveRecommendationRequest},
    services::{
        history::load_history,
        providers::{MealHistoryProvider, RecommendationSink},
        recommender::recommend_for_slot,
    },
};

/// Controls how many slots are recommended per request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotPolicy {
    /// Keep going after the first slot that produced a recommendation
    pub return_all_slots: bool,
    /// Fetch history again for every slot instead of once per request
    pub refetch_per_slot: bool,
}

impl From<&Config> for SlotPolicy {
    fn from(config: &Config) -> Self {
        Self {
            return_all_slots: config.return_all_slots,
            refetch_per_slot: config.refetch_per_slot,
        }
    }
}

/// Drives one recommendation request across the meal slots
pub struct RecommendationService {
    history: Arc<dyn MealHistoryProvider>,
    sink: Arc<dyn RecommendationSink>,
    policy: SlotPolicy,
}

impl RecommendationService {
    pub fn new(
        history: Arc<dyn MealHistoryProvider>,
        sink: Arc<dyn RecommendationSink>,
        policy: SlotPolicy,
    ) -> Self {
        Self {
            history,
            sink,
            policy,
        }
    }

    /// Recommends meals for a user, saving each one to the sink.
    ///
    /// Slots are tried in `MealSlot::ALL` order. Unless `return_all_slots` is
    /// set, the first slot that produces a recommendation ends the request.
    /// An empty result means no slot produced anything.
    pub async fn recommend<R>(&self, user_id: &str, rng: &mut R) -> Vec<Recommendation>
    where
        R: Rng + Send + ?Sized,
    {
        let mut history: Option<Vec<MealRecord>> = None;
        let mut recommendations = Vec::new();

        for slot in MealSlot::ALL {
            let records = match history.take() {
                Some(records) if !self.policy.refetch_per_slot => records,
                _ => load_history(self.history.as_ref(), user_id).await,
            };

            let recommendation = recommend_for_slot(&records, slot, rng);
            history = Some(records);

            let Some(recommendation) = recommendation else {
                tracing::debug!(user_id = %user_id, meal_type = %slot, "No recommendation for slot");
                continue;
            };

            tracing::info!(
                user_id = %user_id,
                meal_type = %slot,
                recipe_code = %recommendation.recipe_code,
                kind = ?recommendation.kind,
                "Meal recommended"
            );

            self.record(user_id, &recommendation).await;
            recommendations.push(recommendation);

            if !self.policy.return_all_slots {
                break;
            }
        }

        recommendations
    }

    /// Saves a recommendation; failures are logged and dropped
    async fn record(&self, user_id: &str, recommendation: &Recommendation) {
        let request = SaveRecommendationRequest::new(user_id, recommendation);

        if let Err(e) = self.sink.save_recommendation(&request).await {
            tracing::warn!(
                user_id = %user_id,
                meal_type = %recommendation.meal_type,
                error = %e,
                "Failed to save recommendation"
            );
        }
    }
}
