//! Spring backend client
//!
//! API Flow:
//! 1. History: GET /userMeals?id={user_id} → JSON array of meal records
//! 2. Persistence: POST /saveRecommendation → stores the chosen meal

use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{MealRecord, SaveRecommendationRequest},
    services::providers::{MealHistoryProvider, RecommendationSink},
};

#[derive(Clone)]
pub struct SpringClient {
    http_client: HttpClient,
    base_url: String,
}

impl SpringClient {
    /// Creates a client whose requests all time out after `timeout`
    pub fn new(base_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl MealHistoryProvider for SpringClient {
    async fn fetch_user_meals(&self, user_id: &str) -> AppResult<Vec<MealRecord>> {
        let response = self
            .http_client
            .get(self.url("userMeals"))
            .query(&[("id", user_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::HistoryFetch(format!(
                "Spring API returned status {}: {}",
                status, body
            )));
        }

        let meals: Vec<MealRecord> = response
            .json()
            .await
            .map_err(|e| AppError::HistoryFetch(format!("Invalid meal history body: {}", e)))?;

        tracing::info!(
            user_id = %user_id,
            records = meals.len(),
            provider = self.name(),
            "Meal history fetched"
        );

        Ok(meals)
    }

    fn name(&self) -> &'static str {
        "spring"
    }
}

#[async_trait::async_trait]
impl RecommendationSink for SpringClient {
    async fn save_recommendation(&self, request: &SaveRecommendationRequest) -> AppResult<()> {
        let response = self
            .http_client
            .post(self.url("saveRecommendation"))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Persistence(format!(
                "Spring API returned status {}: {}",
                status, body
            )));
        }

        tracing::info!(
            user_id = %request.user_id,
            meal_type = %request.meal_type,
            recipe_code = %request.recipe_code,
            "Recommendation saved"
        );

        Ok(())
    }
}
