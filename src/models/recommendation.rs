use serde::{Deserialize, Serialize};

use super::{MealRecord, MealSlot};

/// How a recommendation was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationKind {
    /// Most central record by summed cosine similarity
    Scored,
    /// Uniform random pick, used when there is nothing to score
    Degenerate,
}

/// The meal picked for one slot
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub meal_type: String,
    pub food_name: String,
    pub recipe_code: String,
    pub kind: RecommendationKind,
}

impl Recommendation {
    pub fn from_record(slot: MealSlot, record: &MealRecord, kind: RecommendationKind) -> Self {
        Self {
            meal_type: slot.label().to_string(),
            food_name: record.food_name.clone(),
            recipe_code: record.recipe_code.clone(),
            kind,
        }
    }
}

/// One entry of the `recommended_foods` response array
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendedFood {
    #[serde(rename = "MEAL_TYPE")]
    pub meal_type: String,
    #[serde(rename = "RECOMMEND_FOOD")]
    pub recommend_food: String,
    #[serde(rename = "RECIPECODE")]
    pub recipe_code: String,
}

impl From<&Recommendation> for RecommendedFood {
    fn from(recommendation: &Recommendation) -> Self {
        Self {
            meal_type: recommendation.meal_type.clone(),
            recommend_food: recommendation.food_name.clone(),
            recipe_code: recommendation.recipe_code.clone(),
        }
    }
}

/// Response body of `GET /foodRecommend`
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommended_foods: Vec<RecommendedFood>,
}

/// Body of `POST /saveRecommendation` on the Spring backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecommendationRequest {
    pub user_id: String,
    pub meal_type: String,
    pub food_name: String,
    pub recipe_code: String,
}

impl SaveRecommendationRequest {
    pub fn new(user_id: &str, recommendation: &Recommendation) -> Self {
        Self {
            user_id: user_id.to_string(),
            meal_type: recommendation.meal_type.clone(),
            food_name: recommendation.food_name.clone(),
            recipe_code: recommendation.recipe_code.clone(),
        }
    }
}
