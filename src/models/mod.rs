use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

pub mod recommendation;

pub use recommendation::{
    Recommendation, RecommendationKind, RecommendationResponse, RecommendedFood,
    SaveRecommendationRequest,
};

/// Number of nutrition dimensions carried by a meal record
pub const NUTRITION_DIMS: usize = 4;

/// One of the three fixed daily meal periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealSlot {
    Morning,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// All slots in the order recommendations are attempted
    pub const ALL: [MealSlot; 3] = [MealSlot::Morning, MealSlot::Lunch, MealSlot::Dinner];

    /// Localized label used by the Spring backend in `MEALTYPE`
    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Morning => "아침",
            MealSlot::Lunch => "점심",
            MealSlot::Dinner => "저녁",
        }
    }
}

impl Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Spring Backend Meal History Types
// ============================================================================

/// A single historical meal entry as returned by `GET /userMeals`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealRecord {
    #[serde(rename = "EATING_FOODNAME", default, deserialize_with = "null_as_default")]
    pub food_name: String,
    #[serde(rename = "RECIPECODE", default, deserialize_with = "null_as_default")]
    pub recipe_code: String,
    #[serde(rename = "MEALTYPE", default, deserialize_with = "null_as_default")]
    pub meal_type: String,
    #[serde(rename = "INGREDIENT", default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    #[serde(rename = "CALORIE", default, deserialize_with = "null_as_default")]
    pub calorie: f64,
    #[serde(rename = "PROTEIN", default, deserialize_with = "null_as_default")]
    pub protein: f64,
    #[serde(rename = "FAT", default, deserialize_with = "null_as_default")]
    pub fat: f64,
    #[serde(rename = "CARBOHYDRATE", default, deserialize_with = "null_as_default")]
    pub carbohydrate: f64,
}

/// The backend sends `null` for unknown values; treat it like an absent key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl MealRecord {
    /// Raw nutrition facts as `[calorie, protein, fat, carbohydrate]`
    pub fn nutrition(&self) -> [f64; NUTRITION_DIMS] {
        [self.calorie, self.protein, self.fat, self.carbohydrate]
    }

    /// Whether this record belongs to the given slot
    pub fn is_slot(&self, slot: MealSlot) -> bool {
        self.meal_type == slot.label()
    }
}

/// Built-in records used when a user has no usable meal history
pub fn default_meals() -> Vec<MealRecord> {
    vec![MealRecord {
        food_name: "닭가슴살 샐러드".to_string(),
        recipe_code: "R0001".to_string(),
        meal_type: MealSlot::Lunch.label().to_string(),
        ingredients: vec![
            "닭가슴살".to_string(),
            "오이".to_string(),
            "양상추".to_string(),
        ],
        calorie: 250.0,
        protein: 30.0,
        fat: 4.0,
        carbohydrate: 10.0,
    }]
}
