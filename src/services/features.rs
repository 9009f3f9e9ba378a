//! Feature Builder for a slot-filtered batch of meals.
//!
//! Row layout: one-hot ingredients over the batch's sorted ingredient set,
//! then `[calorie, protein, fat, carbohydrate]` min-max scaled per batch.

use std::collections::{BTreeSet, HashSet};

use crate::models::{MealRecord, NUTRITION_DIMS};

/// Per-dimension min-max statistics for a batch of meal records
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionStats {
    pub min: [f64; NUTRITION_DIMS],
    /// max - min, with zero replaced by 1 so a flat dimension normalizes to 0
    pub range: [f64; NUTRITION_DIMS],
}

impl NutritionStats {
    pub fn from_records(records: &[&MealRecord]) -> Self {
        let mut min = [f64::INFINITY; NUTRITION_DIMS];
        let mut max = [f64::NEG_INFINITY; NUTRITION_DIMS];

        for record in records {
            for (dim, value) in record.nutrition().into_iter().enumerate() {
                min[dim] = min[dim].min(value);
                max[dim] = max[dim].max(value);
            }
        }

        if records.is_empty() {
            min = [0.0; NUTRITION_DIMS];
            max = [0.0; NUTRITION_DIMS];
        }

        let mut range = [1.0; NUTRITION_DIMS];
        for dim in 0..NUTRITION_DIMS {
            let spread = max[dim] - min[dim];
            if spread != 0.0 {
                range[dim] = spread;
            }
        }

        Self { min, range }
    }

    pub fn normalize(&self, raw: [f64; NUTRITION_DIMS]) -> [f64; NUTRITION_DIMS] {
        let mut normalized = [0.0; NUTRITION_DIMS];
        for dim in 0..NUTRITION_DIMS {
            normalized[dim] = (raw[dim] - self.min[dim]) / self.range[dim];
        }
        normalized
    }
}

/// Combined feature vectors for one slot-filtered batch.
///
/// Each row is a one-hot ingredient vector over the batch's sorted ingredient
/// set followed by the min-max normalized nutrition vector, so every row has
/// length `ingredients().len() + 4`. Rows keep the order of the input batch.
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    ingredients: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl FeatureMatrix {
    pub fn build(records: &[&MealRecord]) -> Self {
        let ingredients = ingredient_index(records);
        let stats = NutritionStats::from_records(records);

        let rows = records
            .iter()
            .map(|record| {
                let present: HashSet<&str> =
                    record.ingredients.iter().map(String::as_str).collect();

                let mut row: Vec<f64> = ingredients
                    .iter()
                    .map(|ingredient| {
                        if present.contains(ingredient.as_str()) {
                            1.0
                        } else {
                            0.0
                        }
                    })
                    .collect();
                row.extend(stats.normalize(record.nutrition()));
                row
            })
            .collect();

        Self {
            ingredients,
            rows,
        }
    }

    /// Sorted distinct ingredients; position `i` maps to column `i`
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Length shared by every row
    pub fn width(&self) -> usize {
        self.ingredients.len() + NUTRITION_DIMS
    }
}

/// Sorted set of every ingredient mentioned in the batch
pub fn ingredient_index(records: &[&MealRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.ingredients.iter().cloned())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
