//! Slot Filter and per-slot recommendation.
//!
//! Falls back to a random pick when there is nothing to score.

use rand::{seq::SliceRandom, Rng};

use crate::{
    models::{default_meals, MealRecord, MealSlot, Recommendation, RecommendationKind},
    services::{features::FeatureMatrix, similarity},
};

/// Records in the batch whose `MEALTYPE` matches the slot, in batch order
pub fn filter_slot(records: &[MealRecord], slot: MealSlot) -> Vec<&MealRecord> {
    records.iter().filter(|record| record.is_slot(slot)).collect()
}

/// Picks a meal for one slot from the user's history.
///
/// With no records for the slot, a random default meal is returned. With
/// records but no ingredient data anywhere among them, a random record is
/// returned. Otherwise the most central record by feature similarity wins.
///
/// Returns `None` only when there is nothing at all to choose from.
pub fn recommend_for_slot<R>(
    records: &[MealRecord],
    slot: MealSlot,
    rng: &mut R,
) -> Option<Recommendation>
where
    R: Rng + ?Sized,
{
    let filtered = filter_slot(records, slot);

    if filtered.is_empty() {
        tracing::info!(meal_type = %slot, "No history for slot, using default meals");
        let defaults = default_meals();
        return defaults
            .choose(rng)
            .map(|record| Recommendation::from_record(slot, record, RecommendationKind::Degenerate));
    }

    let matrix = FeatureMatrix::build(&filtered);

    if matrix.ingredients().is_empty() {
        tracing::info!(
            meal_type = %slot,
            candidates = filtered.len(),
            "No ingredient data for slot, picking at random"
        );
        return filtered
            .choose(rng)
            .map(|record| Recommendation::from_record(slot, record, RecommendationKind::Degenerate));
    }

    let best = similarity::most_central(matrix.rows())?;
    let record = filtered[best];

    tracing::debug!(
        meal_type = %slot,
        candidates = filtered.len(),
        ingredients = matrix.ingredients().len(),
        width = matrix.width(),
        recipe_code = %record.recipe_code,
        "Scored slot recommendation"
    );

    Some(Recommendation::from_record(
        slot,
        record,
        RecommendationKind::Scored,
    ))
}
