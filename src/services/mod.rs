pub mod features;
pub mod history;
pub mod orchestrator;
pub mod providers;
pub mod recommender;
pub mod similarity;

pub use orchestrator::{RecommendationService, SlotPolicy};
