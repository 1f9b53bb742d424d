// Service exports
pub mod catalog;
pub mod contributions;
pub mod feedback;
pub mod gemini;

pub use catalog::{CatalogError, CatalogStore};
pub use contributions::{ContributionError, ContributionStore};
pub use feedback::{FeedbackEntry, FeedbackIndex};
pub use gemini::{EnrichmentInput, GeminiClient, GenerationError, ProsCons};
