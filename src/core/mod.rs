// Core engine exports
pub mod features;
pub mod match_score;
pub mod model_v1;
pub mod model_v2;
pub mod predictor;
pub mod ranker;
pub mod reasoning;
pub mod series;
pub mod sizing;

pub use features::FeatureVector;
pub use match_score::{default_priorities, match_score, merge_overrides};
pub use predictor::{adjust_for_weight, predict_item, ModelGeneration};
pub use ranker::{RankResult, Ranker};
pub use reasoning::{size_band, SizeBand};
pub use series::{effective_series, is_current, preferred_series};
pub use sizing::target_area;
