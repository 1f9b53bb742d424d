use std::path::Path;

use serde::{Deserialize, Serialize};

/// Area tolerance in cm² for treating a number in feedback text as a
/// reference to an item's size. Riders round wing sizes freely.
pub const AREA_MATCH_TOLERANCE: f64 = 30.0;

/// One community feedback excerpt, scraped from rider groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub wing: Option<String>,
}

/// In-memory index of community feedback, loaded once at startup.
///
/// A missing file is not an error; the index is simply empty and the
/// ranker's feedback boost never fires.
#[derive(Debug, Clone, Default)]
pub struct FeedbackIndex {
    entries: Vec<FeedbackEntry>,
}

impl FeedbackIndex {
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(raw) => match serde_json::from_str::<Vec<FeedbackEntry>>(&raw) {
                Ok(entries) => {
                    tracing::info!(
                        "Loaded {} feedback entries from {}",
                        entries.len(),
                        path.as_ref().display()
                    );
                    Self { entries }
                }
                Err(e) => {
                    tracing::warn!("Failed to parse feedback file, continuing without: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!(
                    "No feedback file at {}, community boost disabled",
                    path.as_ref().display()
                );
                Self::default()
            }
        }
    }

    pub fn from_entries(entries: Vec<FeedbackEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Excerpts that plausibly reference an item: the series name appears
    /// (case-insensitive) and a number within tolerance of the item's area
    /// shows up alongside it.
    pub fn excerpts_for(&self, series_label: &str, area: f64) -> Vec<String> {
        let needle = series_label.to_lowercase();

        self.entries
            .iter()
            .filter(|entry| {
                let haystack = match &entry.wing {
                    Some(wing) => format!("{} {}", wing, entry.text).to_lowercase(),
                    None => entry.text.to_lowercase(),
                };
                haystack.contains(&needle) && mentions_area(&haystack, area)
            })
            .map(|entry| entry.text.clone())
            .collect()
    }
}

/// True when the text carries a standalone number within tolerance of the
/// area. Only 3+ digit runs count; nobody writes wing sizes shorter.
fn mentions_area(text: &str, area: f64) -> bool {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|token| token.len() >= 3)
        .filter_map(|token| token.parse::<f64>().ok())
        .any(|value| (value - area).abs() <= AREA_MATCH_TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> FeedbackIndex {
        FeedbackIndex::from_entries(vec![
            FeedbackEntry {
                text: "The Surge 1050 pumps way better than I expected".to_string(),
                author: Some("Rider A".to_string()),
                wing: None,
            },
            FeedbackEntry {
                text: "Came off the 1310 and never looked back".to_string(),
                author: None,
                wing: Some("PNG V2 1310".to_string()),
            },
            FeedbackEntry {
                text: "Spitfire is unreal upwind".to_string(),
                author: None,
                wing: None,
            },
        ])
    }

    #[test]
    fn test_matches_series_and_area_in_text() {
        let excerpts = index().excerpts_for("Surge", 1050.0);
        assert_eq!(excerpts.len(), 1);
        assert!(excerpts[0].contains("pumps"));
    }

    #[test]
    fn test_wing_label_counts_toward_match() {
        let excerpts = index().excerpts_for("PNG V2", 1310.0);
        assert_eq!(excerpts.len(), 1);
    }

    #[test]
    fn test_area_tolerance() {
        // 1040 is within ±30 of the mentioned 1050
        assert_eq!(index().excerpts_for("Surge", 1040.0).len(), 1);
        assert!(index().excerpts_for("Surge", 900.0).is_empty());
    }

    #[test]
    fn test_series_mention_without_area_does_not_match() {
        assert!(index().excerpts_for("Spitfire", 840.0).is_empty());
    }

    #[test]
    fn test_missing_file_yields_empty_index() {
        let index = FeedbackIndex::load("/nonexistent/feedback.json");
        assert!(index.is_empty());
    }
}
