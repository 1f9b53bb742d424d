use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::EquipmentItem;

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog has no front-wings collection")]
    MissingCollection,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    collections: HashMap<String, CollectionDocument>,
}

#[derive(Debug, Deserialize)]
struct CollectionDocument {
    products: Vec<serde_json::Value>,
}

/// Read-only, load-once table of front wing records.
///
/// The catalog is pre-scraped and trusted; individual records that fail to
/// deserialize are skipped with a warning rather than failing the load,
/// but an unreadable or unparseable document is a startup error.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    items: Vec<EquipmentItem>,
}

impl CatalogStore {
    /// Load the catalog from a JSON file on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let store = Self::from_json(&raw)?;
        tracing::info!(
            "Loaded {} front wings from {}",
            store.items.len(),
            path.as_ref().display()
        );
        Ok(store)
    }

    /// Parse a catalog document from raw JSON.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(raw)?;
        let collection = document
            .collections
            .get("front-wings")
            .ok_or(CatalogError::MissingCollection)?;

        let mut items = Vec::with_capacity(collection.products.len());
        for value in &collection.products {
            match serde_json::from_value::<EquipmentItem>(value.clone()) {
                Ok(item) => items.push(item),
                Err(e) => tracing::warn!("Skipping malformed catalog record: {}", e),
            }
        }

        Ok(Self { items })
    }

    /// Build a store directly from records (tests, fixtures).
    pub fn from_items(items: Vec<EquipmentItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[EquipmentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "collections": {
            "front-wings": {
                "products": [
                    {
                        "id": 1,
                        "handle": "surge-890",
                        "title": "AXIS Surge 890 Carbon Front Wing",
                        "price": "829.00",
                        "available": true,
                        "url": "https://example.com/surge-890",
                        "specs": {
                            "area": 890.0,
                            "series": "Surge",
                            "aspectRatio": 7.6,
                            "wingspan": 820.0
                        }
                    },
                    {
                        "id": 2,
                        "title": "Broken record without specs"
                    }
                ]
            }
        }
    }"#;

    #[test]
    fn test_parses_products_and_skips_malformed() {
        let store = CatalogStore::from_json(SAMPLE).unwrap();
        assert_eq!(store.len(), 1);

        let item = &store.items()[0];
        assert_eq!(item.id, 1);
        assert_eq!(item.specs.series, "Surge");
        assert_eq!(item.specs.aspect_ratio, Some(7.6));
        assert_eq!(item.specs.roll_moment, None);
    }

    #[test]
    fn test_missing_collection_is_an_error() {
        let raw = r#"{"collections": {"rear-wings": {"products": []}}}"#;
        assert!(matches!(
            CatalogStore::from_json(raw),
            Err(CatalogError::MissingCollection)
        ));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            CatalogStore::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
