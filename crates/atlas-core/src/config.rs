// crates/atlas-core/src/config.rs

//! # Portal Configuration
//!
//! Conventional document locations, relative to the data source root. Every
//! key can be overridden from a JSON file; missing keys keep their defaults.

use crate::error::{AtlasError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_PHOTO_PAGE_SIZE: usize = 30;

/// Attraction categories shipped with the portal, one folder each.
pub const DEFAULT_CATEGORIES: &[&str] = &["budynki", "muzea", "parki", "pomniki", "mosty", "place"];

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PortalConfig {
    pub countries_index: String,
    pub cities_index: String,
    pub attractions_index: String,
    /// Country detail template; `{id}` is replaced by the lower-cased id.
    pub country_path: String,
    pub city_path: String,
    /// Per-category manifest template (`{category}`).
    pub category_index_path: String,
    /// Attraction detail template (`{category}`, `{file}`).
    pub attraction_path: String,
    pub photos_path: String,
    pub categories: Vec<String>,
    pub timeout_secs: u64,
    pub photo_page_size: usize,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            countries_index: "data/metadata/countries_index.json".into(),
            cities_index: "data/metadata/cities_index.json".into(),
            attractions_index: "data/metadata/attractions_index.json".into(),
            country_path: "data/kraje/{id}.json".into(),
            city_path: "data/miasta/{id}.json".into(),
            category_index_path: "data/atrakcje/{category}/index.json".into(),
            attraction_path: "data/atrakcje/{category}/{file}".into(),
            photos_path: "data/zdjecia/photos.json".into(),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            photo_page_size: DEFAULT_PHOTO_PAGE_SIZE,
        }
    }
}

impl PortalConfig {
    /// Reads overrides from a JSON file.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AtlasError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let cfg: PortalConfig = serde_json::from_str(&raw)
            .map_err(|e| AtlasError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.photo_page_size == 0 {
            return Err(AtlasError::Config("photo_page_size must be positive".into()));
        }
        if !self.country_path.contains("{id}") || !self.city_path.contains("{id}") {
            return Err(AtlasError::Config(
                "detail path templates must contain {id}".into(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn country_doc(&self, id: &str) -> String {
        self.country_path.replace("{id}", &id.to_lowercase())
    }

    pub fn city_doc(&self, id: &str) -> String {
        self.city_path.replace("{id}", &id.to_lowercase())
    }

    pub fn category_index(&self, category: &str) -> String {
        self.category_index_path.replace("{category}", category)
    }

    pub fn attraction_doc(&self, category: &str, file: &str) -> String {
        self.attraction_path
            .replace("{category}", category)
            .replace("{file}", file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_lowercase_ids_only() {
        let cfg = PortalConfig::default();
        assert_eq!(cfg.country_doc("KRAJ-IT-001"), "data/kraje/kraj-it-001.json");
        assert_eq!(
            cfg.attraction_doc("budynki", "Koloseum.json"),
            "data/atrakcje/budynki/Koloseum.json"
        );
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let cfg: PortalConfig =
            serde_json::from_str(r#"{"timeout_secs": 3, "categories": ["mosty"]}"#).unwrap();
        assert_eq!(cfg.timeout(), Duration::from_secs(3));
        assert_eq!(cfg.categories, vec!["mosty"]);
        assert_eq!(cfg.photo_page_size, DEFAULT_PHOTO_PAGE_SIZE);
    }
}
