// crates/atlas-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the transport layer (HTTP, local files, gzip) behind the
//! [`DocumentSource`] trait and turns index + detail documents into typed
//! entity collections.
//!
//! Failure policy:
//! - an index document that cannot be loaded is fatal to its page
//!   ([`AtlasError::IndexUnavailable`]);
//! - a detail document that cannot be loaded or parsed is logged and skipped.

use crate::config::PortalConfig;
use crate::error::{AtlasError, Result};
use crate::model::{Attraction, CategoryIndex, City, Country, IndexDocument, Photo, PhotoDocument};
use crate::relation::RelationResolver;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info, warn};

mod batch;
pub mod common_io;
mod dir;
#[cfg(feature = "fetch")]
mod http;

pub use batch::fetch_all;
pub use dir::DirSource;
#[cfg(feature = "fetch")]
pub use http::HttpSource;

/// Anything that can hand out a JSON document for a relative path.
pub trait DocumentSource: Send + Sync {
    fn fetch(&self, path: &str) -> Result<Value>;

    /// Human readable origin, used in log lines.
    fn describe(&self) -> String {
        "<source>".to_owned()
    }
}

/// Documents held in memory, keyed by path.
///
/// Used by hosts that fetch documents themselves (the wasm bindings) and by
/// tests.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    docs: HashMap<String, Value>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, doc: Value) {
        self.docs.insert(path.into(), doc);
    }

    pub fn with(mut self, path: impl Into<String>, doc: Value) -> Self {
        self.insert(path, doc);
        self
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl DocumentSource for MemorySource {
    fn fetch(&self, path: &str) -> Result<Value> {
        self.docs
            .get(path)
            .cloned()
            .ok_or_else(|| AtlasError::NotFound(path.to_owned()))
    }

    fn describe(&self) -> String {
        format!("<memory: {} documents>", self.docs.len())
    }
}

/// Picks a source for a location string: `http(s)://` URLs go over HTTP,
/// anything else is treated as a local directory.
pub fn open_source(location: &str, config: &PortalConfig) -> Result<Box<dyn DocumentSource>> {
    let loc = location.trim();
    if loc.starts_with("http://") || loc.starts_with("https://") {
        return open_http(loc, config);
    }
    Ok(Box::new(DirSource::new(loc)?))
}

#[cfg(feature = "fetch")]
fn open_http(url: &str, config: &PortalConfig) -> Result<Box<dyn DocumentSource>> {
    Ok(Box::new(HttpSource::new(url, config.timeout())?))
}

#[cfg(not(feature = "fetch"))]
fn open_http(url: &str, _config: &PortalConfig) -> Result<Box<dyn DocumentSource>> {
    Err(AtlasError::Config(format!("{url} needs the `fetch` feature")))
}

/// Loads typed collections from a [`DocumentSource`] using the conventional
/// paths of a [`PortalConfig`].
pub struct Loader {
    source: Box<dyn DocumentSource>,
    config: PortalConfig,
}

impl Loader {
    pub fn new(source: impl DocumentSource + 'static, config: PortalConfig) -> Self {
        Self::from_boxed(Box::new(source), config)
    }

    pub fn from_boxed(source: Box<dyn DocumentSource>, config: PortalConfig) -> Self {
        Self { source, config }
    }

    /// Shortcut for [`open_source`] + [`Loader::from_boxed`].
    pub fn open(location: &str, config: PortalConfig) -> Result<Self> {
        let source = open_source(location, &config)?;
        Ok(Self::from_boxed(source, config))
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn source(&self) -> &dyn DocumentSource {
        self.source.as_ref()
    }

    /// Fetches and parses an `{items: [...]}` index document.
    pub fn load_index(&self, path: &str) -> Result<IndexDocument> {
        let doc = self
            .source
            .fetch(path)
            .map_err(|e| AtlasError::IndexUnavailable(format!("{path}: {e}")))?;
        let index: IndexDocument = serde_json::from_value(doc)
            .map_err(|e| AtlasError::IndexUnavailable(format!("{path}: {e}")))?;
        debug!(%path, items = index.items.len(), "index loaded");
        Ok(index)
    }

    pub fn load_countries(&self) -> Result<Vec<Country>> {
        let index = self.load_index(&self.config.countries_index)?;
        let paths: Vec<String> = index
            .items
            .iter()
            .map(|item| self.config.country_doc(&item.id))
            .collect();
        let countries: Vec<Country> = parse_all(&paths, fetch_all(self.source(), &paths));
        info!(loaded = countries.len(), listed = paths.len(), "countries loaded");
        Ok(countries)
    }

    pub fn load_cities(&self) -> Result<Vec<City>> {
        let index = self.load_index(&self.config.cities_index)?;
        let paths: Vec<String> = index
            .items
            .iter()
            .map(|item| self.config.city_doc(&item.id))
            .collect();
        let cities: Vec<City> = parse_all(&paths, fetch_all(self.source(), &paths));
        info!(loaded = cities.len(), listed = paths.len(), "cities loaded");
        Ok(cities)
    }

    /// Discovers attractions through the per-category manifests and tags
    /// every record with the category it was found in.
    ///
    /// A category whose manifest fails is skipped. When no manifest loads at
    /// all the listing has no index and this returns `IndexUnavailable`.
    pub fn load_attractions(&self) -> Result<Vec<Attraction>> {
        let categories = &self.config.categories;
        let index_paths: Vec<String> = categories
            .iter()
            .map(|c| self.config.category_index(c))
            .collect();
        let manifests = fetch_all(self.source(), &index_paths);

        let mut discovered: Vec<(String, String)> = Vec::new();
        let mut any_index = false;
        for ((category, path), doc) in categories.iter().zip(&index_paths).zip(manifests) {
            let Some(doc) = doc else { continue };
            match serde_json::from_value::<CategoryIndex>(doc) {
                Ok(manifest) => {
                    any_index = true;
                    discovered.extend(
                        manifest
                            .files
                            .into_iter()
                            .map(|file| (category.clone(), self.config.attraction_doc(category, &file))),
                    );
                }
                Err(e) => warn!(%path, error = %e, "skipping malformed category index"),
            }
        }
        if !any_index {
            return Err(AtlasError::IndexUnavailable(format!(
                "no attraction category index could be loaded ({} tried)",
                categories.len()
            )));
        }

        let paths: Vec<String> = discovered.iter().map(|(_, p)| p.clone()).collect();
        let docs = fetch_all(self.source(), &paths);
        let attractions: Vec<Attraction> = discovered
            .iter()
            .zip(docs)
            .filter_map(|((category, path), doc)| {
                match Attraction::from_value(doc?, Some(category)) {
                    Ok(a) => Some(a),
                    Err(e) => {
                        warn!(%path, error = %e, "skipping malformed attraction");
                        None
                    }
                }
            })
            .collect();
        info!(loaded = attractions.len(), listed = paths.len(), "attractions loaded");
        Ok(attractions)
    }

    /// Loads the gallery document. A failure here is an index failure.
    pub fn load_photos(&self) -> Result<Vec<Photo>> {
        let path = &self.config.photos_path;
        let doc = self
            .source
            .fetch(path)
            .map_err(|e| AtlasError::IndexUnavailable(format!("{path}: {e}")))?;
        let photos = serde_json::from_value::<PhotoDocument>(doc)
            .map_err(|e| AtlasError::IndexUnavailable(format!("{path}: {e}")))?
            .photos;
        info!(loaded = photos.len(), "photos loaded");
        Ok(photos)
    }

    /// Photos for entity pages: a missing gallery degrades to an empty set.
    pub fn load_photos_or_empty(&self) -> Vec<Photo> {
        self.load_photos().unwrap_or_else(|e| {
            warn!(error = %e, "gallery unavailable; continuing without photos");
            Vec::new()
        })
    }

    /// Resolver for entity pages: the index lookups plus the gallery, so
    /// detail views can show the photos depicting an entity.
    pub fn load_resolver(&self) -> RelationResolver {
        self.load_name_index().with_photos(self.load_photos_or_empty())
    }

    /// Builds only the id -> name lookups from the three index documents.
    /// The gallery page uses this, as it loads the photos itself.
    ///
    /// Best effort: an index that fails only leaves its lookup empty.
    pub fn load_name_index(&self) -> RelationResolver {
        let cfg = &self.config;
        let paths = vec![
            cfg.countries_index.clone(),
            cfg.cities_index.clone(),
            cfg.attractions_index.clone(),
        ];
        let mut docs = fetch_all(self.source(), &paths).into_iter().map(|doc| {
            doc.and_then(|v| match serde_json::from_value::<IndexDocument>(v) {
                Ok(index) => Some(index),
                Err(e) => {
                    warn!(error = %e, "ignoring malformed index");
                    None
                }
            })
            .unwrap_or_default()
        });
        let countries = docs.next().unwrap_or_default();
        let cities = docs.next().unwrap_or_default();
        let attractions = docs.next().unwrap_or_default();
        RelationResolver::from_indexes(&countries, &cities, &attractions)
    }
}

/// Deserializes each fetched slot, logging and dropping the ones that fail.
fn parse_all<T: DeserializeOwned>(paths: &[String], docs: Vec<Option<Value>>) -> Vec<T> {
    paths
        .iter()
        .zip(docs)
        .filter_map(|(path, doc)| match serde_json::from_value::<T>(doc?) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(%path, error = %e, "skipping malformed document");
                None
            }
        })
        .collect()
}
