// crates/atlas-core/src/relation.rs

//! # Relation Resolver
//!
//! Cross-references entities by the id lists embedded in each document.
//! Lookups are built from the index documents; resolution turns an
//! association list into display-ready `{id, name}` pairs.
//!
//! Dangling ids are expected: they are dropped silently. Duplicate ids are
//! kept, one entry per occurrence.

use crate::model::{EntityKind, IndexDocument, Photo};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A resolved association.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Linked {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Default)]
pub struct RelationResolver {
    countries: HashMap<String, String>,
    cities: HashMap<String, String>,
    attractions: HashMap<String, String>,
    photos: Vec<Photo>,
}

impl RelationResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_indexes(
        countries: &IndexDocument,
        cities: &IndexDocument,
        attractions: &IndexDocument,
    ) -> Self {
        let mut r = Self::new();
        for (kind, doc) in [
            (EntityKind::Country, countries),
            (EntityKind::City, cities),
            (EntityKind::Attraction, attractions),
        ] {
            for item in &doc.items {
                r.insert(kind, &item.id, item.name());
            }
        }
        r
    }

    /// Attaches the global photo set used by [`RelationResolver::photos_depicting`].
    pub fn with_photos(mut self, photos: Vec<Photo>) -> Self {
        self.photos = photos;
        self
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    fn table(&self, kind: EntityKind) -> Option<&HashMap<String, String>> {
        match kind {
            EntityKind::Country => Some(&self.countries),
            EntityKind::City => Some(&self.cities),
            EntityKind::Attraction => Some(&self.attractions),
            EntityKind::Photo => None,
        }
    }

    fn table_mut(&mut self, kind: EntityKind) -> Option<&mut HashMap<String, String>> {
        match kind {
            EntityKind::Country => Some(&mut self.countries),
            EntityKind::City => Some(&mut self.cities),
            EntityKind::Attraction => Some(&mut self.attractions),
            EntityKind::Photo => None,
        }
    }

    /// Registers a name. An existing entry (from an index) wins.
    pub fn insert(&mut self, kind: EntityKind, id: &str, name: &str) {
        if name.is_empty() {
            return;
        }
        if let Some(table) = self.table_mut(kind) {
            table
                .entry(id.to_owned())
                .or_insert_with(|| name.to_owned());
        }
    }

    pub fn name(&self, kind: EntityKind, id: &str) -> Option<&str> {
        self.table(kind)?.get(id).map(String::as_str)
    }

    pub fn len(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Photo => self.photos.len(),
            _ => self.table(kind).map_or(0, HashMap::len),
        }
    }

    /// Resolves an association list in order, dropping ids without a name.
    pub fn resolve(&self, kind: EntityKind, ids: &[String]) -> Vec<Linked> {
        ids.iter()
            .filter_map(|id| {
                self.name(kind, id).map(|name| Linked {
                    id: id.clone(),
                    name: name.to_owned(),
                })
            })
            .collect()
    }

    /// Photos whose association list of `kind` contains `id`.
    pub fn photos_depicting(&self, kind: EntityKind, id: &str) -> Vec<&Photo> {
        self.photos.iter().filter(|p| p.depicts(kind, id)).collect()
    }
}
