// crates/atlas-core/src/search.rs

//! Home-page search box: substring search across the three index documents.

use crate::model::{EntityKind, IndexDocument, IndexItem};
use crate::router::deep_link;
use crate::text::{contains_lower, normalize_query, MIN_SEARCH_LEN};
use serde::Serialize;

/// Hits returned per entity kind.
pub const MAX_HITS_PER_KIND: usize = 5;

const DEFAULT_FLAG: &str = "🏳️";
const CITY_ICON: &str = "🏙️";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchHit {
    pub kind: EntityKind,
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub icon: String,
}

/// Icon shown next to an attraction hit.
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "budynki" | "place" => "🏛️",
        "muzea" => "🎨",
        "parki" => "🌳",
        "pomniki" => "🗿",
        "mosty" => "🌉",
        _ => "📍",
    }
}

/// Owns the three index documents.
#[derive(Clone, Debug, Default)]
pub struct GlobalSearch {
    countries: IndexDocument,
    cities: IndexDocument,
    attractions: IndexDocument,
}

impl GlobalSearch {
    pub fn new(countries: IndexDocument, cities: IndexDocument, attractions: IndexDocument) -> Self {
        Self {
            countries,
            cities,
            attractions,
        }
    }

    /// Searches every kind, or only `only` when given.
    ///
    /// Hits are grouped by kind (countries, cities, attractions) and keep the
    /// index order within a group. Queries under two characters return nothing.
    ///
    /// ```rust
    /// use atlas_core::search::GlobalSearch;
    /// use atlas_core::model::IndexDocument;
    ///
    /// let countries: IndexDocument = serde_json::from_str(
    ///     r#"{"items": [{"id": "K1", "nazwa": "Włochy", "nazwa_oficjalna": "Republika Włoska"}]}"#,
    /// ).unwrap();
    /// let search = GlobalSearch::new(countries, Default::default(), Default::default());
    ///
    /// assert_eq!(search.search("republika", None).len(), 1);
    /// assert!(search.search("w", None).is_empty());
    /// ```
    pub fn search(&self, query: &str, only: Option<EntityKind>) -> Vec<SearchHit> {
        let Some(q) = normalize_query(query, MIN_SEARCH_LEN) else {
            return Vec::new();
        };
        let wanted = |kind: EntityKind| only.map_or(true, |k| k == kind);
        let mut hits = Vec::new();

        if wanted(EntityKind::Country) {
            hits.extend(
                top(&self.countries, |i| {
                    contains_lower(i.name(), &q) || contains_lower(i.official_name(), &q)
                })
                .into_iter()
                .map(|i| SearchHit {
                    kind: EntityKind::Country,
                    id: i.id.clone(),
                    name: i.name().to_owned(),
                    description: i.official_name().to_owned(),
                    url: deep_link(EntityKind::Country, &i.id),
                    icon: i.flag.clone().unwrap_or_else(|| DEFAULT_FLAG.to_owned()),
                }),
            );
        }

        if wanted(EntityKind::City) {
            hits.extend(
                top(&self.cities, |i| contains_lower(i.name(), &q)).into_iter().map(|i| SearchHit {
                    kind: EntityKind::City,
                    id: i.id.clone(),
                    name: i.name().to_owned(),
                    description: i.country.clone().unwrap_or_default(),
                    url: deep_link(EntityKind::City, &i.id),
                    icon: CITY_ICON.to_owned(),
                }),
            );
        }

        if wanted(EntityKind::Attraction) {
            hits.extend(
                top(&self.attractions, |i| contains_lower(i.name(), &q)).into_iter().map(|i| {
                    let category = i.category.as_deref().unwrap_or("");
                    SearchHit {
                        kind: EntityKind::Attraction,
                        id: i.id.clone(),
                        name: i.name().to_owned(),
                        description: format!(
                            "{category} - {}",
                            i.location.as_deref().unwrap_or("")
                        ),
                        url: deep_link(EntityKind::Attraction, &i.id),
                        icon: category_icon(category).to_owned(),
                    }
                }),
            );
        }

        tracing::debug!(query = %q, hits = hits.len(), "global search");
        hits
    }
}

fn top(doc: &IndexDocument, pred: impl Fn(&IndexItem) -> bool) -> Vec<&IndexItem> {
    doc.items
        .iter()
        .filter(|i| pred(i))
        .take(MAX_HITS_PER_KIND)
        .collect()
}
