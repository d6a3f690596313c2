// crates/atlas-core/src/filter/photo.rs
use super::{selection, unknown_control, Filterable};
use crate::error::Result;
use crate::model::{EntityKind, Photo};
use crate::text::{collate, normalize_query, MIN_SEARCH_LEN};
use std::cmp::Ordering;

query_enum! {
    pub enum PhotoSort {
        /// Newest first; undated photos last.
        #[default]
        Recent => "recent",
        Name => "name",
        /// Source order.
        Popular => "popular",
    }
}

query_enum! {
    /// Which association list a photo must have to pass.
    pub enum PhotoKindFilter {
        #[default]
        All => "all",
        Countries => "kraje" | "countries",
        Cities => "miasta" | "cities",
        Attractions => "atrakcje" | "attractions",
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhotoFilters {
    /// Raw search input over title, description, tags and author.
    pub search: String,
    pub kind: PhotoKindFilter,
    pub country_id: Option<String>,
}

impl Photo {
    fn search_hit(&self, q: &str) -> bool {
        let lower = |s: Option<&str>| s.is_some_and(|s| s.to_lowercase().contains(q));
        lower(self.title.as_deref())
            || lower(self.description.as_deref())
            || self.tags.iter().any(|t| t.to_lowercase().contains(q))
            || lower(self.author.as_deref())
    }
}

impl Filterable for Photo {
    type Filters = PhotoFilters;
    type Sort = PhotoSort;

    fn matches(&self, f: &PhotoFilters) -> bool {
        if let Some(q) = normalize_query(&f.search, MIN_SEARCH_LEN) {
            if !self.search_hit(&q) {
                return false;
            }
        }
        let kind_ok = match f.kind {
            PhotoKindFilter::All => true,
            PhotoKindFilter::Countries => !self.linked_ids(EntityKind::Country).is_empty(),
            PhotoKindFilter::Cities => !self.linked_ids(EntityKind::City).is_empty(),
            PhotoKindFilter::Attractions => !self.linked_ids(EntityKind::Attraction).is_empty(),
        };
        if !kind_ok {
            return false;
        }
        match f.country_id.as_deref() {
            Some(id) => self.depicts(EntityKind::Country, id),
            None => true,
        }
    }

    fn set_control(f: &mut PhotoFilters, key: &str, value: &str) -> Result<()> {
        match key {
            "search" => f.search = value.to_owned(),
            "kind" | "typ" => {
                f.kind = selection(value).map(|v| v.parse()).transpose()?.unwrap_or_default()
            }
            "country" | "kraj" => f.country_id = selection(value),
            other => return Err(unknown_control("gallery", other, "search, kind, country")),
        }
        Ok(())
    }

    fn compare(&self, other: &Self, sort: PhotoSort) -> Ordering {
        match sort {
            // `Option` orders `None` first, so reversing puts undated last.
            PhotoSort::Recent => other.parsed_date().cmp(&self.parsed_date()),
            PhotoSort::Name => collate(self.title(), other.title()),
            PhotoSort::Popular => Ordering::Equal,
        }
    }
}
