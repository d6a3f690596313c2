// crates/atlas-core/src/filter/attraction.rs
use super::{desc_missing_zero, field_equals, selection, unknown_control, Filterable};
use crate::error::Result;
use crate::model::Attraction;
use crate::text::collate;
use std::cmp::Ordering;

query_enum! {
    pub enum AttractionSort {
        #[default]
        Name => "name",
        Height => "height",
        Year => "year",
        Visitors => "visitors" | "tourists",
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttractionFilters {
    /// Raw search input. Matched against the whole serialized record.
    pub search: String,
    /// Category tag (`budynki`, `muzea`, ...). `None` means all.
    pub category: Option<String>,
    /// Country *name* as written in the address block.
    pub country: Option<String>,
}

impl Filterable for Attraction {
    type Filters = AttractionFilters;
    type Sort = AttractionSort;

    fn matches(&self, f: &AttractionFilters) -> bool {
        // Any non-empty query applies here, not just the 2+ character ones.
        let needle = f.search.trim().to_lowercase();
        if !needle.is_empty() && !self.search_text().contains(&needle) {
            return false;
        }
        field_equals(self.category(), f.category.as_deref())
            && field_equals(self.country(), f.country.as_deref())
    }

    fn set_control(f: &mut AttractionFilters, key: &str, value: &str) -> Result<()> {
        match key {
            "search" => f.search = value.to_owned(),
            "category" | "kategoria" => f.category = selection(value),
            "country" | "kraj" => f.country = selection(value),
            other => return Err(unknown_control("attraction", other, "search, category, country")),
        }
        Ok(())
    }

    fn compare(&self, other: &Self, sort: AttractionSort) -> Ordering {
        match sort {
            AttractionSort::Name => collate(self.display_name(), other.display_name()),
            AttractionSort::Height => desc_missing_zero(self.height_m(), other.height_m()),
            AttractionSort::Year => desc_missing_zero(
                self.construction_start().and_then(|s| s.number),
                other.construction_start().and_then(|s| s.number),
            ),
            AttractionSort::Visitors => {
                desc_missing_zero(self.annual_visitors(), other.annual_visitors())
            }
        }
    }
}
