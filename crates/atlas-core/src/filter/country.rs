// crates/atlas-core/src/filter/country.rs
use super::{desc_missing_zero, selection, unknown_control, Filterable};
use crate::error::Result;
use crate::model::Country;
use crate::text::{collate, normalize_query, MIN_SEARCH_LEN};
use std::cmp::Ordering;

query_enum! {
    pub enum CountrySort {
        #[default]
        Name => "name",
        Population => "population",
        Area => "area",
        Unesco => "unesco",
        Visitors => "visitors" | "tourists",
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CountryFilters {
    /// Raw search input, matched against official, local and popular names.
    pub search: String,
    /// Continent or region fragment, e.g. `europa` or `azja`. Case-insensitive.
    pub continent: Option<String>,
}

impl Filterable for Country {
    type Filters = CountryFilters;
    type Sort = CountrySort;

    fn matches(&self, f: &CountryFilters) -> bool {
        if let Some(q) = normalize_query(&f.search, MIN_SEARCH_LEN) {
            let hit = [self.official_name(), self.local_name(), self.display_name()]
                .iter()
                .any(|name| name.to_lowercase().contains(&q));
            if !hit {
                return false;
            }
        }
        match f.continent.as_deref().map(str::trim).filter(|c| !c.is_empty() && *c != "all") {
            None => true,
            Some(wanted) => {
                let wanted = wanted.to_lowercase();
                let (continent, region) = (self.continent(), self.region());
                // No geography at all: the predicate has nothing to test.
                (continent.is_empty() && region.is_empty())
                    || continent.to_lowercase().contains(&wanted)
                    || region.to_lowercase().contains(&wanted)
            }
        }
    }

    fn set_control(f: &mut CountryFilters, key: &str, value: &str) -> Result<()> {
        match key {
            "search" => f.search = value.to_owned(),
            "continent" | "kontynent" => f.continent = selection(value).map(|v| v.to_lowercase()),
            other => return Err(unknown_control("country", other, "search, continent")),
        }
        Ok(())
    }

    fn compare(&self, other: &Self, sort: CountrySort) -> Ordering {
        match sort {
            CountrySort::Name => collate(self.display_name(), other.display_name()),
            CountrySort::Population => desc_missing_zero(self.population(), other.population()),
            CountrySort::Area => desc_missing_zero(self.area_km2(), other.area_km2()),
            CountrySort::Unesco => desc_missing_zero(self.unesco_sites(), other.unesco_sites()),
            CountrySort::Visitors => {
                desc_missing_zero(self.annual_visitors(), other.annual_visitors())
            }
        }
    }
}
