// crates/atlas-core/src/filter/city.rs
use super::{desc_missing_zero, field_equals, selection, unknown_control, Filterable};
use crate::error::Result;
use crate::model::City;
use crate::text::{collate, normalize_query, MIN_SEARCH_LEN};
use std::cmp::Ordering;

query_enum! {
    pub enum CitySort {
        #[default]
        Name => "name",
        Population => "population",
        Visitors => "visitors" | "tourists",
        Unesco => "unesco",
    }
}

query_enum! {
    /// Population brackets of the city filter.
    pub enum PopulationBucket {
        /// 10M and more.
        #[default]
        Mega => "mega",
        /// 1M up to 10M.
        Large => "large",
        /// 500k up to 1M.
        Medium => "medium",
        /// Below 500k.
        Small => "small",
    }
}

query_enum! {
    pub enum UnescoFilter {
        #[default]
        Yes => "yes" | "tak",
        No => "no" | "nie",
    }
}

impl PopulationBucket {
    pub fn contains(self, population: f64) -> bool {
        match self {
            PopulationBucket::Mega => population >= 10_000_000.0,
            PopulationBucket::Large => (1_000_000.0..10_000_000.0).contains(&population),
            PopulationBucket::Medium => (500_000.0..1_000_000.0).contains(&population),
            PopulationBucket::Small => population < 500_000.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CityFilters {
    /// Raw search input, matched against the popular and official names.
    pub search: String,
    pub country_id: Option<String>,
    pub population: Option<PopulationBucket>,
    pub unesco: Option<UnescoFilter>,
}

impl Filterable for City {
    type Filters = CityFilters;
    type Sort = CitySort;

    fn matches(&self, f: &CityFilters) -> bool {
        if let Some(q) = normalize_query(&f.search, MIN_SEARCH_LEN) {
            let hit = [self.popular_name(), self.official_name()]
                .iter()
                .any(|name| name.to_lowercase().contains(&q));
            if !hit {
                return false;
            }
        }
        if !field_equals(self.country_id(), f.country_id.as_deref()) {
            return false;
        }
        if let (Some(bucket), Some(pop)) = (f.population, self.population()) {
            if !bucket.contains(pop) {
                return false;
            }
        }
        match f.unesco {
            Some(UnescoFilter::Yes) => self.has_unesco(),
            Some(UnescoFilter::No) => !self.has_unesco(),
            None => true,
        }
    }

    fn set_control(f: &mut CityFilters, key: &str, value: &str) -> Result<()> {
        match key {
            "search" => f.search = value.to_owned(),
            "country" | "kraj" => f.country_id = selection(value),
            "population" | "populacja" => {
                f.population = selection(value).map(|v| v.parse()).transpose()?
            }
            "unesco" => f.unesco = selection(value).map(|v| v.parse()).transpose()?,
            other => return Err(unknown_control("city", other, "search, country, population, unesco")),
        }
        Ok(())
    }

    fn compare(&self, other: &Self, sort: CitySort) -> Ordering {
        match sort {
            CitySort::Name => collate(self.display_name(), other.display_name()),
            CitySort::Population => desc_missing_zero(self.population(), other.population()),
            CitySort::Visitors => {
                desc_missing_zero(self.annual_visitors(), other.annual_visitors())
            }
            CitySort::Unesco => desc_missing_zero(self.unesco_sites(), other.unesco_sites()),
        }
    }
}
