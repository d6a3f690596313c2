// crates/atlas-core/src/stats.rs

//! Aggregate counters shown in each page header.
//!
//! Computed over the full collection, not the filtered set.

use crate::model::{Attraction, City, Country, Photo};
use crate::view::format::format_number;
use crate::view::Stat;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttractionStats {
    pub total: usize,
    /// Distinct address country names.
    pub countries: usize,
    pub unesco: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CityStats {
    pub total: usize,
    /// Distinct country ids.
    pub countries: usize,
    pub with_unesco: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryStats {
    pub total: usize,
    pub population: f64,
    pub unesco_sites: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoStats {
    pub total: usize,
    pub authors: usize,
}

impl AttractionStats {
    pub fn compute(items: &[Attraction]) -> Self {
        let countries: HashSet<&str> = items.iter().filter_map(Attraction::country).collect();
        Self {
            total: items.len(),
            countries: countries.len(),
            unesco: items.iter().filter(|a| a.is_unesco()).count(),
        }
    }

    pub fn summary(&self) -> Vec<Stat> {
        vec![
            Stat::new("Atrakcje", self.total.to_string()),
            Stat::new("Kraje", self.countries.to_string()),
            Stat::new("UNESCO", self.unesco.to_string()),
        ]
    }
}

impl CityStats {
    pub fn compute(items: &[City]) -> Self {
        let countries: HashSet<&str> = items.iter().filter_map(City::country_id).collect();
        Self {
            total: items.len(),
            countries: countries.len(),
            with_unesco: items.iter().filter(|c| c.has_unesco()).count(),
        }
    }

    pub fn summary(&self) -> Vec<Stat> {
        vec![
            Stat::new("Miasta", self.total.to_string()),
            Stat::new("Kraje", self.countries.to_string()),
            Stat::new("Z obiektami UNESCO", self.with_unesco.to_string()),
        ]
    }
}

impl CountryStats {
    pub fn compute(items: &[Country]) -> Self {
        Self {
            total: items.len(),
            population: items.iter().filter_map(Country::population).sum(),
            unesco_sites: items.iter().filter_map(Country::unesco_sites).sum(),
        }
    }

    pub fn summary(&self) -> Vec<Stat> {
        vec![
            Stat::new("Kraje", self.total.to_string()),
            Stat::new("Populacja", format_number(Some(self.population))),
            Stat::new("Obiekty UNESCO", format_number(Some(self.unesco_sites))),
        ]
    }
}

impl PhotoStats {
    pub fn compute(items: &[Photo]) -> Self {
        let authors: HashSet<&str> = items.iter().filter_map(|p| p.author.as_deref()).collect();
        Self {
            total: items.len(),
            authors: authors.len(),
        }
    }

    pub fn summary(&self) -> Vec<Stat> {
        vec![
            Stat::new("Zdjęcia", self.total.to_string()),
            Stat::new("Fotografowie", self.authors.to_string()),
        ]
    }
}
