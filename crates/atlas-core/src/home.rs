// crates/atlas-core/src/home.rs

//! # Home Dashboard
//!
//! Portal-wide numbers for the landing page: totals with per-continent and
//! per-category breakdowns, continent cards linking into the filtered
//! countries list, the most visited destinations and a strip of UNESCO
//! attractions.
//!
//! Totals come from the index documents (what the portal lists), not from the
//! detail documents that happened to load.

use crate::error::Result;
use crate::loader::{fetch_all, Loader};
use crate::model::{Attraction, CategoryIndex, Country, IndexDocument, IndexItem};
use crate::router::{ATTRACTIONS, COUNTRIES};
use crate::stats::CountryStats;
use crate::view::format::{format_key, format_number, join_present};
use crate::view::Stat;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{info, warn};

/// Continent of countries whose index row and document both lack one.
pub const OTHER_CONTINENT: &str = "Inne";

/// Length of the top destinations list.
pub const TOP_DESTINATIONS: usize = 6;

/// Length of the UNESCO strip.
pub const UNESCO_SITES: usize = 6;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Totals {
    pub countries: usize,
    pub cities: usize,
    /// Files listed by the category manifests.
    pub attractions: usize,
    pub photos: usize,
    /// Sum of the countries' UNESCO site counts.
    pub unesco: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContinentCard {
    pub name: String,
    pub icon: &'static str,
    pub countries: usize,
    pub cities: usize,
    /// Countries list filtered to this continent.
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub label: String,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Destination {
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub flag: Option<String>,
    pub continent: String,
    pub visitors: f64,
    pub visitors_label: String,
    pub unesco: Option<f64>,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnescoSite {
    pub id: String,
    pub name: String,
    pub location: Option<String>,
    pub year: Option<String>,
    pub image: Option<String>,
    pub link: String,
}

/// Everything the home page shows.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Dashboard {
    pub totals: Totals,
    /// In order of first appearance in the countries index.
    pub continents: Vec<ContinentCard>,
    /// In configured category order. Categories whose manifest failed are
    /// left out.
    pub categories: Vec<CategoryCount>,
    pub top_destinations: Vec<Destination>,
    pub unesco_sites: Vec<UnescoSite>,
}

fn continent_icon(name: &str) -> &'static str {
    match name {
        "Europa" => "🇪🇺",
        "Azja" | "Oceania" => "🌏",
        "Afryka" => "🌍",
        "Ameryka Północna" | "Ameryka Południowa" => "🌎",
        "Antarktyda" => "🇦🇶",
        _ => "🌐",
    }
}

/// Input of [`Dashboard::build`], as loaded by [`Dashboard::load`].
#[derive(Clone, Debug, Default)]
pub struct HomeData {
    pub countries_index: IndexDocument,
    pub cities_index: IndexDocument,
    /// `(category, listed files)` for every manifest that loaded.
    pub categories: Vec<(String, usize)>,
    pub photos: usize,
    pub countries: Vec<Country>,
    pub attractions: Vec<Attraction>,
}

impl Dashboard {
    /// Loads what the home page needs. The countries and cities indexes are
    /// required; everything else degrades to empty.
    pub fn load(loader: &Loader) -> Result<Self> {
        let cfg = loader.config();
        let countries_index = loader.load_index(&cfg.countries_index)?;
        let cities_index = loader.load_index(&cfg.cities_index)?;
        let countries = loader.load_countries()?;

        let manifest_paths: Vec<String> =
            cfg.categories.iter().map(|c| cfg.category_index(c)).collect();
        let categories = cfg
            .categories
            .iter()
            .zip(fetch_all(loader.source(), &manifest_paths))
            .filter_map(|(category, doc)| {
                match serde_json::from_value::<CategoryIndex>(doc?) {
                    Ok(manifest) => Some((category.clone(), manifest.files.len())),
                    Err(e) => {
                        warn!(%category, error = %e, "skipping malformed category index");
                        None
                    }
                }
            })
            .collect();

        let attractions = loader.load_attractions().unwrap_or_else(|e| {
            warn!(error = %e, "no attractions for the dashboard");
            Vec::new()
        });

        let data = HomeData {
            countries_index,
            cities_index,
            categories,
            photos: loader.load_photos_or_empty().len(),
            countries,
            attractions,
        };
        let dashboard = Self::build(&data);
        info!(
            continents = dashboard.continents.len(),
            destinations = dashboard.top_destinations.len(),
            "dashboard ready"
        );
        Ok(dashboard)
    }

    pub fn build(data: &HomeData) -> Self {
        let details: HashMap<&str, &Country> =
            data.countries.iter().map(|c| (c.id.as_str(), c)).collect();

        // Index row first, then the country document.
        let continent_of = |id: &str, listed: Option<&str>| -> String {
            listed
                .filter(|c| !c.is_empty())
                .or_else(|| {
                    details
                        .get(id)
                        .map(|c| c.continent())
                        .filter(|c| !c.is_empty())
                })
                .unwrap_or(OTHER_CONTINENT)
                .to_owned()
        };

        let mut continents: Vec<ContinentCard> = Vec::new();
        // City index rows name their country by id or by name.
        let mut country_continent: HashMap<&str, String> = HashMap::new();
        for item in &data.countries_index.items {
            let continent = continent_of(&item.id, item.continent.as_deref());
            match continents.iter_mut().find(|c| c.name == continent) {
                Some(card) => card.countries += 1,
                None => continents.push(ContinentCard {
                    icon: continent_icon(&continent),
                    link: COUNTRIES.filtered_link(&continent),
                    name: continent.clone(),
                    countries: 1,
                    cities: 0,
                }),
            }
            country_continent.insert(item.name(), continent.clone());
            country_continent.insert(item.id.as_str(), continent);
        }
        for item in &data.cities_index.items {
            let Some(continent) = item.country.as_deref().and_then(|c| country_continent.get(c)) else {
                continue;
            };
            if let Some(card) = continents.iter_mut().find(|c| &c.name == continent) {
                card.cities += 1;
            }
        }

        let categories: Vec<CategoryCount> = data
            .categories
            .iter()
            .map(|(category, count)| CategoryCount {
                category: category.clone(),
                label: format_key(category),
                count: *count,
            })
            .collect();

        let names: HashMap<&str, &IndexItem> = data
            .countries_index
            .items
            .iter()
            .map(|i| (i.id.as_str(), i))
            .collect();
        let mut visited: Vec<(&Country, f64)> = data
            .countries
            .iter()
            .filter_map(|c| c.annual_visitors().filter(|v| *v > 0.0).map(|v| (c, v)))
            .collect();
        visited.sort_by(|a, b| b.1.total_cmp(&a.1));
        let top_destinations = visited
            .into_iter()
            .take(TOP_DESTINATIONS)
            .enumerate()
            .map(|(i, (c, visitors))| {
                let listed = names.get(c.id.as_str());
                let name = Some(c.display_name())
                    .filter(|n| !n.is_empty())
                    .or_else(|| listed.map(|i| i.name()))
                    .unwrap_or(&c.id);
                Destination {
                    rank: i + 1,
                    id: c.id.clone(),
                    name: name.to_owned(),
                    flag: c
                        .flag_emoji()
                        .or_else(|| listed.and_then(|i| i.flag.as_deref()))
                        .map(str::to_owned),
                    continent: continent_of(&c.id, listed.and_then(|i| i.continent.as_deref())),
                    visitors,
                    visitors_label: format_number(Some(visitors)),
                    unesco: c.unesco_sites().filter(|n| *n > 0.0),
                    link: COUNTRIES.link(&c.id),
                }
            })
            .collect();

        let unesco_sites = data
            .attractions
            .iter()
            .filter(|a| a.is_unesco())
            .take(UNESCO_SITES)
            .map(|a| UnescoSite {
                id: a.id.clone(),
                name: a.display_name().to_owned(),
                location: join_present([a.city(), a.country()]),
                year: a.construction_start().map(|s| s.text.clone()),
                image: a.thumbnail().map(str::to_owned),
                link: ATTRACTIONS.link(&a.id),
            })
            .collect();

        Dashboard {
            totals: Totals {
                countries: data.countries_index.items.len(),
                cities: data.cities_index.items.len(),
                attractions: data.categories.iter().map(|(_, n)| n).sum(),
                photos: data.photos,
                unesco: CountryStats::compute(&data.countries).unesco_sites,
            },
            continents,
            categories,
            top_destinations,
            unesco_sites,
        }
    }

    /// The five headline counters.
    pub fn summary(&self) -> Vec<Stat> {
        let t = &self.totals;
        vec![
            Stat::new("Kraje", t.countries.to_string()),
            Stat::new("Miasta", t.cities.to_string()),
            Stat::new("Atrakcje", t.attractions.to_string()),
            Stat::new("Zdjęcia", t.photos.to_string()),
            Stat::new("Obiekty UNESCO", format_number(Some(t.unesco))),
        ]
    }

    /// `Europa: 2 • Azja: 1`
    pub fn continent_breakdown(&self) -> String {
        self.continents
            .iter()
            .map(|c| format!("{}: {}", c.name, c.countries))
            .collect::<Vec<_>>()
            .join(" • ")
    }

    /// `Budynki: 3 • Muzea: 1`; empty categories are left out.
    pub fn category_breakdown(&self) -> String {
        self.categories
            .iter()
            .filter(|c| c.count > 0)
            .map(|c| format!("{}: {}", c.label, c.count))
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn index(items: serde_json::Value) -> IndexDocument {
        serde_json::from_value(json!({ "items": items })).unwrap()
    }

    #[test]
    fn breakdowns_follow_index_order_and_skip_empty_categories() {
        let data = HomeData {
            countries_index: index(json!([
                {"id": "K1", "kontynent": "Azja"},
                {"id": "K2", "kontynent": "Europa"},
                {"id": "K3", "kontynent": "Azja"},
                {"id": "K4"}
            ])),
            cities_index: index(json!([
                {"id": "M1", "kraj": "K1"},
                {"id": "M2", "kraj": "K2"},
                {"id": "M3", "kraj": "K-UNKNOWN"}
            ])),
            categories: vec![("budynki".into(), 3), ("parki".into(), 0)],
            ..HomeData::default()
        };
        let d = Dashboard::build(&data);
        assert_eq!(d.continent_breakdown(), "Azja: 2 • Europa: 1 • Inne: 1");
        assert_eq!(d.category_breakdown(), "Budynki: 3");
        assert_eq!(d.totals.attractions, 3);
        assert_eq!(d.continents[0].cities, 1);
        assert_eq!(d.continents[0].icon, "🌏");
        assert_eq!(d.continents[2].link, "kraje.html?continent=Inne");
    }
}
