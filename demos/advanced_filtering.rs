//! Advanced filtering example for atlas-rs
//!
//! This example demonstrates filter presets from a URL, combined predicates,
//! sort modes and the home-page global search.

use atlas_core::filter::{CitySort, CountrySort, PopulationBucket, UnescoFilter};
use atlas_core::model::{City, Country};
use atlas_core::{GlobalSearch, Loader, Page, PortalConfig, Result};

fn main() -> Result<()> {
    println!("=== Atlas Advanced Filtering Example ===\n");

    let location = std::env::args().nth(1).unwrap_or_else(|| ".".to_owned());
    let loader = Loader::open(&location, PortalConfig::default())?;
    let relations = loader.load_resolver();

    // Example 1: Continent preset taken from the page URL
    println!("--- Example 1: Countries in Europe, by population ---");
    let mut countries: Page<Country> = Page::from_result(loader.load_countries(), relations.clone());
    countries.init_from_url("kraje.html?continent=europa");
    countries.set_sort(CountrySort::Population)?;
    for c in countries.filtered().take(10) {
        println!("- {} ({:?})", c.display_name(), c.population());
    }
    println!();

    // Example 2: Large cities with UNESCO sites
    println!("--- Example 2: Large cities with UNESCO sites ---");
    let mut cities: Page<City> = Page::from_result(loader.load_cities(), relations);
    cities.update_filters(|f| {
        f.population = Some(PopulationBucket::Large);
        f.unesco = Some(UnescoFilter::Yes);
    })?;
    cities.set_sort("unesco".parse::<CitySort>()?)?;
    for c in cities.filtered() {
        println!("- {} ({:?} sites)", c.display_name(), c.unesco_sites());
    }
    println!();

    // Example 3: Global search across the index documents
    println!("--- Example 3: Global search for 'ma' ---");
    let search = GlobalSearch::new(
        loader.load_index(&loader.config().countries_index).unwrap_or_default(),
        loader.load_index(&loader.config().cities_index).unwrap_or_default(),
        loader.load_index(&loader.config().attractions_index).unwrap_or_default(),
    );
    for hit in search.search("ma", None) {
        println!("{} {} [{}] -> {}", hit.icon, hit.name, hit.kind, hit.url);
    }

    Ok(())
}
