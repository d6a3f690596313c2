//! Error handling example for atlas-rs
//!
//! This example demonstrates the failure taxonomy: a missing index is an
//! error state, a missing detail document is skipped, and an empty filtered
//! set is a normal "no results" view.

use atlas_core::model::City;
use atlas_core::view::ListView;
use atlas_core::{AtlasError, LoadStatus, Loader, MemorySource, Page, PortalConfig, Result};
use serde_json::json;

fn main() -> Result<()> {
    println!("=== Atlas Error Handling Example ===\n");

    // Example 1: Missing index
    println!("--- Example 1: Index unavailable ---");
    let loader = Loader::new(MemorySource::new(), PortalConfig::default());
    let page: Page<City> = Page::from_result(loader.load_cities(), loader.load_resolver());
    match page.status() {
        LoadStatus::Error(msg) => println!("  ✗ {msg}"),
        LoadStatus::Ready => println!("  unexpected: page is ready"),
    }
    println!();

    // Example 2: One detail document missing
    println!("--- Example 2: Missing detail document ---");
    let source = MemorySource::new()
        .with(
            "data/metadata/cities_index.json",
            json!({"items": [{"id": "M-1", "nazwa": "Rzym"}, {"id": "M-2", "nazwa": "Oslo"}]}),
        )
        .with(
            "data/miasta/m-1.json",
            json!({"id": "M-1", "podstawowe_informacje": {"nazwa": {"popularna": "Rzym"}}}),
        );
    let loader = Loader::new(source, PortalConfig::default());
    let mut page: Page<City> = Page::from_result(loader.load_cities(), loader.load_resolver());
    println!("  {} of 2 cities loaded", page.items().len());
    println!();

    // Example 3: Empty filtered set
    println!("--- Example 3: No results ---");
    page.update_filters(|f| f.search = "nic takiego".into())?;
    if let ListView::Empty { message } = page.list_view() {
        println!("  {message}");
    }
    println!();

    // Example 4: Filters are hidden in a detail view
    println!("--- Example 4: Filtering from a detail view ---");
    page.update_filters(|f| f.search.clear())?;
    page.select("M-1")?;
    match page.update_filters(|f| f.search = "rz".into()) {
        Err(AtlasError::FiltersHidden) => println!("  filters are hidden while a detail view is open"),
        other => println!("  unexpected: {other:?}"),
    }
    if let Err(e) = page.select("M-404") {
        println!("  {e}");
    }

    Ok(())
}
