//! Basic usage example for atlas-rs
//!
//! This example demonstrates how to:
//! - Open a data source (directory or base URL)
//! - Load a page and render its list view
//! - Open a detail view and step through the filtered set
//!
//! Run with `cargo run --example basic_usage -- <data-dir-or-url>`.

use atlas_core::model::City;
use atlas_core::view::ListView;
use atlas_core::{Loader, Page, PortalConfig, Result};

fn main() -> Result<()> {
    println!("=== Atlas Basic Usage Example ===\n");

    let location = std::env::args().nth(1).unwrap_or_else(|| ".".to_owned());
    println!("Opening {location}...");
    let loader = Loader::open(&location, PortalConfig::default())?;

    let relations = loader.load_resolver();
    let mut page: Page<City> = Page::from_result(loader.load_cities(), relations);
    println!("✓ {} cities loaded\n", page.items().len());

    // Example 1: List view
    println!("--- Example 1: First five cards ---");
    match page.list_view() {
        ListView::Cards { cards } => {
            for (i, card) in cards.iter().take(5).enumerate() {
                println!("{}. {} ({})", i + 1, card.title, card.subtitle.as_deref().unwrap_or("-"));
            }
        }
        ListView::Empty { message } => println!("{message}"),
    }
    println!();

    // Example 2: Detail view and navigation
    println!("--- Example 2: Detail view ---");
    if page.filtered_len() > 0 {
        let t = page.select_at(0)?;
        println!("push: {:?}", t.push);
        if let Some(detail) = page.detail_view() {
            println!("{} - {} sections", detail.title, detail.sections.len());
        }
        let t = page.next();
        println!("next -> {:?}", t.view);
        page.back();
    }

    // Example 3: Header stats
    println!("\n--- Example 3: Stats ---");
    for stat in page.stats() {
        println!("{}: {}", stat.label, stat.value);
    }

    Ok(())
}
