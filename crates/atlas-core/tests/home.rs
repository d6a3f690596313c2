// crates/atlas-core/tests/home.rs
mod common;

use atlas_core::{AtlasError, Dashboard, Loader, MemorySource};
use serde_json::json;

#[test]
fn totals_and_continents_come_from_the_indexes() {
    let d = Dashboard::load(&common::loader()).unwrap();

    let summary = d.summary();
    let values: Vec<&str> = summary.iter().map(|s| s.value.as_str()).collect();
    // 3 files listed in the budynki manifest, broken one included.
    assert_eq!(values, ["4", "5", "3", "4", "136"]);

    // Atlantyda has no document and no continent in its index row.
    assert_eq!(d.continent_breakdown(), "Europa: 2 • Azja: 1 • Inne: 1");
    let cities: Vec<usize> = d.continents.iter().map(|c| c.cities).collect();
    assert_eq!(cities, [4, 1, 0]);
    assert_eq!(d.continents[0].link, "kraje.html?continent=Europa");

    // The mosty manifest is missing.
    assert_eq!(d.category_breakdown(), "Budynki: 3");
    assert!(d.top_destinations.is_empty());
    assert!(d.unesco_sites.is_empty());
}

#[test]
fn most_visited_countries_and_unesco_attractions() {
    let mut source = common::source();

    let mut italy = common::country("K-IT", "Włochy", "Europa", 59_000_000.0, 59.0);
    italy["turystyka"]["liczba_turystow_rocznie"] = json!(57_000_000);
    source.insert("data/kraje/k-it.json", italy);
    let mut france = common::country("K-FR", "Francja", "Europa", 68_000_000.0, 52.0);
    france["turystyka"]["liczba_turystow_rocznie"] = json!(100_000_000);
    source.insert("data/kraje/k-fr.json", france);
    let mut japan = common::country("K-JP", "Japonia", "Azja", 125_000_000.0, 25.0);
    japan["turystyka"]["liczba_turystow_rocznie"] = json!("31000000");
    source.insert("data/kraje/k-jp.json", japan);

    let mut colosseum = common::attraction("A-KOLOSEUM", "Koloseum", "Włochy", Some(48.0), json!("70 n.e."));
    colosseum["podstawowe_informacje"]["certyfikaty_oznaczenia"] = json!({"UNESCO": true});
    colosseum["galeria_zdjęć"] = json!([{"miniatura": "img/koloseum.jpg"}]);
    source.insert("data/atrakcje/budynki/koloseum.json", colosseum);

    let d = Dashboard::load(&Loader::new(source, common::config())).unwrap();

    let top: Vec<(usize, &str)> = d
        .top_destinations
        .iter()
        .map(|t| (t.rank, t.id.as_str()))
        .collect();
    assert_eq!(top, [(1, "K-FR"), (2, "K-IT"), (3, "K-JP")]);
    assert_eq!(d.top_destinations[0].visitors_label, "100.0 mln");
    assert_eq!(d.top_destinations[0].link, "kraje.html?id=K-FR");
    // No flag in the document: the index row has one.
    assert_eq!(d.top_destinations[1].flag.as_deref(), Some("🇮🇹"));
    assert_eq!(d.top_destinations[2].continent, "Azja");
    assert_eq!(d.top_destinations[2].unesco, Some(25.0));

    assert_eq!(d.unesco_sites.len(), 1);
    let site = &d.unesco_sites[0];
    assert_eq!(site.name, "Koloseum");
    assert_eq!(site.location.as_deref(), Some("Rzym, Włochy"));
    assert_eq!(site.year.as_deref(), Some("70 n.e."));
    assert_eq!(site.image.as_deref(), Some("img/koloseum.jpg"));
    assert_eq!(site.link, "atrakcje.html?building=A-KOLOSEUM");
}

#[test]
fn missing_countries_index_fails_the_dashboard() {
    let loader = Loader::new(MemorySource::new(), common::config());
    assert!(matches!(
        Dashboard::load(&loader),
        Err(AtlasError::IndexUnavailable(_))
    ));
}
