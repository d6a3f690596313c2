// crates/atlas-core/tests/view.rs
mod common;

use atlas_core::filter::CityFilters;
use atlas_core::view::{ListView, Section};
use atlas_core::{Attraction, City, Country, Page};

fn resolver() -> atlas_core::RelationResolver {
    let loader = common::loader();
    loader.load_resolver()
}

#[test]
fn empty_filtered_set_renders_the_no_results_state() {
    let loader = common::loader();
    let mut page: Page<City> = Page::new(loader.load_cities().unwrap(), resolver());
    page.update_filters(|f: &mut CityFilters| f.search = "zzz".into()).unwrap();
    assert_eq!(
        page.list_view(),
        ListView::Empty {
            message: "Nie znaleziono miast".into()
        }
    );

    let json = serde_json::to_value(page.list_view()).unwrap();
    assert_eq!(json["state"], "empty");
}

#[test]
fn city_card_resolves_its_country() {
    let loader = common::loader();
    let page: Page<City> = Page::new(loader.load_cities().unwrap(), resolver());
    let view = page.list_view();
    let rome = view.cards().iter().find(|c| c.id == "M-RZYM").unwrap();
    assert_eq!(rome.subtitle.as_deref(), Some("Włochy"));
    assert_eq!(rome.flag_url.as_deref(), Some("https://flagcdn.com/w40/it.png"));
    assert_eq!(rome.link, "miasta.html?id=M-RZYM");
    assert!(rome.badges.iter().any(|b| b == "UNESCO"));
}

#[test]
fn city_detail_has_relations_and_gallery_but_no_empty_sections() {
    let loader = common::loader();
    let mut page: Page<City> = Page::new(loader.load_cities().unwrap(), resolver());
    page.select("M-RZYM").unwrap();
    let detail = page.detail_view().unwrap();

    match detail.section("Najważniejsze atrakcje") {
        Some(Section::Relations { title, links }) => {
            // The dangling id is dropped.
            assert_eq!(title, "Najważniejsze atrakcje (1)");
            assert_eq!(links[0].link, "atrakcje.html?building=A-KOLOSEUM");
        }
        other => panic!("unexpected section: {other:?}"),
    }
    assert!(matches!(detail.section("Kraj"), Some(Section::Relations { .. })));
    match detail.section("Galeria") {
        Some(Section::Gallery { photos, .. }) => assert_eq!(photos[0].id, "P3"),
        other => panic!("unexpected section: {other:?}"),
    }
    assert!(detail.section("Transport").is_none());
    assert!(detail.section("Mapa").is_none());
}

#[test]
fn country_detail_formats_population_with_year() {
    let loader = common::loader();
    let mut page: Page<Country> = Page::new(loader.load_countries().unwrap(), resolver());
    page.select("K-IT").unwrap();
    let detail = page.detail_view().unwrap();
    assert_eq!(detail.title, "Włochy");
    assert_eq!(detail.subtitle.as_deref(), Some("Republika Włochy"));

    let Some(Section::Stats { items, .. }) = detail.section("Podstawowe informacje") else {
        panic!("missing basics");
    };
    let population = items.iter().find(|s| s.label == "Populacja").unwrap();
    assert_eq!(population.value, "59.0 mln (2023)");
}

#[test]
fn attraction_detail_and_stats() {
    let loader = common::loader();
    let mut page: Page<Attraction> = Page::new(loader.load_attractions().unwrap(), resolver());
    page.select("A-WIEZA").unwrap();
    let detail = page.detail_view().unwrap();
    assert_eq!(detail.subtitle.as_deref(), Some("Rzym, Francja"));
    assert_eq!(detail.badges, ["budynki"]);

    let Some(Section::Stats { items, .. }) = detail.section("Kluczowe dane") else {
        panic!("missing key stats");
    };
    assert_eq!(items[0].value, "330 m");

    let stats = page.stats();
    assert_eq!(stats[0].value, "2");
    assert_eq!(stats[1].value, "2");
}

#[test]
fn map_section_uses_a_small_bounding_box() {
    let mut doc = common::city("M-X", "Iks", None, None, 0.0);
    doc["geografia"] = serde_json::json!({"wspolrzedne": {"lat": 41.9, "lon": "12.5"}});
    let city: City = serde_json::from_value(doc).unwrap();
    let mut page = Page::new(vec![city], atlas_core::RelationResolver::new());
    page.select("M-X").unwrap();
    let detail = page.detail_view().unwrap();
    let Some(Section::Map { map, .. }) = detail.section("Mapa") else {
        panic!("missing map");
    };
    assert_eq!(map.lat, 41.9);
    assert_eq!(map.lon, 12.5);
    assert!(map.embed_url.contains("marker=41.9,12.5"));
}

#[test]
fn pages_opened_from_the_loader_show_the_photo_gallery() {
    let loader = common::loader();
    let mut page: Page<Country> =
        Page::from_result(loader.load_countries(), loader.load_resolver());
    page.select("K-IT").unwrap();
    let detail = page.detail_view().unwrap();
    match detail.section("Galeria") {
        Some(Section::Gallery { photos, .. }) => {
            let ids: Vec<&str> = photos.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(ids, ["P1", "P3"]);
        }
        other => panic!("unexpected section: {other:?}"),
    }

    // The gallery page loads its photos itself.
    assert!(loader.load_name_index().photos().is_empty());
}
