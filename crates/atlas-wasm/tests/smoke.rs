use serde::Serialize;
use serde_json::json;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use atlas_wasm::Portal;

fn documents() -> JsValue {
    let docs = json!({
        "data/metadata/cities_index.json": {"items": [
            {"id": "M-1", "nazwa": "Rzym", "kraj": "Włochy"},
            {"id": "M-2", "nazwa": "Paryż", "kraj": "Francja"}
        ]},
        "data/metadata/countries_index.json": {"items": []},
        "data/metadata/attractions_index.json": {"items": []},
        "data/miasta/m-1.json": {"id": "M-1", "podstawowe_informacje": {"nazwa": {"popularna": "Rzym"}}},
        "data/miasta/m-2.json": {"id": "M-2", "podstawowe_informacje": {"nazwa": {"popularna": "Paryż"}}}
    });
    docs.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap()
}

#[wasm_bindgen_test]
fn city_page_selects_and_navigates() {
    #[cfg(target_arch = "wasm32")]
    atlas_wasm::start();

    let portal = Portal::new(documents(), JsValue::UNDEFINED).unwrap();
    let mut page = portal.cities_page(None);
    assert_eq!(page.filtered_len(), 2);
    assert!(page.filters_visible());

    page.select("M-2").unwrap();
    assert!(!page.filters_visible());
    assert!(!page.detail_view().unwrap().is_null());

    page.back().unwrap();
    assert!(page.detail_view().unwrap().is_null());
}

#[wasm_bindgen_test]
fn search_and_missing_gallery() {
    #[cfg(target_arch = "wasm32")]
    atlas_wasm::start();

    let mut portal = Portal::new(documents(), JsValue::UNDEFINED).unwrap();
    let hits = js_sys::Array::from(&portal.search("rzy", None).unwrap());
    assert_eq!(hits.length(), 1);

    // No photos document: the gallery page is in its error state.
    let gallery = portal.gallery(None);
    assert!(!gallery.has_more());
    let status: serde_json::Value =
        serde_wasm_bindgen::from_value(gallery.status().unwrap()).unwrap();
    assert_eq!(status["status"], "error");
}

#[wasm_bindgen_test]
fn home_counts_listed_cities() {
    let portal = Portal::new(documents(), JsValue::UNDEFINED).unwrap();
    let home: serde_json::Value = serde_wasm_bindgen::from_value(portal.home().unwrap()).unwrap();
    assert_eq!(home["totals"]["cities"], 2);
    assert_eq!(home["totals"]["countries"], 0);
    assert_eq!(home["continents"], json!([]));
}
