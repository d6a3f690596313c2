// crates/atlas-core/tests/common/mod.rs
#![allow(dead_code)]

use atlas_core::{Loader, MemorySource, PortalConfig};
use serde_json::{json, Value};

pub fn config() -> PortalConfig {
    PortalConfig {
        categories: vec!["budynki".into(), "mosty".into()],
        photo_page_size: 2,
        ..PortalConfig::default()
    }
}

pub fn country(id: &str, name: &str, continent: &str, population: f64, unesco: f64) -> Value {
    json!({
        "id": id,
        "podstawowe_informacje": {"nazwa": {"popularna": name, "oficjalna": format!("Republika {name}")}},
        "geografia": {"kontynent": continent, "powierzchnia": {"calkowita_km2": population / 100.0}},
        "demografia": {"populacja": {"liczba": population, "rok": 2023}},
        "turystyka": {"obiekty_unesco": unesco}
    })
}

pub fn city(id: &str, name: &str, country_id: Option<&str>, population: Option<f64>, unesco: f64) -> Value {
    let mut doc = json!({
        "id": id,
        "podstawowe_informacje": {"nazwa": {"popularna": name}},
        "turystyka": {"obiekty_unesco": unesco, "najwazniejsze_atrakcje_ids": ["A-KOLOSEUM", "A-MISSING"]}
    });
    if let Some(cid) = country_id {
        doc["lokalizacja"] = json!({"kraj_id": cid});
    }
    if let Some(p) = population {
        doc["demografia"] = json!({"populacja": p});
    }
    doc
}

pub fn attraction(id: &str, name: &str, country: &str, height: Option<f64>, started: Value) -> Value {
    let mut doc = json!({
        "id": id,
        "podstawowe_informacje": {"nazwa": {"potoczna": name}},
        "lokalizacja": {"adres": {"miasto": "Rzym", "kraj": country}},
        "budowa": {"chronologia": {"rozpoczęcie_budowy": started}}
    });
    if let Some(h) = height {
        doc["wymiary"] = json!({"wysokość": {"całkowita": h}});
    }
    doc
}

pub fn photos() -> Value {
    json!({"zdjecia": [
        {"id": "P1", "tytul": "Koloseum nocą", "autor": "Anna", "data": "2023-05-01",
         "tagi": ["rzym", "noc"], "powiazania": {"kraje_ids": ["K-IT"], "obiekty_ids": ["A-KOLOSEUM"]}},
        {"id": "P2", "tytul": "Wieża Eiffla", "autor": "Jan",
         "powiazania": {"kraje_ids": ["K-FR"]}},
        {"id": "P3", "tytul": "Panorama Rzymu", "autor": "Anna", "data": "2024-01-15",
         "powiazania": {"miasta_ids": ["M-RZYM"], "kraje_ids": ["K-IT"]}},
        {"id": "P4", "tytul": "Bez powiązań", "data": "2022-12-31"}
    ]})
}

/// A small but complete portal in memory.
pub fn source() -> MemorySource {
    MemorySource::new()
        .with(
            "data/metadata/countries_index.json",
            json!({"items": [
                {"id": "K-IT", "nazwa": "Włochy", "nazwa_oficjalna": "Republika Włoska", "flaga": "🇮🇹"},
                {"id": "K-FR", "nazwa": "Francja"},
                {"id": "K-JP", "nazwa": "Japonia"},
                {"id": "K-GONE", "nazwa": "Atlantyda"}
            ]}),
        )
        .with("data/kraje/k-it.json", country("K-IT", "Włochy", "Europa", 59_000_000.0, 59.0))
        .with("data/kraje/k-fr.json", country("K-FR", "Francja", "Europa", 68_000_000.0, 52.0))
        .with("data/kraje/k-jp.json", country("K-JP", "Japonia", "Azja", 125_000_000.0, 25.0))
        .with(
            "data/metadata/cities_index.json",
            json!({"items": [
                {"id": "M-RZYM", "nazwa": "Rzym", "kraj": "Włochy"},
                {"id": "M-MEDIOLAN", "nazwa": "Mediolan", "kraj": "Włochy"},
                {"id": "M-PARYZ", "nazwa": "Paryż", "kraj": "Francja"},
                {"id": "M-TOKIO", "nazwa": "Tokio", "kraj": "Japonia"},
                {"id": "M-LYON", "nazwa": "Lyon", "kraj": "Francja"}
            ]}),
        )
        .with("data/miasta/m-rzym.json", city("M-RZYM", "Rzym", Some("K-IT"), Some(2_800_000.0), 1.0))
        .with("data/miasta/m-mediolan.json", city("M-MEDIOLAN", "Mediolan", Some("K-IT"), Some(1_400_000.0), 0.0))
        .with("data/miasta/m-paryz.json", city("M-PARYZ", "Paryż", Some("K-FR"), Some(2_100_000.0), 4.0))
        .with("data/miasta/m-tokio.json", city("M-TOKIO", "Tokio", Some("K-JP"), Some(14_000_000.0), 0.0))
        .with("data/miasta/m-lyon.json", city("M-LYON", "Lyon", None, None, 1.0))
        .with(
            "data/metadata/attractions_index.json",
            json!({"items": [
                {"id": "A-KOLOSEUM", "nazwa": "Koloseum", "kategoria": "budynki", "lokalizacja": "Rzym"},
                {"id": "A-WIEZA", "nazwa": "Wieża Eiffla", "kategoria": "budynki", "lokalizacja": "Paryż"}
            ]}),
        )
        .with(
            "data/atrakcje/budynki/index.json",
            json!({"files": ["koloseum.json", "wieza.json", "broken.json"]}),
        )
        .with(
            "data/atrakcje/budynki/koloseum.json",
            attraction("A-KOLOSEUM", "Koloseum", "Włochy", Some(48.0), json!("70 n.e.")),
        )
        .with(
            "data/atrakcje/budynki/wieza.json",
            attraction("A-WIEZA", "Wieża Eiffla", "Francja", Some(330.0), json!(1887)),
        )
        .with("data/zdjecia/photos.json", photos())
}

pub fn loader() -> Loader {
    Loader::new(source(), config())
}
