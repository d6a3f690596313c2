// crates/atlas-core/tests/loader.rs
mod common;

use atlas_core::loader::{fetch_all, DirSource};
use atlas_core::{
    AtlasError, City, DocumentSource, LoadStatus, Loader, MemorySource, Page, PortalConfig,
};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, doc: &Value) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_vec_pretty(doc).unwrap()).unwrap();
}

fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(
        root,
        "data/metadata/cities_index.json",
        &json!({"items": [{"id": "M-RZYM", "nazwa": "Rzym"}, {"id": "M-OSLO", "nazwa": "Oslo"}, {"id": "M-BAD"}]}),
    );
    write(
        root,
        "data/miasta/m-rzym.json",
        &common::city("M-RZYM", "Rzym", Some("K-IT"), Some(2_800_000.0), 1.0),
    );
    // Not JSON at all.
    fs::write(root.join("data/miasta/m-bad.json"), "<html>404</html>").unwrap();
    dir
}

#[test]
fn directory_source_skips_failed_details() {
    let dir = data_dir();
    let loader = Loader::open(dir.path().to_str().unwrap(), PortalConfig::default()).unwrap();
    let cities = loader.load_cities().unwrap();
    let ids: Vec<&str> = cities.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["M-RZYM"]);
}

#[test]
fn missing_index_is_an_error_state_not_an_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let loader = Loader::new(DirSource::new(dir.path()).unwrap(), PortalConfig::default());

    let result = loader.load_cities();
    assert!(matches!(result, Err(AtlasError::IndexUnavailable(_))));

    let page: Page<City> = Page::from_result(result, loader.load_resolver());
    assert!(page.is_error());
    assert!(matches!(page.status(), LoadStatus::Error(msg) if msg.contains("cities_index")));
    assert_eq!(page.filtered_len(), 0);
}

#[test]
fn empty_index_is_ready_and_empty() {
    let source = MemorySource::new().with("data/metadata/cities_index.json", json!({"items": []}));
    let loader = Loader::new(source, PortalConfig::default());
    let page: Page<City> = Page::from_result(loader.load_cities(), loader.load_resolver());
    assert_eq!(page.status(), &LoadStatus::Ready);
    assert!(page.list_view().is_empty());
}

#[test]
fn attractions_need_at_least_one_category_index() {
    let loader = Loader::new(MemorySource::new(), common::config());
    assert!(matches!(
        loader.load_attractions(),
        Err(AtlasError::IndexUnavailable(_))
    ));

    // budynki loads, mosty is missing: the listing still works.
    let attractions = common::loader().load_attractions().unwrap();
    assert_eq!(attractions.len(), 2);
    assert!(attractions.iter().all(|a| a.category() == Some("budynki")));
}

#[test]
fn fetch_all_keeps_input_order() {
    let source = common::source();
    let paths: Vec<String> = [
        "data/kraje/k-jp.json",
        "data/kraje/missing.json",
        "data/kraje/k-it.json",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    let docs = fetch_all(&source, &paths);
    assert_eq!(docs.len(), 3);
    assert_eq!(docs[0].as_ref().unwrap()["id"], "K-JP");
    assert!(docs[1].is_none());
    assert_eq!(docs[2].as_ref().unwrap()["id"], "K-IT");
}

#[test]
fn open_source_rejects_missing_directories() {
    let err = atlas_core::open_source("/definitely/not/here", &PortalConfig::default());
    assert!(matches!(err, Err(AtlasError::NotFound(_))));
}

#[test]
fn config_file_overrides_paths() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portal.json");
    fs::write(&path, r#"{"cities_index": "idx/miasta.json", "photo_page_size": 12}"#).unwrap();
    let cfg = PortalConfig::from_json_path(&path).unwrap();
    assert_eq!(cfg.cities_index, "idx/miasta.json");
    assert_eq!(cfg.photo_page_size, 12);
    assert_eq!(cfg.countries_index, PortalConfig::default().countries_index);

    fs::write(&path, r#"{"photo_page_size": 0}"#).unwrap();
    assert!(matches!(
        PortalConfig::from_json_path(&path),
        Err(AtlasError::Config(_))
    ));
}

#[cfg(feature = "compact")]
#[test]
fn gzip_documents_are_found_next_to_plain_ones() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let dir = data_dir();
    let gz_path = dir.path().join("data/miasta/m-oslo.json.gz");
    let mut enc = GzEncoder::new(fs::File::create(gz_path).unwrap(), Compression::default());
    let doc = common::city("M-OSLO", "Oslo", Some("K-NO"), Some(700_000.0), 0.0);
    enc.write_all(&serde_json::to_vec(&doc).unwrap()).unwrap();
    enc.finish().unwrap();

    let source = DirSource::new(dir.path()).unwrap();
    assert_eq!(source.fetch("data/miasta/m-oslo.json").unwrap()["id"], "M-OSLO");

    let loader = Loader::new(source, PortalConfig::default());
    let mut ids: Vec<String> = loader.load_cities().unwrap().into_iter().map(|c| c.id).collect();
    ids.sort();
    assert_eq!(ids, ["M-OSLO", "M-RZYM"]);
}
