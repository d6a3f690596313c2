// crates/atlas-core/tests/relation.rs
mod common;

use atlas_core::{EntityKind, Linked, RelationResolver};

fn resolver() -> RelationResolver {
    let loader = common::loader();
    loader.load_resolver()
}

#[test]
fn resolves_in_order_and_drops_dangling_ids() {
    let r = resolver();
    let ids: Vec<String> = ["K-JP", "K-NOPE", "K-IT", "K-JP"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let linked = r.resolve(EntityKind::Country, &ids);
    assert_eq!(
        linked,
        vec![
            Linked { id: "K-JP".into(), name: "Japonia".into() },
            Linked { id: "K-IT".into(), name: "Włochy".into() },
            Linked { id: "K-JP".into(), name: "Japonia".into() },
        ]
    );
}

#[test]
fn lookups_come_from_all_three_indexes() {
    let r = resolver();
    assert_eq!(r.len(EntityKind::Country), 4);
    assert_eq!(r.len(EntityKind::City), 5);
    assert_eq!(r.name(EntityKind::Attraction, "A-WIEZA"), Some("Wieża Eiffla"));
    assert_eq!(r.name(EntityKind::Photo, "P1"), None);
}

#[test]
fn photos_are_matched_by_association_list() {
    let r = resolver();
    let ids = |kind, id| -> Vec<String> {
        r.photos_depicting(kind, id).iter().map(|p| p.id.clone()).collect()
    };
    assert_eq!(ids(EntityKind::Country, "K-IT"), ["P1", "P3"]);
    assert_eq!(ids(EntityKind::City, "M-RZYM"), ["P3"]);
    assert!(ids(EntityKind::Attraction, "A-WIEZA").is_empty());
}

#[test]
fn missing_indexes_leave_lookups_empty() {
    let loader = atlas_core::Loader::new(atlas_core::MemorySource::new(), common::config());
    let r = loader.load_resolver();
    assert_eq!(r.len(EntityKind::City), 0);
    assert!(loader.load_photos_or_empty().is_empty());
}
