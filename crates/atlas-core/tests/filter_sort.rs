// crates/atlas-core/tests/filter_sort.rs
mod common;

use atlas_core::filter::{
    AttractionFilters, AttractionSort, CityFilters, CitySort, CountryFilters, CountrySort,
    PhotoFilters, PhotoKindFilter, PhotoSort, PopulationBucket, UnescoFilter,
};
use atlas_core::{Attraction, City, Country, Filterable, ListState, Photo};

fn ids<'a, T>(full: &'a [T], idx: &[usize], id: impl Fn(&'a T) -> &'a str) -> Vec<&'a str> {
    idx.iter().map(|&i| id(&full[i])).collect()
}

fn cities() -> Vec<City> {
    common::loader().load_cities().unwrap()
}

fn city_ids(full: &[City], state: &ListState<City>) -> Vec<String> {
    ids(full, &state.apply(full), |c| c.id.as_str())
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[test]
fn default_state_keeps_everything_sorted_by_name() {
    let full = cities();
    assert_eq!(full.len(), 5);
    let state = ListState::<City>::default();
    assert_eq!(
        city_ids(&full, &state),
        ["M-LYON", "M-MEDIOLAN", "M-PARYZ", "M-RZYM", "M-TOKIO"]
    );
}

#[test]
fn numeric_sorts_are_descending_with_missing_last() {
    let full = cities();
    let state = ListState::<City>::new(CityFilters::default(), CitySort::Population);
    assert_eq!(
        city_ids(&full, &state),
        ["M-TOKIO", "M-RZYM", "M-PARYZ", "M-MEDIOLAN", "M-LYON"]
    );
}

#[test]
fn equal_keys_keep_source_order() {
    let full = cities();
    let state = ListState::<City>::new(CityFilters::default(), CitySort::Unesco);
    // Rzym and Lyon tie at 1, Mediolan and Tokio at 0.
    assert_eq!(
        city_ids(&full, &state),
        ["M-PARYZ", "M-RZYM", "M-LYON", "M-MEDIOLAN", "M-TOKIO"]
    );
}

#[test]
fn filtered_set_is_the_conjunction_of_predicates() {
    let full = cities();
    let filters = CityFilters {
        country_id: Some("K-IT".into()),
        population: Some(PopulationBucket::Large),
        ..CityFilters::default()
    };
    let state = ListState::<City>::new(filters, CitySort::Name);
    // Lyon has neither a country nor a population, so both predicates pass it.
    assert_eq!(city_ids(&full, &state), ["M-LYON", "M-MEDIOLAN", "M-RZYM"]);

    let no_unesco = ListState::<City>::new(
        CityFilters {
            unesco: Some(UnescoFilter::No),
            ..CityFilters::default()
        },
        CitySort::Name,
    );
    assert_eq!(city_ids(&full, &no_unesco), ["M-MEDIOLAN", "M-TOKIO"]);
}

#[test]
fn short_name_queries_are_ignored() {
    let full = cities();
    let one_char = ListState::<City>::new(
        CityFilters {
            search: "r".into(),
            ..CityFilters::default()
        },
        CitySort::Name,
    );
    assert_eq!(one_char.apply(&full).len(), full.len());

    let two_chars = ListState::<City>::new(
        CityFilters {
            search: " RY ".into(),
            ..CityFilters::default()
        },
        CitySort::Name,
    );
    assert_eq!(city_ids(&full, &two_chars), ["M-PARYZ"]);
}

#[test]
fn attraction_search_covers_the_whole_record() {
    let full: Vec<Attraction> = common::loader().load_attractions().unwrap();
    let search = |q: &str| {
        let state = ListState::<Attraction>::new(
            AttractionFilters {
                search: q.into(),
                ..AttractionFilters::default()
            },
            AttractionSort::Name,
        );
        ids(&full, &state.apply(&full), |a| a.id.as_str())
    };

    assert_eq!(search("francja"), ["A-WIEZA"]);
    // The injected category tag is searchable.
    assert_eq!(search("budynki"), ["A-KOLOSEUM", "A-WIEZA"]);
    // Single characters apply to this predicate.
    assert_eq!(search("3"), ["A-WIEZA"]);
    assert!(search("x").is_empty());
}

#[test]
fn attraction_sorts() {
    let full: Vec<Attraction> = common::loader().load_attractions().unwrap();
    let order = |sort| {
        let state = ListState::<Attraction>::new(AttractionFilters::default(), sort);
        ids(&full, &state.apply(&full), |a| a.id.as_str())
    };
    assert_eq!(order(AttractionSort::Height), ["A-WIEZA", "A-KOLOSEUM"]);
    // "70 n.e." has no numeric reading and sorts as zero.
    assert_eq!(order(AttractionSort::Year), ["A-WIEZA", "A-KOLOSEUM"]);
    assert_eq!(order(AttractionSort::Name), ["A-KOLOSEUM", "A-WIEZA"]);
    assert_eq!("tourists".parse::<AttractionSort>().unwrap(), AttractionSort::Visitors);
}

#[test]
fn country_continent_filter_is_case_insensitive() {
    let full: Vec<Country> = common::loader().load_countries().unwrap();
    let state = ListState::<Country>::new(
        CountryFilters {
            continent: Some("EUROPA".into()),
            ..CountryFilters::default()
        },
        CountrySort::Population,
    );
    assert_eq!(ids(&full, &state.apply(&full), |c| c.id.as_str()), ["K-FR", "K-IT"]);

    let all = ListState::<Country>::new(
        CountryFilters {
            continent: Some("all".into()),
            ..CountryFilters::default()
        },
        CountrySort::Name,
    );
    assert_eq!(
        ids(&full, &all.apply(&full), |c| c.id.as_str()),
        ["K-FR", "K-JP", "K-IT"]
    );
}

#[test]
fn photo_filters_and_sorts() {
    let full: Vec<Photo> = common::loader().load_photos().unwrap();
    let run = |filters: PhotoFilters, sort| {
        let state = ListState::<Photo>::new(filters, sort);
        ids(&full, &state.apply(&full), |p| p.id.as_str())
    };

    assert_eq!(run(PhotoFilters::default(), PhotoSort::Recent), ["P3", "P1", "P4", "P2"]);
    assert_eq!(run(PhotoFilters::default(), PhotoSort::Popular), ["P1", "P2", "P3", "P4"]);
    assert_eq!(
        run(
            PhotoFilters {
                kind: PhotoKindFilter::Cities,
                ..PhotoFilters::default()
            },
            PhotoSort::Recent
        ),
        ["P3"]
    );
    assert_eq!(
        run(
            PhotoFilters {
                country_id: Some("K-IT".into()),
                search: "anna".into(),
                ..PhotoFilters::default()
            },
            PhotoSort::Name
        ),
        ["P1", "P3"]
    );
}

#[test]
fn named_controls_set_the_matching_filter() {
    let mut f = CityFilters::default();
    City::set_control(&mut f, "population", "large").unwrap();
    City::set_control(&mut f, "unesco", "TAK").unwrap();
    assert_eq!(f.population, Some(PopulationBucket::Large));
    assert_eq!(f.unesco, Some(UnescoFilter::Yes));
    City::set_control(&mut f, "population", "all").unwrap();
    assert_eq!(f.population, None);
    assert!(City::set_control(&mut f, "population", "huge").is_err());
    assert!(City::set_control(&mut f, "height", "1").is_err());

    let mut c = CountryFilters::default();
    Country::set_control(&mut c, "continent", "Europa").unwrap();
    assert_eq!(c.continent.as_deref(), Some("europa"));

    let mut a = AttractionFilters::default();
    Attraction::set_control(&mut a, "search", " 3").unwrap();
    assert_eq!(a.search, " 3");

    let mut p = PhotoFilters::default();
    Photo::set_control(&mut p, "kind", "miasta").unwrap();
    assert_eq!(p.kind, PhotoKindFilter::Cities);
    Photo::set_control(&mut p, "kind", "").unwrap();
    assert_eq!(p.kind, PhotoKindFilter::All);
}
