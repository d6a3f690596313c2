// crates/atlas-core/tests/router.rs
mod common;

use atlas_core::filter::{AttractionSort, CitySort};
use atlas_core::router::{reduce, Action, Listing, ATTRACTIONS};
use atlas_core::{AtlasError, Attraction, City, Country, History, Page, View};

fn city_page() -> Page<City> {
    let loader = common::loader();
    Page::from_result(loader.load_cities(), loader.load_resolver())
}

fn detail(id: &str, index: Option<usize>) -> View {
    View::Detail {
        id: id.to_owned(),
        index,
    }
}

#[test]
fn select_pushes_a_deep_link_and_hides_filters() {
    let mut page = city_page();
    assert!(page.filters_visible());

    let t = page.select_at(1).unwrap();
    assert_eq!(t.view, detail("M-MEDIOLAN", Some(1)));
    assert_eq!(t.push.as_deref(), Some("miasta.html?id=M-MEDIOLAN"));
    assert!(t.scroll_top);
    assert!(!page.filters_visible());
    assert!(matches!(
        page.set_sort(CitySort::Population),
        Err(AtlasError::FiltersHidden)
    ));

    let t = page.back();
    assert_eq!(t.view, View::List);
    assert_eq!(t.push.as_deref(), Some("miasta.html"));
    assert!(page.filters_visible());
}

#[test]
fn prev_next_are_bounded_by_the_filtered_set() {
    let mut page = city_page();
    page.set_sort(CitySort::Population).unwrap();
    // Tokio, Rzym, Paryż, Mediolan, Lyon
    page.select("M-TOKIO").unwrap();

    let t = page.prev();
    assert_eq!(t.view, detail("M-TOKIO", Some(0)));
    assert_eq!(t.push, None);

    let t = page.next();
    assert_eq!(t.view, detail("M-RZYM", Some(1)));
    assert_eq!(t.push.as_deref(), Some("miasta.html?id=M-RZYM"));

    page.select("M-LYON").unwrap();
    let t = page.next();
    assert_eq!(t.view, detail("M-LYON", Some(4)));
    assert_eq!(t.push, None);

    let nav = page.detail_view().unwrap().nav;
    assert!(nav.has_prev);
    assert!(!nav.has_next);
}

#[test]
fn back_in_list_is_a_no_op() {
    let mut page = city_page();
    let t = page.back();
    assert_eq!(t.view, View::List);
    assert_eq!(t.push, None);
    assert!(!t.scroll_top);
}

#[test]
fn deep_link_of_a_filtered_out_entity_disables_navigation() {
    let loader = common::loader();
    let mut page: Page<Attraction> =
        Page::from_result(loader.load_attractions(), loader.load_resolver());

    // The country preset hides Wieża, but the id still opens its detail view.
    let t = page.init_from_url("atrakcje.html?building=A-WIEZA&country=W%C5%82ochy");
    assert_eq!(t.view, detail("A-WIEZA", None));
    assert_eq!(t.push, None);
    assert_eq!(page.filtered_len(), 1);

    let nav = page.detail_view().unwrap().nav;
    assert!(!nav.has_prev && !nav.has_next);
    assert_eq!(page.next().view, detail("A-WIEZA", None));
}

#[test]
fn unknown_ids_fall_back_to_the_list() {
    let mut page = city_page();
    let t = page.init_from_url("miasta.html?id=M-ATLANTYDA");
    assert_eq!(t.view, View::List);
    assert!(matches!(page.select("M-ATLANTYDA"), Err(AtlasError::NotFound(_))));
}

#[test]
fn country_preset_applies_at_load() {
    let loader = common::loader();
    let mut page: Page<Country> =
        Page::from_result(loader.load_countries(), loader.load_resolver());
    page.init_from_url("kraje.html?continent=Azja");
    assert_eq!(page.filtered_len(), 1);
    assert_eq!(page.state().filters.continent.as_deref(), Some("azja"));
}

#[test]
fn pop_state_replays_history_without_pushing() {
    let mut page = city_page();
    let mut history = History::new("miasta.html");

    let t = page.select("M-RZYM").unwrap();
    history.record(&t);
    let t = page.next();
    history.record(&t);
    assert_eq!(history.current(), "miasta.html?id=M-TOKIO");
    assert_eq!(history.len(), 3);

    let url = history.back().unwrap().to_owned();
    let t = page.pop_state(&url);
    assert_eq!(t.view, detail("M-RZYM", Some(3)));
    assert_eq!(t.push, None);

    let url = history.back().unwrap().to_owned();
    assert_eq!(page.pop_state(&url).view, View::List);
    assert!(history.back().is_none());

    let url = history.forward().unwrap().to_owned();
    assert_eq!(page.pop_state(&url).view, detail("M-RZYM", Some(3)));
}

struct Fixed(Vec<&'static str>);

impl Listing for Fixed {
    fn filtered_len(&self) -> usize {
        self.0.len()
    }

    fn filtered_id(&self, position: usize) -> Option<&str> {
        self.0.get(position).copied()
    }

    fn locate(&self, id: &str) -> Option<Option<usize>> {
        self.0.iter().position(|x| *x == id).map(Some)
    }
}

#[test]
fn reduce_is_pure() {
    let listing = Fixed(vec!["A", "B"]);
    let view = detail("A", Some(0));
    let first = reduce(&ATTRACTIONS, &view, Action::Step(1), &listing);
    let second = reduce(&ATTRACTIONS, &view, Action::Step(1), &listing);
    assert_eq!(first, second);
    assert_eq!(first.push.as_deref(), Some("atrakcje.html?building=B"));
    assert_eq!(
        reduce(&ATTRACTIONS, &view, Action::Step(-1), &listing).view,
        view
    );
}

#[test]
fn sort_changes_in_list_view_reorder_only() {
    let loader = common::loader();
    let mut page: Page<Attraction> =
        Page::from_result(loader.load_attractions(), loader.load_resolver());
    page.set_sort(AttractionSort::Height).unwrap();
    let order: Vec<&str> = page.filtered().map(|a| a.id.as_str()).collect();
    assert_eq!(order, ["A-WIEZA", "A-KOLOSEUM"]);
    assert_eq!(page.items().len(), 2);
}

#[test]
fn named_controls_refilter_and_are_hidden_in_detail() {
    let mut page = city_page();
    page.set_control("population", "large").unwrap();
    page.set_sort_name("population").unwrap();
    let ids: Vec<&str> = page.filtered().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["M-RZYM", "M-PARYZ", "M-MEDIOLAN", "M-LYON"]);

    let t = page.select("M-TOKIO").unwrap();
    assert_eq!(t.view, detail("M-TOKIO", None));
    assert!(matches!(
        page.set_control("population", "all"),
        Err(AtlasError::FiltersHidden)
    ));
    assert!(matches!(
        page.set_sort_name("name"),
        Err(AtlasError::FiltersHidden)
    ));

    page.back();
    assert!(page.set_sort_name("height").is_err());
}
