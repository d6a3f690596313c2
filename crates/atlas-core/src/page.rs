// crates/atlas-core/src/page.rs

//! # Page Controller
//!
//! One [`Page`] per entity listing (countries, cities, attractions). It owns
//! the full collection for the page lifetime and recomputes the filtered set
//! on every filter or sort change. Selection and navigation go through the
//! [`Router`].
//!
//! ```rust
//! use atlas_core::{Page, RelationResolver};
//! use atlas_core::model::City;
//!
//! let cities: Vec<City> = serde_json::from_str(r#"[
//!     {"id": "C1", "podstawowe_informacje": {"nazwa": {"popularna": "Rzym"}}},
//!     {"id": "C2", "podstawowe_informacje": {"nazwa": {"popularna": "Paryż"}}}
//! ]"#).unwrap();
//!
//! let mut page = Page::new(cities, RelationResolver::new());
//! page.select("C2").unwrap();
//! assert!(!page.filters_visible());
//! assert_eq!(page.detail_view().unwrap().title, "Paryż");
//! ```

use crate::error::{AtlasError, Result};
use crate::filter::{Filterable, ListState};
use crate::model::{Attraction, City, Country, EntityKind};
use crate::relation::RelationResolver;
use crate::router::{self, Action, Listing, RouteSpec, Router, Transition, View};
use crate::stats::{AttractionStats, CityStats, CountryStats};
use crate::view::{self, Card, DetailView, ListView, NavState, Stat};
use serde::Serialize;
use tracing::{debug, error};

/// Everything a page needs from its entity type beyond filtering.
pub trait PageEntity: Filterable + Sized {
    const KIND: EntityKind;
    const EMPTY_MESSAGE: &'static str;

    fn route() -> RouteSpec;

    fn entity_id(&self) -> &str;

    /// Applies the URL's filter parameter (`?country=`, `?continent=`).
    fn apply_preset(filters: &mut Self::Filters, value: &str);

    fn card(&self, relations: &RelationResolver) -> Card;

    fn detail(&self, relations: &RelationResolver) -> DetailView;

    fn page_stats(items: &[Self]) -> Vec<Stat>;
}

impl PageEntity for Country {
    const KIND: EntityKind = EntityKind::Country;
    const EMPTY_MESSAGE: &'static str = view::country::EMPTY_MESSAGE;

    fn route() -> RouteSpec {
        router::COUNTRIES
    }

    fn entity_id(&self) -> &str {
        &self.id
    }

    fn apply_preset(filters: &mut Self::Filters, value: &str) {
        filters.continent = Some(value.to_lowercase());
    }

    fn card(&self, _relations: &RelationResolver) -> Card {
        view::country::card(self)
    }

    fn detail(&self, relations: &RelationResolver) -> DetailView {
        view::country::detail(self, relations)
    }

    fn page_stats(items: &[Self]) -> Vec<Stat> {
        CountryStats::compute(items).summary()
    }
}

impl PageEntity for City {
    const KIND: EntityKind = EntityKind::City;
    const EMPTY_MESSAGE: &'static str = view::city::EMPTY_MESSAGE;

    fn route() -> RouteSpec {
        router::CITIES
    }

    fn entity_id(&self) -> &str {
        &self.id
    }

    fn apply_preset(filters: &mut Self::Filters, value: &str) {
        filters.country_id = Some(value.to_owned());
    }

    fn card(&self, relations: &RelationResolver) -> Card {
        view::city::card(self, relations)
    }

    fn detail(&self, relations: &RelationResolver) -> DetailView {
        view::city::detail(self, relations)
    }

    fn page_stats(items: &[Self]) -> Vec<Stat> {
        CityStats::compute(items).summary()
    }
}

impl PageEntity for Attraction {
    const KIND: EntityKind = EntityKind::Attraction;
    const EMPTY_MESSAGE: &'static str = view::attraction::EMPTY_MESSAGE;

    fn route() -> RouteSpec {
        router::ATTRACTIONS
    }

    fn entity_id(&self) -> &str {
        &self.id
    }

    fn apply_preset(filters: &mut Self::Filters, value: &str) {
        filters.country = Some(value.to_owned());
    }

    fn card(&self, _relations: &RelationResolver) -> Card {
        view::attraction::card(self)
    }

    fn detail(&self, relations: &RelationResolver) -> DetailView {
        view::attraction::detail(self, relations)
    }

    fn page_stats(items: &[Self]) -> Vec<Stat> {
        AttractionStats::compute(items).summary()
    }
}

/// Outcome of the initial load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum LoadStatus {
    Ready,
    /// The index could not be loaded; the collection is empty.
    Error(String),
}

/// Borrowed view of the filtered set, handed to the router.
struct FilteredListing<'a, E> {
    full: &'a [E],
    filtered: &'a [usize],
}

impl<E: PageEntity> Listing for FilteredListing<'_, E> {
    fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    fn filtered_id(&self, position: usize) -> Option<&str> {
        let idx = *self.filtered.get(position)?;
        self.full.get(idx).map(PageEntity::entity_id)
    }

    fn locate(&self, id: &str) -> Option<Option<usize>> {
        let full_idx = self.full.iter().position(|e| e.entity_id() == id)?;
        Some(self.filtered.iter().position(|&i| i == full_idx))
    }
}

pub struct Page<E: PageEntity> {
    full: Vec<E>,
    filtered: Vec<usize>,
    state: ListState<E>,
    router: Router,
    relations: RelationResolver,
    status: LoadStatus,
}

impl<E: PageEntity> Page<E> {
    pub fn new(items: Vec<E>, relations: RelationResolver) -> Self {
        let state = ListState::default();
        let filtered = state.apply(&items);
        debug!(kind = %E::KIND, items = items.len(), "page ready");
        Self {
            full: items,
            filtered,
            state,
            router: Router::new(E::route()),
            relations,
            status: LoadStatus::Ready,
        }
    }

    /// Error state: empty collection plus the message to show.
    pub fn failed(message: impl Into<String>) -> Self {
        let mut page = Self::new(Vec::new(), RelationResolver::new());
        page.status = LoadStatus::Error(message.into());
        page
    }

    /// Builds a page from a loader result; an `Err` becomes the error state.
    pub fn from_result(items: Result<Vec<E>>, relations: RelationResolver) -> Self {
        match items {
            Ok(items) => Self::new(items, relations),
            Err(e) => {
                error!(kind = %E::KIND, error = %e, "page failed to load");
                let mut page = Self::failed(e.to_string());
                page.relations = relations;
                page
            }
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_error(&self) -> bool {
        matches!(self.status, LoadStatus::Error(_))
    }

    pub fn items(&self) -> &[E] {
        &self.full
    }

    pub fn get(&self, id: &str) -> Option<&E> {
        self.full.iter().find(|e| e.entity_id() == id)
    }

    pub fn relations(&self) -> &RelationResolver {
        &self.relations
    }

    pub fn state(&self) -> &ListState<E> {
        &self.state
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The filtered set, in display order.
    pub fn filtered(&self) -> impl Iterator<Item = &E> + '_ {
        self.filtered.iter().map(move |&i| &self.full[i])
    }

    pub fn view(&self) -> &View {
        self.router.view()
    }

    pub fn filters_visible(&self) -> bool {
        self.router.filters_visible()
    }

    pub fn stats(&self) -> Vec<Stat> {
        E::page_stats(&self.full)
    }

    // -----------------------------------------------------------------------
    // Filter / sort
    // -----------------------------------------------------------------------

    fn ensure_list(&self) -> Result<()> {
        if self.filters_visible() {
            Ok(())
        } else {
            Err(AtlasError::FiltersHidden)
        }
    }

    fn refresh(&mut self) {
        self.filtered = self.state.apply(&self.full);
        debug!(kind = %E::KIND, filtered = self.filtered.len(), "filters applied");
    }

    /// Mutates the filter state and recomputes the filtered set.
    ///
    /// Fails with [`AtlasError::FiltersHidden`] while a detail view is open.
    pub fn update_filters(&mut self, f: impl FnOnce(&mut E::Filters)) -> Result<()> {
        self.ensure_list()?;
        f(&mut self.state.filters);
        self.refresh();
        Ok(())
    }

    pub fn set_filters(&mut self, filters: E::Filters) -> Result<()> {
        self.update_filters(|f| *f = filters)
    }

    pub fn set_sort(&mut self, sort: E::Sort) -> Result<()> {
        self.ensure_list()?;
        self.state.sort = sort;
        self.state.sort_indices(&self.full, &mut self.filtered);
        Ok(())
    }

    /// Sets one named filter control, e.g. `("population", "large")`.
    pub fn set_control(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_list()?;
        E::set_control(&mut self.state.filters, key, value)?;
        self.refresh();
        Ok(())
    }

    /// Sort change from the sort `<select>` value, e.g. `"population"`.
    pub fn set_sort_name(&mut self, name: &str) -> Result<()> {
        self.set_sort(name.parse()?)
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    fn dispatch(&mut self, action: Action<'_>) -> Transition {
        let listing = FilteredListing {
            full: &self.full,
            filtered: &self.filtered,
        };
        self.router.dispatch(action, &listing)
    }

    /// Enters the state implied by the page URL at load time.
    ///
    /// The filter parameter (if any) is applied first, then the id parameter
    /// selects the entity. The URL is already in place, so nothing is pushed.
    pub fn init_from_url(&mut self, url: &str) -> Transition {
        let route = E::route().parse(url);
        if let Some(value) = route.filter.as_deref() {
            E::apply_preset(&mut self.state.filters, value);
            self.refresh();
        }
        self.dispatch(Action::PopState { url })
    }

    /// Opens the detail view of `id`. Its position is looked up in the
    /// current filtered set.
    pub fn select(&mut self, id: &str) -> Result<Transition> {
        let full_idx = self
            .full
            .iter()
            .position(|e| e.entity_id() == id)
            .ok_or_else(|| AtlasError::NotFound(format!("{} {id}", E::KIND)))?;
        let index = self.filtered.iter().position(|&i| i == full_idx);
        let id = self.full[full_idx].entity_id().to_owned();
        Ok(self.dispatch(Action::Select { id: &id, index }))
    }

    /// Card click: opens the entity at `position` of the filtered set.
    pub fn select_at(&mut self, position: usize) -> Result<Transition> {
        let &idx = self
            .filtered
            .get(position)
            .ok_or_else(|| AtlasError::NotFound(format!("{} #{position}", E::KIND)))?;
        let id = self.full[idx].entity_id().to_owned();
        Ok(self.dispatch(Action::Select {
            id: &id,
            index: Some(position),
        }))
    }

    pub fn back(&mut self) -> Transition {
        self.dispatch(Action::Back)
    }

    /// No-op at the first position or when the position is unknown.
    pub fn prev(&mut self) -> Transition {
        self.dispatch(Action::Step(-1))
    }

    /// No-op at the last position or when the position is unknown.
    pub fn next(&mut self) -> Transition {
        self.dispatch(Action::Step(1))
    }

    /// Browser back/forward: re-derives the view from `url`, pushes nothing.
    pub fn pop_state(&mut self, url: &str) -> Transition {
        self.dispatch(Action::PopState { url })
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    pub fn list_view(&self) -> ListView {
        let cards = self.filtered().map(|e| e.card(&self.relations)).collect();
        ListView::from_cards(cards, E::EMPTY_MESSAGE)
    }

    /// Detail view of the selected entity, with prev/next state.
    pub fn detail_view(&self) -> Option<DetailView> {
        let View::Detail { id, index } = self.router.view() else {
            return None;
        };
        let entity = self.get(id)?;
        let mut detail = entity.detail(&self.relations);
        detail.nav = NavState::new(*index, self.filtered.len());
        Some(detail)
    }
}
