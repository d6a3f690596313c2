// crates/atlas-core/src/router.rs

//! # Router
//!
//! Two-state machine (List / Detail) synchronised with a query-string URL.
//!
//! [`reduce`] is pure: it takes the current view, an [`Action`] and a
//! [`Listing`] of the filtered set, and returns the next view plus the history
//! entry to push (if any). [`Router`] keeps the current view between calls and
//! [`History`] simulates a browser history stack for hosts without one.

use crate::model::EntityKind;
use serde::Serialize;
use url::form_urlencoded;

/// URL conventions of one page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteSpec {
    pub page: &'static str,
    /// Query parameter carrying the selected entity id.
    pub id_param: &'static str,
    /// Optional parameter that pre-applies a filter.
    pub filter_param: Option<&'static str>,
}

pub const COUNTRIES: RouteSpec = RouteSpec {
    page: "kraje.html",
    id_param: "id",
    filter_param: Some("continent"),
};

pub const CITIES: RouteSpec = RouteSpec {
    page: "miasta.html",
    id_param: "id",
    filter_param: Some("country"),
};

pub const ATTRACTIONS: RouteSpec = RouteSpec {
    page: "atrakcje.html",
    id_param: "building",
    filter_param: Some("country"),
};

pub const GALLERY_PAGE: &str = "galeria.html";

/// Gallery deep links open the lightbox: `galeria.html?photo=P1`.
pub const GALLERY: RouteSpec = RouteSpec {
    page: GALLERY_PAGE,
    id_param: "photo",
    filter_param: None,
};

/// Parameters read from a URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route {
    pub selected: Option<String>,
    pub filter: Option<String>,
}

impl RouteSpec {
    pub fn for_kind(kind: EntityKind) -> Option<RouteSpec> {
        match kind {
            EntityKind::Country => Some(COUNTRIES),
            EntityKind::City => Some(CITIES),
            EntityKind::Attraction => Some(ATTRACTIONS),
            EntityKind::Photo => None,
        }
    }

    /// URL of the list view (no parameters).
    pub fn list_url(&self) -> String {
        self.page.to_owned()
    }

    /// Deep link to one entity, e.g. `atrakcje.html?building=A1`.
    pub fn link(&self, id: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(self.id_param, id)
            .finish();
        format!("{}?{query}", self.page)
    }

    /// List URL with the filter parameter set.
    pub fn filtered_link(&self, value: &str) -> String {
        match self.filter_param {
            Some(param) => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair(param, value)
                    .finish();
                format!("{}?{query}", self.page)
            }
            None => self.list_url(),
        }
    }

    /// Reads the id and filter parameters. Accepts full URLs, relative URLs
    /// and bare query strings (`?id=X`). Empty values count as absent.
    pub fn parse(&self, url: &str) -> Route {
        let query = url
            .split_once('?')
            .map_or("", |(_, q)| q)
            .split('#')
            .next()
            .unwrap_or("");
        let mut route = Route::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if value.trim().is_empty() {
                continue;
            }
            if key == self.id_param && route.selected.is_none() {
                route.selected = Some(value.into_owned());
            } else if Some(key.as_ref()) == self.filter_param && route.filter.is_none() {
                route.filter = Some(value.into_owned());
            }
        }
        route
    }
}

/// Deep link to any linkable entity. Photos link to the gallery page.
pub fn deep_link(kind: EntityKind, id: &str) -> String {
    match RouteSpec::for_kind(kind) {
        Some(spec) => spec.link(id),
        None => GALLERY.link(id),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    /// Collection view; filters visible.
    #[default]
    List,
    /// Single-entity view; filters hidden, prev/next visible.
    ///
    /// `index` is the position in the filtered set, or `None` when the
    /// entity is not part of it (prev/next disabled).
    Detail { id: String, index: Option<usize> },
}

impl View {
    pub fn is_detail(&self) -> bool {
        matches!(self, View::Detail { .. })
    }

    pub fn selected_id(&self) -> Option<&str> {
        match self {
            View::Detail { id, .. } => Some(id),
            View::List => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action<'a> {
    /// Card click (or a deep link resolved at load).
    Select { id: &'a str, index: Option<usize> },
    /// Explicit "back to list".
    Back,
    /// Prev (`-1`) / next (`+1`) within the filtered set.
    Step(isize),
    /// Browser back/forward landed on `url`.
    PopState { url: &'a str },
}

/// Result of a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub view: View,
    /// History entry to push, if any.
    pub push: Option<String>,
    pub scroll_top: bool,
}

impl Transition {
    fn stay(view: &View) -> Self {
        Self {
            view: view.clone(),
            push: None,
            scroll_top: false,
        }
    }

    pub fn changed(&self, from: &View) -> bool {
        &self.view != from
    }
}

/// What the router needs to know about the filtered set.
pub trait Listing {
    fn filtered_len(&self) -> usize;

    fn filtered_id(&self, position: usize) -> Option<&str>;

    /// `None` when the id is unknown; `Some(None)` when it exists but is
    /// filtered out; `Some(Some(i))` for its position in the filtered set.
    fn locate(&self, id: &str) -> Option<Option<usize>>;
}

/// Pure state transition.
pub fn reduce(spec: &RouteSpec, view: &View, action: Action<'_>, listing: &dyn Listing) -> Transition {
    match action {
        Action::Select { id, index } => Transition {
            view: View::Detail {
                id: id.to_owned(),
                index,
            },
            push: Some(spec.link(id)),
            scroll_top: true,
        },
        Action::Back => match view {
            View::List => Transition::stay(view),
            View::Detail { .. } => Transition {
                view: View::List,
                push: Some(spec.list_url()),
                scroll_top: true,
            },
        },
        Action::Step(delta) => {
            let View::Detail {
                index: Some(current),
                ..
            } = view
            else {
                return Transition::stay(view);
            };
            let Some(target) = current.checked_add_signed(delta) else {
                return Transition::stay(view);
            };
            if target >= listing.filtered_len() {
                return Transition::stay(view);
            }
            match listing.filtered_id(target) {
                Some(id) => Transition {
                    view: View::Detail {
                        id: id.to_owned(),
                        index: Some(target),
                    },
                    push: Some(spec.link(id)),
                    scroll_top: true,
                },
                None => Transition::stay(view),
            }
        }
        Action::PopState { url } => {
            let next = match spec.parse(url).selected {
                Some(id) => match listing.locate(&id) {
                    Some(index) => View::Detail { id, index },
                    None => View::List,
                },
                None => View::List,
            };
            let scroll_top = next.is_detail() && &next != view;
            Transition {
                view: next,
                push: None,
                scroll_top,
            }
        }
    }
}

/// Holds the current view for one page.
#[derive(Clone, Debug)]
pub struct Router {
    spec: RouteSpec,
    view: View,
}

impl Router {
    pub fn new(spec: RouteSpec) -> Self {
        Self {
            spec,
            view: View::List,
        }
    }

    pub fn spec(&self) -> &RouteSpec {
        &self.spec
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn filters_visible(&self) -> bool {
        !self.view.is_detail()
    }

    /// Applies an action and stores the resulting view.
    pub fn dispatch(&mut self, action: Action<'_>, listing: &dyn Listing) -> Transition {
        let t = reduce(&self.spec, &self.view, action, listing);
        if t.changed(&self.view) {
            tracing::debug!(page = self.spec.page, from = ?self.view, to = ?t.view, "route transition");
        }
        self.view = t.view.clone();
        t
    }
}

/// In-memory browser history: a stack of URLs with a cursor.
#[derive(Clone, Debug)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Pushes a new entry, dropping any forward entries.
    pub fn push(&mut self, url: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(url.into());
        self.cursor = self.entries.len() - 1;
    }

    /// Moves back one entry; `None` at the start of history.
    pub fn back(&mut self) -> Option<&str> {
        self.cursor = self.cursor.checked_sub(1)?;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pushes the transition's entry, if it has one.
    pub fn record(&mut self, t: &Transition) {
        if let Some(url) = &t.push {
            self.push(url.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_full_and_bare_urls() {
        let r = ATTRACTIONS.parse("https://example.org/atrakcje.html?building=A%201&country=W%C5%82ochy#top");
        assert_eq!(r.selected.as_deref(), Some("A 1"));
        assert_eq!(r.filter.as_deref(), Some("Włochy"));
        assert_eq!(COUNTRIES.parse("?id=").selected, None);
        assert_eq!(COUNTRIES.parse("kraje.html").selected, None);
    }

    #[test]
    fn links_round_trip() {
        let link = CITIES.link("MIASTO-RZYM-001");
        assert_eq!(link, "miasta.html?id=MIASTO-RZYM-001");
        assert_eq!(CITIES.parse(&link).selected.as_deref(), Some("MIASTO-RZYM-001"));
        assert_eq!(COUNTRIES.filtered_link("europa"), "kraje.html?continent=europa");
    }

    #[test]
    fn history_drops_forward_entries_on_push() {
        let mut h = History::new("a");
        h.push("b");
        h.push("c");
        assert_eq!(h.back(), Some("b"));
        h.push("d");
        assert_eq!(h.forward(), None);
        assert_eq!(h.back(), Some("b"));
        assert_eq!(h.back(), Some("a"));
        assert_eq!(h.back(), None);
        assert_eq!(h.current(), "a");
    }
}
