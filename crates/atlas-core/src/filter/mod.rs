// crates/atlas-core/src/filter/mod.rs

//! # Filter/Sort Engine
//!
//! Each entity type declares a filter-state struct and a sort-mode enum via
//! [`Filterable`]. [`ListState::apply`] derives the filtered set from the
//! full set: the conjunction of all active predicates, then a stable sort.
//!
//! The filtered set is a list of indices into the full collection, so the
//! canonical collection is never reordered or copied.

use crate::error::{AtlasError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Declares a query-string enum with `FromStr` / `Display` / `as_str`.
///
/// Every variant has a canonical name and optional aliases accepted on input.
macro_rules! query_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::AtlasError;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                match s.trim().to_lowercase().as_str() {
                    $( $text $(| $alias)* => Ok($name::$variant), )+
                    other => Err($crate::error::AtlasError::InvalidData(format!(
                        "unknown {} value: {other}",
                        stringify!($name)
                    ))),
                }
            }
        }
    };
}

mod attraction;
mod city;
mod country;
mod photo;

pub use attraction::{AttractionFilters, AttractionSort};
pub use city::{CityFilters, CitySort, PopulationBucket, UnescoFilter};
pub use country::{CountryFilters, CountrySort};
pub use photo::{PhotoFilters, PhotoKindFilter, PhotoSort};

/// Per-type predicate and comparator.
pub trait Filterable {
    type Filters: Clone + Default + fmt::Debug;
    type Sort: Copy + Default + fmt::Debug + PartialEq + FromStr<Err = AtlasError>;

    /// `true` when `self` passes every active predicate of `filters`.
    fn matches(&self, filters: &Self::Filters) -> bool;

    /// Sets one filter control by name, the way a page's `<select>` or
    /// search box would. `search` takes the raw input; for select controls
    /// an empty value or `all` clears the filter.
    fn set_control(filters: &mut Self::Filters, key: &str, value: &str) -> Result<()>;

    /// Ordering under one sort mode. Ties return `Equal`; callers rely on a
    /// stable sort to keep source order among equals.
    fn compare(&self, other: &Self, sort: Self::Sort) -> Ordering;
}

/// Filter state plus sort mode for one page.
pub struct ListState<E: Filterable> {
    pub filters: E::Filters,
    pub sort: E::Sort,
}

impl<E: Filterable> Default for ListState<E> {
    fn default() -> Self {
        Self {
            filters: E::Filters::default(),
            sort: E::Sort::default(),
        }
    }
}

impl<E: Filterable> Clone for ListState<E> {
    fn clone(&self) -> Self {
        Self {
            filters: self.filters.clone(),
            sort: self.sort,
        }
    }
}

impl<E: Filterable> fmt::Debug for ListState<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListState")
            .field("filters", &self.filters)
            .field("sort", &self.sort)
            .finish()
    }
}

impl<E: Filterable> ListState<E> {
    pub fn new(filters: E::Filters, sort: E::Sort) -> Self {
        Self { filters, sort }
    }

    /// Indices of the entities passing all predicates, stably sorted.
    pub fn apply(&self, full: &[E]) -> Vec<usize> {
        let mut idx: Vec<usize> = full
            .iter()
            .enumerate()
            .filter(|(_, e)| e.matches(&self.filters))
            .map(|(i, _)| i)
            .collect();
        self.sort_indices(full, &mut idx);
        idx
    }

    /// Re-sorts an existing filtered set in place (stable).
    pub fn sort_indices(&self, full: &[E], idx: &mut [usize]) {
        idx.sort_by(|&a, &b| full[a].compare(&full[b], self.sort));
    }
}

// ---------------------------------------------------------------------------
// Shared predicate / comparator helpers
// ---------------------------------------------------------------------------

/// Descending numeric order with a missing value read as zero.
pub fn desc_missing_zero(a: Option<f64>, b: Option<f64>) -> Ordering {
    b.unwrap_or(0.0).total_cmp(&a.unwrap_or(0.0))
}

/// Select-control value: empty or `all` means "no filter".
pub fn selection(value: &str) -> Option<String> {
    let v = value.trim();
    (!v.is_empty() && !v.eq_ignore_ascii_case("all")).then(|| v.to_owned())
}

pub(crate) fn unknown_control(page: &str, key: &str, known: &str) -> AtlasError {
    AtlasError::InvalidData(format!("unknown {page} filter: {key} (expected {known})"))
}

/// Exact-match predicate on an optional field.
///
/// An unset filter passes everything; a record without the field passes too.
pub fn field_equals(value: Option<&str>, wanted: Option<&str>) -> bool {
    match (wanted, value) {
        (None, _) | (_, None) => true,
        (Some(w), Some(v)) => v == w,
    }
}
