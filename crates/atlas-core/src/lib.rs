// crates/atlas-core/src/lib.rs

//! Core of the travel-guide portal: typed documents, a document loader, the
//! relation resolver, the filter/sort engine, view-model renderers, the home
//! dashboard and the List/Detail router that ties a page to its URL.
//!
//! ```rust
//! use atlas_core::{Loader, MemorySource, Page, PortalConfig};
//! use atlas_core::model::Country;
//! use serde_json::json;
//!
//! let source = MemorySource::new()
//!     .with("data/metadata/countries_index.json", json!({"items": [{"id": "K1", "nazwa": "Włochy"}]}))
//!     .with("data/kraje/k1.json", json!({"id": "K1", "podstawowe_informacje": {"nazwa": {"popularna": "Włochy"}}}));
//! let loader = Loader::new(source, PortalConfig::default());
//!
//! let page: Page<Country> = Page::from_result(loader.load_countries(), loader.load_resolver());
//! assert_eq!(page.filtered_len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod flags;
pub mod gallery;
pub mod home;
pub mod loader; // Data Fetcher
pub mod model;
pub mod page;
pub mod relation;
pub mod router;
pub mod search;
pub mod stats;
pub mod text;
pub mod view;

// Re-exports
pub use crate::config::PortalConfig;
pub use crate::error::{AtlasError, Result};
pub use crate::filter::{Filterable, ListState};
pub use crate::gallery::Gallery;
pub use crate::home::Dashboard;
pub use crate::loader::{open_source, DocumentSource, Loader, MemorySource};
pub use crate::model::{Attraction, City, Country, EntityKind, Photo};
pub use crate::page::{LoadStatus, Page, PageEntity};
pub use crate::relation::{Linked, RelationResolver};
pub use crate::router::{History, Transition, View};
pub use crate::search::{GlobalSearch, SearchHit};
