//! atlas-wasm: WebAssembly bindings for atlas-core
//!
//! The portal pages fetch their JSON documents themselves and hand them to
//! this module; everything after that (filtering, sorting, the List/Detail
//! router, view-models, global search, the gallery) runs in Rust.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - `Portal`: built from an object of `{ path: document }` pairs
//! - Page handles (`CountryPage`, `CityPage`, `AttractionPage`) returning
//!   plain JS objects for the list view, detail view and router transitions
//! - `GalleryHandle`: paging, filters and the lightbox
//! - `Portal.search(query)`: the header search box
//! - `Portal.home()`: the landing page dashboard
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { Portal } from 'atlas-wasm';
//!
//! async function main() {
//!   await init();
//!   const docs = {
//!     'data/metadata/cities_index.json': await (await fetch('data/metadata/cities_index.json')).json(),
//!     // ... detail documents ...
//!   };
//!   const portal = new Portal(docs);
//!   const page = portal.cities_page(location.href);
//!   render(page.list_view());
//!
//!   const t = page.select('M-RZYM');
//!   if (t.push) history.pushState({}, '', t.push);
//!   window.onpopstate = () => page.pop_state(location.href);
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Every view-model is serialized as a plain object (no JS `Map`s).
//! - Errors surface as thrown `Error`s carrying the core error message.
use std::collections::BTreeMap;

use atlas_core::model::{Attraction, City, Country, EntityKind};
use atlas_core::{Dashboard, Gallery, GlobalSearch, Loader, MemorySource, Page, PortalConfig};
use serde::Serialize;
use serde_json::Value;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing atlas WASM module...".into());
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    Ok(value.serialize(&Serializer::json_compatible())?)
}

/* --------------------------------------------------------------------------
   Portal
-------------------------------------------------------------------------- */

/// All documents of one portal, plus the document layout.
#[wasm_bindgen]
pub struct Portal {
    loader: Loader,
    search: Option<GlobalSearch>,
}

#[wasm_bindgen]
impl Portal {
    /// `documents` maps document paths to parsed JSON. `config` (optional)
    /// overrides the conventional paths, e.g. `{ photo_page_size: 24 }`.
    #[wasm_bindgen(constructor)]
    pub fn new(documents: JsValue, config: JsValue) -> Result<Portal, JsError> {
        let docs: BTreeMap<String, Value> = serde_wasm_bindgen::from_value(documents)?;
        let config: PortalConfig = if config.is_undefined() || config.is_null() {
            PortalConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        config.validate()?;

        let mut source = MemorySource::new();
        let count = docs.len();
        for (path, doc) in docs {
            source.insert(path, doc);
        }
        web_sys::console::log_1(&format!("✓ Portal ready with {count} documents").into());
        Ok(Portal {
            loader: Loader::new(source, config),
            search: None,
        })
    }

    pub fn countries_page(&self, url: Option<String>) -> CountryPage {
        CountryPage::open(&self.loader, Loader::load_countries, url.as_deref())
    }

    pub fn cities_page(&self, url: Option<String>) -> CityPage {
        CityPage::open(&self.loader, Loader::load_cities, url.as_deref())
    }

    pub fn attractions_page(&self, url: Option<String>) -> AttractionPage {
        AttractionPage::open(&self.loader, Loader::load_attractions, url.as_deref())
    }

    /// Gallery page. A `?photo=<id>` in `url` opens the lightbox on load.
    pub fn gallery(&self, url: Option<String>) -> GalleryHandle {
        let mut gallery = Gallery::from_result(
            self.loader.load_photos(),
            self.loader.load_name_index(),
            self.loader.config().photo_page_size,
        );
        if let Some(url) = url.as_deref() {
            gallery.init_from_url(url);
        }
        GalleryHandle { gallery }
    }

    /// Landing page dashboard: totals, continent cards, top destinations
    /// and UNESCO sites.
    pub fn home(&self) -> Result<JsValue, JsError> {
        to_js(&Dashboard::load(&self.loader)?)
    }

    /// Header search. `kind` restricts results to `kraje`, `miasta` or
    /// `atrakcje`. The three indexes are loaded on first use.
    pub fn search(&mut self, query: &str, kind: Option<String>) -> Result<JsValue, JsError> {
        let only = kind.as_deref().map(str::parse::<EntityKind>).transpose()?;
        if self.search.is_none() {
            let cfg = self.loader.config();
            self.search = Some(GlobalSearch::new(
                self.loader.load_index(&cfg.countries_index)?,
                self.loader.load_index(&cfg.cities_index)?,
                self.loader.load_index(&cfg.attractions_index)?,
            ));
        }
        let hits = match &self.search {
            Some(search) => search.search(query, only),
            None => Vec::new(),
        };

        let array = js_sys::Array::new();
        for hit in &hits {
            array.push(&to_js(hit)?);
        }
        Ok(array.into())
    }
}

/* --------------------------------------------------------------------------
   Entity pages
-------------------------------------------------------------------------- */

/// One exported handle per entity page; wasm-bindgen cannot export generics.
macro_rules! page_handle {
    ($handle:ident, $entity:ty) => {
        #[wasm_bindgen]
        pub struct $handle {
            page: Page<$entity>,
        }

        impl $handle {
            fn open(
                loader: &Loader,
                load: fn(&Loader) -> atlas_core::Result<Vec<$entity>>,
                url: Option<&str>,
            ) -> Self {
                let mut page = Page::from_result(load(loader), loader.load_resolver());
                if let Some(url) = url {
                    page.init_from_url(url);
                }
                Self { page }
            }
        }

        #[wasm_bindgen]
        impl $handle {
            /// `{status: "ready"}` or `{status: "error", message}`.
            pub fn status(&self) -> Result<JsValue, JsError> {
                to_js(self.page.status())
            }

            pub fn stats(&self) -> Result<JsValue, JsError> {
                to_js(&self.page.stats())
            }

            pub fn filters_visible(&self) -> bool {
                self.page.filters_visible()
            }

            pub fn filtered_len(&self) -> usize {
                self.page.filtered_len()
            }

            /// Current router view: `{view: "list"}` or `{view: "detail", id, index}`.
            pub fn view(&self) -> Result<JsValue, JsError> {
                to_js(self.page.view())
            }

            pub fn list_view(&self) -> Result<JsValue, JsError> {
                to_js(&self.page.list_view())
            }

            /// `null` while the list is shown.
            pub fn detail_view(&self) -> Result<JsValue, JsError> {
                match self.page.detail_view() {
                    Some(detail) => to_js(&detail),
                    None => Ok(JsValue::NULL),
                }
            }

            /// Sets one filter control (`search`, `country`, ...) and returns
            /// the new list view.
            pub fn set_control(&mut self, key: &str, value: &str) -> Result<JsValue, JsError> {
                self.page.set_control(key, value)?;
                self.list_view()
            }

            pub fn set_sort(&mut self, name: &str) -> Result<JsValue, JsError> {
                self.page.set_sort_name(name)?;
                self.list_view()
            }

            pub fn select(&mut self, id: &str) -> Result<JsValue, JsError> {
                to_js(&self.page.select(id)?)
            }

            pub fn select_at(&mut self, position: usize) -> Result<JsValue, JsError> {
                to_js(&self.page.select_at(position)?)
            }

            pub fn next(&mut self) -> Result<JsValue, JsError> {
                to_js(&self.page.next())
            }

            pub fn prev(&mut self) -> Result<JsValue, JsError> {
                to_js(&self.page.prev())
            }

            pub fn back(&mut self) -> Result<JsValue, JsError> {
                to_js(&self.page.back())
            }

            pub fn pop_state(&mut self, url: &str) -> Result<JsValue, JsError> {
                to_js(&self.page.pop_state(url))
            }
        }
    };
}

page_handle!(CountryPage, Country);
page_handle!(CityPage, City);
page_handle!(AttractionPage, Attraction);

/* --------------------------------------------------------------------------
   Gallery
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub struct GalleryHandle {
    gallery: Gallery,
}

#[wasm_bindgen]
impl GalleryHandle {
    pub fn status(&self) -> Result<JsValue, JsError> {
        to_js(self.gallery.status())
    }

    pub fn stats(&self) -> Result<JsValue, JsError> {
        to_js(&self.gallery.stats())
    }

    /// The visible part of the grid.
    pub fn list_view(&self) -> Result<JsValue, JsError> {
        to_js(&self.gallery.list_view())
    }

    pub fn has_more(&self) -> bool {
        self.gallery.has_more()
    }

    pub fn load_more(&mut self) -> bool {
        self.gallery.load_more()
    }

    pub fn set_control(&mut self, key: &str, value: &str) -> Result<JsValue, JsError> {
        self.gallery.set_control(key, value)?;
        self.list_view()
    }

    pub fn set_sort(&mut self, name: &str) -> Result<JsValue, JsError> {
        self.gallery.set_sort_name(name)?;
        self.list_view()
    }

    /// Options of the country `<select>`: `[{id, name}]`.
    pub fn country_options(&self) -> Result<JsValue, JsError> {
        to_js(&self.gallery.country_options())
    }

    pub fn open(&mut self, position: usize) -> Result<JsValue, JsError> {
        self.gallery.open(position)?;
        self.lightbox()
    }

    pub fn open_id(&mut self, id: &str) -> Result<JsValue, JsError> {
        self.gallery.open_id(id)?;
        self.lightbox()
    }

    pub fn close(&mut self) {
        self.gallery.close();
    }

    /// Arrow keys: `-1` / `+1`, wrapping at both ends.
    pub fn step(&mut self, delta: i32) -> Result<JsValue, JsError> {
        self.gallery.step(delta as isize);
        self.lightbox()
    }

    /// `null` when the lightbox is closed.
    pub fn lightbox(&self) -> Result<JsValue, JsError> {
        match self.gallery.lightbox_view() {
            Some(lb) => to_js(&lb),
            None => Ok(JsValue::NULL),
        }
    }
}
