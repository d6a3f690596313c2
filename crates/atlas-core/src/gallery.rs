// crates/atlas-core/src/gallery.rs

//! # Gallery
//!
//! Photo grid with paging and a lightbox. Unlike the entity pages there is no
//! List/Detail router: the lightbox is an overlay, and stepping through it
//! wraps around at both ends.

use crate::error::{AtlasError, Result};
use crate::filter::{Filterable, ListState, PhotoFilters, PhotoSort};
use crate::model::{EntityKind, Photo};
use crate::page::LoadStatus;
use crate::relation::{Linked, RelationResolver};
use crate::router;
use crate::stats::PhotoStats;
use crate::view::photo::{self, Lightbox};
use crate::view::{ListView, Stat};
use std::collections::BTreeSet;
use tracing::{debug, error, warn};

pub struct Gallery {
    photos: Vec<Photo>,
    filtered: Vec<usize>,
    state: ListState<Photo>,
    /// 1-based number of loaded pages.
    page: usize,
    page_size: usize,
    /// Position in the filtered set of the open photo.
    lightbox: Option<usize>,
    relations: RelationResolver,
    status: LoadStatus,
}

impl Gallery {
    pub fn new(photos: Vec<Photo>, relations: RelationResolver, page_size: usize) -> Self {
        let state = ListState::default();
        let filtered = state.apply(&photos);
        debug!(photos = photos.len(), page_size, "gallery ready");
        Self {
            photos,
            filtered,
            state,
            page: 1,
            page_size: page_size.max(1),
            lightbox: None,
            relations,
            status: LoadStatus::Ready,
        }
    }

    /// A failed photo document is an index failure here.
    pub fn from_result(
        photos: Result<Vec<Photo>>,
        relations: RelationResolver,
        page_size: usize,
    ) -> Self {
        match photos {
            Ok(photos) => Self::new(photos, relations, page_size),
            Err(e) => {
                error!(error = %e, "gallery failed to load");
                let mut g = Self::new(Vec::new(), relations, page_size);
                g.status = LoadStatus::Error(e.to_string());
                g
            }
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn state(&self) -> &ListState<Photo> {
        &self.state
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn stats(&self) -> Vec<Stat> {
        PhotoStats::compute(&self.photos).summary()
    }

    fn reset_view(&mut self) {
        self.page = 1;
        self.lightbox = None;
    }

    pub fn update_filters(&mut self, f: impl FnOnce(&mut PhotoFilters)) {
        f(&mut self.state.filters);
        self.filtered = self.state.apply(&self.photos);
        self.reset_view();
        debug!(filtered = self.filtered.len(), "gallery filters applied");
    }

    pub fn set_sort(&mut self, sort: PhotoSort) {
        self.state.sort = sort;
        self.state.sort_indices(&self.photos, &mut self.filtered);
        self.reset_view();
    }

    /// Sets one named control: `search`, `kind` or `country`.
    pub fn set_control(&mut self, key: &str, value: &str) -> Result<()> {
        let mut filters = self.state.filters.clone();
        Photo::set_control(&mut filters, key, value)?;
        self.update_filters(|f| *f = filters);
        Ok(())
    }

    pub fn set_sort_name(&mut self, name: &str) -> Result<()> {
        self.set_sort(name.parse()?);
        Ok(())
    }

    /// Photos currently in the grid: the first `page * page_size` of the
    /// filtered set.
    pub fn visible(&self) -> impl Iterator<Item = &Photo> + '_ {
        let n = self.page.saturating_mul(self.page_size);
        self.filtered.iter().take(n).map(move |&i| &self.photos[i])
    }

    pub fn visible_len(&self) -> usize {
        self.filtered.len().min(self.page.saturating_mul(self.page_size))
    }

    pub fn has_more(&self) -> bool {
        self.visible_len() < self.filtered.len()
    }

    /// Extends the grid by one page. Returns `false` when nothing was left.
    pub fn load_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn list_view(&self) -> ListView {
        ListView::from_cards(self.visible().map(photo::card).collect(), photo::EMPTY_MESSAGE)
    }

    // -----------------------------------------------------------------------
    // Lightbox
    // -----------------------------------------------------------------------

    pub fn open(&mut self, position: usize) -> Result<()> {
        if position >= self.filtered.len() {
            return Err(AtlasError::NotFound(format!("photo #{position}")));
        }
        self.lightbox = Some(position);
        Ok(())
    }

    /// Opens a photo by id (gallery deep link `?photo=<id>`).
    pub fn open_id(&mut self, id: &str) -> Result<()> {
        let position = self
            .filtered
            .iter()
            .position(|&i| self.photos[i].id == id)
            .ok_or_else(|| AtlasError::NotFound(format!("photo {id}")))?;
        self.lightbox = Some(position);
        Ok(())
    }

    /// Applies a page URL at load time. A `?photo=` id that is not in the
    /// gallery is logged and ignored; the grid still shows.
    pub fn init_from_url(&mut self, url: &str) -> bool {
        let Some(id) = router::GALLERY.parse(url).selected else {
            return false;
        };
        match self.open_id(&id) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "ignoring gallery deep link");
                false
            }
        }
    }

    pub fn close(&mut self) {
        self.lightbox = None;
    }

    pub fn is_open(&self) -> bool {
        self.lightbox.is_some()
    }

    /// Moves the lightbox by `delta`, wrapping around the filtered set.
    pub fn step(&mut self, delta: isize) -> Option<usize> {
        let current = self.lightbox?;
        let len = self.filtered.len() as isize;
        if len == 0 {
            return None;
        }
        let next = (current as isize + delta).rem_euclid(len) as usize;
        self.lightbox = Some(next);
        Some(next)
    }

    pub fn lightbox_view(&self) -> Option<Lightbox> {
        let position = self.lightbox?;
        let p = &self.photos[*self.filtered.get(position)?];
        Some(photo::lightbox(p, &self.relations, position, self.filtered.len()))
    }

    /// Countries that appear in at least one photo, for the country filter.
    pub fn country_options(&self) -> Vec<Linked> {
        let ids: BTreeSet<&str> = self
            .photos
            .iter()
            .flat_map(|p| p.linked_ids(EntityKind::Country))
            .map(String::as_str)
            .collect();
        let mut options: Vec<Linked> = ids
            .into_iter()
            .map(|id| Linked {
                id: id.to_owned(),
                name: self
                    .relations
                    .name(EntityKind::Country, id)
                    .unwrap_or(id)
                    .to_owned(),
            })
            .collect();
        options.sort_by(|a, b| crate::text::collate(&a.name, &b.name));
        options
    }
}
