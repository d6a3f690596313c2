// crates/atlas-core/src/view/mod.rs

//! # View Models
//!
//! Pure projections from an entity (plus resolved relations) to a structured
//! display model. Binding these to real widgets is up to the host (terminal,
//! browser). Sections whose backing data is absent are omitted, never
//! rendered as placeholders.

use crate::relation::Linked;
use serde::Serialize;

pub mod attraction;
pub mod city;
pub mod country;
pub mod format;
pub mod photo;

/// Label/value pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

impl Stat {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Summary card in a list view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    /// Emoji shown in place of an image (country flags).
    pub icon: Option<String>,
    pub image: Option<String>,
    pub flag_url: Option<String>,
    pub badges: Vec<String>,
    pub stats: Vec<Stat>,
    pub link: String,
}

/// A rendered list: either cards or the explicit "no results" state.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListView {
    Empty { message: String },
    Cards { cards: Vec<Card> },
}

impl ListView {
    pub fn from_cards(cards: Vec<Card>, empty_message: &str) -> Self {
        if cards.is_empty() {
            ListView::Empty {
                message: empty_message.to_owned(),
            }
        } else {
            ListView::Cards { cards }
        }
    }

    pub fn cards(&self) -> &[Card] {
        match self {
            ListView::Cards { cards } => cards,
            ListView::Empty { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ListView::Empty { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Thumb {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub full_size: Option<String>,
}

/// A relation chip (link to another entity's detail view).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinkChip {
    pub id: String,
    pub name: String,
    pub link: String,
}

/// OpenStreetMap embed around a point.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapEmbed {
    pub lat: f64,
    pub lon: f64,
    pub embed_url: String,
    pub link_url: String,
}

impl MapEmbed {
    /// Bounding box of ±0.01° around the point.
    pub fn around(lat: f64, lon: f64) -> Self {
        const PAD: f64 = 0.01;
        let embed_url = format!(
            "https://www.openstreetmap.org/export/embed.html?bbox={},{},{},{}&layer=mapnik&marker={lat},{lon}",
            lon - PAD,
            lat - PAD,
            lon + PAD,
            lat + PAD,
        );
        let link_url = format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map=15/{lat}/{lon}");
        Self {
            lat,
            lon,
            embed_url,
            link_url,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Stats { title: String, items: Vec<Stat> },
    Text { title: String, body: String },
    List { title: String, items: Vec<String> },
    KeyValues { title: String, pairs: Vec<(String, String)> },
    Gallery { title: String, photos: Vec<Thumb> },
    Map { title: String, map: MapEmbed },
    Relations { title: String, links: Vec<LinkChip> },
}

impl Section {
    pub fn title(&self) -> &str {
        match self {
            Section::Stats { title, .. }
            | Section::Text { title, .. }
            | Section::List { title, .. }
            | Section::KeyValues { title, .. }
            | Section::Gallery { title, .. }
            | Section::Map { title, .. }
            | Section::Relations { title, .. } => title,
        }
    }

    pub fn stats(title: &str, items: Vec<Stat>) -> Option<Self> {
        (!items.is_empty()).then(|| Section::Stats {
            title: title.to_owned(),
            items,
        })
    }

    pub fn text(title: &str, body: Option<&str>) -> Option<Self> {
        let body = body.map(str::trim).filter(|b| !b.is_empty())?;
        Some(Section::Text {
            title: title.to_owned(),
            body: body.to_owned(),
        })
    }

    pub fn list(title: &str, items: &[String]) -> Option<Self> {
        (!items.is_empty()).then(|| Section::List {
            title: title.to_owned(),
            items: items.to_vec(),
        })
    }

    /// Keys are prettified with [`format::format_key`].
    pub fn key_values(title: &str, pairs: &[(String, String)]) -> Option<Self> {
        (!pairs.is_empty()).then(|| Section::KeyValues {
            title: title.to_owned(),
            pairs: pairs
                .iter()
                .map(|(k, v)| (format::format_key(k), v.clone()))
                .collect(),
        })
    }

    pub fn gallery(title: &str, photos: Vec<Thumb>) -> Option<Self> {
        (!photos.is_empty()).then(|| Section::Gallery {
            title: title.to_owned(),
            photos,
        })
    }

    pub fn map(coords: Option<(f64, f64)>) -> Option<Self> {
        let (lat, lon) = coords?;
        Some(Section::Map {
            title: "Mapa".to_owned(),
            map: MapEmbed::around(lat, lon),
        })
    }

    /// `link` builds the deep link of each resolved entity.
    pub fn relations(title: &str, links: Vec<Linked>, link: impl Fn(&str) -> String) -> Option<Self> {
        (!links.is_empty()).then(|| Section::Relations {
            title: format!("{title} ({})", links.len()),
            links: links
                .into_iter()
                .map(|l| LinkChip {
                    link: link(&l.id),
                    id: l.id,
                    name: l.name,
                })
                .collect(),
        })
    }
}

/// Prev/next state of a detail view within the filtered set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NavState {
    /// Position in the filtered set, when the entity is part of it.
    pub position: Option<usize>,
    pub total: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl NavState {
    pub fn new(position: Option<usize>, total: usize) -> Self {
        Self {
            position,
            total,
            has_prev: position.is_some_and(|i| i > 0),
            has_next: position.is_some_and(|i| i + 1 < total),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DetailView {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub icon: Option<String>,
    pub hero_image: Option<String>,
    pub badges: Vec<String>,
    pub sections: Vec<Section>,
    pub nav: NavState,
}

impl DetailView {
    pub fn section(&self, title_prefix: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.title().starts_with(title_prefix))
    }
}

/// Photo thumbnails for a gallery section.
pub(crate) fn thumbs<'a>(photos: impl IntoIterator<Item = &'a crate::model::Photo>) -> Vec<Thumb> {
    photos
        .into_iter()
        .map(|p| Thumb {
            id: p.id.clone(),
            title: p.title().to_owned(),
            thumbnail: p.thumbnail.clone(),
            full_size: p.full_size.clone(),
        })
        .collect()
}

/// A stat row, or `None` when the value is unknown or blank.
pub(crate) fn stat<S: Into<String>>(label: &str, value: Option<S>) -> Option<Stat> {
    let value: String = value?.into();
    (!value.trim().is_empty()).then(|| Stat::new(label, value))
}

/// A stat row for a count/amount rendered with [`format::format_number`].
pub(crate) fn stat_number(label: &str, value: Option<f64>) -> Option<Stat> {
    value.map(|n| Stat::new(label, format::format_number(Some(n))))
}
