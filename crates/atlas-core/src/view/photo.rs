// crates/atlas-core/src/view/photo.rs
use super::{Card, LinkChip};
use crate::model::{EntityKind, Photo};
use crate::relation::RelationResolver;
use crate::router::deep_link;
use serde::Serialize;

pub const EMPTY_MESSAGE: &str = "Nie znaleziono zdjęć";

/// Tags shown on a gallery card.
const CARD_TAGS: usize = 3;

pub fn card(p: &Photo) -> Card {
    Card {
        id: p.id.clone(),
        title: p.title().to_owned(),
        subtitle: p.author.clone(),
        icon: None,
        image: p.thumbnail.clone(),
        flag_url: None,
        badges: p.tags.iter().take(CARD_TAGS).cloned().collect(),
        stats: Vec::new(),
        link: deep_link(EntityKind::Photo, &p.id),
    }
}

/// Links of one kind in the lightbox footer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinkGroup {
    pub kind: EntityKind,
    pub title: String,
    pub links: Vec<LinkChip>,
}

/// Full-size photo overlay.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Lightbox {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub links: Vec<LinkGroup>,
    /// Position within the filtered set and its size.
    pub position: usize,
    pub total: usize,
}

pub fn lightbox(p: &Photo, relations: &RelationResolver, position: usize, total: usize) -> Lightbox {
    let links = [
        (EntityKind::Attraction, "Atrakcje"),
        (EntityKind::City, "Miasta"),
        (EntityKind::Country, "Kraje"),
    ]
    .into_iter()
    .filter_map(|(kind, title)| {
        let links: Vec<LinkChip> = relations
            .resolve(kind, p.linked_ids(kind))
            .into_iter()
            .map(|l| LinkChip {
                link: deep_link(kind, &l.id),
                id: l.id,
                name: l.name,
            })
            .collect();
        (!links.is_empty()).then(|| LinkGroup {
            kind,
            title: title.to_owned(),
            links,
        })
    })
    .collect();

    Lightbox {
        id: p.id.clone(),
        title: p.title().to_owned(),
        description: p.description.clone(),
        author: p.author.clone(),
        date: p.date.clone(),
        image: p.full_size.clone().or_else(|| p.thumbnail.clone()),
        tags: p.tags.clone(),
        links,
        position,
        total,
    }
}
