// crates/atlas-core/src/view/attraction.rs
use super::format::{format_plain, join_present, with_unit};
use super::{stat, stat_number, thumbs, Card, DetailView, NavState, Section, Stat};
use crate::flags::flag_url;
use crate::model::{Attraction, EntityKind};
use crate::relation::RelationResolver;
use crate::router::ATTRACTIONS;

pub const EMPTY_MESSAGE: &str = "Nie znaleziono atrakcji";

fn title(a: &Attraction) -> String {
    match a.display_name() {
        "" => "Brak nazwy".to_owned(),
        name => name.to_owned(),
    }
}

pub fn card(a: &Attraction) -> Card {
    let mut badges = Vec::new();
    if a.is_unesco() {
        badges.push("UNESCO".to_owned());
    }
    let stats = [
        Some(Stat::new(
            "wysokość",
            with_unit(a.height_m(), "m").unwrap_or_else(|| "N/A".to_owned()),
        )),
        stat("rok", a.construction_start().map(|s| s.text.clone())),
    ]
    .into_iter()
    .flatten()
    .collect();

    Card {
        id: a.id.clone(),
        title: title(a),
        subtitle: Some(format!(
            "{}, {}",
            a.city().unwrap_or("Nieznane"),
            a.country().unwrap_or("")
        )),
        icon: None,
        image: a.thumbnail().map(str::to_owned),
        flag_url: a.country().and_then(flag_url),
        badges,
        stats,
        link: ATTRACTIONS.link(&a.id),
    }
}

fn key_stats(a: &Attraction) -> Vec<Stat> {
    let dims = a.dimensions.as_ref();
    let construction = a.construction.as_ref();
    let timeline = construction.and_then(|c| c.timeline.as_ref());
    let floors = dims.and_then(|d| d.floors.as_ref());
    [
        stat("Wysokość", with_unit(a.height_m(), "m")),
        stat(
            "Długość",
            with_unit(dims.and_then(|d| d.length.as_ref()).and_then(|m| m.exterior.or(m.total)), "m"),
        ),
        stat(
            "Szerokość",
            with_unit(dims.and_then(|d| d.width.as_ref()).and_then(|m| m.exterior.or(m.total)), "m"),
        ),
        stat(
            "Powierzchnia",
            with_unit(dims.and_then(|d| d.area.as_ref()).and_then(|m| m.total), "m²"),
        ),
        stat(
            "Kondygnacje",
            floors.and_then(|f| f.above_ground).map(|n| match floors.and_then(|f| f.below_ground) {
                Some(below) => format!("{} + {} podziemne", format_plain(n), format_plain(below)),
                None => format_plain(n),
            }),
        ),
        stat(
            "Kubatura",
            with_unit(dims.and_then(|d| d.volume.as_ref()).and_then(|v| v.total_m3), "m³"),
        ),
        stat("Rozpoczęcie budowy", timeline.and_then(|t| t.started.as_ref()).map(|s| s.text.clone())),
        stat("Zakończenie budowy", timeline.and_then(|t| t.completed.as_ref()).map(|s| s.text.clone())),
        stat(
            "Czas budowy",
            construction
                .and_then(|c| c.duration_years.as_ref())
                .map(|s| format!("{s} lat")),
        ),
        stat(
            "Koszt",
            construction
                .and_then(|c| c.cost.as_ref())
                .and_then(|c| c.estimated_musd.as_ref())
                .map(|s| format!("{s} mln USD")),
        ),
        stat_number("Turyści rocznie", a.annual_visitors()),
        stat(
            "Czas zwiedzania",
            with_unit(a.tourism().and_then(|t| t.visit_minutes), "min"),
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn architecture(a: &Attraction) -> Vec<Stat> {
    let Some(arch) = a.architecture.as_ref() else {
        return Vec::new();
    };
    let join = |v: &[String]| (!v.is_empty()).then(|| v.join(", "));
    [
        stat("Styl", arch.style.as_ref().and_then(|s| s.main.clone())),
        stat("Architekci", arch.architects.as_ref().and_then(|x| join(x.lead.as_slice()))),
        stat("Materiały", arch.materials.as_ref().and_then(|m| join(m.main.as_slice()))),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn history(a: &Attraction) -> Vec<Stat> {
    let Some(h) = a.history.as_ref() else {
        return Vec::new();
    };
    [
        stat("Epoka", h.era.clone()),
        stat("Kontekst polityczny", h.political_context.clone()),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Full detail view. `nav` is filled in by the page controller.
pub fn detail(a: &Attraction, relations: &RelationResolver) -> DetailView {
    let description = a.description.as_ref();
    let tourism = a.tourism();
    let photos = relations.photos_depicting(EntityKind::Attraction, &a.id);

    let sections = [
        Section::stats("Kluczowe dane", key_stats(a)),
        Section::text("Opis", description.and_then(|d| d.long_text.as_deref())),
        description.and_then(|d| Section::list("Ciekawostki", &d.trivia)),
        Section::stats("Architektura", architecture(a)),
        Section::stats("Kontekst historyczny", history(a)),
        tourism.and_then(|t| Section::key_values("Bilety", &t.tickets)),
        tourism.and_then(|t| Section::key_values("Godziny otwarcia", &t.opening_hours)),
        Section::gallery("Galeria", thumbs(photos)),
        Section::map(a.coordinates()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut badges = Vec::new();
    if let Some(category) = a.category() {
        badges.push(category.to_owned());
    }
    if a.is_unesco() {
        badges.push("UNESCO".to_owned());
    }

    DetailView {
        id: a.id.clone(),
        title: title(a),
        subtitle: join_present([a.city(), a.country()]),
        icon: None,
        hero_image: a.thumbnail().map(str::to_owned),
        badges,
        sections,
        nav: NavState::default(),
    }
}
