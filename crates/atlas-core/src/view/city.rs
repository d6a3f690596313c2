// crates/atlas-core/src/view/city.rs
use super::format::{format_number, format_plain, with_unit};
use super::{stat, stat_number, thumbs, Card, DetailView, NavState, Section, Stat};
use crate::model::{City, EntityKind};
use crate::relation::RelationResolver;
use crate::router::{deep_link, CITIES};

pub const EMPTY_MESSAGE: &str = "Nie znaleziono miast";

/// Country display name for a city, falling back to the raw id.
fn country_label<'a>(city: &'a City, relations: &'a RelationResolver) -> &'a str {
    match city.country_id() {
        Some(id) => relations.name(EntityKind::Country, id).unwrap_or(id),
        None => "Nieznany",
    }
}

pub fn card(c: &City, relations: &RelationResolver) -> Card {
    let mut stats = vec![Stat::new("populacja", format_number(c.population()))];
    if let Some(v) = c.annual_visitors() {
        stats.push(Stat::new("turyści", format_number(Some(v))));
    }
    let top = c.top_attraction_ids().len();
    if top > 0 {
        stats.push(Stat::new("atrakcje", format!("{top}+")));
    }
    let mut badges = Vec::new();
    if c.has_unesco() {
        badges.push("UNESCO".to_owned());
    }
    Card {
        id: c.id.clone(),
        title: c.display_name().to_owned(),
        subtitle: Some(country_label(c, relations).to_owned()),
        icon: None,
        image: None,
        flag_url: crate::flags::flag_url(country_label(c, relations)),
        badges,
        stats,
        link: CITIES.link(&c.id),
    }
}

fn basics(c: &City, relations: &RelationResolver) -> Vec<Stat> {
    let demo = c.demographics.as_ref();
    let geo = c.geography.as_ref();
    [
        stat("Kraj", Some(country_label(c, relations))),
        stat("Status", c.basics.as_ref().and_then(|b| b.status.clone())),
        stat_number("Populacja", c.population()),
        stat_number("Aglomeracja", demo.and_then(|d| d.metro_population)),
        stat("Gęstość zaludnienia", with_unit(demo.and_then(|d| d.density_per_km2), "os./km²")),
        stat("Powierzchnia", with_unit(c.area_km2(), "km²")),
        stat("Wysokość", with_unit(geo.and_then(|g| g.elevation_m), "m n.p.m.")),
        stat("Klimat", geo.and_then(|g| g.climate.clone())),
        stat("Strefa czasowa", geo.and_then(|g| g.timezone.clone())),
        stat("Język urzędowy", demo.and_then(|d| d.official_language.clone())),
        stat("Założone", c.history.as_ref().and_then(|h| h.founded.clone())),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn tourism(c: &City) -> Vec<Stat> {
    let top = c.top_attraction_ids().len();
    [
        stat_number("Obiekty UNESCO", c.unesco_sites()),
        stat_number("Turyści rocznie", c.annual_visitors()),
        stat(
            "Średni pobyt",
            with_unit(c.tourism.as_ref().and_then(|t| t.average_stay_days), "dni"),
        ),
        stat("Najważniejsze atrakcje", (top > 0).then(|| top.to_string())),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn transport(c: &City) -> Vec<Stat> {
    let Some(t) = c.transport.as_ref() else {
        return Vec::new();
    };
    let airports: Vec<String> = t
        .airports
        .iter()
        .filter_map(|a| {
            let name = a.name.as_deref()?;
            Some(match a.iata.as_deref() {
                Some(code) => format!("{name} ({code})"),
                None => name.to_owned(),
            })
        })
        .collect();
    [
        stat("Lotniska", (!airports.is_empty()).then(|| airports.join(", "))),
        stat("Linie metra", t.metro.as_ref().and_then(|m| m.lines).map(format_plain)),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn detail(c: &City, relations: &RelationResolver) -> DetailView {
    let best_time = c.tourism.as_ref().and_then(|t| t.best_time.as_ref());
    let culture = c.culture.as_ref();
    let museums = culture
        .and_then(|k| k.museums.as_ref())
        .and_then(|m| m.count)
        .map(|n| Stat::new("Muzea", format_number(Some(n))));

    let top_ids = match c.top_attraction_ids() {
        [] => c
            .main_attractions
            .as_ref()
            .map(|m| m.top_ids.as_slice())
            .unwrap_or(&[]),
        ids => ids,
    };
    let country_ids: Vec<String> = c.country_id().map(str::to_owned).into_iter().collect();
    let photos = relations.photos_depicting(EntityKind::City, &c.id);

    let sections = [
        Section::stats("Podstawowe informacje", basics(c, relations)),
        Section::stats("Turystyka", tourism(c)),
        best_time.and_then(|b| Section::list("Najlepsze miesiące", &b.best_months)),
        best_time.and_then(|b| Section::list("Unikaj", &b.avoid)),
        Section::stats("Transport", transport(c)),
        Section::stats("Kultura", museums.into_iter().collect()),
        culture.and_then(|k| Section::list("Uniwersytety", &k.universities)),
        culture.and_then(|k| Section::list("Teatry", &k.theatres)),
        Section::relations(
            "Kraj",
            relations.resolve(EntityKind::Country, &country_ids),
            |id| deep_link(EntityKind::Country, id),
        ),
        Section::relations(
            "Najważniejsze atrakcje",
            relations.resolve(EntityKind::Attraction, top_ids),
            |id| deep_link(EntityKind::Attraction, id),
        ),
        Section::gallery("Galeria", thumbs(photos)),
        Section::map(c.coordinates().and_then(|p| p.pair())),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut badges = Vec::new();
    if c.has_unesco() {
        badges.push("UNESCO".to_owned());
    }

    DetailView {
        id: c.id.clone(),
        title: c.display_name().to_owned(),
        subtitle: Some(c.official_name().to_owned()).filter(|s| !s.is_empty() && s != c.display_name()),
        icon: None,
        hero_image: None,
        badges,
        sections,
        nav: NavState::default(),
    }
}
