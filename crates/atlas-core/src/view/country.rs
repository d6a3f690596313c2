// crates/atlas-core/src/view/country.rs
use super::format::{format_number, with_unit};
use super::{stat, stat_number, thumbs, Card, DetailView, NavState, Section, Stat};
use crate::flags::flag_url;
use crate::model::{Country, EntityKind};
use crate::relation::RelationResolver;
use crate::router::{deep_link, COUNTRIES};

pub const EMPTY_MESSAGE: &str = "Nie znaleziono krajów";
const DEFAULT_FLAG: &str = "🏳️";

pub fn card(c: &Country) -> Card {
    let mut stats = vec![
        Stat::new("powierzchnia", format!("{} km²", format_number(c.area_km2()))),
        Stat::new("populacja", format_number(c.population())),
    ];
    if let Some(n) = c.unesco_sites().filter(|n| *n > 0.0) {
        stats.push(Stat::new("UNESCO", format_number(Some(n))));
    }
    Card {
        id: c.id.clone(),
        title: c.display_name().to_owned(),
        subtitle: Some(c.official_name().to_owned()).filter(|s| !s.is_empty()),
        icon: Some(c.flag_emoji().unwrap_or(DEFAULT_FLAG).to_owned()),
        image: None,
        flag_url: flag_url(c.display_name()),
        badges: Vec::new(),
        stats,
        link: COUNTRIES.link(&c.id),
    }
}

fn basics(c: &Country) -> Vec<Stat> {
    let population = c.population().map(|n| {
        let year = c
            .demographics
            .as_ref()
            .and_then(|d| d.population.as_ref())
            .and_then(|p| p.year.as_ref());
        match year {
            Some(y) => format!("{} ({y})", format_number(Some(n))),
            None => format_number(Some(n)),
        }
    });
    let currency = c.currency().and_then(|cur| {
        let name = cur.name.as_deref().or(cur.code.as_deref())?;
        Some(match cur.symbol.as_deref() {
            Some(sym) => format!("{name} ({sym})"),
            None => name.to_owned(),
        })
    });
    [
        stat("Stolica", c.capital()),
        stat("Kontynent", Some(c.continent())),
        stat("Region", Some(c.region())),
        stat("Powierzchnia", c.area_km2().map(|n| format!("{} km²", format_number(Some(n))))),
        stat("Populacja", population),
        stat("Waluta", currency),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn geography(c: &Country) -> Vec<Stat> {
    let Some(geo) = c.geography.as_ref() else {
        return Vec::new();
    };
    let highest = geo
        .terrain
        .as_ref()
        .and_then(|t| t.highest_point.as_ref())
        .and_then(|h| {
            let name = h.name.as_deref()?;
            Some(match with_unit(h.elevation_m, "m n.p.m.") {
                Some(e) => format!("{name} ({e})"),
                None => name.to_owned(),
            })
        });
    [
        stat("Klimat", geo.climate.as_ref().and_then(|k| k.kind.clone())),
        stat("Linia brzegowa", geo.coastline_km.map(|n| format!("{} km", format_number(Some(n))))),
        stat("Najwyższy punkt", highest),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn demographics(c: &Country) -> Vec<Stat> {
    let Some(demo) = c.demographics.as_ref() else {
        return Vec::new();
    };
    let names = |v: &[crate::model::country::NamedPlace]| {
        let joined: Vec<&str> = v.iter().filter_map(|p| p.name.as_deref()).collect();
        (!joined.is_empty()).then(|| joined.join(", "))
    };
    [
        stat("Języki", names(demo.languages.as_slice())),
        stat("Religie", names(demo.religions.as_slice())),
        stat("Gęstość zaludnienia", with_unit(demo.density_per_km2, "os./km²")),
        stat("Mediana wieku", with_unit(demo.median_age, "lat")),
        stat("Urbanizacja", with_unit(demo.urbanization_percent, "%")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn economy(c: &Country) -> Vec<Stat> {
    let gdp = c.economy.as_ref().and_then(|e| e.gdp.as_ref());
    [
        stat_number("PKB (USD)", gdp.and_then(|g| g.nominal_usd)),
        stat_number("PKB na osobę (USD)", gdp.and_then(|g| g.per_capita_usd)),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn tourism(c: &Country) -> Vec<Stat> {
    let top = c.top_attraction_ids().len();
    [
        stat_number("Obiekty UNESCO", c.unesco_sites()),
        stat_number("Turyści rocznie", c.annual_visitors()),
        stat("Najważniejsze atrakcje", (top > 0).then(|| format!("{top}+"))),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn detail(c: &Country, relations: &RelationResolver) -> DetailView {
    let best_time = c.tourism.as_ref().and_then(|t| t.best_time.as_ref());
    let industries = c.economy.as_ref().map(|e| e.main_industries.as_slice()).unwrap_or(&[]);
    let photos = relations.photos_depicting(EntityKind::Country, &c.id);

    let sections = [
        Section::stats("Podstawowe informacje", basics(c)),
        Section::stats("Geografia", geography(c)),
        Section::stats("Demografia", demographics(c)),
        Section::stats("Gospodarka", economy(c)),
        Section::list("Główne branże", industries),
        Section::stats("Turystyka", tourism(c)),
        Section::text("Najlepszy czas na wizytę", best_time.and_then(|b| b.description.as_deref())),
        best_time.and_then(|b| Section::list("Najlepsze okresy", &b.periods)),
        Section::relations(
            "Miasta",
            relations.resolve(EntityKind::City, c.city_ids()),
            |id| deep_link(EntityKind::City, id),
        ),
        Section::relations(
            "Atrakcje",
            relations.resolve(EntityKind::Attraction, c.attraction_ids()),
            |id| deep_link(EntityKind::Attraction, id),
        ),
        Section::relations(
            "Kraje sąsiadujące",
            relations.resolve(EntityKind::Country, c.neighbour_ids()),
            |id| deep_link(EntityKind::Country, id),
        ),
        Section::gallery("Galeria", thumbs(photos)),
        Section::map(c.center().and_then(|p| p.pair())),
    ]
    .into_iter()
    .flatten()
    .collect();

    DetailView {
        id: c.id.clone(),
        title: c.display_name().to_owned(),
        subtitle: Some(c.official_name().to_owned()).filter(|s| !s.is_empty()),
        icon: Some(c.flag_emoji().unwrap_or(DEFAULT_FLAG).to_owned()),
        hero_image: flag_url(c.display_name()),
        badges: Vec::new(),
        sections,
        nav: NavState::default(),
    }
}
