//! Plain-text (or JSON) output of the core view-models.

use anyhow::Result;
use atlas_core::view::photo::Lightbox;
use atlas_core::view::{Card, DetailView, ListView, Section, Stat};
use atlas_core::{Dashboard, SearchHit, Transition, View};
use serde::Serialize;

pub struct Printer {
    pub json: bool,
}

impl Printer {
    fn emit_json<T: Serialize>(&self, value: &T) -> Result<bool> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        Ok(self.json)
    }

    pub fn stats(&self, stats: &[Stat]) -> Result<()> {
        if self.emit_json(&stats)? {
            return Ok(());
        }
        for s in stats {
            println!("  {}: {}", s.label, s.value);
        }
        Ok(())
    }

    pub fn dashboard(&self, d: &Dashboard) -> Result<()> {
        if self.emit_json(d)? {
            return Ok(());
        }
        for s in d.summary() {
            println!("  {}: {}", s.label, s.value);
        }
        println!("  {}", d.continent_breakdown());
        println!("  {}", d.category_breakdown());

        println!("\n## Kontynenty");
        for c in &d.continents {
            println!("  {} {}: {} krajów, {} miast ({})", c.icon, c.name, c.countries, c.cities, c.link);
        }
        if !d.top_destinations.is_empty() {
            println!("\n## Najpopularniejsze kierunki");
        }
        for t in &d.top_destinations {
            let flag = t.flag.as_deref().unwrap_or("🏳️");
            let unesco = t.unesco.map(|n| format!(", {n} UNESCO")).unwrap_or_default();
            println!("  #{} {flag} {} - {} turystów rocznie{unesco} ({})", t.rank, t.name, t.visitors_label, t.link);
        }
        if !d.unesco_sites.is_empty() {
            println!("\n## UNESCO");
        }
        for site in &d.unesco_sites {
            let location = site.location.as_deref().unwrap_or("");
            let year = site.year.as_deref().map(|y| format!(" [{y}]")).unwrap_or_default();
            println!("  {} - {location}{year} ({})", site.name, site.link);
        }
        Ok(())
    }

    pub fn list(&self, view: &ListView) -> Result<()> {
        if self.emit_json(view)? {
            return Ok(());
        }
        match view {
            ListView::Empty { message } => println!("{message}"),
            ListView::Cards { cards } => {
                for (i, card) in cards.iter().enumerate() {
                    print_card(i, card);
                }
            }
        }
        Ok(())
    }

    pub fn detail(&self, view: &DetailView) -> Result<()> {
        if self.emit_json(view)? {
            return Ok(());
        }
        let icon = view.icon.as_deref().map(|i| format!("{i} ")).unwrap_or_default();
        println!("{icon}{}", view.title);
        if let Some(sub) = &view.subtitle {
            println!("{sub}");
        }
        if !view.badges.is_empty() {
            println!("[{}]", view.badges.join("] ["));
        }
        for section in &view.sections {
            println!();
            print_section(section);
        }
        let nav = view.nav;
        println!();
        match nav.position {
            Some(p) => println!(
                "{} {}/{} {}",
                if nav.has_prev { "<prev" } else { "     " },
                p + 1,
                nav.total,
                if nav.has_next { "next>" } else { "" }
            ),
            None => println!("(not in the current filtered list)"),
        }
        Ok(())
    }

    pub fn transition(&self, t: &Transition) -> Result<()> {
        if self.emit_json(t)? {
            return Ok(());
        }
        match &t.view {
            View::List => println!("-> list"),
            View::Detail { id, index } => match index {
                Some(i) => println!("-> detail {id} (#{})", i + 1),
                None => println!("-> detail {id}"),
            },
        }
        if let Some(url) = &t.push {
            println!("   pushState {url}");
        }
        Ok(())
    }

    pub fn hits(&self, hits: &[SearchHit]) -> Result<()> {
        if self.emit_json(&hits)? {
            return Ok(());
        }
        if hits.is_empty() {
            println!("No results");
        }
        for h in hits {
            println!("{} {} - {} ({})", h.icon, h.name, h.description, h.url);
        }
        Ok(())
    }

    pub fn lightbox(&self, lb: &Lightbox) -> Result<()> {
        if self.emit_json(lb)? {
            return Ok(());
        }
        println!("{} [{}/{}]", lb.title, lb.position + 1, lb.total);
        if let Some(author) = &lb.author {
            println!("  autor: {author}");
        }
        if let Some(date) = &lb.date {
            println!("  data: {date}");
        }
        if let Some(desc) = &lb.description {
            println!("  {desc}");
        }
        if let Some(img) = &lb.image {
            println!("  {img}");
        }
        for group in &lb.links {
            let names: Vec<&str> = group.links.iter().map(|l| l.name.as_str()).collect();
            println!("  {}: {}", group.title, names.join(", "));
        }
        Ok(())
    }
}

fn print_card(i: usize, card: &Card) {
    let icon = card.icon.as_deref().unwrap_or("-");
    let sub = card.subtitle.as_deref().unwrap_or("");
    println!("{:>3}. {icon} {} ({sub}) [{}]", i + 1, card.title, card.id);
    let stats: Vec<String> = card
        .stats
        .iter()
        .map(|s| format!("{} {}", s.value, s.label))
        .collect();
    if !stats.is_empty() {
        println!("       {}", stats.join(" | "));
    }
}

fn print_section(section: &Section) {
    println!("## {}", section.title());
    match section {
        Section::Stats { items, .. } => {
            for s in items {
                println!("  {}: {}", s.label, s.value);
            }
        }
        Section::Text { body, .. } => println!("  {body}"),
        Section::List { items, .. } => {
            for item in items {
                println!("  - {item}");
            }
        }
        Section::KeyValues { pairs, .. } => {
            for (k, v) in pairs {
                println!("  {k}: {v}");
            }
        }
        Section::Gallery { photos, .. } => {
            for p in photos {
                println!("  [{}] {}", p.id, p.title);
            }
        }
        Section::Map { map, .. } => println!("  {}", map.link_url),
        Section::Relations { links, .. } => {
            for l in links {
                println!("  {} -> {}", l.name, l.link);
            }
        }
    }
}
