//! atlas: terminal front-end for the travel-guide portal data
//!
//! Loads the same JSON documents the portal pages fetch (index documents,
//! per-entity details, the gallery) from a web root on disk or over HTTP and
//! renders the page view-models as text or JSON.
//!
//! Usage examples
//! --------------
//!
//! - Home page dashboard
//!   $ atlas --source ./site home
//!
//! - Header counters of the cities page
//!   $ atlas --source ./site stats miasta
//!
//! - Filtered and sorted list
//!   $ atlas list cities -f country=K-IT -f population=large --sort population
//!
//! - One detail view, with prev/next position in the default list
//!   $ atlas show attractions A-KOLOSEUM
//!
//! - Global search across countries, cities and attractions
//!   $ atlas search rzym
//!
//! - Gallery, two pages, lightbox on one photo
//!   $ atlas gallery --kind miasta --pages 2 --open P-12
//!
//! - Interactive session with simulated browser history
//!   $ atlas shell miasta --url "miasta.html?country=K-IT"
//!
//! Use `-v`/`-vv` or `RUST_LOG` for diagnostics; logs go to stderr.
mod args;
mod filters;
mod render;
mod shell;

use crate::args::{CliArgs, Commands, Kind};
use crate::filters::apply_pairs;
use crate::render::Printer;
use crate::shell::Session;
use anyhow::{bail, Context};
use atlas_core::model::{Attraction, City, Country, EntityKind};
use atlas_core::{Dashboard, Gallery, GlobalSearch, LoadStatus, Loader, Page, PageEntity, PortalConfig};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

type LoadFn<E> = fn(&Loader) -> atlas_core::Result<Vec<E>>;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_page<E: PageEntity>(loader: &Loader, load: LoadFn<E>) -> anyhow::Result<Page<E>> {
    let page = Page::from_result(load(loader), loader.load_resolver());
    if let LoadStatus::Error(message) = page.status() {
        bail!("{} page unavailable: {message}", E::KIND);
    }
    Ok(page)
}

struct ListArgs {
    search: Option<String>,
    filters: Vec<String>,
    sort: Option<String>,
    url: Option<String>,
}

fn run_list<E: PageEntity>(
    loader: &Loader,
    load: LoadFn<E>,
    args: ListArgs,
    printer: &Printer,
) -> anyhow::Result<()> {
    let mut page = open_page(loader, load)?;
    if let Some(url) = &args.url {
        page.init_from_url(url);
    }
    if page.view().is_detail() {
        // A URL with an id lands on the detail view; flags would be hidden.
        let detail = page.detail_view().context("selected entity has no detail view")?;
        return printer.detail(&detail);
    }

    let mut filters = page.state().filters.clone();
    if let Some(q) = &args.search {
        E::set_control(&mut filters, "search", q)?;
    }
    apply_pairs::<E>(&mut filters, &args.filters)?;
    page.set_filters(filters)?;
    if let Some(sort) = &args.sort {
        page.set_sort_name(sort)?;
    }
    debug!(shown = page.filtered_len(), total = page.items().len(), "list filtered");
    printer.list(&page.list_view())
}

fn run_show<E: PageEntity>(
    loader: &Loader,
    load: LoadFn<E>,
    id: &str,
    printer: &Printer,
) -> anyhow::Result<()> {
    let mut page = open_page(loader, load)?;
    page.select(id)?;
    let detail = page.detail_view().context("selected entity has no detail view")?;
    printer.detail(&detail)
}

fn run_stats<E: PageEntity>(loader: &Loader, load: LoadFn<E>, printer: &Printer) -> anyhow::Result<()> {
    let page = open_page(loader, load)?;
    printer.stats(&page.stats())
}

fn run_shell<E: PageEntity>(
    loader: &Loader,
    load: LoadFn<E>,
    url: Option<&str>,
    printer: Printer,
) -> anyhow::Result<()> {
    let page = open_page(loader, load)?;
    Session::new(page, url, printer).run()
}

/// Expands to `$run::<E>(loader, Loader::load_*, ...)` for the chosen kind.
macro_rules! per_kind {
    ($kind:expr, $run:ident, $loader:expr $(, $arg:expr)*) => {
        match $kind {
            Kind::Countries => $run::<Country>($loader, Loader::load_countries $(, $arg)*),
            Kind::Cities => $run::<City>($loader, Loader::load_cities $(, $arg)*),
            Kind::Attractions => $run::<Attraction>($loader, Loader::load_attractions $(, $arg)*),
        }
    };
}

fn entity_kind(kind: Kind) -> EntityKind {
    match kind {
        Kind::Countries => EntityKind::Country,
        Kind::Cities => EntityKind::City,
        Kind::Attractions => EntityKind::Attraction,
    }
}

fn run_search(loader: &Loader, query: &str, kind: Option<Kind>, printer: &Printer) -> anyhow::Result<()> {
    let cfg = loader.config();
    let search = GlobalSearch::new(
        loader.load_index(&cfg.countries_index)?,
        loader.load_index(&cfg.cities_index)?,
        loader.load_index(&cfg.attractions_index)?,
    );
    printer.hits(&search.search(query, kind.map(entity_kind)))
}

struct GalleryArgs {
    sort: Option<String>,
    kind: Option<String>,
    country: Option<String>,
    search: Option<String>,
    pages: usize,
    open: Option<String>,
}

fn run_gallery(loader: &Loader, args: GalleryArgs, printer: &Printer) -> anyhow::Result<()> {
    let mut gallery = Gallery::from_result(
        loader.load_photos(),
        loader.load_name_index(),
        loader.config().photo_page_size,
    );
    if let LoadStatus::Error(message) = gallery.status() {
        bail!("gallery unavailable: {message}");
    }

    let controls = [("kind", args.kind), ("country", args.country), ("search", args.search)];
    for (key, value) in controls {
        if let Some(value) = value {
            gallery.set_control(key, &value)?;
        }
    }
    if let Some(sort) = &args.sort {
        gallery.set_sort_name(sort)?;
    }
    for _ in 1..args.pages {
        if !gallery.load_more() {
            break;
        }
    }

    if let Some(id) = &args.open {
        gallery.open_id(id)?;
        let lightbox = gallery.lightbox_view().context("lightbox did not open")?;
        return printer.lightbox(&lightbox);
    }
    printer.stats(&gallery.stats())?;
    printer.list(&gallery.list_view())?;
    if gallery.has_more() && !printer.json {
        println!(
            "-- {} of {} shown, use --pages {} for more --",
            gallery.visible_len(),
            gallery.filtered_len(),
            args.pages + 1
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => PortalConfig::from_json_path(path)
            .with_context(|| format!("reading config {path}"))?,
        None => PortalConfig::default(),
    };
    let loader = Loader::open(&args.source, config)
        .with_context(|| format!("opening data source {}", args.source))?;
    let printer = Printer { json: args.json };

    match args.command {
        Commands::Home => printer.dashboard(&Dashboard::load(&loader)?),
        Commands::Stats { kind } => per_kind!(kind, run_stats, &loader, &printer),
        Commands::List {
            kind,
            search,
            filters,
            sort,
            url,
        } => {
            let list = ListArgs {
                search,
                filters,
                sort,
                url,
            };
            per_kind!(kind, run_list, &loader, list, &printer)
        }
        Commands::Show { kind, id } => per_kind!(kind, run_show, &loader, &id, &printer),
        Commands::Search { query, kind } => run_search(&loader, &query, kind, &printer),
        Commands::Gallery {
            sort,
            kind,
            country,
            search,
            pages,
            open,
        } => run_gallery(
            &loader,
            GalleryArgs {
                sort,
                kind,
                country,
                search,
                pages,
                open,
            },
            &printer,
        ),
        Commands::Shell { kind, url } => per_kind!(kind, run_shell, &loader, url.as_deref(), printer),
    }
}
