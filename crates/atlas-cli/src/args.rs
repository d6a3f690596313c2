use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// CLI arguments for atlas
#[derive(Debug, Parser)]
#[command(
    name = "atlas",
    version,
    about = "Browse a travel-guide portal's data from the terminal"
)]
pub struct CliArgs {
    /// Data location: a base URL (http/https) or a local directory laid out like the web root
    #[arg(short = 's', long = "source", global = true, default_value = ".")]
    pub source: String,

    /// Optional JSON file overriding the conventional document paths
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (-v = debug, -vv = trace). RUST_LOG wins when set.
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print view-models as JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Listing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    #[value(alias = "kraje")]
    Countries,
    #[value(alias = "miasta")]
    Cities,
    #[value(alias = "atrakcje")]
    Attractions,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Home page dashboard: totals, continents, top destinations, UNESCO sites
    Home,

    /// Show the header counters of a page
    Stats { kind: Kind },

    /// Render the list view of a page
    List {
        kind: Kind,

        /// Search text
        #[arg(short = 'q', long = "search")]
        search: Option<String>,

        /// Filter as key=value (repeatable), e.g. country=K-IT, population=large
        #[arg(short = 'f', long = "filter")]
        filters: Vec<String>,

        /// Sort mode, e.g. name, population, height
        #[arg(long = "sort")]
        sort: Option<String>,

        /// Page URL to start from, e.g. "miasta.html?country=K-IT"
        #[arg(long = "url")]
        url: Option<String>,
    },

    /// Render the detail view of one entity
    Show { kind: Kind, id: String },

    /// Search the three index documents
    Search {
        query: String,

        /// Restrict to one kind
        #[arg(short = 'k', long = "kind")]
        kind: Option<Kind>,
    },

    /// Browse the photo gallery
    Gallery {
        /// recent, name or popular
        #[arg(long = "sort")]
        sort: Option<String>,

        /// all, kraje, miasta or atrakcje
        #[arg(long = "kind")]
        kind: Option<String>,

        /// Only photos of this country id
        #[arg(long = "country")]
        country: Option<String>,

        #[arg(short = 'q', long = "search")]
        search: Option<String>,

        /// Number of pages to show (each "load more" adds one)
        #[arg(long = "pages", default_value_t = 1)]
        pages: usize,

        /// Open the lightbox on this photo id
        #[arg(long = "open")]
        open: Option<String>,
    },

    /// Interactive session on one page with simulated browser history
    Shell {
        kind: Kind,

        /// Initial page URL
        #[arg(long = "url")]
        url: Option<String>,
    },
}
