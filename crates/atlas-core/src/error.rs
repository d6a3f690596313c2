// crates/atlas-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading, resolving or navigating portal data.
///
/// Only index-level failures are fatal to a page. Detail documents that fail
/// to load are logged and skipped by the loader, so they never surface here
/// unless the caller fetches a single document directly.
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Not found: {0}")]
    NotFound(String),

    /// The index document of a page could not be loaded. The page renders an
    /// error state with an empty collection.
    #[error("Index unavailable: {0}")]
    IndexUnavailable(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Filters are hidden while a detail view is open")]
    FiltersHidden,
}

pub type Result<T> = std::result::Result<T, AtlasError>;
