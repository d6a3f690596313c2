//! atlas-cli
//! =========
//!
//! Command-line front-end for `atlas-core`: the home dashboard, lists,
//! detail views, global search, the photo gallery and an interactive page
//! session over the portal's JSON documents.
//!
//! This crate primarily provides a binary (`atlas`). The library target
//! only carries this overview for docs.rs.
//!
//! Quick start
//! -----------
//!
//! ```text
//! atlas --help
//! atlas --source ./site home
//! atlas --source ./site stats kraje
//! atlas --source https://example.org/ list miasta -f population=mega
//! atlas search rzym --kind cities
//! atlas shell atrakcje
//! ```
//!
//! For programmatic access use [`atlas-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
