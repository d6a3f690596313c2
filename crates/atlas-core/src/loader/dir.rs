// crates/atlas-core/src/loader/dir.rs
use super::common_io::{open_stream, read_json};
use super::DocumentSource;
use crate::error::{AtlasError, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Serves documents from a local directory laid out like the web root.
///
/// With the `compact` feature a missing `x.json` is looked up as `x.json.gz`.
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(AtlasError::NotFound(format!(
                "data directory {} does not exist",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let direct = self.root.join(path.trim_start_matches('/'));
        #[cfg(feature = "compact")]
        if !direct.exists() {
            let mut gz = direct.clone().into_os_string();
            gz.push(".gz");
            let gz = PathBuf::from(gz);
            if gz.exists() {
                return gz;
            }
        }
        direct
    }
}

impl DocumentSource for DirSource {
    fn fetch(&self, path: &str) -> Result<Value> {
        let file = self.resolve(path);
        debug!(path = %file.display(), "reading document");
        read_json(open_stream(&file)?)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
