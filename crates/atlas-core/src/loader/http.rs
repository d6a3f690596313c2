// crates/atlas-core/src/loader/http.rs
use super::DocumentSource;
use crate::error::{AtlasError, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Fetches documents relative to a base URL. Single attempt, no retry.
#[derive(Clone, Debug)]
pub struct HttpSource {
    base: Url,
    client: Client,
}

impl HttpSource {
    pub fn new(base: &str, timeout: Duration) -> Result<Self> {
        let mut raw = base.trim().to_owned();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base = Url::parse(&raw)
            .map_err(|e| AtlasError::Config(format!("invalid base URL {base}: {e}")))?;
        let client = Client::builder()
            .user_agent(concat!("atlas-rs/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { base, client })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn url_for(&self, path: &str) -> Result<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| AtlasError::Config(format!("invalid document path {path}: {e}")))
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self, path: &str) -> Result<Value> {
        let url = self.url_for(path)?;
        debug!(%url, "GET");
        let resp = self.client.get(url.clone()).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AtlasError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp.json::<Value>()?)
    }

    fn describe(&self) -> String {
        self.base.to_string()
    }
}
