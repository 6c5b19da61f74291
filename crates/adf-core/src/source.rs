//! Source resolution: fetching raw text from local or remote locations
//!
//! The load pipeline never touches the network or the filesystem directly; it
//! goes through the [`Fetch`] and [`Persist`] capabilities so callers can
//! substitute their own transports (and tests can substitute canned content).

use std::fs;
use std::time::Duration;

use tracing::debug;

use crate::error::{AssetError, Result};

/// Default timeout for remote reads
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Read capability: produce the full text behind a location
pub trait Fetch {
    /// Fetch the entire contents at `location`
    fn fetch(&self, location: &str) -> Result<String>;
}

/// Write capability: replace the content behind a location
pub trait Persist {
    /// Overwrite `location` with `text`
    fn persist(&self, location: &str, text: &str) -> Result<()>;
}

/// Whether a location names a remote source (recognized by scheme prefix)
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// HTTP fetcher backed by a blocking reqwest client
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default timeout
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, location: &str) -> Result<String> {
        let response =
            self.client
                .get(location)
                .send()
                .map_err(|e| AssetError::SourceUnavailable {
                    location: location.to_string(),
                    reason: e.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssetError::SourceUnavailable {
                location: location.to_string(),
                reason: format!("HTTP status {status}"),
            });
        }

        response.text().map_err(|e| AssetError::SourceUnavailable {
            location: location.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Local filesystem store; implements both capabilities
#[derive(Debug, Default, Clone, Copy)]
pub struct FileStore;

impl Fetch for FileStore {
    fn fetch(&self, location: &str) -> Result<String> {
        fs::read_to_string(location).map_err(|e| AssetError::SourceUnavailable {
            location: location.to_string(),
            reason: e.to_string(),
        })
    }
}

impl Persist for FileStore {
    fn persist(&self, location: &str, text: &str) -> Result<()> {
        fs::write(location, text).map_err(|e| AssetError::PersistFailed {
            location: location.to_string(),
            source: e,
        })
    }
}

/// Default [`Fetch`] implementation: dispatch on the location's scheme
///
/// Remote locations go through HTTP, anything else is treated as a local
/// path. The fetch itself is side-effect free; persisting is a separate
/// capability.
pub struct SourceResolver {
    http: HttpFetcher,
    fs: FileStore,
}

impl SourceResolver {
    pub fn new() -> Self {
        Self {
            http: HttpFetcher::new(),
            fs: FileStore,
        }
    }
}

impl Default for SourceResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for SourceResolver {
    fn fetch(&self, location: &str) -> Result<String> {
        if is_remote(location) {
            debug!(location = %location, "Fetching remote source");
            self.http.fetch(location)
        } else {
            debug!(location = %location, "Reading local source");
            self.fs.fetch(location)
        }
    }
}
