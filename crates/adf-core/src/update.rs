//! Update reconciliation: replace local content when the remote is newer
//!
//! Updating is advisory. A failed remote fetch degrades to "use the local
//! copy" with a warning; it never aborts the load. The one failure that does
//! propagate is a persist failure after the replacement decision — a local
//! store silently left stale would be worse than a failed load.

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::header::Headers;
use crate::source::{Fetch, Persist};

/// Outcome of a reconciliation pass: the authoritative text and headers for
/// record building
#[derive(Debug)]
pub struct Reconciliation {
    pub text: String,
    pub headers: Headers,
    /// Whether the remote copy replaced the local one
    pub updated: bool,
}

/// Compare the local copy against the remote named by its `url` header and
/// replace it when the remote version is strictly newer.
///
/// The remote's headers are parsed but its records are not built here; a
/// newer remote has its full text persisted back to `location` and becomes
/// the content the record builder consumes.
pub fn reconcile(
    location: &str,
    local_text: String,
    local_headers: Headers,
    fetcher: &dyn Fetch,
    persister: &dyn Persist,
) -> Result<Reconciliation> {
    let keep_local = |text, headers| Reconciliation {
        text,
        headers,
        updated: false,
    };

    let Some(url) = local_headers.url().map(str::to_string) else {
        debug!(location = %location, "No url header; skipping update check");
        return Ok(keep_local(local_text, local_headers));
    };

    let remote_text = match fetcher.fetch(&url) {
        Ok(text) => text,
        Err(e) => {
            warn!(url = %url, error = %e, "Update check failed; using local copy");
            return Ok(keep_local(local_text, local_headers));
        },
    };

    let remote_headers = Headers::parse(&remote_text);
    let local_version = local_headers.version();
    let remote_version = remote_headers.version();

    if remote_version > local_version {
        info!(
            location = %location,
            local_version,
            remote_version,
            "Remote copy is newer; replacing local content"
        );
        persister.persist(location, &remote_text)?;
        Ok(Reconciliation {
            text: remote_text,
            headers: remote_headers,
            updated: true,
        })
    } else {
        debug!(local_version, remote_version, "Local copy is current");
        Ok(keep_local(local_text, local_headers))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::AssetError;
    use std::cell::RefCell;

    /// Canned fetcher plus a persist log
    struct FakeRemote {
        response: Result<String>,
        persisted: RefCell<Vec<(String, String)>>,
    }

    impl FakeRemote {
        fn serving(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
                persisted: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(AssetError::SourceUnavailable {
                    location: "https://example.com/items.adf".to_string(),
                    reason: "connection refused".to_string(),
                }),
                persisted: RefCell::new(Vec::new()),
            }
        }
    }

    impl Fetch for FakeRemote {
        fn fetch(&self, _location: &str) -> Result<String> {
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(_) => Err(AssetError::SourceUnavailable {
                    location: "https://example.com/items.adf".to_string(),
                    reason: "connection refused".to_string(),
                }),
            }
        }
    }

    impl Persist for FakeRemote {
        fn persist(&self, location: &str, text: &str) -> Result<()> {
            self.persisted
                .borrow_mut()
                .push((location.to_string(), text.to_string()));
            Ok(())
        }
    }

    /// Persister standing in for a read-only local store
    struct ReadOnlyStore;

    impl Persist for ReadOnlyStore {
        fn persist(&self, location: &str, _text: &str) -> Result<()> {
            Err(AssetError::PersistFailed {
                location: location.to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only store",
                ),
            })
        }
    }

    const LOCAL: &str = "#version=3\n#url=https://example.com/items.adf\n@name:str\nsword\n";

    fn run(remote: &FakeRemote) -> Reconciliation {
        reconcile(
            "items.adf",
            LOCAL.to_string(),
            Headers::parse(LOCAL),
            remote,
            remote,
        )
        .unwrap()
    }

    #[test]
    fn test_newer_remote_replaces_and_persists() {
        let remote_text = "#version=5\n#url=https://example.com/items.adf\n@name:str\naxe\n";
        let remote = FakeRemote::serving(remote_text);
        let outcome = run(&remote);
        assert!(outcome.updated);
        assert_eq!(outcome.headers.version(), 5);
        assert_eq!(outcome.text, remote_text);
        assert_eq!(
            remote.persisted.borrow().as_slice(),
            &[("items.adf".to_string(), remote_text.to_string())]
        );
    }

    #[test]
    fn test_older_remote_keeps_local() {
        let remote = FakeRemote::serving("#version=1\n@name:str\naxe\n");
        let outcome = run(&remote);
        assert!(!outcome.updated);
        assert_eq!(outcome.headers.version(), 3);
        assert!(remote.persisted.borrow().is_empty());
    }

    #[test]
    fn test_equal_versions_keep_local_without_write() {
        let remote = FakeRemote::serving("#version=3\n@name:str\naxe\n");
        let outcome = run(&remote);
        assert!(!outcome.updated);
        assert!(remote.persisted.borrow().is_empty());
    }

    #[test]
    fn test_fetch_failure_is_swallowed() {
        let remote = FakeRemote::failing();
        let outcome = run(&remote);
        assert!(!outcome.updated);
        assert_eq!(outcome.text, LOCAL);
    }

    #[test]
    fn test_persist_failure_after_decided_update_propagates() {
        let remote = FakeRemote::serving("#version=9\n@name:str\naxe\n");
        let err = reconcile(
            "items.adf",
            LOCAL.to_string(),
            Headers::parse(LOCAL),
            &remote,
            &ReadOnlyStore,
        )
        .unwrap_err();
        assert!(matches!(err, AssetError::PersistFailed { .. }));
    }

    #[test]
    fn test_remote_without_version_counts_as_zero() {
        let remote = FakeRemote::serving("@name:str\naxe\n");
        let outcome = run(&remote);
        assert!(!outcome.updated);
    }

    #[test]
    fn test_no_url_header_is_a_no_op() {
        let local = "#version=3\n@name:str\nsword\n";
        let remote = FakeRemote::serving("#version=9\n@name:str\naxe\n");
        let outcome = reconcile(
            "items.adf",
            local.to_string(),
            Headers::parse(local),
            &remote,
            &remote,
        )
        .unwrap();
        assert!(!outcome.updated);
    }
}
