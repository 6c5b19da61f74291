//! Header extraction: `#key=value` metadata lines
//!
//! Header parsing is tolerant by design: a `#` line without an `=` is a plain
//! comment, not an error. Reserved keys (`version`, `type`, `url`) get typed
//! accessors with the documented defaults.

use std::collections::HashMap;

use serde::Serialize;

/// Header marker: lines starting with this character carry metadata
pub const HEADER_MARKER: char = '#';

/// Default record shape label when the `type` header is absent
pub const DEFAULT_TYPE_NAME: &str = "Generic";

/// Parsed header mapping for one asset file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Headers(HashMap<String, String>);

impl Headers {
    /// Extract the header mapping from raw asset text
    ///
    /// Scans every line whose first character is `#` and splits it on the
    /// first `=`. Duplicate keys keep the last occurrence. `#` lines with no
    /// `=` are ignored.
    pub fn parse(text: &str) -> Self {
        let mut map = HashMap::new();
        for line in text.lines() {
            let Some(rest) = line.strip_prefix(HEADER_MARKER) else {
                continue;
            };
            if let Some((key, value)) = rest.split_once('=') {
                map.insert(key.to_string(), value.to_string());
            }
        }
        Self(map)
    }

    /// Raw value for a header key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The `version` header as a non-negative integer
    ///
    /// Absent or unparseable versions count as 0 on both sides of an update
    /// comparison.
    pub fn version(&self) -> u64 {
        self.get("version")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Display name for the record shape (`type` header)
    pub fn type_name(&self) -> &str {
        self.get("type").unwrap_or(DEFAULT_TYPE_NAME)
    }

    /// Remote location used for update checks (`url` header)
    pub fn url(&self) -> Option<&str> {
        self.get("url")
    }

    /// Number of header entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no headers were found
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over header key/value pairs (order unspecified)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
