//! Asset file loading: the full pipeline
//!
//! `Loader` wires the stages together: resolve source, parse headers,
//! reconcile against the remote copy (when asked), parse the column
//! declaration, build records. A load either produces a complete
//! [`AssetFile`] or fails; no partial result escapes.

use std::ops::Index;
use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::header::Headers;
use crate::parser::parse_records;
use crate::record::Record;
use crate::schema::Schema;
use crate::source::{is_remote, Fetch, FileStore, Persist, SourceResolver};
use crate::update::reconcile;

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ',';

/// A fully loaded asset file
///
/// Immutable from the caller's perspective: the update-before-build path only
/// affects the text consumed during construction, never a built value.
#[derive(Debug)]
pub struct AssetFile {
    location: String,
    headers: Headers,
    schema: Arc<Schema>,
    records: Vec<Record>,
    delimiter: char,
    updated: bool,
}

impl AssetFile {
    /// Load with default options (comma delimiter, no update check)
    pub fn load(location: &str) -> Result<Self> {
        Loader::new().load(location)
    }

    /// Origin identifier: local path or URL
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Record shape label from the `type` header
    pub fn type_name(&self) -> &str {
        self.headers.type_name()
    }

    /// Content version from the `version` header
    pub fn version(&self) -> u64 {
        self.headers.version()
    }

    /// Delimiter this file was parsed with
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Whether reconciliation replaced the local content during this load
    pub fn was_updated(&self) -> bool {
        self.updated
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Restartable iteration over records in file order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl Index<usize> for AssetFile {
    type Output = Record;

    fn index(&self, index: usize) -> &Record {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a AssetFile {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Configurable loader for asset files
///
/// The fetch and persist collaborators are injectable; defaults dispatch
/// between HTTP and the local filesystem.
pub struct Loader {
    delimiter: char,
    update: bool,
    lenient: bool,
    fetcher: Box<dyn Fetch>,
    persister: Box<dyn Persist>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            update: false,
            lenient: false,
            fetcher: Box::new(SourceResolver::new()),
            persister: Box::new(FileStore),
        }
    }

    /// Field delimiter (default `,`)
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Check the `url` header for a newer remote copy before building records
    pub fn update(mut self, update: bool) -> Self {
        self.update = update;
        self
    }

    /// Skip malformed data rows with a warning instead of failing the load
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    /// Replace the fetch collaborator
    pub fn fetcher(mut self, fetcher: Box<dyn Fetch>) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Replace the persist collaborator
    pub fn persister(mut self, persister: Box<dyn Persist>) -> Self {
        self.persister = persister;
        self
    }

    /// Run the pipeline against a location
    pub fn load(&self, location: &str) -> Result<AssetFile> {
        // A fresh remote fetch is current by definition; only local loads
        // get an update check.
        let remote_origin = is_remote(location);

        let text = self.fetcher.fetch(location)?;
        let headers = Headers::parse(&text);

        let (text, headers, updated) = if self.update && !remote_origin {
            let outcome = reconcile(
                location,
                text,
                headers,
                self.fetcher.as_ref(),
                self.persister.as_ref(),
            )?;
            (outcome.text, outcome.headers, outcome.updated)
        } else {
            (text, headers, false)
        };

        let schema = Schema::parse(&text, self.delimiter, location)?;
        let records = parse_records(&text, &schema, self.delimiter, location, self.lenient)?;

        debug!(
            location = %location,
            records = records.len(),
            columns = schema.len(),
            version = headers.version(),
            "Loaded asset file"
        );

        Ok(AssetFile {
            location: location.to_string(),
            headers,
            schema,
            records,
            delimiter: self.delimiter,
            updated,
        })
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::AssetError;
    use crate::record::Value;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory source map standing in for both transports
    #[derive(Default)]
    struct MemorySources {
        content: HashMap<String, String>,
        persisted: RefCell<HashMap<String, String>>,
    }

    impl MemorySources {
        fn with(entries: &[(&str, &str)]) -> Self {
            Self {
                content: entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                persisted: RefCell::new(HashMap::new()),
            }
        }
    }

    impl Fetch for MemorySources {
        fn fetch(&self, location: &str) -> Result<String> {
            self.content
                .get(location)
                .cloned()
                .ok_or_else(|| AssetError::SourceUnavailable {
                    location: location.to_string(),
                    reason: "not found".to_string(),
                })
        }
    }

    impl Persist for MemorySources {
        fn persist(&self, location: &str, text: &str) -> Result<()> {
            self.persisted
                .borrow_mut()
                .insert(location.to_string(), text.to_string());
            Ok(())
        }
    }

    const WEAPONS: &str = "#version=2\n#type=Weapon\n@name:str, damage:int\nsword, 10\naxe, 14\n";

    #[test]
    fn test_load_pipeline() {
        let loader = Loader::new().fetcher(Box::new(MemorySources::with(&[("weapons.adf", WEAPONS)])));
        let asset = loader.load("weapons.adf").unwrap();

        assert_eq!(asset.location(), "weapons.adf");
        assert_eq!(asset.type_name(), "Weapon");
        assert_eq!(asset.version(), 2);
        assert_eq!(asset.len(), 2);
        assert_eq!(asset[1].field("name"), Some(&Value::Str("axe".to_string())));
        assert!(!asset.was_updated());
    }

    #[test]
    fn test_iteration_is_restartable() {
        let loader = Loader::new().fetcher(Box::new(MemorySources::with(&[("weapons.adf", WEAPONS)])));
        let asset = loader.load("weapons.adf").unwrap();
        assert_eq!(asset.iter().count(), 2);
        assert_eq!(asset.iter().count(), 2);
        let names: Vec<String> = (&asset)
            .into_iter()
            .filter_map(|r| r.field("name").map(ToString::to_string))
            .collect();
        assert_eq!(names, vec!["sword", "axe"]);
    }

    #[test]
    fn test_remote_origin_skips_update_check() {
        // The remote copy advertises an even newer url; a remote load must
        // not chase it.
        let url = "https://example.com/weapons.adf";
        let remote =
            "#version=2\n#url=https://example.com/weapons-v9.adf\n@name:str, damage:int\nsword, 10\n";
        let sources = MemorySources::with(&[(url, remote)]);
        let loader = Loader::new().update(true).fetcher(Box::new(sources));

        let asset = loader.load(url).unwrap();
        assert!(!asset.was_updated());
        assert_eq!(asset.version(), 2);
    }

    /// Shared handle so the test can observe persisted content after the
    /// loader takes ownership of its collaborators
    #[derive(Clone)]
    struct Shared(std::rc::Rc<MemorySources>);

    impl Fetch for Shared {
        fn fetch(&self, location: &str) -> Result<String> {
            self.0.fetch(location)
        }
    }

    impl Persist for Shared {
        fn persist(&self, location: &str, text: &str) -> Result<()> {
            self.0.persist(location, text)
        }
    }

    #[test]
    fn test_update_replaces_with_newer_remote() {
        let local = "#version=1\n#url=https://example.com/weapons.adf\n@name:str, damage:int\nsword, 10\n";
        let remote = "#version=4\n#url=https://example.com/weapons.adf\n@name:str, damage:int\nkatana, 18\n";
        let sources = Shared(std::rc::Rc::new(MemorySources::with(&[
            ("weapons.adf", local),
            ("https://example.com/weapons.adf", remote),
        ])));

        let loader = Loader::new()
            .update(true)
            .fetcher(Box::new(sources.clone()))
            .persister(Box::new(sources.clone()));

        let asset = loader.load("weapons.adf").unwrap();
        assert!(asset.was_updated());
        assert_eq!(asset.version(), 4);
        assert_eq!(asset[0].field("name"), Some(&Value::Str("katana".to_string())));
        assert_eq!(
            sources.0.persisted.borrow().get("weapons.adf").map(String::as_str),
            Some(remote)
        );
    }

    #[test]
    fn test_source_unavailable() {
        let loader = Loader::new().fetcher(Box::new(MemorySources::default()));
        let err = loader.load("missing.adf").unwrap_err();
        assert!(matches!(err, AssetError::SourceUnavailable { .. }));
    }
}
