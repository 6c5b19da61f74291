//! ADF Core Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Loader for the ADF asset format: header-annotated, typed delimited text.
//!
//! # Overview
//!
//! An asset file mixes three kinds of lines:
//!
//! - `#key=value` — metadata headers (`version`, `type`, `url`)
//! - `@name:type, name:type` — the ordered column declaration
//! - everything else — data rows, one record per line
//!
//! Loading runs a single pipeline: resolve the source (local path or URL),
//! parse headers, optionally reconcile against a newer remote copy, parse the
//! column declaration, coerce every data row into a typed [`Record`].
//!
//! # Example
//!
//! ```no_run
//! use adf_core::{AssetFile, Loader};
//!
//! fn main() -> adf_core::Result<()> {
//!     let weapons = Loader::new().update(true).load("weapons.adf")?;
//!     for weapon in &weapons {
//!         println!("{:?}", weapon.field("name"));
//!     }
//!     Ok(())
//! }
//! ```

pub mod asset;
pub mod error;
pub mod header;
pub mod parser;
pub mod record;
pub mod schema;
pub mod source;
pub mod update;
pub mod writer;

// Re-export commonly used types
pub use asset::{AssetFile, Loader, DEFAULT_DELIMITER};
pub use error::{AssetError, Result};
pub use header::Headers;
pub use record::{Record, Value};
pub use schema::{Column, ColumnType, Schema};
pub use source::{Fetch, FileStore, HttpFetcher, Persist, SourceResolver};
