//! CLI command implementations

pub mod headers;
pub mod show;
pub mod update;
pub mod validate;
