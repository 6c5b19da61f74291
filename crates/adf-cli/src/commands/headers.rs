//! `adf headers` - print header metadata without building records

use adf_core::{Fetch, Headers, SourceResolver};
use colored::Colorize;

use crate::error::Result;

pub fn run(location: &str) -> Result<()> {
    let text = SourceResolver::new().fetch(location)?;
    let headers = Headers::parse(&text);

    let mut entries: Vec<(&str, &str)> = headers.iter().collect();
    entries.sort();
    for (key, value) in entries {
        println!("{}={}", key.bold(), value);
    }

    println!();
    println!("version: {}", headers.version());
    println!("type:    {}", headers.type_name());
    println!("url:     {}", headers.url().unwrap_or("(none)"));

    Ok(())
}
