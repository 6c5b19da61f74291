//! `adf validate` - check that an asset file loads cleanly

use adf_core::Loader;
use colored::Colorize;

use crate::error::Result;

pub fn run(location: &str, delimiter: char, lenient: bool) -> Result<()> {
    let asset = Loader::new()
        .delimiter(delimiter)
        .lenient(lenient)
        .load(location)?;

    println!("{} {}", "OK".green().bold(), location);
    println!("  type:    {}", asset.type_name());
    println!("  version: {}", asset.version());
    println!("  columns: {}", asset.schema().len());
    println!("  records: {}", asset.len());

    Ok(())
}
