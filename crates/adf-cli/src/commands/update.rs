//! `adf update` - pull a newer remote copy into the local file

use adf_core::Loader;
use colored::Colorize;

use crate::error::Result;

pub fn run(location: &str, delimiter: char) -> Result<()> {
    let asset = Loader::new()
        .delimiter(delimiter)
        .update(true)
        .load(location)?;

    if asset.was_updated() {
        println!(
            "{} {} updated to version {}",
            "✓".green().bold(),
            location,
            asset.version()
        );
    } else {
        println!(
            "{} {} is up to date (version {})",
            "=".dimmed(),
            location,
            asset.version()
        );
    }

    Ok(())
}
