//! `adf show` - load an asset file and print its records

use adf_core::Loader;
use comfy_table::{presets::UTF8_FULL, Table};
use tracing::debug;

use crate::error::Result;

pub fn run(
    location: &str,
    delimiter: char,
    update: bool,
    lenient: bool,
    json: bool,
    limit: Option<usize>,
) -> Result<()> {
    let asset = Loader::new()
        .delimiter(delimiter)
        .update(update)
        .lenient(lenient)
        .load(location)?;

    debug!(records = asset.len(), "Loaded asset");

    let shown = limit.unwrap_or(asset.len()).min(asset.len());

    if json {
        for record in asset.iter().take(shown) {
            println!("{}", serde_json::to_string(record)?);
        }
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(
            asset
                .schema()
                .columns()
                .iter()
                .map(|c| format!("{} ({})", c.name, c.ty)),
        );
        for record in asset.iter().take(shown) {
            table.add_row(record.iter().map(ToString::to_string));
        }
        println!("{table}");
    }

    if shown < asset.len() {
        println!("... {} of {} records shown", shown, asset.len());
    }

    Ok(())
}
