//! Text rendering: serialize a loaded asset back to the file format
//!
//! Header lines come first (sorted by key so output is deterministic), then a
//! single consolidated declaration line, then the data rows. The format has
//! no escaping, so a string field containing the delimiter cannot round-trip;
//! that mirrors the format itself, not a writer limitation.

use crate::asset::AssetFile;
use crate::header::{Headers, HEADER_MARKER};
use crate::record::Record;
use crate::schema::{Schema, DECLARATION_MARKER};

/// Render headers, declaration, and records as asset file text
pub fn render(headers: &Headers, schema: &Schema, records: &[Record], delimiter: char) -> String {
    let mut out = String::new();

    let mut entries: Vec<(&str, &str)> = headers.iter().collect();
    entries.sort();
    for (key, value) in entries {
        out.push(HEADER_MARKER);
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }

    out.push(DECLARATION_MARKER);
    let declaration: Vec<String> = schema
        .columns()
        .iter()
        .map(|c| format!("{}:{}", c.name, c.ty))
        .collect();
    out.push_str(&declaration.join(&format!("{delimiter} ")));
    out.push('\n');

    for record in records {
        let fields: Vec<String> = record.iter().map(ToString::to_string).collect();
        out.push_str(&fields.join(&delimiter.to_string()));
        out.push('\n');
    }

    out
}

impl AssetFile {
    /// Serialize this asset back to text with its own delimiter
    pub fn to_text(&self) -> String {
        render(self.headers(), self.schema(), self.records(), self.delimiter())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::parser::parse_records;
    use crate::record::Value;
    use crate::schema::Schema;

    const TEXT: &str =
        "#type=Weapon\n#version=2\n@name:str, damage:int, crit:float, heavy:bool\n\
         sword,10,0.25,false\naxe,14,0.1,true\n";

    #[test]
    fn test_render_shape() {
        let headers = Headers::parse(TEXT);
        let schema = Schema::parse(TEXT, ',', "weapons.adf").unwrap();
        let records = parse_records(TEXT, &schema, ',', "weapons.adf", false).unwrap();

        let rendered = render(&headers, &schema, &records, ',');
        assert_eq!(rendered, TEXT);
    }

    #[test]
    fn test_round_trip_reproduces_records() {
        let schema = Schema::parse(TEXT, ',', "weapons.adf").unwrap();
        let records = parse_records(TEXT, &schema, ',', "weapons.adf", false).unwrap();
        let rendered = render(&Headers::parse(TEXT), &schema, &records, ',');

        let schema2 = Schema::parse(&rendered, ',', "weapons.adf").unwrap();
        let records2 = parse_records(&rendered, &schema2, ',', "weapons.adf", false).unwrap();
        assert_eq!(records, records2);
        assert_eq!(records2[1].field("heavy"), Some(&Value::Bool(true)));
    }
}
