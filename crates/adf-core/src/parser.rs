//! Record builder: data lines into typed records
//!
//! Every line that is not a header (`#`) or declaration (`@`) line is a data
//! line — including blank lines, which fail the arity check like any other
//! short row. Lenient mode skips bad rows with a warning instead of failing;
//! schema errors are never lenient.

use std::sync::Arc;

use tracing::warn;

use crate::error::{AssetError, Result};
use crate::header::HEADER_MARKER;
use crate::record::{Record, Value};
use crate::schema::{Schema, DECLARATION_MARKER};

/// Build the ordered record sequence from raw asset text
///
/// `location` is used for error context only. Line numbers in errors are
/// 1-based positions in the full text, headers included.
pub fn parse_records(
    text: &str,
    schema: &Arc<Schema>,
    delimiter: char,
    location: &str,
    lenient: bool,
) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if line.starts_with(DECLARATION_MARKER) || line.starts_with(HEADER_MARKER) {
            continue;
        }
        let line_number = i + 1;

        match parse_line(line, schema, delimiter, line_number, location) {
            Ok(record) => records.push(record),
            Err(e) if lenient => {
                warn!(error = %e, line_number, "Skipping malformed row");
            },
            Err(e) => return Err(e),
        }
    }

    Ok(records)
}

/// Parse a single data line into a record
fn parse_line(
    line: &str,
    schema: &Arc<Schema>,
    delimiter: char,
    line_number: usize,
    location: &str,
) -> Result<Record> {
    let fields: Vec<&str> = line.trim().split(delimiter).collect();

    if fields.len() != schema.len() {
        return Err(AssetError::RowArity {
            line_number,
            expected: schema.len(),
            actual: fields.len(),
            location: location.to_string(),
        });
    }

    let mut values = Vec::with_capacity(fields.len());
    for (column, field) in schema.columns().iter().zip(fields) {
        let raw = field.trim();
        let value: Value = column.ty.coerce(raw).map_err(|reason| {
            AssetError::FieldCoercion {
                line_number,
                column: column.name.clone(),
                value: raw.to_string(),
                reason,
                location: location.to_string(),
            }
        })?;
        values.push(value);
    }

    Ok(Record::new(Arc::clone(schema), values))
}
