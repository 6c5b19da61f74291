//! Column declarations: `@name:type, name:type, ...`
//!
//! The type set is closed. Unknown type names are rejected while parsing the
//! declaration, not when the first data row hits them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{AssetError, Result};
use crate::record::Value;

/// Declaration marker: lines starting with this character declare columns
pub const DECLARATION_MARKER: char = '@';

/// Closed set of column types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Str,
    Int,
    Float,
    Bool,
}

impl ColumnType {
    /// Parse a type-name token from a declaration line
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "str" => Some(ColumnType::Str),
            "int" => Some(ColumnType::Int),
            "float" => Some(ColumnType::Float),
            "bool" => Some(ColumnType::Bool),
            _ => None,
        }
    }

    /// Coerce one raw field into a typed value
    ///
    /// Booleans accept exactly `true` / `false`, case-insensitively. The
    /// caller is expected to have trimmed surrounding whitespace already.
    pub fn coerce(self, raw: &str) -> std::result::Result<Value, String> {
        match self {
            ColumnType::Str => Ok(Value::Str(raw.to_string())),
            ColumnType::Int => raw
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|e| e.to_string()),
            ColumnType::Float => raw
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|e| e.to_string()),
            ColumnType::Bool => match raw.to_ascii_lowercase().as_str() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                _ => Err("expected 'true' or 'false'".to_string()),
            },
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Str => write!(f, "str"),
            ColumnType::Int => write!(f, "int"),
            ColumnType::Float => write!(f, "float"),
            ColumnType::Bool => write!(f, "bool"),
        }
    }
}

/// One declared column: name plus type tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    pub ty: ColumnType,
}

/// Ordered column declaration for one asset file
///
/// Holds the columns in declaration order plus a name-to-index lookup built
/// once. Duplicate names are allowed; the lookup keeps the first occurrence.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    columns: Vec<Column>,
    #[serde(skip)]
    by_name: HashMap<String, usize>,
}

impl Schema {
    /// Parse all `@` declaration lines from raw asset text
    ///
    /// Multiple declaration lines concatenate into one flat column list in
    /// file order. The whole line is lowercased, then split on `delimiter`;
    /// each token splits on `:` into a trimmed (name, type-name) pair.
    pub fn parse(text: &str, delimiter: char, location: &str) -> Result<Arc<Self>> {
        let mut columns = Vec::new();

        for line in text.lines() {
            let Some(rest) = line.strip_prefix(DECLARATION_MARKER) else {
                continue;
            };
            let rest = rest.to_lowercase();
            for token in rest.split(delimiter) {
                let Some((name, type_name)) = token.split_once(':') else {
                    return Err(AssetError::MissingTypeHint {
                        token: token.trim().to_string(),
                        location: location.to_string(),
                    });
                };
                let type_name = type_name.trim();
                let ty = ColumnType::from_token(type_name).ok_or_else(|| {
                    AssetError::UnknownType {
                        name: type_name.to_string(),
                        location: location.to_string(),
                    }
                })?;
                columns.push(Column {
                    name: name.trim().to_string(),
                    ty,
                });
            }
        }

        if columns.is_empty() {
            return Err(AssetError::MissingColumnDeclaration {
                location: location.to_string(),
            });
        }

        let mut by_name = HashMap::new();
        for (i, column) in columns.iter().enumerate() {
            by_name.entry(column.name.clone()).or_insert(i);
        }

        Ok(Arc::new(Self { columns, by_name }))
    }

    /// Columns in declaration order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of declared columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Index of the first column with the given name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Column at a given index
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }
}
