//! Typed values and records
//!
//! A record is a fixed-shape row: one [`Value`] per declared column, in
//! declaration order, immutable once built. Fields are addressable by index
//! or by column name through the shared schema.

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use serde::Serialize;

use crate::schema::Schema;

/// One typed field value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// One parsed data row
#[derive(Debug, Clone)]
pub struct Record {
    schema: Arc<Schema>,
    values: Box<[Value]>,
}

impl Record {
    /// Build a record from values already coerced against `schema`
    ///
    /// Invariant (upheld by the record builder): `values.len()` equals the
    /// schema's column count.
    pub(crate) fn new(schema: Arc<Schema>, values: Vec<Value>) -> Self {
        debug_assert_eq!(values.len(), schema.len());
        Self {
            schema,
            values: values.into_boxed_slice(),
        }
    }

    /// Field at a column index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Field by column name (first matching column)
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.schema.index_of(name).and_then(|i| self.values.get(i))
    }

    /// Number of fields (== number of declared columns)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over fields in column order
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// The schema this record was built against
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

impl Index<usize> for Record {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.values[index]
    }
}

impl PartialEq for Record {
    /// Field-for-field equality; the schema handle itself is not compared
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Serialize for Record {
    /// Serialize as a map of column name to field value
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (column, value) in self.schema.columns().iter().zip(self.values.iter()) {
            map.serialize_entry(&column.name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn schema() -> Arc<Schema> {
        Schema::parse("@name:str, damage:int\n", ',', "test.adf").unwrap()
    }

    #[test]
    fn test_index_and_name_access() {
        let record = Record::new(
            schema(),
            vec![Value::Str("sword".to_string()), Value::Int(10)],
        );
        assert_eq!(record[0], Value::Str("sword".to_string()));
        assert_eq!(record.field("damage"), Some(&Value::Int(10)));
        assert_eq!(record.field("missing"), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_serialize_as_named_map() {
        let record = Record::new(
            schema(),
            vec![Value::Str("sword".to_string()), Value::Int(10)],
        );
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"sword","damage":10}"#);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Str("axe".to_string()).to_string(), "axe");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::Bool(true).to_string(), "true");
    }
}
