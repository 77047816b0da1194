//! Record type for documents headed to (or living in) the search index.

use crate::{Error, ObjectId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the identifier field the remote index keys records by.
pub const OBJECT_ID_FIELD: &str = "objectID";

/// A document: a JSON object mapping field names to values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Identifier of this record, if it has one.
    ///
    /// Numeric identifiers are rendered in decimal so that `1` and `"1"`
    /// name the same remote object.
    pub fn object_id(&self) -> Option<ObjectId> {
        match self.0.get(OBJECT_ID_FIELD)? {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    /// Set the identifier field.
    pub fn set_object_id(&mut self, id: impl Into<ObjectId>) {
        self.0
            .insert(OBJECT_ID_FIELD.to_string(), Value::String(id.into()));
    }

    /// Get a field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Insert or replace a field, returning the previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    /// Remove a field.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Borrow the underlying JSON object.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Convert into the underlying JSON object.
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl TryFrom<Value> for Record {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            Value::Null => Err(Error::NotAnObject("null")),
            Value::Bool(_) => Err(Error::NotAnObject("a boolean")),
            Value::Number(_) => Err(Error::NotAnObject("a number")),
            Value::String(_) => Err(Error::NotAnObject("a string")),
            Value::Array(_) => Err(Error::NotAnObject("an array")),
        }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.0)
    }
}
