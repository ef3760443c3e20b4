use std::io::Read;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::localized::Localized;
use super::markings::granular_lang;
use crate::types::identifiers::StixId;
use crate::types::timestamp;

#[derive(Debug, Error)]
pub enum ObjectError {
    #[error("Object has no property {0:?}")]
    UnknownField(String),
    #[error("Property {0:?} is not text")]
    NotText(String),
    #[error("Expected an object of type {expected:?}, got {found:?}")]
    UnexpectedType { expected: &'static str, found: String },
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Any STIX object, read as its `type`, `id` and an open set of properties.
///
/// Properties the crate does not interpret are carried through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StixObject {
    #[serde(rename = "type")]
    kind: String,
    id: StixId,
    #[serde(flatten)]
    properties: Map<String, Value>,
}

impl StixObject {
    /// A bare object whose type is taken from the identifier prefix.
    pub fn new(id: StixId) -> Self {
        Self {
            kind: id.object_type().to_string(),
            id,
            properties: Map::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ObjectError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, ObjectError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}

impl Localized for StixObject {
    fn id(&self) -> &StixId {
        &self.id
    }

    fn modified(&self) -> Option<DateTime<Utc>> {
        self.get("modified")
            .and_then(Value::as_str)
            .and_then(timestamp::parse)
    }

    fn lang(&self) -> Option<&str> {
        self.get("lang").and_then(Value::as_str)
    }

    fn text(&self, field: &str) -> Result<&str, ObjectError> {
        match field {
            "type" => Ok(&self.kind),
            "id" => Ok(self.id.as_str()),
            _ => match self.properties.get(field) {
                Some(Value::String(text)) => Ok(text),
                Some(_) => Err(ObjectError::NotText(field.to_string())),
                None => Err(ObjectError::UnknownField(field.to_string())),
            },
        }
    }

    fn field_lang(&self, field: &str) -> Option<&str> {
        granular_lang(self.get("granular_markings"), field)
    }
}
