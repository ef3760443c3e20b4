use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::contents::Contents;
use crate::object::{Localized, StixObject};
use crate::types::identifiers::StixId;
use crate::types::timestamp;

pub const LANGUAGE_CONTENT_TYPE: &str = "language-content";

#[derive(Debug, Error)]
pub enum LayerError {
    #[error("Invalid type, expected language-content, got: {0:?}")]
    WrongKind(String),
    #[error("Malformed language-content object: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn ensure_kind(kind: &str) -> Result<(), LayerError> {
    if kind != LANGUAGE_CONTENT_TYPE {
        return Err(LayerError::WrongKind(kind.to_string()));
    }
    Ok(())
}

fn deserialize_kind<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let kind = String::deserialize(deserializer)?;
    ensure_kind(&kind).map_err(serde::de::Error::custom)?;
    Ok(kind)
}

fn default_spec_version() -> String {
    "2.1".to_string()
}

/// A STIX `language-content` object: translations of the properties of
/// exactly one other object, addressed by `object_ref` and `object_modified`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageContent {
    #[serde(rename = "type", deserialize_with = "deserialize_kind")]
    kind: String,
    #[serde(default = "default_spec_version")]
    pub spec_version: String,
    pub id: StixId,
    #[serde(with = "timestamp")]
    pub created: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub modified: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_ref: Option<StixId>,
    pub object_ref: StixId,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp::option")]
    pub object_modified: Option<DateTime<Utc>>,
    contents: Contents,
    /// Properties this crate does not interpret, kept for round trips.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl LanguageContent {
    /// A new, empty layer for `object_ref`.
    ///
    /// `created` and `modified` are set to now; the id is a fresh random one.
    pub fn new(
        object_ref: StixId,
        object_modified: Option<DateTime<Utc>>,
        created_by_ref: Option<StixId>,
    ) -> Self {
        let created = timestamp::now();

        Self {
            kind: LANGUAGE_CONTENT_TYPE.to_string(),
            spec_version: default_spec_version(),
            id: StixId::random(LANGUAGE_CONTENT_TYPE),
            created,
            modified: created,
            created_by_ref,
            object_ref,
            object_modified,
            contents: Contents::new(),
            extra: Map::new(),
        }
    }

    /// A new, empty layer addressed at the current version of `document`.
    pub fn for_document<D: Localized + ?Sized>(document: &D, creator: &StixId) -> Self {
        Self::new(
            document.id().clone(),
            document.modified(),
            Some(creator.clone()),
        )
    }

    pub fn with_contents(mut self, contents: Contents) -> Self {
        self.contents = contents;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, LayerError> {
        let object: StixObject = serde_json::from_str(json)?;
        Self::try_from(object)
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Fails with [`LayerError::WrongKind`] unless this is a language-content object.
    pub fn validate(&self) -> Result<(), LayerError> {
        ensure_kind(&self.kind)
    }

    pub fn contents(&self) -> &Contents {
        &self.contents
    }

    pub fn contents_mut(&mut self) -> &mut Contents {
        &mut self.contents
    }

    /// Whether `object` is a language-content object pointing at `target`.
    pub fn references(object: &StixObject, target: &StixId) -> bool {
        object.kind() == LANGUAGE_CONTENT_TYPE
            && object.get("object_ref").and_then(Value::as_str) == Some(target.as_str())
    }
}

impl TryFrom<StixObject> for LanguageContent {
    type Error = LayerError;

    fn try_from(object: StixObject) -> Result<Self, Self::Error> {
        ensure_kind(object.kind())?;
        let value = serde_json::to_value(object)?;
        Ok(serde_json::from_value(value)?)
    }
}
