use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// `{language: {field: value}}`, the persisted layout of a translation layer.
///
/// Values are usually text, but lists and objects (translated `aliases`, for
/// instance) are kept as-is. Only text values take part in resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Contents {
    inner: BTreeMap<String, BTreeMap<String, Value>>,
}

impl Contents {
    pub fn new() -> Self {
        Contents {
            inner: BTreeMap::new(),
        }
    }

    /// Text of `field` in `language`; `None` if absent or not text.
    pub fn get(&self, language: &str, field: &str) -> Option<&str> {
        self.value(language, field).and_then(Value::as_str)
    }

    /// Raw value of `field` in `language`, whatever its shape.
    pub fn value(&self, language: &str, field: &str) -> Option<&Value> {
        self.inner
            .get(language)
            .and_then(|bucket| bucket.get(field))
    }

    /// Set `field` in the `language` bucket, creating the bucket if needed.
    /// Returns the value it replaced, if any.
    pub fn insert(
        &mut self,
        language: impl Into<String>,
        field: impl Into<String>,
        text: impl Into<String>,
    ) -> Option<Value> {
        self.inner
            .entry(language.into())
            .or_default()
            .insert(field.into(), Value::String(text.into()))
    }

    pub fn with(
        mut self,
        language: impl Into<String>,
        field: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.insert(language, field, text);
        self
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
