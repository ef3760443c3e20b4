use serde::{Deserialize, Serialize};

/// The outcome of resolving one field: the language that won, if known, and
/// the text in that language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolved {
    pub language: Option<String>,
    pub value: String,
}

impl Resolved {
    pub fn new(language: Option<&str>, value: &str) -> Self {
        Self {
            language: language.map(str::to_owned),
            value: value.to_owned(),
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Borrowed `(language, value)` view, convenient for comparisons.
    pub fn as_pair(&self) -> (Option<&str>, &str) {
        (self.language.as_deref(), &self.value)
    }

    pub fn into_parts(self) -> (Option<String>, String) {
        (self.language, self.value)
    }
}
