use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LanguagesError {
    #[error("At least one preferred language is required")]
    Empty,
}

/// Ordered language preferences, most preferred first. Never empty.
///
/// Codes are compared by exact string equality; no locale matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OneOrMany", into = "Vec<String>")]
pub struct Languages(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl Languages {
    pub fn new<I, S>(codes: I) -> Result<Self, LanguagesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let codes: Vec<String> = codes.into_iter().map(Into::into).collect();
        if codes.is_empty() {
            return Err(LanguagesError::Empty);
        }
        Ok(Languages(codes))
    }

    pub fn single(code: impl Into<String>) -> Self {
        Languages(vec![code.into()])
    }

    pub fn preferred(&self) -> &str {
        &self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.iter().any(|c| c == code)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true; see [`Languages::new`].
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<&str> for Languages {
    fn from(code: &str) -> Self {
        Languages::single(code)
    }
}

impl From<String> for Languages {
    fn from(code: String) -> Self {
        Languages::single(code)
    }
}

impl TryFrom<Vec<String>> for Languages {
    type Error = LanguagesError;

    fn try_from(codes: Vec<String>) -> Result<Self, Self::Error> {
        Languages::new(codes)
    }
}

impl TryFrom<OneOrMany> for Languages {
    type Error = LanguagesError;

    fn try_from(raw: OneOrMany) -> Result<Self, Self::Error> {
        match raw {
            OneOrMany::One(code) => Ok(Languages::single(code)),
            OneOrMany::Many(codes) => Languages::new(codes),
        }
    }
}

impl From<Languages> for Vec<String> {
    fn from(languages: Languages) -> Self {
        languages.0
    }
}
