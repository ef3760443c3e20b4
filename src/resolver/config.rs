use serde::{Deserialize, Serialize};

use super::languages::Languages;

/// Everything a resolver needs besides the document itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    pub languages: Languages,
    /// Fail instead of falling back to the document's own text when no
    /// preferred language is available.
    #[serde(default, alias = "no_default")]
    pub strict: bool,
}

impl ResolverConfig {
    pub fn lenient(languages: impl Into<Languages>) -> Self {
        Self {
            languages: languages.into(),
            strict: false,
        }
    }

    pub fn strict(languages: impl Into<Languages>) -> Self {
        Self {
            languages: languages.into(),
            strict: true,
        }
    }
}
