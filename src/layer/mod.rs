pub mod contents;
pub mod language_content;

pub use contents::Contents;
pub use language_content::{LanguageContent, LayerError, LANGUAGE_CONTENT_TYPE};
