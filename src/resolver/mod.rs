pub mod attach;
pub mod config;
pub mod languages;

use std::collections::VecDeque;

use thiserror::Error;
use tracing::{debug, trace};

use crate::layer::{LanguageContent, LayerError};
use crate::object::{Localized, ObjectError, StixObject};
use crate::types::identifiers::StixId;
use crate::types::resolved::Resolved;
use attach::LayerSource;

pub use attach::{AttachLayer, LayerObject};
pub use config::ResolverConfig;
pub use languages::{Languages, LanguagesError};

#[derive(Debug, Error)]
pub enum ResolveError {
    /// Not exactly one layer source was given, or the object is not a usable layer.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// No language-content object in the collection references the document.
    #[error("Unable to find language-content object for {0}")]
    NotFound(StixId),
    /// No preferred language has text for the field and fallback is not allowed.
    #[error("Unable to find the text for: {0:?}")]
    NotAvailable(String),
    /// A write was attempted before any layer was attached.
    #[error("No translation object attached")]
    InvalidState,
    /// The document's own text could not be read.
    #[error(transparent)]
    Object(#[from] ObjectError),
}

impl From<LayerError> for ResolveError {
    fn from(err: LayerError) -> Self {
        ResolveError::InvalidArgument(err.to_string())
    }
}

/// Reads the fields of one document in the caller's preferred languages,
/// consulting a stack of translation layers.
///
/// Layers are searched most recently attached first. The document is only
/// ever read; [`set_field`](Resolver::set_field) writes into the front layer.
#[derive(Debug)]
pub struct Resolver<'a, D: ?Sized = StixObject> {
    languages: Languages,
    document: &'a D,
    layers: VecDeque<LanguageContent>,
    strict: bool,
}

impl<'a, D> Resolver<'a, D>
where
    D: Localized + ?Sized,
{
    /// A lenient resolver with no layers attached.
    pub fn new(languages: impl Into<Languages>, document: &'a D) -> Self {
        Self {
            languages: languages.into(),
            document,
            layers: VecDeque::new(),
            strict: false,
        }
    }

    pub fn from_config(config: &ResolverConfig, document: &'a D) -> Self {
        Self::new(config.languages.clone(), document).strict(config.strict)
    }

    /// In strict mode a field with no text in any preferred language is an
    /// error instead of falling back to the document's own text.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn languages(&self) -> &Languages {
        &self.languages
    }

    pub fn document(&self) -> &'a D {
        self.document
    }

    /// Push a layer onto the front of the stack and return it.
    ///
    /// A collection is searched for the first language-content object whose
    /// `object_ref` is this document; [`ResolveError::NotFound`] if none is.
    /// Objects handed in directly must be of type `language-content`.
    pub fn attach_layer(
        &mut self,
        request: AttachLayer<'_>,
    ) -> Result<&LanguageContent, ResolveError> {
        let source = request.into_source().ok_or_else(|| {
            ResolveError::InvalidArgument(
                "one and only one of object, creator or collection must be specified".into(),
            )
        })?;

        let layer = match source {
            LayerSource::Object(object) => object.into_content()?,
            LayerSource::Creator(creator) => LanguageContent::for_document(self.document, creator),
            LayerSource::Collection(objects) => {
                let target = self.document.id();
                // First match wins when several layers reference the document.
                let found = objects
                    .iter()
                    .find(|object| LanguageContent::references(object, target))
                    .ok_or_else(|| ResolveError::NotFound(target.clone()))?;
                LanguageContent::try_from(found.clone())?
            }
        };

        debug!(
            layer = %layer.id,
            object_ref = %layer.object_ref,
            depth = self.layers.len() + 1,
            "attached translation layer"
        );

        self.layers.push_front(layer);
        Ok(&self.layers[0])
    }

    /// The most recently attached layer.
    pub fn current_layer(&self) -> Option<&LanguageContent> {
        self.layers.front()
    }

    /// Attached layers, most recent first.
    pub fn layers(&self) -> impl Iterator<Item = &LanguageContent> {
        self.layers.iter()
    }

    /// Hand the layers back, most recent first, e.g. to persist edits.
    pub fn into_layers(self) -> Vec<LanguageContent> {
        self.layers.into()
    }

    /// Language and text of `field` in the best available preferred language.
    ///
    /// For each preferred language in turn: the document's own text wins if
    /// the field is annotated with that language, or, when the field has no
    /// annotation, if it is the document's language. Otherwise the first
    /// layer carrying the field in that language wins.
    ///
    /// When nothing matches, a strict resolver fails, and so does any
    /// resolver for a field annotated with a language that was not asked
    /// for. Otherwise the document's own text is returned with the
    /// document's language, if it has one.
    pub fn resolve(&self, field: &str) -> Result<Resolved, ResolveError> {
        let field_lang = self.document.field_lang(field);

        for lang in self.languages.iter() {
            match field_lang {
                Some(tagged) if tagged == lang => {
                    trace!(field = field, lang = lang, "field annotation matched");
                    return self.native(field, Some(lang));
                }
                None if self.document.lang() == Some(lang) => {
                    trace!(field = field, lang = lang, "document language matched");
                    return self.native(field, Some(lang));
                }
                _ => {}
            }

            if let Some(text) = self
                .layers
                .iter()
                .find_map(|layer| layer.contents().get(lang, field))
            {
                trace!(field = field, lang = lang, "translation layer matched");
                return Ok(Resolved::new(Some(lang), text));
            }
        }

        if self.strict || field_lang.is_some() {
            return Err(ResolveError::NotAvailable(field.to_string()));
        }

        trace!(field = field, "no preferred language available, using document text");
        self.native(field, self.document.lang())
    }

    /// Text of `field` in the best available preferred language.
    pub fn get(&self, field: &str) -> Result<String, ResolveError> {
        self.resolve(field).map(|resolved| resolved.value)
    }

    pub fn name(&self) -> Result<String, ResolveError> {
        self.get("name")
    }

    pub fn description(&self) -> Result<String, ResolveError> {
        self.get("description")
    }

    /// Store a translation in the most recently attached layer.
    ///
    /// Neither the layer's nor the document's `modified` is touched; bumping
    /// versions before serializing is up to the caller.
    pub fn set_field(
        &mut self,
        field: impl Into<String>,
        language: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<(), ResolveError> {
        let layer = self.layers.front_mut().ok_or(ResolveError::InvalidState)?;
        layer.contents_mut().insert(language, field, text);
        Ok(())
    }

    fn native(&self, field: &str, lang: Option<&str>) -> Result<Resolved, ResolveError> {
        let text = self.document.text(field)?;
        Ok(Resolved::new(lang, text))
    }
}
