use crate::layer::{LanguageContent, LayerError};
use crate::object::{Bundle, StixObject};
use crate::types::identifiers::StixId;

/// A layer handed over by the caller, either raw or already typed.
#[derive(Debug, Clone)]
pub enum LayerObject {
    Raw(StixObject),
    Content(LanguageContent),
}

impl LayerObject {
    pub(super) fn into_content(self) -> Result<LanguageContent, LayerError> {
        match self {
            LayerObject::Raw(object) => LanguageContent::try_from(object),
            LayerObject::Content(layer) => {
                layer.validate()?;
                Ok(layer)
            }
        }
    }
}

impl From<StixObject> for LayerObject {
    fn from(object: StixObject) -> Self {
        LayerObject::Raw(object)
    }
}

impl From<LanguageContent> for LayerObject {
    fn from(layer: LanguageContent) -> Self {
        LayerObject::Content(layer)
    }
}

/// Where the next translation layer comes from. Exactly one source must be
/// set when the request reaches [`Resolver::attach_layer`].
///
/// [`Resolver::attach_layer`]: super::Resolver::attach_layer
#[derive(Debug, Default)]
pub struct AttachLayer<'r> {
    object: Option<LayerObject>,
    creator: Option<&'r StixId>,
    collection: Option<&'r [StixObject]>,
}

pub(super) enum LayerSource<'r> {
    Object(LayerObject),
    Creator(&'r StixId),
    Collection(&'r [StixObject]),
}

impl<'r> AttachLayer<'r> {
    /// Use this object as the layer.
    pub fn object(object: impl Into<LayerObject>) -> Self {
        Self::default().with_object(object)
    }

    /// Create an empty layer credited to `creator`.
    pub fn creator(creator: &'r StixId) -> Self {
        Self::default().with_creator(creator)
    }

    /// Find the layer for the document among `objects`.
    pub fn collection(objects: &'r [StixObject]) -> Self {
        Self::default().with_collection(objects)
    }

    pub fn bundle(bundle: &'r Bundle) -> Self {
        Self::collection(bundle.objects())
    }

    pub fn with_object(mut self, object: impl Into<LayerObject>) -> Self {
        self.object = Some(object.into());
        self
    }

    pub fn with_creator(mut self, creator: &'r StixId) -> Self {
        self.creator = Some(creator);
        self
    }

    pub fn with_collection(mut self, objects: &'r [StixObject]) -> Self {
        self.collection = Some(objects);
        self
    }

    pub(super) fn into_source(self) -> Option<LayerSource<'r>> {
        match (self.object, self.creator, self.collection) {
            (Some(object), None, None) => Some(LayerSource::Object(object)),
            (None, Some(creator), None) => Some(LayerSource::Creator(creator)),
            (None, None, Some(objects)) => Some(LayerSource::Collection(objects)),
            _ => None,
        }
    }
}
